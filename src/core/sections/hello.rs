use crate::domain::model::Transcript;
use crate::domain::ports::{Clock, Entropy};
use crate::utils::text;

/// Opening lines: greeting, the reversed greeting, and the two
/// nondeterministic lines (current time, random digit), then pi.
pub fn run(clock: &impl Clock, entropy: &impl Entropy, out: &mut Transcript) {
    out.push("hello, world");
    out.push(text::reverse("!dlrow ,olleH"));
    out.push(format!("The time is {}", clock.now()));
    out.push(format!("My favorite number is: {}", entropy.digit()));
    out.push(format!("{}", std::f64::consts::PI));
}
