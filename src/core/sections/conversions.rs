use crate::domain::model::Transcript;

const PI_ISH: f64 = 3.14;
const WORLD: &str = "世界";
const TRUTH: bool = true;

/// Explicit numeric conversions and a few local constants.
pub fn run(out: &mut Transcript) {
    let l = 42;
    let m = l as f64;
    let n = m as u32;
    out.push(format!("{} {} {}", l, m, n));

    out.push(format!("Hello {}", WORLD));
    out.push(format!("Happy {} Day", PI_ISH));
    out.push(format!("Rust rules? {}", TRUTH));
}
