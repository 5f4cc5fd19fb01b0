use crate::domain::arith;
use crate::domain::model::Transcript;

/// Multiple and paired return values from the toy helpers.
pub fn run(out: &mut Transcript) {
    out.push(arith::add(3, 4).to_string());
    out.push(arith::add_v2(3, 19).to_string());

    let (a, b) = arith::swap("hello", "devops");
    out.push(format!("{} {}", a, b));

    let (x, y) = arith::split(10);
    out.push(format!("{} {}", x, y));
}
