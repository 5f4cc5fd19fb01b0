use crate::domain::arith::{self, BIG, SMALL};
use crate::domain::model::Transcript;

/// The high-precision constants exercise: `SMALL` fits an integer, `BIG`
/// only fits a float.
pub fn run(out: &mut Transcript) {
    out.push(arith::need_int(SMALL as i64).to_string());
    out.push(arith::need_float(SMALL as f64).to_string());
    out.push(arith::need_float(BIG as f64).to_string());
}
