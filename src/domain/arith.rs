//! Toy arithmetic helpers the tour demonstrates. Each is a one-line formula;
//! the tour prints their results rather than using them for anything real.

/// A huge value: 1 shifted left 100 places. Fits `u128` exactly.
pub const BIG: u128 = 1 << 100;
/// `BIG` shifted right again 99 places, which is 2.
pub const SMALL: u128 = BIG >> 99;

pub fn add(x: i32, y: i32) -> i32 {
    x + y
}

/// Same formula as [`add`]; the walkthrough keeps both forms.
pub fn add_v2(x: i32, y: i32) -> i32 {
    x + y
}

/// Returns its two arguments in reversed order.
pub fn swap<'a>(x: &'a str, y: &'a str) -> (&'a str, &'a str) {
    (y, x)
}

/// Partitions `sum` into a 4/9 part (integer truncation) and the remainder.
pub fn split(sum: i32) -> (i32, i32) {
    let x = sum * 4 / 9;
    (x, sum - x)
}

pub fn need_int(x: i64) -> i64 {
    x * 10 + 1
}

pub fn need_float(x: f64) -> f64 {
    x * 0.1
}
