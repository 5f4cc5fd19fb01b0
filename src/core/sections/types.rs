use crate::domain::model::Transcript;
use num_complex::Complex64;
use std::any::type_name_of_val;

/// Type/value display for a bool, the largest u64, and a complex square
/// root, followed by the zero values of a float and a string.
pub fn run(out: &mut Transcript) {
    let to_be = false;
    let max_int = u64::MAX;
    let z = Complex64::new(-5.0, 12.0).sqrt();

    out.push(format!("Type: {} Value: {}", type_name_of_val(&to_be), to_be));
    out.push(format!(
        "Type: {} Value: {}",
        type_name_of_val(&max_int),
        max_int
    ));
    out.push(format!("Type: {} Value: {}", type_name_of_val(&z), z));

    let f = f64::default();
    let s = String::default();
    out.push(format!("{} {:?}", f, s));
}
