/// Reverses the sequence of Unicode scalar values in `input`.
///
/// Length (in chars) and character set are preserved, and reversing twice
/// yields the original string.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}
