use crate::domain::model::Transcript;

/// Default values and initializer groups.
pub fn run(out: &mut Transcript) {
    // Uninitialized in the original walkthrough; Default supplies the
    // equivalent zero values here.
    let python = bool::default();
    let java = bool::default();
    let idx = i32::default();
    out.push(format!("{} {} {}", python, java, idx));

    let (i, j) = (1, 2);
    let (golang, ruby, php) = (true, false, "no!");
    out.push(format!("{} {} {} {} {}", i, j, golang, ruby, php));
}
