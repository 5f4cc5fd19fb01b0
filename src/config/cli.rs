use crate::domain::ports::{Clock, Entropy};
use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Random-digit source. A fixed seed makes the one nondeterministic
/// transcript line reproducible.
pub struct DiceEntropy {
    rng: Mutex<StdRng>,
}

impl DiceEntropy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Entropy for DiceEntropy {
    fn digit(&self) -> u8 {
        let mut rng = self.rng.lock().expect("entropy lock poisoned");
        rng.gen_range(0..10u8)
    }
}
