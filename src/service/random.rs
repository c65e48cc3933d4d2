//! Injectable random index source for the random pick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub trait IndexPicker: Send + Sync {
    /// Uniform index in `0..upper`. `upper` is always > 0.
    fn pick(&self, upper: u64) -> u64;
}

pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn from_entropy() -> Self {
        SeededPicker {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        SeededPicker {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&self, upper: u64) -> u64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..upper)
    }
}
