use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

//// Utility functions

pub(crate) fn random_values(count: usize, seed: u64) -> Vec<u32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0, 1_000_000)).collect()
}
