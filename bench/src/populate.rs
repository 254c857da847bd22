//! Test data: random country sets for the benchmark tables.

use cs_core::Countries;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG when a seed is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate `rows` random country sets. Sets may contain repeated countries.
pub fn generate_test_data(rows: usize, rng: &mut StdRng) -> Vec<Countries> {
    (0..rows).map(|_| Countries::random(rng)).collect()
}
