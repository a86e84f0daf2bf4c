//! Water and feeding generators

pub mod consumption;
pub mod feeding;
pub mod series;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use consumption::{HourOutcome, Regime};
pub use feeding::{generate_feeding_events, generate_feeding_events_with_rng};
pub use series::{generate_resource_series, generate_resource_series_with_rng};

/// Random source for a run: fixed when a seed is given, OS entropy otherwise
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
