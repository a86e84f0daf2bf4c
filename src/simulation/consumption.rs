//! Water consumption model
//!
//! Advances the bowl level by one hour. The daily reset hour tops the bowl
//! back up; every other hour may include a drink (probability and size
//! depend on the hour's regime) plus a small evaporation loss.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::{ValueRange, WaterConfig};
use crate::core::types::FULL_LEVEL;

/// Time-of-day drinking profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    /// Inside one of the configured active windows
    Active,
    /// Every other hour
    Quiet,
}

impl Regime {
    pub fn for_hour(hour: u32, config: &WaterConfig) -> Self {
        if config.active_hour_ranges.iter().any(|r| r.contains(hour)) {
            Regime::Active
        } else {
            Regime::Quiet
        }
    }

    pub fn trigger_probability(&self, config: &WaterConfig) -> f64 {
        match self {
            Regime::Active => config.active_trigger_probability,
            Regime::Quiet => config.quiet_trigger_probability,
        }
    }

    pub fn magnitude_range(&self, config: &WaterConfig) -> ValueRange {
        match self {
            Regime::Active => config.active_magnitude_range,
            Regime::Quiet => config.quiet_magnitude_range,
        }
    }
}

/// Result of advancing the bowl by one hour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourOutcome {
    pub level: f64,
    pub replenished: bool,
    pub consumed: bool,
}

/// Advance the bowl level through one hour
///
/// The reset hour returns a full bowl without drawing any random numbers.
/// Otherwise draws happen in a fixed order (magnitude, trigger, fluctuation
/// when triggered, evaporation) so a seeded source always reproduces the
/// same series. A drink is only taken from a non-empty bowl, but
/// `consumed` reports the trigger regardless.
pub fn step<R: Rng + ?Sized>(
    level: f64,
    hour: u32,
    config: &WaterConfig,
    rng: &mut R,
) -> HourOutcome {
    if hour == config.reset_hour {
        return HourOutcome {
            level: FULL_LEVEL,
            replenished: true,
            consumed: false,
        };
    }

    let regime = Regime::for_hour(hour, config);
    let magnitude = regime.magnitude_range(config).sample(rng);
    let consumed = rng.gen::<f64>() < regime.trigger_probability(config);

    let mut level = level;
    if consumed && level > 0.0 {
        let fluctuation = config.fluctuation_range.sample(rng);
        // Noise may not turn a drink into a refill
        let drink = (magnitude + fluctuation).max(0.0);
        level = (level - drink).max(0.0);
    }

    let evaporation = config.evaporation_range.sample(rng);
    level = (level - evaporation).clamp(0.0, FULL_LEVEL);

    HourOutcome {
        level,
        replenished: false,
        consumed,
    }
}
