//! Water level series builder
//!
//! Walks the hourly schedule, threading the running bowl level through the
//! consumption model and emitting one `Reading` per hour.

use chrono::NaiveDate;
use rand::Rng;

use crate::core::calendar::{hour_of, hourly_instants};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{round_to, Reading};
use crate::simulation::consumption;
use crate::simulation::seeded_rng;

/// Generate `days` worth of hourly readings starting at midnight of `start`
///
/// Uses `config.seed` when set so repeated calls return identical series.
pub fn generate_resource_series(
    start: NaiveDate,
    days: u32,
    config: &SimulationConfig,
) -> Result<Vec<Reading>> {
    let mut rng = seeded_rng(config.seed);
    generate_resource_series_with_rng(start, days, config, &mut rng)
}

/// Same as `generate_resource_series` with a caller-supplied random source
pub fn generate_resource_series_with_rng<R: Rng + ?Sized>(
    start: NaiveDate,
    days: u32,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Vec<Reading>> {
    config.water.validate()?;
    let instants = hourly_instants(start, days, config.water.hourly_step_hours)?;

    let mut level = config.water.initial_level;
    let mut readings = Vec::with_capacity(instants.len());

    for timestamp in instants {
        let outcome = consumption::step(level, hour_of(&timestamp), &config.water, rng);
        level = outcome.level;

        readings.push(Reading {
            timestamp,
            level_percent: round_to(level, 2),
            replenished: outcome.replenished,
            consumed: outcome.consumed,
        });
    }

    tracing::debug!(
        "Generated {} water readings over {} days from {}",
        readings.len(),
        days,
        start
    );

    Ok(readings)
}
