//! Scheduled feeding generator
//!
//! One event per (day, meal) pair. Each meal draws its own amount and
//! presence; nothing carries over between meals.

use chrono::NaiveDate;
use rand::Rng;

use crate::core::calendar::meal_instants;
use crate::core::config::{SimulationConfig, ValueRange};
use crate::core::error::Result;
use crate::core::types::{round_to, FeedingEvent};
use crate::simulation::seeded_rng;

/// Generate `days` worth of meals starting on `start`
pub fn generate_feeding_events(
    start: NaiveDate,
    days: u32,
    config: &SimulationConfig,
) -> Result<Vec<FeedingEvent>> {
    let mut rng = seeded_rng(config.seed);
    generate_feeding_events_with_rng(start, days, config, &mut rng)
}

/// Same as `generate_feeding_events` with a caller-supplied random source
pub fn generate_feeding_events_with_rng<R: Rng + ?Sized>(
    start: NaiveDate,
    days: u32,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Vec<FeedingEvent>> {
    let feeding = &config.feeding;
    feeding.validate()?;
    let slots = meal_instants(start, days, &feeding.meal_hours)?;
    let jitter = ValueRange::symmetric(feeding.meal_amount_jitter);

    let events: Vec<FeedingEvent> = slots
        .into_iter()
        .map(|slot| {
            let amount = (feeding.meal_amount_nominal + jitter.sample(rng)).max(0.0);
            let present = rng.gen::<f64>() < feeding.presence_probability;
            FeedingEvent {
                timestamp: slot.timestamp,
                amount: round_to(amount, 1),
                present,
                kind: feeding.kind.clone(),
            }
        })
        .collect();

    tracing::debug!(
        "Generated {} feeding events over {} days from {}",
        events.len(),
        days,
        start
    );

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BowlError;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 13).unwrap()
    }

    #[test]
    fn test_three_meals_a_day() {
        let config = SimulationConfig::default().with_seed(42);
        let events = generate_feeding_events(start(), 7, &config).unwrap();
        assert_eq!(events.len(), 21);
        assert!(events.iter().all(|e| e.kind == "Feeding"));
        for pair in events.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn test_amount_within_jitter() {
        let config = SimulationConfig::default().with_seed(5);
        let events = generate_feeding_events(start(), 30, &config).unwrap();
        for e in &events {
            assert!((45.0..=55.0).contains(&e.amount), "amount {}", e.amount);
        }
    }

    #[test]
    fn test_large_jitter_never_negative() {
        let mut config = SimulationConfig::default().with_seed(5);
        config.feeding.meal_amount_nominal = 1.0;
        config.feeding.meal_amount_jitter = 20.0;
        let events = generate_feeding_events(start(), 10, &config).unwrap();
        assert!(events.iter().all(|e| e.amount >= 0.0));
    }

    #[test]
    fn test_presence_extremes() {
        let mut config = SimulationConfig::default().with_seed(1);
        config.feeding.presence_probability = 1.0;
        let events = generate_feeding_events(start(), 3, &config).unwrap();
        assert!(events.iter().all(|e| e.present));

        config.feeding.presence_probability = 0.0;
        let events = generate_feeding_events(start(), 3, &config).unwrap();
        assert!(events.iter().all(|e| !e.present));
    }

    #[test]
    fn test_same_seed_same_meals() {
        let config = SimulationConfig::default().with_seed(99);
        let a = generate_feeding_events(start(), 2, &config).unwrap();
        let b = generate_feeding_events(start(), 2, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_schedule_is_rejected() {
        let mut config = SimulationConfig::default();
        config.feeding.meal_hours.clear();
        assert!(matches!(
            generate_feeding_events(start(), 1, &config),
            Err(BowlError::EmptyMealSchedule)
        ));
    }
}
