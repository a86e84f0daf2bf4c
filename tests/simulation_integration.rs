//! Integration tests for the water and feeding pipeline
//!
//! These tests drive the public API end to end:
//! - Seeded generation reproduces identical series
//! - Daily rollups line up with the generated readings and meals
//! - Alerts and bowl accounting react to the generated data

use std::path::Path;

use bowlwatch::aggregate::{hourly_consumption_pattern, WaterOverview};
use bowlwatch::core::calendar::hour_of;
use bowlwatch::core::config::load_config;
use bowlwatch::{
    aggregate_daily, aggregate_daily_feeding, evaluate_alert, generate_feeding_events,
    generate_resource_series, simulate, BowlError, FoodBowl, Severity, SimulationConfig,
};
use chrono::NaiveDate;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 13).unwrap()
}

#[test]
fn test_seeded_day_is_reproducible() {
    let config = SimulationConfig::default().with_seed(42);

    let first = generate_resource_series(start(), 1, &config).unwrap();
    let second = generate_resource_series(start(), 1, &config).unwrap();

    assert_eq!(first.len(), 24);
    assert_eq!(first, second);

    let reset = &first[8];
    assert_eq!(hour_of(&reset.timestamp), 8);
    assert!(reset.replenished);
    assert_eq!(reset.level_percent, 100.0);
}

#[test]
fn test_different_seeds_differ() {
    let seeded = |seed| SimulationConfig::default().with_seed(seed);
    let a = generate_resource_series(start(), 2, &seeded(1)).unwrap();
    let b = generate_resource_series(start(), 2, &seeded(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_one_day_of_meals_rolls_up() {
    let config = SimulationConfig::default().with_seed(42);
    let events = generate_feeding_events(start(), 1, &config).unwrap();
    let days = aggregate_daily_feeding(&events);

    assert_eq!(days.len(), 1);
    let day = &days[0];
    assert_eq!(day.date, start());
    assert_eq!(day.event_count, 3);
    assert!((0.0..=100.0).contains(&day.presence_rate));
    assert!(
        (135.0..=165.0).contains(&day.total_amount),
        "total {} outside 150 ± 15",
        day.total_amount
    );
}

#[test]
fn test_week_of_water_rolls_up() {
    let config = SimulationConfig::default().with_seed(7);
    let readings = generate_resource_series(start(), 7, &config).unwrap();
    let days = aggregate_daily(&readings);

    assert_eq!(days.len(), 7);
    for (i, day) in days.iter().enumerate() {
        assert_eq!(day.date, start() + chrono::Days::new(i as u64));
        assert_eq!(day.refill_count, 1);
        assert!((0.0..=100.0).contains(&day.min_level_percent));
        assert!(day.avg_level_percent >= day.min_level_percent);
    }

    let total_events: u32 = days.iter().map(|d| d.consumption_event_count).sum();
    let pattern_events: u32 = hourly_consumption_pattern(&readings).iter().sum();
    assert_eq!(total_events, pattern_events);
    assert_eq!(
        total_events as usize,
        readings.iter().filter(|r| r.consumed).count()
    );
}

#[test]
fn test_active_hours_drink_more_often() {
    let config = SimulationConfig::default().with_seed(2024);
    let readings = generate_resource_series(start(), 60, &config).unwrap();
    let pattern = hourly_consumption_pattern(&readings);

    // Hours 6-10 and 17-21 minus the reset hour: 9 active hours
    let active: u32 = [6usize, 7, 9, 10, 17, 18, 19, 20, 21]
        .iter()
        .map(|&h| pattern[h])
        .sum();
    let quiet: u32 = [0usize, 1, 2, 3, 4, 5, 11, 12, 13]
        .iter()
        .map(|&h| pattern[h])
        .sum();
    assert!(
        active > quiet,
        "active hours ({}) should out-drink quiet hours ({})",
        active,
        quiet
    );
    assert_eq!(pattern[8], 0, "reset hour never records a drink");
}

#[test]
fn test_alert_on_last_reading() {
    let config = SimulationConfig::default().with_seed(42);
    let readings = generate_resource_series(start(), 3, &config).unwrap();
    let last = readings.last().unwrap();

    let status = evaluate_alert(last.level_percent, config.alert_threshold).unwrap();
    let overview = WaterOverview::from_series(&readings, config.alert_threshold)
        .unwrap()
        .unwrap();
    assert_eq!(overview.alert, status);

    let expected = if last.level_percent <= 0.0 {
        Severity::Critical
    } else if last.level_percent <= 20.0 {
        Severity::Warning
    } else {
        Severity::Normal
    };
    assert_eq!(status.severity, expected);
}

#[test]
fn test_bowl_tracks_simulated_meals() {
    let config = SimulationConfig::default().with_seed(5);
    let mut bowl = FoodBowl::new(500.0);

    let report = simulate(start(), 7, &config, &mut bowl).unwrap();
    let served: f64 = report.feeding_events.iter().map(|e| e.amount).sum();

    // Roughly 21 meals of ~50g cannot fit in 500g
    assert!(served > 500.0);
    assert!(report.bowl.consumption.is_short());
    assert_eq!(report.bowl.consumption.consumed, 500.0);
    assert_eq!(bowl.balance(), 0.0);
}

#[test]
fn test_configuration_errors_surface() {
    let config = SimulationConfig::default();

    let err = generate_resource_series(start(), 0, &config).unwrap_err();
    assert!(matches!(err, BowlError::InvalidDays(0)));

    let mut no_meals = config.clone();
    no_meals.feeding.meal_hours.clear();
    let err = generate_feeding_events(start(), 1, &no_meals).unwrap_err();
    assert!(matches!(err, BowlError::EmptyMealSchedule));

    let err = generate_feeding_events(start(), u32::MAX, &config).unwrap_err();
    assert!(matches!(err, BowlError::InvalidConfig(_)));
    let err = generate_resource_series(start(), u32::MAX, &config).unwrap_err();
    assert!(matches!(err, BowlError::InvalidConfig(_)));

    let err = evaluate_alert(50.0, 200.0).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_bundled_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/default_config.toml");
    let config = load_config(&path).unwrap();
    assert_eq!(config, SimulationConfig::default());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = load_config(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(matches!(err, BowlError::Io(_)));
    assert!(!err.is_configuration());
}
