//! Simulation configuration with documented defaults
//!
//! Every tunable number for the water and feeding generators lives here.
//! Configs are plain data: they can be built in code, taken from `Default`,
//! or read from a TOML file where any omitted key falls back to its default.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{BowlError, Result};
use crate::monitor::alert::DEFAULT_ALERT_THRESHOLD;

/// Inclusive range of hours of the day (0-23)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.start <= hour && hour <= self.end
    }
}

/// Inclusive range for uniform sampling of a real value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Symmetric range `-jitter..=jitter`
    pub fn symmetric(jitter: f64) -> Self {
        Self::new(-jitter, jitter)
    }

    /// Draw a value uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min == self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(BowlError::InvalidConfig(format!(
                "{} must have finite bounds",
                name
            )));
        }
        if self.min > self.max {
            return Err(BowlError::InvalidConfig(format!(
                "{} min ({}) exceeds max ({})",
                name, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Parameters of the hourly water level generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    /// Spacing between readings in hours
    ///
    /// Only a one-hour step is supported; anything else is rejected by
    /// `validate`. Kept as a field so config files state it explicitly.
    pub hourly_step_hours: u32,

    /// Hour of day at which the bowl is topped back up to 100%
    pub reset_hour: u32,

    /// Level the bowl holds before the first reading
    pub initial_level: f64,

    /// Hour windows in which the pet drinks more often and more per visit
    ///
    /// Defaults cover the morning (06-10) and evening (17-21) windows.
    pub active_hour_ranges: Vec<HourRange>,

    /// Chance per hour of a drinking event during active windows
    pub active_trigger_probability: f64,

    /// Chance per hour of a drinking event outside active windows
    pub quiet_trigger_probability: f64,

    /// Percentage points removed by one active-window drink
    pub active_magnitude_range: ValueRange,

    /// Percentage points removed by one quiet-window drink
    pub quiet_magnitude_range: ValueRange,

    /// Signed noise added to every drink
    pub fluctuation_range: ValueRange,

    /// Loss applied every non-reset hour whether or not the pet drank
    pub evaporation_range: ValueRange,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            hourly_step_hours: 1,
            reset_hour: 8,
            initial_level: 100.0,
            active_hour_ranges: vec![HourRange::new(6, 10), HourRange::new(17, 21)],
            active_trigger_probability: 0.7,
            quiet_trigger_probability: 0.3,
            active_magnitude_range: ValueRange::new(2.0, 5.0),
            quiet_magnitude_range: ValueRange::new(0.5, 2.0),
            fluctuation_range: ValueRange::symmetric(0.5),
            evaporation_range: ValueRange::new(0.1, 0.3),
        }
    }
}

impl WaterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.hourly_step_hours != 1 {
            return Err(BowlError::InvalidConfig(format!(
                "hourly_step_hours must be 1, got {}",
                self.hourly_step_hours
            )));
        }
        check_hour("reset_hour", self.reset_hour)?;

        if !(0.0..=100.0).contains(&self.initial_level) {
            return Err(BowlError::InvalidConfig(format!(
                "initial_level ({}) must be within 0-100",
                self.initial_level
            )));
        }

        for range in &self.active_hour_ranges {
            check_hour("active_hour_ranges.start", range.start)?;
            check_hour("active_hour_ranges.end", range.end)?;
            if range.start > range.end {
                return Err(BowlError::InvalidConfig(format!(
                    "active hour range {}-{} is inverted",
                    range.start, range.end
                )));
            }
        }

        check_probability("active_trigger_probability", self.active_trigger_probability)?;
        check_probability("quiet_trigger_probability", self.quiet_trigger_probability)?;

        self.active_magnitude_range.validate("active_magnitude_range")?;
        self.quiet_magnitude_range.validate("quiet_magnitude_range")?;
        self.fluctuation_range.validate("fluctuation_range")?;
        self.evaporation_range.validate("evaporation_range")?;

        if self.evaporation_range.min < 0.0 {
            return Err(BowlError::InvalidConfig(
                "evaporation_range must not be negative".into(),
            ));
        }

        Ok(())
    }
}

/// Parameters of the scheduled feeding generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedingConfig {
    /// Meal hours of each day; emitted in ascending order
    pub meal_hours: Vec<u32>,
    /// Grams served per meal before jitter
    pub meal_amount_nominal: f64,
    /// Maximum deviation (±) from the nominal amount
    pub meal_amount_jitter: f64,
    /// Chance the pet shows up for a given meal
    pub presence_probability: f64,
    /// Label stamped on every generated event
    pub kind: String,
}

impl Default for FeedingConfig {
    fn default() -> Self {
        Self {
            meal_hours: vec![8, 15, 21],
            meal_amount_nominal: 50.0,
            meal_amount_jitter: 5.0,
            presence_probability: 0.9,
            kind: "Feeding".to_string(),
        }
    }
}

impl FeedingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.meal_hours.is_empty() {
            return Err(BowlError::EmptyMealSchedule);
        }
        for &hour in &self.meal_hours {
            check_hour("meal_hours", hour)?;
        }
        if !self.meal_amount_nominal.is_finite() || self.meal_amount_nominal < 0.0 {
            return Err(BowlError::InvalidConfig(format!(
                "meal_amount_nominal ({}) must be a non-negative number",
                self.meal_amount_nominal
            )));
        }
        if !self.meal_amount_jitter.is_finite() || self.meal_amount_jitter < 0.0 {
            return Err(BowlError::InvalidConfig(format!(
                "meal_amount_jitter ({}) must be a non-negative number",
                self.meal_amount_jitter
            )));
        }
        check_probability("presence_probability", self.presence_probability)
    }
}

/// Top-level configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub water: WaterConfig,
    pub feeding: FeedingConfig,
    /// Level at or below which a low-water warning is raised
    pub alert_threshold: f64,
    /// Fixed seed for reproducible runs; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            water: WaterConfig::default(),
            feeding: FeedingConfig::default(),
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Same config with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a config from TOML text; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        self.water.validate()?;
        self.feeding.validate()?;
        check_threshold(self.alert_threshold)
    }
}

/// Load and validate a TOML config file
pub fn load_config(path: &Path) -> Result<SimulationConfig> {
    let content = fs::read_to_string(path)?;
    SimulationConfig::from_toml_str(&content)
}

/// Alert thresholds are percentages of a full bowl
pub fn check_threshold(threshold: f64) -> Result<()> {
    if (0.0..=100.0).contains(&threshold) {
        Ok(())
    } else {
        Err(BowlError::ThresholdOutOfRange(threshold))
    }
}

fn check_hour(name: &str, hour: u32) -> Result<()> {
    if hour < 24 {
        Ok(())
    } else {
        Err(BowlError::InvalidConfig(format!(
            "{} ({}) must be an hour of day (0-23)",
            name, hour
        )))
    }
}

fn check_probability(name: &str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(BowlError::InvalidConfig(format!(
            "{} ({}) must be within 0-1",
            name, p
        )))
    }
}
