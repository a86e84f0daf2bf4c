//! Core record types produced by the generators

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Level of a completely full bowl, in percent
pub const FULL_LEVEL: f64 = 100.0;

/// One hourly sample of the water bowl
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    /// Water left in the bowl, 0-100
    pub level_percent: f64,
    /// Bowl was topped up at this instant
    pub replenished: bool,
    /// The pet drank during this hour
    pub consumed: bool,
}

impl Reading {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// One scheduled meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingEvent {
    pub timestamp: NaiveDateTime,
    /// Grams served, never negative
    pub amount: f64,
    /// The pet showed up for the meal
    pub present: bool,
    pub kind: String,
}

impl FeedingEvent {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.3456, 2), 12.35);
        assert_eq!(round_to(12.3449, 2), 12.34);
        assert_eq!(round_to(49.96, 1), 50.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
