//! Hour-of-day activity patterns

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::calendar::{hour_of, HOURS_PER_DAY};
use crate::core::types::{round_to, FeedingEvent, Reading};

/// Number of drinking events seen at each hour of the day
pub fn hourly_consumption_pattern(readings: &[Reading]) -> [u32; HOURS_PER_DAY as usize] {
    let mut counts = [0u32; HOURS_PER_DAY as usize];
    for reading in readings.iter().filter(|r| r.consumed) {
        counts[hour_of(&reading.timestamp) as usize] += 1;
    }
    counts
}

/// Meals served at one hour of the day, across all days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyFeeding {
    pub hour: u32,
    pub event_count: u32,
    pub present_count: u32,
    pub avg_amount: f64,
}

/// Feeding activity for every hour that has at least one meal, ascending
pub fn hourly_feeding_pattern(events: &[FeedingEvent]) -> Vec<HourlyFeeding> {
    let mut by_hour: BTreeMap<u32, (u32, u32, f64)> = BTreeMap::new();
    for event in events {
        let entry = by_hour.entry(hour_of(&event.timestamp)).or_insert((0, 0, 0.0));
        entry.0 += 1;
        if event.present {
            entry.1 += 1;
        }
        entry.2 += event.amount;
    }

    by_hour
        .into_iter()
        .map(|(hour, (event_count, present_count, total))| HourlyFeeding {
            hour,
            event_count,
            present_count,
            avg_amount: round_to(total / event_count as f64, 1),
        })
        .collect()
}
