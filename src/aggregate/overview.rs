//! Whole-run headline figures

use serde::{Deserialize, Serialize};

use crate::aggregate::daily::{aggregate_daily, DailySummary};
use crate::aggregate::feeding::rate_percent;
use crate::core::config::check_threshold;
use crate::core::error::Result;
use crate::core::types::{round_to, FeedingEvent, Reading};
use crate::monitor::alert::{evaluate_alert, AlertStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterOverview {
    /// Level of the most recent reading
    pub current_level_percent: f64,
    pub total_refills: u32,
    pub total_consumption_events: u32,
    pub min_level_percent: f64,
    pub avg_level_percent: f64,
    pub avg_daily_consumed_percent: f64,
    pub peak_daily_consumed_percent: f64,
    /// Alert for the current level
    pub alert: AlertStatus,
}

impl WaterOverview {
    /// Summarise a series; `None` for an empty series
    pub fn from_series(readings: &[Reading], threshold: f64) -> Result<Option<Self>> {
        check_threshold(threshold)?;
        let Some(last) = readings.last() else {
            return Ok(None);
        };
        let alert = evaluate_alert(last.level_percent, threshold)?;
        let daily = aggregate_daily(readings);
        Ok(Some(Self::build(readings, last, &daily, alert)))
    }

    fn build(
        readings: &[Reading],
        last: &Reading,
        daily: &[DailySummary],
        alert: AlertStatus,
    ) -> Self {
        let levels = readings.iter().map(|r| r.level_percent);
        let min = levels.clone().fold(f64::INFINITY, f64::min);
        let avg = levels.sum::<f64>() / readings.len() as f64;

        let consumed = daily.iter().map(|d| d.total_consumed_percent);
        let avg_daily = consumed.clone().sum::<f64>() / daily.len().max(1) as f64;
        let peak_daily = consumed.fold(f64::NEG_INFINITY, f64::max);

        Self {
            current_level_percent: last.level_percent,
            total_refills: readings.iter().filter(|r| r.replenished).count() as u32,
            total_consumption_events: readings.iter().filter(|r| r.consumed).count() as u32,
            min_level_percent: round_to(min, 2),
            avg_level_percent: round_to(avg, 2),
            avg_daily_consumed_percent: round_to(avg_daily, 2),
            peak_daily_consumed_percent: round_to(peak_daily, 2),
            alert,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingOverview {
    pub total_meals: u32,
    pub total_amount: f64,
    pub present_count: u32,
    pub presence_rate: f64,
}

impl FeedingOverview {
    pub fn from_events(events: &[FeedingEvent]) -> Option<Self> {
        if events.is_empty() {
            return None;
        }
        let total_meals = events.len() as u32;
        let present_count = events.iter().filter(|e| e.present).count() as u32;
        Some(Self {
            total_meals,
            total_amount: round_to(events.iter().map(|e| e.amount).sum(), 1),
            present_count,
            presence_rate: round_to(rate_percent(present_count, total_meals), 1),
        })
    }
}
