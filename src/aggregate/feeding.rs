//! Per-day rollups of feeding events

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::daily::partition_by_date;
use crate::core::types::{round_to, FeedingEvent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFeedingSummary {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub event_count: u32,
    pub present_count: u32,
    /// Share of meals the pet attended, in percent
    pub presence_rate: f64,
    pub avg_amount_per_event: f64,
}

/// Percentage of `part` in `whole`, zero for an empty whole
pub(crate) fn rate_percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Summarise feeding events per calendar day, ascending by date
pub fn aggregate_daily_feeding(events: &[FeedingEvent]) -> Vec<DailyFeedingSummary> {
    partition_by_date(events, FeedingEvent::date)
        .into_iter()
        .map(|(date, day)| {
            let total_amount: f64 = day.iter().map(|e| e.amount).sum();
            let event_count = day.len() as u32;
            let present_count = day.iter().filter(|e| e.present).count() as u32;
            let avg = if event_count == 0 {
                0.0
            } else {
                total_amount / event_count as f64
            };

            DailyFeedingSummary {
                date,
                total_amount: round_to(total_amount, 1),
                event_count,
                present_count,
                presence_rate: round_to(rate_percent(present_count, event_count), 1),
                avg_amount_per_event: round_to(avg, 1),
            }
        })
        .collect()
}
