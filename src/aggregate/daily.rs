//! Per-day rollups of a water level series

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::types::{round_to, Reading, FULL_LEVEL};

/// Water statistics for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// `100 * refills + (first level - last level)`
    pub total_consumed_percent: f64,
    pub avg_level_percent: f64,
    pub min_level_percent: f64,
    pub refill_count: u32,
    pub consumption_event_count: u32,
}

/// Group items by calendar date, keeping input order within each day
pub(crate) fn partition_by_date<T, F>(items: &[T], date_of: F) -> BTreeMap<NaiveDate, Vec<&T>>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut days: BTreeMap<NaiveDate, Vec<&T>> = BTreeMap::new();
    for item in items {
        days.entry(date_of(item)).or_default().push(item);
    }
    days
}

/// Summarise readings per calendar day, ascending by date
///
/// Each refill counts as a full bowl consumed before it. This matches how
/// the dashboard has always reported daily intake and is kept as-is even
/// for days with no refill or several refills.
pub fn aggregate_daily(readings: &[Reading]) -> Vec<DailySummary> {
    let days = partition_by_date(readings, Reading::date);

    let summaries: Vec<DailySummary> = days
        .into_iter()
        .filter_map(|(date, day)| summarise_day(date, &day))
        .collect();

    tracing::debug!(
        "Aggregated {} readings into {} daily summaries",
        readings.len(),
        summaries.len()
    );

    summaries
}

fn summarise_day(date: NaiveDate, day: &[&Reading]) -> Option<DailySummary> {
    let first = day.first()?;
    let last = day.last()?;

    let refill_count = day.iter().filter(|r| r.replenished).count() as u32;
    let consumption_event_count = day.iter().filter(|r| r.consumed).count() as u32;

    let total_consumed =
        FULL_LEVEL * refill_count as f64 + (first.level_percent - last.level_percent);
    let avg = day.iter().map(|r| r.level_percent).sum::<f64>() / day.len() as f64;
    let min = day
        .iter()
        .map(|r| r.level_percent)
        .fold(f64::INFINITY, f64::min);

    Some(DailySummary {
        date,
        total_consumed_percent: round_to(total_consumed, 2),
        avg_level_percent: round_to(avg, 2),
        min_level_percent: round_to(min, 2),
        refill_count,
        consumption_event_count,
    })
}
