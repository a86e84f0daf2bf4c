//! Sample schedules for simulation runs
//!
//! Produces the instants at which water readings are taken and meals are
//! served. Both schedules are anchored at midnight of the start date and
//! involve no randomness.

use chrono::{Days, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::core::error::{BowlError, Result};

/// Hours in one simulated day
pub const HOURS_PER_DAY: u32 = 24;

/// One scheduled meal: which day of the run and when it is served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealSlot {
    /// Zero-based day index within the run
    pub day: u32,
    /// Position of this meal within its day's sorted meal hours
    pub slot: usize,
    pub timestamp: NaiveDateTime,
}

/// Hour of day (0-23) of an instant
pub fn hour_of(timestamp: &NaiveDateTime) -> u32 {
    timestamp.hour()
}

fn midnight(date: NaiveDate) -> Result<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| BowlError::InvalidConfig(format!("no midnight for {}", date)))
}

/// Reject empty runs and runs that end past the last representable date
fn check_days(start: NaiveDate, days: u32) -> Result<()> {
    if days == 0 {
        return Err(BowlError::InvalidDays(days));
    }
    if start.checked_add_days(Days::new(days as u64)).is_none() {
        return Err(BowlError::InvalidConfig(format!(
            "{} days from {} overflows date range",
            days, start
        )));
    }
    Ok(())
}

/// Evenly spaced reading instants covering `days` whole days
///
/// Returns `days * 24 / step_hours` instants starting at midnight of `start`.
/// Only a one-hour step is currently accepted.
pub fn hourly_instants(
    start: NaiveDate,
    days: u32,
    step_hours: u32,
) -> Result<Vec<NaiveDateTime>> {
    check_days(start, days)?;
    if step_hours != 1 {
        return Err(BowlError::InvalidConfig(format!(
            "hourly step must be 1 hour, got {}",
            step_hours
        )));
    }

    let origin = midnight(start)?;
    let count = days as i64 * HOURS_PER_DAY as i64;

    (0..count)
        .map(|i| {
            origin
                .checked_add_signed(Duration::hours(i * step_hours as i64))
                .ok_or_else(|| {
                    BowlError::InvalidConfig(format!(
                        "schedule overflows date range at hour {}",
                        i
                    ))
                })
        })
        .collect()
}

/// Meal instants for every day of the run, in chronological order
///
/// Meal hours are sorted so each day's meals come out ascending even when
/// the config lists them in another order.
pub fn meal_instants(start: NaiveDate, days: u32, meal_hours: &[u32]) -> Result<Vec<MealSlot>> {
    check_days(start, days)?;
    if meal_hours.is_empty() {
        return Err(BowlError::EmptyMealSchedule);
    }

    let mut hours = meal_hours.to_vec();
    hours.sort_unstable();

    let mut slots = Vec::with_capacity(days as usize * hours.len());
    for day in 0..days {
        let date = start
            .checked_add_days(Days::new(day as u64))
            .ok_or_else(|| BowlError::InvalidConfig(format!("day {} overflows date range", day)))?;

        for (slot, &hour) in hours.iter().enumerate() {
            let timestamp = date.and_hms_opt(hour, 0, 0).ok_or_else(|| {
                BowlError::InvalidConfig(format!("meal hour {} is not an hour of day", hour))
            })?;
            slots.push(MealSlot { day, slot, timestamp });
        }
    }

    Ok(slots)
}
