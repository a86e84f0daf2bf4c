//! Simulation run and serializable report

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::daily::{aggregate_daily, DailySummary};
use crate::aggregate::feeding::{aggregate_daily_feeding, DailyFeedingSummary};
use crate::aggregate::overview::{FeedingOverview, WaterOverview};
use crate::aggregate::pattern::{
    hourly_consumption_pattern, hourly_feeding_pattern, HourlyFeeding,
};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{FeedingEvent, Reading};
use crate::simulation::{
    generate_feeding_events_with_rng, generate_resource_series_with_rng, seeded_rng,
};
use crate::stock::bowl::{Consumption, FoodBowl, LOW_FOOD_THRESHOLD};

/// Food bowl state after a feeding run was deducted
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BowlReport {
    pub starting_balance: f64,
    pub consumption: Consumption,
    pub remaining_balance: f64,
    pub low_food: bool,
}

/// Everything derived from one simulation run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationReport {
    pub start_date: NaiveDate,
    pub days: u32,
    pub seed: Option<u64>,
    pub readings: Vec<Reading>,
    pub feeding_events: Vec<FeedingEvent>,
    pub daily_water: Vec<DailySummary>,
    pub daily_feeding: Vec<DailyFeedingSummary>,
    pub water: Option<WaterOverview>,
    pub feeding: Option<FeedingOverview>,
    pub hourly_drinking: Vec<u32>,
    pub hourly_feeding: Vec<HourlyFeeding>,
    pub bowl: BowlReport,
    pub simulation_time_ms: u64,
}

/// Run both generators and derive every report section
///
/// Water readings are drawn first and feeding events second from the same
/// random source, so a seeded config reproduces the whole report. The food
/// served is deducted from `bowl`.
pub fn simulate(
    start: NaiveDate,
    days: u32,
    config: &SimulationConfig,
    bowl: &mut FoodBowl,
) -> Result<SimulationReport> {
    let started = Instant::now();
    config.validate()?;

    let mut rng = seeded_rng(config.seed);
    let readings = generate_resource_series_with_rng(start, days, config, &mut rng)?;
    let feeding_events = generate_feeding_events_with_rng(start, days, config, &mut rng)?;

    let starting_balance = bowl.balance();
    let consumption = bowl.consume_events(&feeding_events);
    let bowl_report = BowlReport {
        starting_balance,
        consumption,
        remaining_balance: bowl.balance(),
        low_food: bowl.is_low(LOW_FOOD_THRESHOLD),
    };

    let report = SimulationReport {
        start_date: start,
        days,
        seed: config.seed,
        daily_water: aggregate_daily(&readings),
        daily_feeding: aggregate_daily_feeding(&feeding_events),
        water: WaterOverview::from_series(&readings, config.alert_threshold)?,
        feeding: FeedingOverview::from_events(&feeding_events),
        hourly_drinking: hourly_consumption_pattern(&readings).to_vec(),
        hourly_feeding: hourly_feeding_pattern(&feeding_events),
        readings,
        feeding_events,
        bowl: bowl_report,
        simulation_time_ms: elapsed_ms(started.elapsed()),
    };

    tracing::info!(
        "Simulated {} days: {} readings, {} meals",
        days,
        report.readings.len(),
        report.feeding_events.len()
    );

    Ok(report)
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    elapsed.as_millis() as u64
}

impl SimulationReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "Simulated {} days from {} in {}ms",
            self.days, self.start_date, self.simulation_time_ms
        )];

        if let Some(water) = &self.water {
            lines.push(format!(
                "Water: {:.1}% now, {} refills, {} drinking events, min {:.1}%, \
                 avg daily intake {:.1}%",
                water.current_level_percent,
                water.total_refills,
                water.total_consumption_events,
                water.min_level_percent,
                water.avg_daily_consumed_percent,
            ));
            lines.push(format!("[{}] {}", water.alert.severity, water.alert.message));
        }

        if let Some(feeding) = &self.feeding {
            lines.push(format!(
                "Feeding: {} meals, {:.1}g served, present {}/{} ({:.1}%)",
                feeding.total_meals,
                feeding.total_amount,
                feeding.present_count,
                feeding.total_meals,
                feeding.presence_rate,
            ));
        }

        let bowl = &self.bowl;
        lines.push(format!(
            "Bowl: {:.1}g -> {:.1}g",
            bowl.starting_balance, bowl.remaining_balance
        ));
        if bowl.consumption.is_short() {
            lines.push(format!("Food shortage of {:.1}g", bowl.consumption.shortage));
        }
        if bowl.low_food {
            lines.push(format!(
                "Low food: only {:.1}g remaining",
                bowl.remaining_balance
            ));
        }

        lines.join("\n")
    }
}
