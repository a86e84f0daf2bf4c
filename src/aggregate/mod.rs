//! Daily rollups, hourly patterns and run reports
//!
//! Everything here is derived from a generated series on demand and owns
//! no state of its own. Empty input yields empty output.

pub mod daily;
pub mod feeding;
pub mod output;
pub mod overview;
pub mod pattern;

pub use daily::{aggregate_daily, DailySummary};
pub use feeding::{aggregate_daily_feeding, DailyFeedingSummary};
pub use output::{simulate, BowlReport, SimulationReport};
pub use overview::{FeedingOverview, WaterOverview};
pub use pattern::{hourly_consumption_pattern, hourly_feeding_pattern, HourlyFeeding};
