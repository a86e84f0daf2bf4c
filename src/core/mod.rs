pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use config::{FeedingConfig, HourRange, SimulationConfig, ValueRange, WaterConfig};
pub use error::{BowlError, Result};
pub use types::{FeedingEvent, Reading};
