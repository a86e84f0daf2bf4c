//! Bowlwatch - pet water bowl and feeding simulation
//!
//! Generates hourly water level series and scheduled feeding events,
//! classifies low-water alerts, and rolls both up per calendar day.

pub mod aggregate;
pub mod core;
pub mod monitor;
pub mod simulation;
pub mod stock;

pub use aggregate::{aggregate_daily, aggregate_daily_feeding, simulate, SimulationReport};
pub use self::core::{BowlError, FeedingEvent, Reading, Result, SimulationConfig};
pub use monitor::{evaluate_alert, AlertStatus, Severity};
pub use simulation::{generate_feeding_events, generate_resource_series};
pub use stock::FoodBowl;
