//! Stock accounting outside the simulated series

pub mod bowl;

pub use bowl::{Consumption, FoodBowl, LOW_FOOD_THRESHOLD};
