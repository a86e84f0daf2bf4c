//! Food bowl - running balance of food available to the pet

use serde::{Deserialize, Serialize};

use crate::core::types::{round_to, FeedingEvent};

/// Balance below which the bowl is reported as running low, in grams
pub const LOW_FOOD_THRESHOLD: f64 = 100.0;

/// Outcome of drawing food from the bowl
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Consumption {
    /// Grams actually taken from the bowl
    pub consumed: f64,
    /// Grams requested but not available
    pub shortage: f64,
}

impl Consumption {
    pub fn is_short(&self) -> bool {
        self.shortage > 0.0
    }
}

/// Food held in the bowl, owned by a single caller
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodBowl {
    balance: f64,
}

impl FoodBowl {
    /// Bowl holding `initial` grams; negative amounts start it empty
    pub fn new(initial: f64) -> Self {
        Self {
            balance: initial.max(0.0),
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Top up the bowl, returns the new balance
    pub fn add(&mut self, amount: f64) -> f64 {
        self.balance += amount.max(0.0);
        self.balance
    }

    /// Empty the bowl
    pub fn reset(&mut self) {
        self.balance = 0.0;
    }

    /// Take up to `amount` grams, never leaving a negative balance
    pub fn consume(&mut self, amount: f64) -> Consumption {
        let requested = amount.max(0.0);
        let consumed = requested.min(self.balance);
        let shortage = requested - consumed;
        self.balance -= consumed;

        if shortage > 0.0 {
            tracing::warn!(
                "Food bowl short by {:.1}g (requested {:.1}g, available {:.1}g)",
                shortage,
                requested,
                consumed
            );
        }

        Consumption {
            consumed: round_to(consumed, 1),
            shortage: round_to(shortage, 1),
        }
    }

    /// Deduct the food served across a feeding run in one step
    pub fn consume_events(&mut self, events: &[FeedingEvent]) -> Consumption {
        let total: f64 = events.iter().map(|e| e.amount).sum();
        self.consume(total)
    }

    pub fn is_low(&self, threshold: f64) -> bool {
        self.balance < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_bowl_add_consume() {
        let mut bowl = FoodBowl::new(200.0);
        assert_eq!(bowl.add(50.0), 250.0);

        let taken = bowl.consume(100.0);
        assert_eq!(taken.consumed, 100.0);
        assert_eq!(taken.shortage, 0.0);
        assert!(!taken.is_short());
        assert_eq!(bowl.balance(), 150.0);
    }

    #[test]
    fn test_bowl_shortage_floors_at_zero() {
        let mut bowl = FoodBowl::new(30.0);
        let taken = bowl.consume(50.0);
        assert_eq!(taken.consumed, 30.0);
        assert_eq!(taken.shortage, 20.0);
        assert!(taken.is_short());
        assert_eq!(bowl.balance(), 0.0);

        let empty = bowl.consume(10.0);
        assert_eq!(empty.consumed, 0.0);
        assert_eq!(empty.shortage, 10.0);
    }

    #[test]
    fn test_bowl_low_and_reset() {
        let mut bowl = FoodBowl::new(120.0);
        assert!(!bowl.is_low(LOW_FOOD_THRESHOLD));
        bowl.consume(30.0);
        assert!(bowl.is_low(LOW_FOOD_THRESHOLD));
        bowl.reset();
        assert_eq!(bowl.balance(), 0.0);
    }

    #[test]
    fn test_negative_amounts_are_ignored() {
        let mut bowl = FoodBowl::new(-5.0);
        assert_eq!(bowl.balance(), 0.0);
        bowl.add(-10.0);
        assert_eq!(bowl.balance(), 0.0);
        assert_eq!(bowl.consume(-3.0), Consumption::default());
    }

    #[test]
    fn test_consume_feeding_run() {
        let at = NaiveDate::from_ymd_opt(2024, 12, 13)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let meal = |amount, present| FeedingEvent {
            timestamp: at,
            amount,
            present,
            kind: "Feeding".into(),
        };
        let events = vec![meal(50.0, true), meal(45.5, false)];
        let mut bowl = FoodBowl::new(100.0);
        let taken = bowl.consume_events(&events);
        assert_eq!(taken.consumed, 95.5);
        assert!((bowl.balance() - 4.5).abs() < 1e-9);
    }
}
