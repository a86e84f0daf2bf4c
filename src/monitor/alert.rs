//! Low-water alert classification

use serde::{Deserialize, Serialize};

use crate::core::config::check_threshold;
use crate::core::error::Result;

/// Default low-water threshold, in percent
pub const DEFAULT_ALERT_THRESHOLD: f64 = 20.0;

/// Alert tier for a water level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Normal => "NORMAL",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertStatus {
    pub is_alert: bool,
    pub severity: Severity,
    pub message: String,
}

/// Classify a water level against a threshold
///
/// Empty is critical, anything up to and including the threshold is a
/// warning. The threshold itself must lie within 0-100.
pub fn evaluate_alert(level: f64, threshold: f64) -> Result<AlertStatus> {
    check_threshold(threshold)?;

    let status = if level <= 0.0 {
        AlertStatus {
            is_alert: true,
            severity: Severity::Critical,
            message: "CRITICAL: Water bowl is empty! Refill immediately!".to_string(),
        }
    } else if level <= threshold {
        AlertStatus {
            is_alert: true,
            severity: Severity::Warning,
            message: format!(
                "WARNING: Water level is low ({:.1}%). Please refill soon.",
                level
            ),
        }
    } else {
        AlertStatus {
            is_alert: false,
            severity: Severity::Normal,
            message: format!("Water level is adequate ({:.1}%).", level),
        }
    };

    Ok(status)
}
