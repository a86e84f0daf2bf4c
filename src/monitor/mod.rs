pub mod alert;

pub use alert::{evaluate_alert, AlertStatus, Severity, DEFAULT_ALERT_THRESHOLD};
