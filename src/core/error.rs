use thiserror::Error;

#[derive(Error, Debug)]
pub enum BowlError {
    #[error("Simulation length must be at least one day, got {0}")]
    InvalidDays(u32),

    #[error("Meal schedule is empty")]
    EmptyMealSchedule,

    #[error("Alert threshold must be within 0-100, got {0}")]
    ThresholdOutOfRange(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl BowlError {
    /// True for errors caused by bad simulation parameters rather than host I/O
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BowlError::InvalidDays(_)
                | BowlError::EmptyMealSchedule
                | BowlError::ThresholdOutOfRange(_)
                | BowlError::InvalidConfig(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BowlError>;
