//! Error types for the generation engine

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Not enough values available. Need {needed}, have {available}")]
    InsufficientDomain { needed: usize, available: usize },

    #[error("No characters available after exclusions")]
    EmptyDomain,

    #[error("Cannot select {requested} unique items from {available} items")]
    InsufficientItems { requested: usize, available: usize },

    #[error("Wheel needs at least {min} items, got {got}")]
    InvalidWheelConfiguration { min: usize, got: usize },

    #[error("Invalid spin state: cannot {action} while {phase}")]
    InvalidSpinState {
        action: &'static str,
        phase: &'static str,
    },

    #[error("Domain of {size} values exceeds limit of {limit}")]
    DomainTooLarge { size: u128, limit: u64 },

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type GenResult<T> = Result<T, GenError>;
