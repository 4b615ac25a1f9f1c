//! Error types

use thiserror::Error;

/// Main error type for EcoQuest
///
/// Input problems are rejected before any mutation; `StoreUnavailable` is
/// retryable and guarantees no partial state was committed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient points: need {required}, have {available}")]
    InsufficientPoints { required: i64, available: i64 },

    #[error("Reward is out of stock")]
    OutOfStock,

    #[error("Ledger store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
