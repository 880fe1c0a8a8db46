use rust_decimal::Decimal;
use thiserror::Error;

/// Failures raised by the fleet registry.
///
/// Every operation validates its arguments before touching the scooter
/// list, so an error never leaves partial state behind.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("scooter id must be a non-empty string")]
    InvalidId,

    #[error("price per minute must not be negative, got {price}")]
    InvalidPrice { price: Decimal },

    #[error("no scooter with id {id}")]
    IdNotFound { id: String },

    #[error("a scooter with id {id} is already registered")]
    DuplicateId { id: String },
}

pub type Result<T> = std::result::Result<T, FleetError>;
