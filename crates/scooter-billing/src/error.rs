use scooter_fleet::FleetError;
use thiserror::Error;

/// Failures raised by the rental ledger.
///
/// Registry failures (invalid id, unknown id) pass through unmodified via
/// the `Fleet` variant. No variant leaves partial state behind: validation
/// and lookup happen before any scooter or journal mutation.
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("scooter {id} is already rented")]
    ScooterUnavailable { id: String },

    #[error("scooter {id} is not currently rented")]
    ScooterNotInUse { id: String },

    #[error(transparent)]
    Fleet(#[from] FleetError),
}

pub type Result<T> = std::result::Result<T, BillingError>;
