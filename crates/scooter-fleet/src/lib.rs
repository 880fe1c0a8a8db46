//! Fleet registry for the scooter rental service.
//!
//! Owns the set of scooters available for rent. The rental ledger in
//! `scooter-billing` looks scooters up here and mutates them in place when
//! a rental starts or ends; all other bookkeeping (journal, pricing) lives
//! on the billing side.

pub mod error;
pub mod registry;
pub mod scooter;

pub use error::{FleetError, Result};
pub use registry::FleetRegistry;
pub use scooter::Scooter;
