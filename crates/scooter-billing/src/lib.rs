//! Rental ledger and pricing engine for the scooter rental service.
//!
//! The [`RentalLedger`] orchestrates rentals against a
//! [`scooter_fleet::FleetRegistry`], charges completed rentals under a
//! capped daily-rate rule, and aggregates income from an append-only
//! journal of completed-rental charges.
//!
//! The library is synchronous and in-memory; a multi-threaded host must
//! serialize access externally. Wall-clock time is consumed through the
//! [`Clock`] trait so billing behavior stays testable.

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::BillingConfig;
pub use domain::journal::IncomeJournal;
pub use domain::ledger::RentalLedger;
pub use error::{BillingError, Result};
