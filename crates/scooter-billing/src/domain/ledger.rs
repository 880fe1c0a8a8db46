use crate::clock::{Clock, SystemClock};
use crate::config::BillingConfig;
use crate::domain::journal::IncomeJournal;
use crate::domain::pricing;
use crate::error::{BillingError, Result};
use rust_decimal::Decimal;
use scooter_fleet::FleetRegistry;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The rental company's ledger: starts and ends rentals against the fleet
/// registry, charges completed rentals under the capped daily-rate rule,
/// and aggregates income from the journal.
///
/// Owns the registry so that rental state always mutates the same scooter
/// instances the registry hands out. Hosts reach the registry through
/// [`fleet`](RentalLedger::fleet) / [`fleet_mut`](RentalLedger::fleet_mut).
pub struct RentalLedger {
    name: String,
    fleet: FleetRegistry,
    journal: IncomeJournal,
    config: BillingConfig,
    clock: Arc<dyn Clock>,
}

impl RentalLedger {
    /// Ledger on the system clock.
    pub fn new(name: impl Into<String>, fleet: FleetRegistry, config: BillingConfig) -> Self {
        Self::with_clock(name, fleet, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        name: impl Into<String>,
        fleet: FleetRegistry,
        config: BillingConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            name: name.into(),
            fleet,
            journal: IncomeJournal::new(),
            config,
            clock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut FleetRegistry {
        &mut self.fleet
    }

    pub fn journal(&self) -> &IncomeJournal {
        &self.journal
    }

    /// Hands the scooter to a customer.
    ///
    /// Fails if the id is empty or unknown, or if the scooter is already
    /// out. On success the scooter is marked rented as of now.
    pub fn start_rent(&mut self, id: &str) -> Result<()> {
        let now = self.clock.now();
        let scooter = self.fleet.get_scooter_mut(id)?;

        if scooter.is_rented() {
            return Err(BillingError::ScooterUnavailable { id: id.to_string() });
        }

        scooter.begin_rental(now);
        info!(scooter_id = %id, start = %now, "rental started");
        Ok(())
    }

    /// Takes the scooter back, charges the rental, and returns the amount.
    ///
    /// The charge is journaled under the rental's end timestamp unless an
    /// earlier rental already completed at that exact instant, in which
    /// case the earlier entry wins.
    pub fn end_rent(&mut self, id: &str) -> Result<Decimal> {
        let now = self.clock.now();
        let daily_cap = self.config.daily_cap;
        let scooter = self.fleet.get_scooter_mut(id)?;

        if !scooter.is_rented() {
            return Err(BillingError::ScooterNotInUse { id: id.to_string() });
        }
        let Some(start) = scooter.rent_start() else {
            // Rented without a start timestamp cannot happen through this
            // ledger; treat it as not in use rather than guess a charge.
            return Err(BillingError::ScooterNotInUse { id: id.to_string() });
        };

        let rate = scooter.price_per_minute();
        scooter.finish_rental(now);

        let charge = pricing::rental_charge(start, now, rate, daily_cap);
        if !self.journal.record(now, charge) {
            warn!(scooter_id = %id, completed_at = %now, "journal already holds a charge for this timestamp, dropping");
        }
        info!(scooter_id = %id, end = %now, %charge, "rental ended");
        Ok(charge)
    }

    /// Total income, optionally filtered to completions in `year` and
    /// optionally including an estimate for rentals still in progress.
    ///
    /// The in-progress estimate is uncapped and is added independent of
    /// the year filter.
    pub fn calculate_income(&self, year: Option<i32>, include_not_completed: bool) -> Decimal {
        let mut total = match year {
            Some(year) => self.journal.total_for_year(year),
            None => self.journal.total(),
        };

        if include_not_completed {
            let now = self.clock.now();
            for scooter in self.fleet.scooters().iter().filter(|s| s.is_rented()) {
                if let Some(start) = scooter.rent_start() {
                    let accrued = pricing::accrued_charge(start, now, scooter.price_per_minute());
                    debug!(scooter_id = %scooter.id(), %accrued, "including accrued rental");
                    total += accrued;
                }
            }
        }

        total
    }
}
