use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single scooter in the fleet.
///
/// The id is fixed at construction. The rented flag and the rental
/// timestamps always move together through [`begin_rental`] and
/// [`finish_rental`], so a scooter marked as rented is guaranteed to carry
/// a start timestamp.
///
/// [`begin_rental`]: Scooter::begin_rental
/// [`finish_rental`]: Scooter::finish_rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scooter {
    id: String,
    price_per_minute: Decimal,
    is_rented: bool,
    rent_start: Option<DateTime<Utc>>,
    rent_end: Option<DateTime<Utc>>,
}

impl Scooter {
    /// Creates an available scooter with no rental history.
    ///
    /// Argument validation (non-empty id, non-negative price) is the
    /// registry's job; see [`FleetRegistry::add_scooter`].
    ///
    /// [`FleetRegistry::add_scooter`]: crate::registry::FleetRegistry::add_scooter
    pub(crate) fn new(id: String, price_per_minute: Decimal) -> Self {
        Self {
            id,
            price_per_minute,
            is_rented: false,
            rent_start: None,
            rent_end: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price_per_minute(&self) -> Decimal {
        self.price_per_minute
    }

    pub fn is_rented(&self) -> bool {
        self.is_rented
    }

    /// Start of the current or most recent rental, if any.
    pub fn rent_start(&self) -> Option<DateTime<Utc>> {
        self.rent_start
    }

    /// End of the most recent completed rental, if any.
    pub fn rent_end(&self) -> Option<DateTime<Utc>> {
        self.rent_end
    }

    /// Marks the scooter as rented starting at `now`.
    ///
    /// Clears any previous rental end so the timestamps describe the
    /// rental currently in progress.
    pub fn begin_rental(&mut self, now: DateTime<Utc>) {
        self.is_rented = true;
        self.rent_start = Some(now);
        self.rent_end = None;
    }

    /// Marks the scooter as returned at `now`.
    pub fn finish_rental(&mut self, now: DateTime<Utc>) {
        self.is_rented = false;
        self.rent_end = Some(now);
    }
}
