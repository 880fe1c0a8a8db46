use crate::error::{FleetError, Result};
use crate::scooter::Scooter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The set of scooters owned by the rental company.
///
/// Scooters are kept in insertion order and keyed by their unique id.
/// Lookups hand out references into the live list; the billing ledger uses
/// the mutable form to flip the rented flag and stamp timestamps on the
/// same instance the registry owns.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FleetRegistry {
    scooters: Vec<Scooter>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new scooter, available for rent.
    pub fn add_scooter(&mut self, id: &str, price_per_minute: Decimal) -> Result<()> {
        if id.is_empty() {
            return Err(FleetError::InvalidId);
        }
        if price_per_minute < Decimal::ZERO {
            return Err(FleetError::InvalidPrice {
                price: price_per_minute,
            });
        }
        if self.scooters.iter().any(|s| s.id() == id) {
            return Err(FleetError::DuplicateId { id: id.to_string() });
        }

        self.scooters
            .push(Scooter::new(id.to_string(), price_per_minute));
        Ok(())
    }

    /// Removes the scooter with the given id.
    pub fn remove_scooter(&mut self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(FleetError::InvalidId);
        }

        let position = self
            .scooters
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| FleetError::IdNotFound { id: id.to_string() })?;

        self.scooters.remove(position);
        Ok(())
    }

    pub fn get_scooter(&self, id: &str) -> Result<&Scooter> {
        if id.is_empty() {
            return Err(FleetError::InvalidId);
        }

        self.scooters
            .iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| FleetError::IdNotFound { id: id.to_string() })
    }

    /// Mutable handle to the live scooter instance.
    pub fn get_scooter_mut(&mut self, id: &str) -> Result<&mut Scooter> {
        if id.is_empty() {
            return Err(FleetError::InvalidId);
        }

        self.scooters
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| FleetError::IdNotFound { id: id.to_string() })
    }

    /// All scooters, in insertion order.
    pub fn scooters(&self) -> &[Scooter] {
        &self.scooters
    }

    pub fn len(&self) -> usize {
        self.scooters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scooters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn add_scooter_rejects_empty_id() {
        let mut fleet = FleetRegistry::new();
        let result = fleet.add_scooter("", dec!(0.2));
        assert!(matches!(result, Err(FleetError::InvalidId)));
        assert!(fleet.is_empty());
    }

    #[test]
    fn add_scooter_rejects_negative_price() {
        let mut fleet = FleetRegistry::new();
        let result = fleet.add_scooter("s1", dec!(-0.01));
        assert!(matches!(result, Err(FleetError::InvalidPrice { .. })));
        assert!(fleet.is_empty());
    }

    #[test]
    fn add_scooter_accepts_zero_price() {
        let mut fleet = FleetRegistry::new();
        fleet.add_scooter("s1", Decimal::ZERO).unwrap();
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn add_scooter_rejects_duplicate_id() {
        let mut fleet = FleetRegistry::new();
        fleet.add_scooter("s1", dec!(0.2)).unwrap();
        let result = fleet.add_scooter("s1", dec!(0.3));
        assert!(matches!(result, Err(FleetError::DuplicateId { .. })));
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn remove_scooter_rejects_empty_id() {
        let mut fleet = FleetRegistry::new();
        assert!(matches!(
            fleet.remove_scooter(""),
            Err(FleetError::InvalidId)
        ));
    }

    #[test]
    fn remove_scooter_fails_for_unknown_id() {
        let mut fleet = FleetRegistry::new();
        fleet.add_scooter("s1", dec!(0.2)).unwrap();
        assert!(matches!(
            fleet.remove_scooter("s2"),
            Err(FleetError::IdNotFound { .. })
        ));
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn remove_scooter_drops_only_the_matching_scooter() {
        let mut fleet = FleetRegistry::new();
        fleet.add_scooter("s1", dec!(0.2)).unwrap();
        fleet.add_scooter("s2", dec!(0.3)).unwrap();
        fleet.remove_scooter("s1").unwrap();

        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.scooters()[0].id(), "s2");
    }

    #[test]
    fn get_scooter_rejects_empty_id() {
        let fleet = FleetRegistry::new();
        assert!(matches!(fleet.get_scooter(""), Err(FleetError::InvalidId)));
    }

    #[test]
    fn get_scooter_fails_for_unknown_id() {
        let fleet = FleetRegistry::new();
        assert!(matches!(
            fleet.get_scooter("ghost"),
            Err(FleetError::IdNotFound { .. })
        ));
    }

    #[test]
    fn get_scooter_mut_hands_out_the_live_instance() {
        let mut fleet = FleetRegistry::new();
        fleet.add_scooter("s1", dec!(0.2)).unwrap();

        let now = chrono::Utc::now();
        fleet.get_scooter_mut("s1").unwrap().begin_rental(now);

        let scooter = fleet.get_scooter("s1").unwrap();
        assert!(scooter.is_rented());
        assert_eq!(scooter.rent_start(), Some(now));
    }

    #[test]
    fn scooters_preserve_insertion_order() {
        let mut fleet = FleetRegistry::new();
        fleet.add_scooter("c", dec!(0.1)).unwrap();
        fleet.add_scooter("a", dec!(0.2)).unwrap();
        fleet.add_scooter("b", dec!(0.3)).unwrap();

        let ids: Vec<&str> = fleet.scooters().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
