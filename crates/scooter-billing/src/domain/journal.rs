use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Append-only record of completed-rental charges, keyed by the rental's
/// completion timestamp.
///
/// Used only for income aggregation; individual rentals are never billed
/// from it. Writes are first-write-wins: a second charge landing on an
/// already-present timestamp is dropped.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IncomeJournal {
    entries: BTreeMap<DateTime<Utc>, Decimal>,
}

impl IncomeJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a charge under `completed_at`. Returns `false` when the
    /// timestamp was already taken and the entry was dropped.
    pub fn record(&mut self, completed_at: DateTime<Utc>, amount: Decimal) -> bool {
        if self.entries.contains_key(&completed_at) {
            return false;
        }
        self.entries.insert(completed_at, amount);
        true
    }

    pub fn get(&self, completed_at: &DateTime<Utc>) -> Option<Decimal> {
        self.entries.get(completed_at).copied()
    }

    /// Sum of every recorded charge.
    pub fn total(&self) -> Decimal {
        self.entries.values().copied().sum()
    }

    /// Sum of charges whose completion timestamp falls in `year`.
    pub fn total_for_year(&self, year: i32) -> Decimal {
        self.entries
            .iter()
            .filter(|(completed_at, _)| completed_at.year() == year)
            .map(|(_, amount)| *amount)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
