pub mod journal;
pub mod ledger;
pub mod pricing;
