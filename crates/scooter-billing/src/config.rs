use anyhow::{anyhow, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Billing parameters.
///
/// Layered from defaults, then `billing.toml` (or an explicit path), then
/// `SCOOTER_BILLING_*` environment variables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Maximum charge for any single day segment of a rental, in currency
    /// units. Applied independently per segment.
    pub daily_cap: Decimal,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            daily_cap: Decimal::from(20),
        }
    }
}

impl BillingConfig {
    pub fn load(path_override: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(BillingConfig::default()));

        if let Some(path) = path_override {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        } else {
            let default_path = PathBuf::from("billing.toml");
            if default_path.exists() {
                figment = figment.merge(Toml::file(default_path));
            }
        }

        figment = figment.merge(Env::prefixed("SCOOTER_BILLING_"));

        figment
            .extract()
            .map_err(|e| anyhow!("Configuration error: {}", e))
    }

    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }
}
