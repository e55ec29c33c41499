use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const DEFAULT_PRICE_RECORDS_URL: &str = "http://localhost:3000/api/charging-prices";
pub const DEFAULT_EXCHANGE_RATES_URL: &str = "https://api.frankfurter.dev/v1/latest?base=EUR";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Where to fetch data from and how long fetched data stays fresh.
///
/// Every key is optional in JSON; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Endpoint returning a JSON array of price records.
    pub price_records_url: String,

    /// Endpoint returning `{ "rates": { "CHF": 0.95, ... } }` with EUR as base.
    pub exchange_rates_url: String,

    /// Static CSV asset with household electricity prices. `None` disables
    /// household comparisons.
    pub household_dataset_url: Option<String>,

    /// Seconds fetched data is served from the cache before a reload.
    pub cache_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            price_records_url: DEFAULT_PRICE_RECORDS_URL.to_string(),
            exchange_rates_url: DEFAULT_EXCHANGE_RATES_URL.to_string(),
            household_dataset_url: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.price_records_url.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "price_records_url must not be empty".into(),
            ));
        }
        if self.exchange_rates_url.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "exchange_rates_url must not be empty".into(),
            ));
        }
        if let Some(url) = &self.household_dataset_url {
            if url.trim().is_empty() {
                return Err(CoreError::ValidationError(
                    "household_dataset_url must not be empty when set".into(),
                ));
            }
        }
        if self.cache_ttl_secs == 0 {
            return Err(CoreError::ValidationError(
                "cache_ttl_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        i64::try_from(self.cache_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }
}
