use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::currency::CurrencyCode;

/// Exchange rates keyed by ISO code.
///
/// Each rate is "units of that currency per 1 unit of the reference
/// currency", so `amount / rate` yields the reference-currency amount.
/// Read-only once built; a refresh replaces the whole table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRateTable {
    rates: HashMap<String, f64>,
}

impl ExchangeRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a usable rate for a resolved code.
    ///
    /// Zero and NaN rates are reported as absent; they cannot be divided by.
    pub fn rate_for(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates
            .get(code.as_str())
            .copied()
            .filter(|rate| *rate != 0.0 && !rate.is_nan())
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rate_for(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl From<HashMap<String, f64>> for ExchangeRateTable {
    fn from(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ExchangeRateTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().map(|(code, rate)| (code.into(), rate)).collect(),
        }
    }
}
