use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;
use super::record::PriceRecord;

/// How a reference-currency amount was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Conversion {
    /// The record was already in the reference currency; amount untouched.
    Identity,
    /// Divided by this rate (foreign units per reference unit).
    Converted { rate: f64 },
    /// No usable rate for the resolved code; the original amount is shown
    /// as-is. Degraded accuracy, not an error.
    MissingRate,
}

/// A record's per-kWh price re-expressed in the reference currency.
///
/// Derived, never persisted: recompute whenever the record or the rate
/// table changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPrice {
    pub record: PriceRecord,

    /// Price per kWh exactly as the API reported it
    pub original_amount: f64,

    /// The raw currency label the API reported
    pub original_currency: String,

    /// Code the raw label resolved to
    pub resolved_code: CurrencyCode,

    /// Price per kWh in the reference currency (unrounded)
    pub amount: f64,

    pub conversion: Conversion,
}

impl NormalizedPrice {
    /// `false` when the amount fell back to the unconverted original.
    pub fn is_accurate(&self) -> bool {
        !matches!(self.conversion, Conversion::MissingRate)
    }
}

/// Records sharing one (country, provider) pair, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderGroup {
    pub country: String,
    pub provider: String,
    pub models: Vec<PriceRecord>,
}
