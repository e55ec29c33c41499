use crate::models::currency::CurrencyCode;
use crate::models::normalized::{Conversion, NormalizedPrice};
use crate::models::rates::ExchangeRateTable;
use crate::models::record::PriceRecord;

/// Converts amounts into the reference currency (EUR).
///
/// Rates are "foreign units per 1 EUR", so conversion is a single division:
/// - Reference currency (`€`, `EUR`) → amount untouched, the rate table is
///   never consulted.
/// - Rate available → `amount / rate`, unrounded. Display rounding belongs
///   to the frontend.
/// - Rate missing → the original amount, flagged as `Conversion::MissingRate`.
///   One missing rate never fails a whole render.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Express `amount` (labelled with a raw currency symbol or code) in EUR.
    /// E.g., to_reference_currency(0.65, "CHF", {CHF: 0.95}) → ~0.6842
    pub fn to_reference_currency(
        &self,
        amount: f64,
        raw_label: &str,
        rates: &ExchangeRateTable,
    ) -> f64 {
        self.convert(amount, &CurrencyCode::resolve(raw_label), rates).0
    }

    /// Normalize a record's per-kWh price, keeping the original for display.
    pub fn normalize(&self, record: &PriceRecord, rates: &ExchangeRateTable) -> NormalizedPrice {
        let resolved_code = CurrencyCode::resolve(&record.currency);
        let (amount, conversion) = self.convert(record.price_kwh, &resolved_code, rates);

        if conversion == Conversion::MissingRate {
            tracing::warn!(
                record_id = %record.id,
                country = %record.country,
                currency = %resolved_code,
                "No exchange rate available, showing unconverted price"
            );
        }

        NormalizedPrice {
            record: record.clone(),
            original_amount: record.price_kwh,
            original_currency: record.currency.clone(),
            resolved_code,
            amount,
            conversion,
        }
    }

    /// Normalize every record, preserving input order.
    pub fn normalize_all(
        &self,
        records: &[PriceRecord],
        rates: &ExchangeRateTable,
    ) -> Vec<NormalizedPrice> {
        records.iter().map(|r| self.normalize(r, rates)).collect()
    }

    fn convert(
        &self,
        amount: f64,
        code: &CurrencyCode,
        rates: &ExchangeRateTable,
    ) -> (f64, Conversion) {
        if code.is_reference() {
            return (amount, Conversion::Identity);
        }

        match rates.rate_for(code) {
            Some(rate) => (amount / rate, Conversion::Converted { rate }),
            None => (amount, Conversion::MissingRate),
        }
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
