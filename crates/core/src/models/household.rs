use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Household electricity price per country, already in the reference currency.
///
/// At most one entry per country; inserting the same country again
/// overwrites the earlier price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseholdPriceTable {
    prices: HashMap<String, f64>,
}

impl HouseholdPriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, country: impl Into<String>, price: f64) {
        self.prices.insert(country.into(), price);
    }

    pub fn get(&self, country: &str) -> Option<f64> {
        self.prices.get(country).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Countries in the table, sorted for deterministic output.
    pub fn countries(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = self.prices.keys().map(String::as_str).collect();
        countries.sort_unstable();
        countries
    }
}

/// Row counts collected while parsing a household dataset.
///
/// Malformed rows are dropped silently from the table; this is how callers
/// find out how many were.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Rows that produced (or overwrote) a table entry
    pub accepted: usize,

    /// Rows with fewer fields than the country/price columns require
    pub too_short: usize,

    /// Aggregate regions ("Euro area", "European Union") excluded on purpose
    pub aggregates: usize,

    /// Rows whose price was non-numeric, non-finite or not strictly positive
    pub invalid_price: usize,
}

impl ParseReport {
    pub fn skipped(&self) -> usize {
        self.too_short + self.aggregates + self.invalid_price
    }
}
