use serde::{Deserialize, Serialize};

use super::normalized::NormalizedPrice;

/// Aggregate figures over a list of normalized prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Number of prices summarized
    pub count: usize,

    /// Lowest reference-currency price per kWh
    pub min: f64,

    /// Highest reference-currency price per kWh
    pub max: f64,

    /// Arithmetic mean of the reference-currency prices
    pub mean: f64,

    /// Entry with the lowest price (first one on ties)
    pub cheapest: NormalizedPrice,

    /// Entry with the highest price (first one on ties)
    pub most_expensive: NormalizedPrice,

    /// How many entries fell back to an unconverted amount
    pub unconverted: usize,
}

/// A charging price set against the household electricity price of its country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdComparison {
    pub country: String,
    pub provider: String,
    pub plan: String,

    /// Charging price per kWh in the reference currency
    pub charging_price: f64,

    /// Household price per kWh in the reference currency
    pub household_price: f64,

    /// charging_price - household_price
    pub difference: f64,

    /// charging_price / household_price
    pub ratio: f64,
}
