use crate::models::comparison::{HouseholdComparison, PriceSummary};
use crate::models::household::HouseholdPriceTable;
use crate::models::normalized::NormalizedPrice;

/// Computes comparison figures over normalized prices: min/max/mean and
/// charging vs. household electricity price.
///
/// All inputs are already in the reference currency.
pub struct ComparisonService;

impl ComparisonService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize a list of normalized prices.
    ///
    /// Returns `None` for an empty list: there is no minimum of nothing.
    pub fn summarize(&self, prices: &[NormalizedPrice]) -> Option<PriceSummary> {
        let first = prices.first()?;
        let mut cheapest = first;
        let mut most_expensive = first;
        let mut total = 0.0;
        let mut unconverted = 0;

        for price in prices {
            // Strict comparisons keep the first entry on ties.
            if price.amount < cheapest.amount {
                cheapest = price;
            }
            if price.amount > most_expensive.amount {
                most_expensive = price;
            }
            total += price.amount;
            if !price.is_accurate() {
                unconverted += 1;
            }
        }

        Some(PriceSummary {
            count: prices.len(),
            min: cheapest.amount,
            max: most_expensive.amount,
            mean: total / prices.len() as f64,
            cheapest: cheapest.clone(),
            most_expensive: most_expensive.clone(),
            unconverted,
        })
    }

    /// Set each charging price against its country's household price.
    ///
    /// Countries missing from the household table are skipped. Output keeps
    /// the input order.
    pub fn compare_with_household(
        &self,
        prices: &[NormalizedPrice],
        household: &HouseholdPriceTable,
    ) -> Vec<HouseholdComparison> {
        prices
            .iter()
            .filter_map(|price| {
                let household_price = household.get(&price.record.country)?;
                Some(HouseholdComparison {
                    country: price.record.country.clone(),
                    provider: price.record.provider.clone(),
                    plan: price.record.name.clone(),
                    charging_price: price.amount,
                    household_price,
                    difference: price.amount - household_price,
                    ratio: price.amount / household_price,
                })
            })
            .collect()
    }
}

impl Default for ComparisonService {
    fn default() -> Self {
        Self::new()
    }
}
