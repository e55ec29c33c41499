use crate::models::chart::ChartBar;
use crate::models::household::HouseholdPriceTable;
use crate::models::normalized::NormalizedPrice;

/// Generates chart-ready bar series from normalized prices.
///
/// The core computes all the numbers; the frontend only renders.
/// Values are left unrounded; two-decimal display is a rendering concern.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One bar per price, in the given order (callers pass the sorted
    /// output of a plan comparison).
    ///
    /// When a household table is supplied, each bar carries its country's
    /// household price as a reference marker.
    pub fn plan_chart(
        &self,
        prices: &[NormalizedPrice],
        household: Option<&HouseholdPriceTable>,
    ) -> Vec<ChartBar> {
        prices
            .iter()
            .map(|price| {
                let record = &price.record;
                ChartBar {
                    label: format!("{} ({})", record.country, record.provider),
                    country: record.country.clone(),
                    provider: record.provider.clone(),
                    value: price.amount,
                    household_value: household.and_then(|h| h.get(&record.country)),
                    accurate: price.is_accurate(),
                }
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
