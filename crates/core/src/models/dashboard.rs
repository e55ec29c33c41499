use serde::{Deserialize, Serialize};

use super::household::HouseholdPriceTable;
use super::rates::ExchangeRateTable;
use super::record::PriceRecord;

/// Everything one load cycle fetched. The core operations only ever see a
/// fully resolved snapshot like this one, never a partial one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// All price records, in API order
    pub records: Vec<PriceRecord>,

    /// Exchange rates against the reference currency
    pub rates: ExchangeRateTable,

    /// Household prices, if a dataset is configured and could be fetched.
    #[serde(default)]
    pub household: Option<HouseholdPriceTable>,
}
