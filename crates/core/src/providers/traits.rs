use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::rates::ExchangeRateTable;
use crate::models::record::PriceRecord;

/// Trait abstraction for the remote data the dashboard is built from.
///
/// The HTTP implementation lives in `providers::http`; tests and embedders
/// plug in their own. The three fetches are independent and may complete
/// in any order.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DataSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch all charging price records.
    async fn fetch_price_records(&self) -> Result<Vec<PriceRecord>, CoreError>;

    /// Fetch exchange rates against the reference currency.
    async fn fetch_exchange_rates(&self) -> Result<ExchangeRateTable, CoreError>;

    /// Fetch the raw household price dataset text.
    /// `Ok(None)` when no dataset is configured.
    async fn fetch_household_dataset(&self) -> Result<Option<String>, CoreError>;
}
