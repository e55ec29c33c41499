use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::rates::ExchangeRateTable;
use crate::models::record::PriceRecord;
use crate::models::settings::Settings;
use super::traits::DataSource;

const SOURCE_NAME: &str = "HTTP";

/// Fetches dashboard data from the configured HTTP endpoints.
///
/// - **Price records**: JSON array of records.
/// - **Exchange rates**: `{ "rates": { "CHF": 0.95, ... } }`, EUR as base
///   (the Frankfurter `/latest` shape).
/// - **Household dataset**: plain CSV text, optional.
pub struct HttpDataSource {
    client: Client,
    price_records_url: String,
    exchange_rates_url: String,
    household_dataset_url: Option<String>,
}

impl HttpDataSource {
    pub fn new(settings: &Settings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            price_records_url: settings.price_records_url.clone(),
            exchange_rates_url: settings.exchange_rates_url.clone(),
            household_dataset_url: settings.household_dataset_url.clone(),
        }
    }

    async fn get(&self, url: &str, what: &str) -> Result<Response, CoreError> {
        tracing::debug!(what, "Fetching");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                source_name: SOURCE_NAME.into(),
                message: format!("{what} request failed with status {status}"),
            });
        }
        Ok(resp)
    }
}

impl Default for HttpDataSource {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

// ── API response types ──────────────────────────────────────────────

#[derive(Deserialize)]
struct RatesResponse {
    rates: ExchangeRateTable,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataSource for HttpDataSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn fetch_price_records(&self) -> Result<Vec<PriceRecord>, CoreError> {
        self.get(&self.price_records_url, "price records")
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                source_name: SOURCE_NAME.into(),
                message: format!("Failed to parse price records: {e}"),
            })
    }

    async fn fetch_exchange_rates(&self) -> Result<ExchangeRateTable, CoreError> {
        let resp: RatesResponse = self
            .get(&self.exchange_rates_url, "exchange rates")
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                source_name: SOURCE_NAME.into(),
                message: format!("Failed to parse exchange rates: {e}"),
            })?;

        Ok(resp.rates)
    }

    async fn fetch_household_dataset(&self) -> Result<Option<String>, CoreError> {
        let Some(url) = &self.household_dataset_url else {
            return Ok(None);
        };

        let text = self.get(url, "household dataset").await?.text().await?;
        Ok(Some(text))
    }
}
