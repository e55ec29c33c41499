pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::Utc;
use models::{
    cache::QueryCache,
    chart::ChartBar,
    comparison::{HouseholdComparison, PriceSummary},
    dashboard::DashboardData,
    normalized::{NormalizedPrice, ProviderGroup},
    settings::Settings,
};
use providers::{http::HttpDataSource, traits::DataSource};
use services::{
    chart_service::ChartService, comparison_service::ComparisonService,
    currency_service::CurrencyService, grouping_service::GroupingService,
    household_service::HouseholdService,
};

use errors::CoreError;

/// Main entry point for the charging price core library.
///
/// Owns the data source, the session cache and all services. Fetching is
/// the only async part; every query below runs synchronously over the last
/// successfully loaded snapshot.
#[must_use]
pub struct PriceDashboard {
    settings: Settings,
    source: Box<dyn DataSource>,
    cache: QueryCache,
    currency_service: CurrencyService,
    grouping_service: GroupingService,
    household_service: HouseholdService,
    comparison_service: ComparisonService,
    chart_service: ChartService,
}

impl std::fmt::Debug for PriceDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceDashboard")
            .field("source", &self.source.name())
            .field("settings", &self.settings)
            .field("records", &self.cache.get().map(|d| d.records.len()))
            .field("fetched_at", &self.cache.fetched_at())
            .finish()
    }
}

impl PriceDashboard {
    /// Create a dashboard fetching from the HTTP endpoints in `settings`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let source = Box::new(HttpDataSource::new(&settings));
        Self::with_source(settings, source)
    }

    /// Create a dashboard over a custom data source.
    pub fn with_source(settings: Settings, source: Box<dyn DataSource>) -> Result<Self, CoreError> {
        settings.validate()?;
        let cache = QueryCache::new(settings.cache_ttl());
        Ok(Self {
            settings,
            source,
            cache,
            currency_service: CurrencyService::new(),
            grouping_service: GroupingService::new(),
            household_service: HouseholdService::new(),
            comparison_service: ComparisonService::new(),
            chart_service: ChartService::new(),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Return cached data while it is fresh, otherwise fetch.
    pub async fn load(&mut self) -> Result<&DashboardData, CoreError> {
        if self.cache.is_fresh(Utc::now()) {
            tracing::debug!(source = self.source.name(), "Serving dashboard data from cache");
            return self.data();
        }
        self.refresh().await
    }

    /// Fetch everything again, replacing the cached data on success.
    /// On failure the previous snapshot (if any) stays available.
    pub async fn refresh(&mut self) -> Result<&DashboardData, CoreError> {
        let data = self.fetch().await?;
        self.cache.store(data, Utc::now());
        self.data()
    }

    /// Forget cached data; the next `load()` fetches again.
    pub fn invalidate_cache(&mut self) {
        self.cache.invalidate();
    }

    /// Whether the cached data is still within its TTL.
    #[must_use]
    pub fn is_cache_fresh(&self) -> bool {
        self.cache.is_fresh(Utc::now())
    }

    /// The last successfully loaded snapshot.
    pub fn data(&self) -> Result<&DashboardData, CoreError> {
        self.cache
            .get()
            .ok_or_else(|| CoreError::NotLoaded("call load() before querying".into()))
    }

    // ── Tables ──────────────────────────────────────────────────────

    /// Records grouped by (country, provider), at most four plans each.
    pub fn grouped(&self) -> Result<Vec<ProviderGroup>, CoreError> {
        let data = self.data()?;
        Ok(self.grouping_service.group_by_country_and_provider(&data.records))
    }

    /// All records normalized to the reference currency, in API order.
    pub fn normalized_prices(&self) -> Result<Vec<NormalizedPrice>, CoreError> {
        let data = self.data()?;
        Ok(self.currency_service.normalize_all(&data.records, &data.rates))
    }

    /// Distinct plan names, for the comparison selector.
    pub fn plan_names(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.grouping_service.plan_names(&self.data()?.records))
    }

    /// Distinct countries, in first-seen order.
    pub fn countries(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.grouping_service.countries(&self.data()?.records))
    }

    // ── Plan comparison ─────────────────────────────────────────────

    /// One plan across every country offering it, cheapest first.
    pub fn plan_comparison(&self, plan_name: &str) -> Result<Vec<NormalizedPrice>, CoreError> {
        let data = self.data()?;
        Ok(self
            .grouping_service
            .filter_by_plan_name(&data.records, plan_name, &data.rates))
    }

    /// Min/max/mean for one plan; `None` when no record offers it.
    pub fn plan_summary(&self, plan_name: &str) -> Result<Option<PriceSummary>, CoreError> {
        let prices = self.plan_comparison(plan_name)?;
        Ok(self.comparison_service.summarize(&prices))
    }

    /// Chart bars for one plan, cheapest first, with household markers when
    /// a household dataset was loaded.
    pub fn plan_chart(&self, plan_name: &str) -> Result<Vec<ChartBar>, CoreError> {
        let prices = self.plan_comparison(plan_name)?;
        let household = self.data()?.household.as_ref();
        Ok(self.chart_service.plan_chart(&prices, household))
    }

    /// One plan against household electricity prices. Empty when no
    /// household dataset was loaded.
    pub fn household_comparison(
        &self,
        plan_name: &str,
    ) -> Result<Vec<HouseholdComparison>, CoreError> {
        let prices = self.plan_comparison(plan_name)?;
        Ok(match &self.data()?.household {
            Some(household) => self.comparison_service.compare_with_household(&prices, household),
            None => Vec::new(),
        })
    }

    // ── Internal ────────────────────────────────────────────────────

    async fn fetch(&self) -> Result<DashboardData, CoreError> {
        let source = self.source.as_ref();
        let (records, rates, household) = futures::join!(
            source.fetch_price_records(),
            source.fetch_exchange_rates(),
            source.fetch_household_dataset()
        );

        let records = records?;
        let rates = rates?;

        // The household dataset only enriches comparisons; losing it must
        // not block the main views.
        let household = match household {
            Ok(Some(raw)) => {
                let (table, report) = self.household_service.parse_with_report(&raw);
                tracing::debug!(
                    accepted = report.accepted,
                    skipped = report.skipped(),
                    "Parsed household dataset"
                );
                Some(table)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "Household dataset unavailable");
                None
            }
        };

        tracing::info!(
            source = source.name(),
            records = records.len(),
            rates = rates.len(),
            household = household.as_ref().map_or(0, |h| h.len()),
            "Dashboard data loaded"
        );

        Ok(DashboardData {
            records,
            rates,
            household,
        })
    }
}
