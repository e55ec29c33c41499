use std::collections::{HashMap, HashSet};

use crate::models::normalized::{NormalizedPrice, ProviderGroup};
use crate::models::rates::ExchangeRateTable;
use crate::models::record::PriceRecord;
use crate::services::currency_service::CurrencyService;

/// Maximum number of plans kept per (country, provider) group.
/// The provider table is a fixed four-column grid.
pub const MAX_MODELS_PER_GROUP: usize = 4;

/// Groups and filters price records for the table and comparison views.
///
/// Pure business logic, no I/O. Empty input always yields empty output.
pub struct GroupingService {
    currency_service: CurrencyService,
}

impl GroupingService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Group records by (country, provider).
    ///
    /// Groups appear in the order their key is first seen. Each group keeps
    /// the first `MAX_MODELS_PER_GROUP` records; later ones are dropped.
    pub fn group_by_country_and_provider(&self, records: &[PriceRecord]) -> Vec<ProviderGroup> {
        let mut groups: Vec<ProviderGroup> = Vec::new();
        let mut index: HashMap<(&str, &str), usize> = HashMap::new();

        for record in records {
            let key = (record.country.as_str(), record.provider.as_str());
            let idx = *index.entry(key).or_insert_with(|| {
                groups.push(ProviderGroup {
                    country: record.country.clone(),
                    provider: record.provider.clone(),
                    models: Vec::with_capacity(MAX_MODELS_PER_GROUP),
                });
                groups.len() - 1
            });

            let group = &mut groups[idx];
            if group.models.len() < MAX_MODELS_PER_GROUP {
                group.models.push(record.clone());
            }
        }

        groups
    }

    /// Every record offering `plan_name`, normalized to EUR and sorted
    /// cheapest first. The sort is stable: equal prices keep input order.
    pub fn filter_by_plan_name(
        &self,
        records: &[PriceRecord],
        plan_name: &str,
        rates: &ExchangeRateTable,
    ) -> Vec<NormalizedPrice> {
        let mut prices: Vec<NormalizedPrice> = records
            .iter()
            .filter(|r| r.name == plan_name)
            .map(|r| self.currency_service.normalize(r, rates))
            .collect();

        prices.sort_by(|a, b| a.amount.total_cmp(&b.amount));
        prices
    }

    /// Distinct plan names in first-seen order.
    pub fn plan_names(&self, records: &[PriceRecord]) -> Vec<String> {
        Self::distinct(records.iter().map(|r| r.name.as_str()))
    }

    /// Distinct countries in first-seen order.
    pub fn countries(&self, records: &[PriceRecord]) -> Vec<String> {
        Self::distinct(records.iter().map(|r| r.country.as_str()))
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        values
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect()
    }
}

impl Default for GroupingService {
    fn default() -> Self {
        Self::new()
    }
}
