// ═══════════════════════════════════════════════════════════════════
// Model Tests: CurrencyCode, PriceRecord, ExchangeRateTable,
// HouseholdPriceTable, Settings, QueryCache
// ═══════════════════════════════════════════════════════════════════

use chrono::{Duration, TimeZone, Utc};
use std::collections::HashMap;

use charging_prices_core::errors::CoreError;
use charging_prices_core::models::cache::QueryCache;
use charging_prices_core::models::currency::{CurrencyCode, REFERENCE_CODE};
use charging_prices_core::models::dashboard::DashboardData;
use charging_prices_core::models::household::{HouseholdPriceTable, ParseReport};
use charging_prices_core::models::rates::ExchangeRateTable;
use charging_prices_core::models::record::{PriceRecord, Subscription};
use charging_prices_core::models::settings::{Settings, DEFAULT_CACHE_TTL_SECS};

// ═══════════════════════════════════════════════════════════════════
// CurrencyCode: symbol resolution
// ═══════════════════════════════════════════════════════════════════

mod currency_code {
    use super::*;

    #[test]
    fn euro_symbol_resolves_to_reference() {
        assert_eq!(CurrencyCode::resolve("€"), CurrencyCode::reference());
    }

    #[test]
    fn reference_code_is_case_insensitive() {
        assert_eq!(CurrencyCode::resolve("eur").as_str(), REFERENCE_CODE);
        assert_eq!(CurrencyCode::resolve("Eur").as_str(), REFERENCE_CODE);
        assert_eq!(CurrencyCode::resolve("EUR").as_str(), REFERENCE_CODE);
    }

    #[test]
    fn padded_pound_sign() {
        assert_eq!(CurrencyCode::resolve("  £ ").as_str(), "GBP");
    }

    #[test]
    fn dollar_sign() {
        assert_eq!(CurrencyCode::resolve("$").as_str(), "USD");
    }

    #[test]
    fn kr_is_swedish_krona_not_kr() {
        assert_eq!(CurrencyCode::resolve("kr").as_str(), "SEK");
        assert_eq!(CurrencyCode::resolve(" kr\t").as_str(), "SEK");
    }

    #[test]
    fn unknown_label_is_uppercased() {
        assert_eq!(CurrencyCode::resolve("XYZ").as_str(), "XYZ");
        assert_eq!(CurrencyCode::resolve(" chf ").as_str(), "CHF");
    }

    #[test]
    fn empty_label_never_panics() {
        let code = CurrencyCode::resolve("   ");
        assert_eq!(code.as_str(), "");
        assert!(!code.is_reference());
    }

    #[test]
    fn is_reference() {
        assert!(CurrencyCode::reference().is_reference());
        assert!(!CurrencyCode::resolve("GBP").is_reference());
    }

    #[test]
    fn display() {
        assert_eq!(CurrencyCode::resolve("£").to_string(), "GBP");
    }
}

// ═══════════════════════════════════════════════════════════════════
// PriceRecord: deserialization and subscriptions
// ═══════════════════════════════════════════════════════════════════

mod price_record {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "id": "a1",
            "country": "Austria",
            "currency": "€",
            "provider": "Ionity",
            "name": "Passport",
            "price_kWh": 0.39,
            "monthly_price": 5.99,
            "yearly_price": null
        }"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "a1");
        assert_eq!(record.country, "Austria");
        assert_eq!(record.price_kwh, 0.39);
        assert_eq!(record.monthly_price, Some(5.99));
        assert_eq!(record.yearly_price, None);
    }

    #[test]
    fn numeric_id_becomes_string() {
        let json = r#"{"id": 42, "country": "Norway", "currency": "NOK",
            "provider": "Tesla", "name": "Flex", "price_kWh": 3.2}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "42");
    }

    #[test]
    fn subscription_fields_default_to_none() {
        let json = r#"{"id": "x", "country": "Sweden", "currency": "kr",
            "provider": "Circle K", "name": "Go", "price_kWh": 4.5}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.subscription(), Subscription::None);
    }

    #[test]
    fn model_alias_for_plan_name() {
        let json = r#"{"id": "x", "country": "Sweden", "currency": "kr",
            "provider": "Circle K", "model": "Go", "price_kWh": 4.5}"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Go");
    }

    #[test]
    fn missing_price_is_rejected() {
        let json = r#"{"id": "x", "country": "Sweden", "currency": "kr",
            "provider": "Circle K", "name": "Go"}"#;
        assert!(serde_json::from_str::<PriceRecord>(json).is_err());
    }

    #[test]
    fn serialize_uses_api_price_key() {
        let record = PriceRecord::new("1", "Austria", "€", "Ionity", "Passport", 0.39);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"price_kWh\":0.39"));
    }

    #[test]
    fn subscription_monthly_only() {
        let record = PriceRecord::new("1", "A", "€", "P", "N", 0.3).with_monthly_price(4.0);
        assert_eq!(record.subscription(), Subscription::Monthly(4.0));
    }

    #[test]
    fn subscription_yearly_only() {
        let record = PriceRecord::new("1", "A", "€", "P", "N", 0.3).with_yearly_price(40.0);
        assert_eq!(record.subscription(), Subscription::Yearly(40.0));
    }

    #[test]
    fn subscription_both_is_not_none() {
        let record = PriceRecord::new("1", "A", "€", "P", "N", 0.3)
            .with_monthly_price(4.0)
            .with_yearly_price(40.0);
        let sub = record.subscription();
        assert_eq!(
            sub,
            Subscription::Both {
                monthly: 4.0,
                yearly: 40.0
            }
        );
        assert!(!sub.is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
// ExchangeRateTable
// ═══════════════════════════════════════════════════════════════════

mod exchange_rate_table {
    use super::*;

    #[test]
    fn deserializes_from_plain_map() {
        let table: ExchangeRateTable =
            serde_json::from_str(r#"{"CHF": 0.95, "GBP": 0.85}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rate_for(&CurrencyCode::resolve("CHF")), Some(0.95));
    }

    #[test]
    fn zero_and_nan_rates_are_absent() {
        let table: ExchangeRateTable = [("ZERO", 0.0), ("NAN", f64::NAN)].into_iter().collect();
        for code in ["ZERO", "NAN"] {
            assert!(!table.contains(&CurrencyCode::resolve(code)), "{code}");
        }
    }

    #[test]
    fn other_nonzero_rates_are_kept() {
        let table: ExchangeRateTable = [("NEG", -2.0), ("INF", f64::INFINITY)]
            .into_iter()
            .collect();
        assert_eq!(table.rate_for(&CurrencyCode::resolve("NEG")), Some(-2.0));
        assert_eq!(table.rate_for(&CurrencyCode::resolve("INF")), Some(f64::INFINITY));
    }

    #[test]
    fn from_hashmap() {
        let mut map = HashMap::new();
        map.insert("SEK".to_string(), 11.2);
        let table = ExchangeRateTable::from(map);
        assert!(table.contains(&CurrencyCode::resolve("kr")));
    }

    #[test]
    fn empty() {
        let table = ExchangeRateTable::new();
        assert!(table.is_empty());
        assert_eq!(table.rate_for(&CurrencyCode::resolve("USD")), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// HouseholdPriceTable & ParseReport
// ═══════════════════════════════════════════════════════════════════

mod household_table {
    use super::*;

    #[test]
    fn insert_overwrites() {
        let mut table = HouseholdPriceTable::new();
        table.insert("France", 0.20);
        table.insert("France", 0.25);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("France"), Some(0.25));
    }

    #[test]
    fn countries_sorted() {
        let mut table = HouseholdPriceTable::new();
        table.insert("Spain", 0.2);
        table.insert("Austria", 0.3);
        assert_eq!(table.countries(), vec!["Austria", "Spain"]);
    }

    #[test]
    fn report_skipped_sum() {
        let report = ParseReport {
            accepted: 3,
            too_short: 1,
            aggregates: 2,
            invalid_price: 4,
        };
        assert_eq!(report.skipped(), 7);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
        assert!(settings.household_dataset_url.is_none());
    }

    #[test]
    fn from_json_partial() {
        let settings = Settings::from_json(
            r#"{
                "household_dataset_url": "https://example.org/household.csv",
                "cache_ttl_secs": 60
            }"#,
        )
        .unwrap();
        assert_eq!(settings.cache_ttl_secs, 60);
        assert_eq!(
            settings.household_dataset_url.as_deref(),
            Some("https://example.org/household.csv")
        );
        assert_eq!(settings.price_records_url, Settings::default().price_records_url);
    }

    #[test]
    fn from_json_empty_object() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn from_json_malformed() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn zero_ttl_rejected() {
        let err = Settings::from_json(r#"{"cache_ttl_secs": 0}"#).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn empty_urls_rejected() {
        let settings = Settings {
            price_records_url: "  ".into(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(CoreError::ValidationError(_))));

        let settings = Settings {
            household_dataset_url: Some(String::new()),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn cache_ttl_duration() {
        let settings = Settings {
            cache_ttl_secs: 90,
            ..Settings::default()
        };
        assert_eq!(settings.cache_ttl(), Duration::seconds(90));
    }

    #[test]
    fn huge_ttl_saturates() {
        let settings = Settings {
            cache_ttl_secs: u64::MAX,
            ..Settings::default()
        };
        assert_eq!(settings.cache_ttl(), Duration::MAX);
    }
}

// ═══════════════════════════════════════════════════════════════════
// QueryCache
// ═══════════════════════════════════════════════════════════════════

mod query_cache {
    use super::*;

    fn sample_data() -> DashboardData {
        DashboardData {
            records: vec![PriceRecord::new("1", "Austria", "€", "Ionity", "Passport", 0.39)],
            rates: ExchangeRateTable::new(),
            household: None,
        }
    }

    #[test]
    fn starts_empty() {
        let cache = QueryCache::new(Duration::minutes(5));
        assert!(cache.get().is_none());
        assert!(!cache.is_fresh(Utc::now()));
        assert!(cache.fetched_at().is_none());
    }

    #[test]
    fn fresh_within_ttl() {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let mut cache = QueryCache::new(Duration::minutes(5));
        cache.store(sample_data(), t0);

        assert!(cache.is_fresh(t0));
        assert!(cache.is_fresh(t0 + Duration::minutes(5)));
        assert_eq!(cache.get_fresh(t0 + Duration::minutes(1)), Some(&sample_data()));
    }

    #[test]
    fn stale_after_ttl_but_still_readable() {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let mut cache = QueryCache::new(Duration::minutes(5));
        cache.store(sample_data(), t0);

        let later = t0 + Duration::minutes(6);
        assert!(!cache.is_fresh(later));
        assert!(cache.get_fresh(later).is_none());
        assert!(cache.get().is_some());
    }

    #[test]
    fn invalidate_clears() {
        let mut cache = QueryCache::new(Duration::minutes(5));
        cache.store(sample_data(), Utc::now());
        cache.invalidate();
        assert!(cache.get().is_none());
        assert!(!cache.is_fresh(Utc::now()));
    }

    #[test]
    fn store_replaces_wholesale() {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let mut cache = QueryCache::new(Duration::minutes(5));
        cache.store(sample_data(), t0);
        cache.store(DashboardData::default(), t0 + Duration::minutes(1));

        assert!(cache.get().unwrap().records.is_empty());
        assert_eq!(cache.fetched_at(), Some(t0 + Duration::minutes(1)));
    }
}
