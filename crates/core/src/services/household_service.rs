use crate::models::household::{HouseholdPriceTable, ParseReport};

/// Index of the country-name column (0-based).
const COUNTRY_FIELD: usize = 8;

/// Index of the price column (0-based).
const PRICE_FIELD: usize = 10;

/// Rows need at least this many fields to reach the price column.
const MIN_FIELDS: usize = PRICE_FIELD + 1;

/// Substrings marking aggregate regions rather than countries.
const AGGREGATE_MARKERS: &[&str] = &["Euro area", "European Union"];

/// Dataset country name → name used by the price records.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("Czechia", "Czech Republic"),
    ("North Macedonia", "Macedonia"),
];

/// Loads the household electricity price dataset (comma-separated, quoted
/// fields, one header line) into a country → price lookup.
///
/// Malformed rows are dropped without failing the load. `parse_with_report`
/// tells how many.
pub struct HouseholdService;

impl HouseholdService {
    pub fn new() -> Self {
        Self
    }

    /// Parse the raw dataset text into a country → EUR/kWh table.
    pub fn parse(&self, raw_text: &str) -> HouseholdPriceTable {
        self.parse_with_report(raw_text).0
    }

    /// Parse the dataset and count accepted and skipped rows.
    pub fn parse_with_report(&self, raw_text: &str) -> (HouseholdPriceTable, ParseReport) {
        let mut table = HouseholdPriceTable::new();
        let mut report = ParseReport::default();

        for (line_no, line) in raw_text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_fields(line);
            if fields.len() < MIN_FIELDS {
                tracing::debug!(line = line_no + 1, fields = fields.len(), "Skipping short row");
                report.too_short += 1;
                continue;
            }

            let country = fields[COUNTRY_FIELD].trim();
            if AGGREGATE_MARKERS.iter().any(|m| country.contains(m)) {
                report.aggregates += 1;
                continue;
            }

            let price = match parse_price(&fields[PRICE_FIELD]) {
                Some(price) => price,
                None => {
                    tracing::debug!(
                        line = line_no + 1,
                        country,
                        value = %fields[PRICE_FIELD],
                        "Skipping row with invalid price"
                    );
                    report.invalid_price += 1;
                    continue;
                }
            };

            table.insert(resolve_alias(country), price);
            report.accepted += 1;
        }

        (table, report)
    }

    /// Read and parse a dataset file from disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<HouseholdPriceTable, crate::errors::CoreError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(self.parse(&raw))
    }
}

impl Default for HouseholdService {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a line on commas outside double quotes. Quote characters toggle
/// the quoted state and are dropped from the field value.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Accept only finite, strictly positive prices.
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

fn resolve_alias(country: &str) -> &str {
    COUNTRY_ALIASES
        .iter()
        .find(|(from, _)| *from == country)
        .map_or(country, |(_, to)| *to)
}

