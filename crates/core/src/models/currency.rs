use serde::{Deserialize, Serialize};

/// ISO-4217 code of the reference currency every amount is normalized into.
pub const REFERENCE_CODE: &str = "EUR";

/// Display symbol of the reference currency.
pub const REFERENCE_SYMBOL: &str = "€";

/// Known currency symbols → ISO code.
///
/// Checked before the upper-case fallback: `kr` is not an ISO code and must
/// never turn into `KR`.
const SYMBOL_TABLE: &[(&str, &str)] = &[
    ("€", REFERENCE_CODE),
    ("£", "GBP"),
    ("$", "USD"),
    ("kr", "SEK"),
];

/// A resolved currency code, usable as a key into an exchange-rate table.
///
/// Resolution never fails, so a code is not guaranteed to exist in any
/// rate table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The reference currency code (EUR).
    pub fn reference() -> Self {
        Self(REFERENCE_CODE.to_string())
    }

    /// Resolve a raw currency label (symbol or code, possibly padded) to a code.
    ///
    /// - `"€"`, `"EUR"`, `" eur "` → `EUR`
    /// - `"£"` → `GBP`, `"$"` → `USD`, `"kr"` → `SEK`
    /// - anything else → trimmed and upper-cased (`"chf"` → `CHF`)
    pub fn resolve(raw_label: &str) -> Self {
        let trimmed = raw_label.trim();

        if trimmed.eq_ignore_ascii_case(REFERENCE_CODE) || trimmed == REFERENCE_SYMBOL {
            return Self::reference();
        }

        if let Some((_, code)) = SYMBOL_TABLE.iter().find(|(symbol, _)| *symbol == trimmed) {
            return Self((*code).to_string());
        }

        Self(trimmed.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this code is the reference currency (no conversion needed).
    pub fn is_reference(&self) -> bool {
        self.0 == REFERENCE_CODE
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
