use serde::{Deserialize, Deserializer, Serialize};

/// One offered charging plan, as returned by the price-records endpoint.
///
/// Records are immutable for the lifetime of a session; a refresh replaces
/// the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Opaque identifier. The API sends it as either a string or a number.
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub id: String,

    pub country: String,

    /// Raw currency label: a symbol ("€", "£", "kr") or an ISO code, free-form.
    pub currency: String,

    pub provider: String,

    /// Plan name (e.g., "Flex", "Premium").
    #[serde(alias = "model")]
    pub name: String,

    /// Price per kWh in the record's own currency.
    #[serde(rename = "price_kWh")]
    pub price_kwh: f64,

    #[serde(default)]
    pub monthly_price: Option<f64>,

    #[serde(default)]
    pub yearly_price: Option<f64>,
}

/// The subscription tiers a plan carries next to its per-kWh price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Subscription {
    None,
    Monthly(f64),
    Yearly(f64),
    Both { monthly: f64, yearly: f64 },
}

impl Subscription {
    pub fn is_none(&self) -> bool {
        matches!(self, Subscription::None)
    }
}

impl PriceRecord {
    pub fn new(
        id: impl Into<String>,
        country: impl Into<String>,
        currency: impl Into<String>,
        provider: impl Into<String>,
        name: impl Into<String>,
        price_kwh: f64,
    ) -> Self {
        Self {
            id: id.into(),
            country: country.into(),
            currency: currency.into(),
            provider: provider.into(),
            name: name.into(),
            price_kwh,
            monthly_price: None,
            yearly_price: None,
        }
    }

    pub fn with_monthly_price(mut self, price: f64) -> Self {
        self.monthly_price = Some(price);
        self
    }

    pub fn with_yearly_price(mut self, price: f64) -> Self {
        self.yearly_price = Some(price);
        self
    }

    /// Which subscription tiers this plan offers. Both fields set is a
    /// distinct case, not "no subscription".
    pub fn subscription(&self) -> Subscription {
        match (self.monthly_price, self.yearly_price) {
            (None, None) => Subscription::None,
            (Some(monthly), None) => Subscription::Monthly(monthly),
            (None, Some(yearly)) => Subscription::Yearly(yearly),
            (Some(monthly), Some(yearly)) => Subscription::Both { monthly, yearly },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OpaqueId {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OpaqueId::deserialize(deserializer)? {
        OpaqueId::Text(s) => s,
        OpaqueId::Integer(n) => n.to_string(),
        OpaqueId::Float(n) => n.to_string(),
    })
}
