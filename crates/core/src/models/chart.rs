use serde::{Deserialize, Serialize};

/// A single bar for plan-comparison chart rendering.
///
/// The core generates these; the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Axis label, e.g. "Austria (Ionity)"
    pub label: String,

    pub country: String,

    pub provider: String,

    /// Price per kWh in the reference currency
    pub value: f64,

    /// Household price for the same country, drawn as a reference marker
    pub household_value: Option<f64>,

    /// False when `value` is an unconverted fallback amount
    pub accurate: bool,
}
