use serde::{Deserialize, Serialize};

/// One row of the exchange-rate listing served by the exchange gateway.
///
/// The wire shape is camelCase JSON:
/// `{"currency": "USD", "buyRate": 1.23, "sellRate": 1.24}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// Currency code as displayed, e.g. "USD".
    pub currency: String,
    /// Rate at which the bank buys the currency.
    pub buy_rate: f64,
    /// Rate at which the bank sells the currency.
    pub sell_rate: f64,
}
