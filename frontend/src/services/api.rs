use gloo::net::http::Request;
use shared::ExchangeRate;

/// Client for the gateway endpoints the enhancement layer consumes.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client against the page's own origin.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the current exchange-rate listing.
    pub async fn exchange_rates(&self) -> Result<Vec<ExchangeRate>, String> {
        let url = format!("{}/api/exchange/rates", self.base_url);
        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Vec<ExchangeRate>>().await {
                Ok(rates) => Ok(rates),
                Err(e) => Err(format!("Failed to parse exchange rates: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch exchange rates: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
