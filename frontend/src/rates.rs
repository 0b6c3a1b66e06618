//! Auto-refresh for the exchange-rate table.

use gloo::timers::callback::Interval;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use shared::ExchangeRate;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const TABLE_BODY_SELECTOR: &str = ".exchange-rates table tbody";
const POLL_INTERVAL_MS: u32 = 5_000;
const RATE_DECIMALS: usize = 2;
const COMPONENT: &str = "exchange-rates";

/// Keep the exchange-rate table fresh. Does nothing on pages without the
/// table; otherwise re-fetches every five seconds for as long as the page
/// lives. A failed refresh keeps the current rows and is retried on the
/// next tick; a slow response may be overwritten by a later tick's.
pub fn start_rate_refresh(document: &Document) {
    let tbody = match document.query_selector(TABLE_BODY_SELECTOR) {
        Ok(Some(element)) => element,
        _ => return,
    };
    let client = ApiClient::new();
    Interval::new(POLL_INTERVAL_MS, move || {
        let client = client.clone();
        let tbody = tbody.clone();
        spawn_local(async move {
            match client.exchange_rates().await {
                Ok(rates) => {
                    if let Err(error) = render_rates(&tbody, &rates) {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("failed to render rates: {:?}", error),
                        );
                    }
                }
                Err(error) => Logger::error_with_component(COMPONENT, &error),
            }
        });
    })
    .forget();
}

/// Replace the table body with one row per rate, in response order.
pub fn render_rates(tbody: &Element, rates: &[ExchangeRate]) -> Result<(), JsValue> {
    let document = tbody
        .owner_document()
        .ok_or_else(|| JsValue::from_str("table body has no document"))?;
    tbody.set_inner_html("");
    for rate in rates {
        let row = document.create_element("tr")?;
        for text in [
            rate.currency.clone(),
            format!("{:.prec$}", rate.buy_rate, prec = RATE_DECIMALS),
            format!("{:.prec$}", rate.sell_rate, prec = RATE_DECIMALS),
        ] {
            let cell = document.create_element("td")?;
            cell.set_text_content(Some(&text));
            row.append_child(&cell)?;
        }
        tbody.append_child(&row)?;
    }
    Ok(())
}
