//! Client-side enhancements for the server-rendered banking pages.
//!
//! The pages themselves are produced by the frontend service; this crate is
//! loaded alongside them and wires transient UI behavior onto the rendered
//! markup: toast notifications, the confirm-before-submit modal, the form
//! guards, and the exchange-rate auto-refresh. Everything is keyed off
//! element ids and data-attributes, so a page that lacks a given piece of
//! markup simply doesn't get that enhancement.

pub mod components;
pub mod config;
pub mod flash;
pub mod guards;
pub mod rates;
pub mod services;

use wasm_bindgen::prelude::*;

use components::confirm_modal;
use components::toast::{self, ToastKind};
use services::logging::Logger;

#[wasm_bindgen(start)]
pub fn run() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        Logger::error_with_component("startup", "no document available, enhancements disabled");
        return;
    };

    flash::render_flash_messages();
    guards::wire_all(&document);
    rates::start_rate_refresh(&document);
}

/// Show a toast notification. Exposed so inline page handlers can reuse the
/// same toast pipeline as the built-in guards.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: String, kind: Option<String>, duration_ms: Option<u32>) {
    let kind = kind.as_deref().map(ToastKind::from_name).unwrap_or(ToastKind::Info);
    toast::notify(&message, kind, duration_ms.unwrap_or(toast::DEFAULT_DURATION_MS));
}

/// Open the confirm modal and resolve to the user's choice.
#[wasm_bindgen(js_name = showConfirmModal)]
pub async fn show_confirm_modal(message: Option<String>) -> bool {
    confirm_modal::confirm(message.as_deref().unwrap_or_default()).await
}

/// Open the confirm modal with the localized delete prompt as fallback.
#[wasm_bindgen(js_name = confirmDelete)]
pub async fn confirm_delete(message: Option<String>) -> bool {
    confirm_modal::confirm_delete(message).await
}

/// Validate that a numeric input holds a positive amount, clearing it and
/// notifying the user otherwise. Returns whether the value was valid.
#[wasm_bindgen(js_name = validateAmount)]
pub fn validate_amount(input: web_sys::HtmlInputElement) -> bool {
    guards::amount::validate_amount(&input)
}
