//! Localized message strings injected by the rendering layer.
//!
//! The server puts translated strings on `document.body` as data-attributes;
//! they are resolved here once into a plain struct so the rest of the crate
//! never touches attribute lookup. Every string has an English default for
//! pages rendered without the attributes.

use std::sync::OnceLock;

use web_sys::Document;

pub const MODAL_CANCEL_DEFAULT: &str = "Cancel";
pub const MODAL_CONFIRM_DEFAULT: &str = "Confirm";
pub const MODAL_DELETE_DEFAULT: &str = "Are you sure you want to delete this item?";
pub const TRANSFER_SAME_ACCOUNT_DEFAULT: &str = "Cannot transfer to the same account";
pub const AMOUNT_POSITIVE_DEFAULT: &str = "Amount must be positive";
pub const AGE_MESSAGE_DEFAULT: &str = "You must be at least 18 years old to register.";

/// Message strings resolved from the page, with built-in fallbacks.
#[derive(Clone, Debug, PartialEq)]
pub struct UiMessages {
    pub modal_cancel: String,
    pub modal_confirm: String,
    pub modal_delete: String,
    pub transfer_same_account: String,
    pub amount_positive: String,
}

impl Default for UiMessages {
    fn default() -> Self {
        Self {
            modal_cancel: MODAL_CANCEL_DEFAULT.to_string(),
            modal_confirm: MODAL_CONFIRM_DEFAULT.to_string(),
            modal_delete: MODAL_DELETE_DEFAULT.to_string(),
            transfer_same_account: TRANSFER_SAME_ACCOUNT_DEFAULT.to_string(),
            amount_positive: AMOUNT_POSITIVE_DEFAULT.to_string(),
        }
    }
}

impl UiMessages {
    /// Read the message attributes off `document.body`. An absent or empty
    /// attribute falls back to the English default, matching what the pages
    /// rendered before localization was introduced.
    pub fn from_document(document: &Document) -> Self {
        let Some(body) = document.body() else {
            return Self::default();
        };
        let attr = |name: &str, fallback: &str| {
            body.get_attribute(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            modal_cancel: attr("data-modal-cancel", MODAL_CANCEL_DEFAULT),
            modal_confirm: attr("data-modal-confirm", MODAL_CONFIRM_DEFAULT),
            modal_delete: attr("data-modal-delete", MODAL_DELETE_DEFAULT),
            transfer_same_account: attr("data-transfer-same-account", TRANSFER_SAME_ACCOUNT_DEFAULT),
            amount_positive: attr("data-amount-positive", AMOUNT_POSITIVE_DEFAULT),
        }
    }
}

static MESSAGES: OnceLock<UiMessages> = OnceLock::new();

/// Process-wide messages, resolved from the page on first access. The page
/// markup is static once rendered, so a single resolution is enough.
pub fn messages() -> UiMessages {
    MESSAGES
        .get_or_init(|| {
            web_sys::window()
                .and_then(|window| window.document())
                .map(|document| UiMessages::from_document(&document))
                .unwrap_or_default()
        })
        .clone()
}
