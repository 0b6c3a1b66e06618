use web_sys::HtmlInputElement;

use crate::components::toast::{self, ToastKind};
use crate::config;

/// Check that `input` holds a positive amount. Anything else — not a
/// number, zero, negative — clears the field and raises an error toast.
/// Returns whether the value was valid so callers can gate further action.
pub fn validate_amount(input: &HtmlInputElement) -> bool {
    let valid = matches!(input.value().trim().parse::<f64>(), Ok(value) if value > 0.0);
    if !valid {
        toast::notify(
            &config::messages().amount_positive,
            ToastKind::Error,
            toast::DEFAULT_DURATION_MS,
        );
        input.set_value("");
    }
    valid
}
