use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

use crate::components::toast::{self, ToastKind};
use crate::config;
use crate::services::date_utils;

const MINIMUM_AGE: i32 = 18;

/// Block registration submissions from users under 18. Age is counted in
/// calendar years and flips on the birthday itself, not after a multiple of
/// 365 days. An unparseable birth date counts as under-age.
pub fn wire(document: &Document) {
    let Some(form) = document.get_element_by_id("registerForm") else {
        return;
    };
    let Some(birth_date) = document
        .get_element_by_id("birthDate")
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let message = form
        .get_attribute("data-age-message")
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| config::AGE_MESSAGE_DEFAULT.to_string());

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let age = date_utils::parse_date_input(&birth_date.value())
            .zip(date_utils::today())
            .map(|(birth, today)| date_utils::age_on(birth, today));
        if age.map_or(true, |age| age < MINIMUM_AGE) {
            event.prevent_default();
            toast::notify(&message, ToastKind::Error, toast::DEFAULT_DURATION_MS);
        }
    });
    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
}
