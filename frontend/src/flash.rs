//! Flash messages handed over by the rendering layer.
//!
//! The server leaves one-shot messages on a global `window.app` object as
//! `flashErrors` / `flashSuccess` string arrays. They are rendered as
//! toasts once at startup and not consulted again.

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;

use crate::components::toast::{self, ToastKind};

const ERROR_DURATION_MS: u32 = 6_000;
const SUCCESS_DURATION_MS: u32 = 4_000;

pub fn render_flash_messages() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let window_object: &JsValue = window.as_ref();
    let Ok(app) = Reflect::get(window_object, &JsValue::from_str("app")) else {
        return;
    };
    if app.is_undefined() || app.is_null() {
        return;
    }
    render_list(&app, "flashErrors", ToastKind::Error, ERROR_DURATION_MS);
    render_list(&app, "flashSuccess", ToastKind::Success, SUCCESS_DURATION_MS);
}

fn render_list(app: &JsValue, key: &str, kind: ToastKind, duration_ms: u32) {
    let Ok(value) = Reflect::get(app, &JsValue::from_str(key)) else {
        return;
    };
    if !Array::is_array(&value) {
        return;
    }
    for entry in Array::from(&value).iter() {
        if let Some(message) = entry.as_string() {
            toast::notify(&message, kind, duration_ms);
        }
    }
}
