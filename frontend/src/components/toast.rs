//! Transient toast notifications.
//!
//! Toasts live in a single `#toast-container` element created under
//! `document.body` the first time one is shown and kept for the page
//! lifetime. Each toast is independent: it fades in on the next paint
//! frame, stays for its duration, fades out, and detaches itself.

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

const CONTAINER_ID: &str = "toast-container";
/// How long a toast stays fully visible unless the caller says otherwise.
pub const DEFAULT_DURATION_MS: u32 = 4_000;
/// Grace period between the hide transition and detaching the element.
const HIDE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
    Success,
}

impl ToastKind {
    /// Map a kind name coming from page script; anything unknown renders
    /// as info rather than erroring.
    pub fn from_name(name: &str) -> Self {
        match name {
            "error" => ToastKind::Error,
            "success" => ToastKind::Success,
            _ => ToastKind::Info,
        }
    }

    fn css_suffix(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Error => "error",
            ToastKind::Success => "success",
        }
    }
}

/// Show a toast. Fire-and-forget: an empty message, a missing document or a
/// failed DOM call all degrade to doing nothing.
pub fn notify(message: &str, kind: ToastKind, duration_ms: u32) {
    if message.is_empty() {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(container) = container(&document) else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(&format!("toast toast-{}", kind.css_suffix()));
    toast.set_text_content(Some(message));
    if container.append_child(&toast).is_err() {
        return;
    }

    // The show transition only animates if the class lands after the
    // element has been painted once, hence the frame callback.
    {
        let toast = toast.clone();
        let on_frame = Closure::once(move |_timestamp: f64| {
            let _ = toast.class_list().add_1("show");
        });
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(on_frame.as_ref().unchecked_ref());
        }
        on_frame.forget();
    }

    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        let _ = toast.class_list().remove_1("show");
        TimeoutFuture::new(HIDE_DELAY_MS).await;
        toast.remove();
    });
}

/// The process-wide toast container, created on first use.
fn container(document: &Document) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id(CONTAINER_ID) {
        return Some(existing);
    }
    let container = document.create_element("div").ok()?;
    container.set_id(CONTAINER_ID);
    container.set_class_name("toast-container");
    document.body()?.append_child(&container).ok()?;
    Some(container)
}
