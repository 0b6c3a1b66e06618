//! The confirm-before-submit modal.
//!
//! At most one modal exists at a time; opening a new one removes whatever
//! was still waiting. The user's choice comes back through a single-use
//! deferred: the overlay is torn down first, then the future resolves.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures_channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config;

const MODAL_ID: &str = "confirm-modal";
const DEFAULT_PROMPT: &str = "Are you sure?";

/// Put up the modal for `prompt` and resolve to the user's choice: `false`
/// for Cancel, `true` for Confirm. The modal appears before this returns;
/// only the choice is awaited. The future never errors — if the page has no
/// usable document it resolves `false`, and if the user navigates away it
/// simply never settles.
pub fn confirm(prompt: &str) -> impl Future<Output = bool> {
    let receiver = open(prompt);
    async move {
        match receiver {
            Some(receiver) => receiver.await.unwrap_or(false),
            None => false,
        }
    }
}

/// Like [`confirm`], with the localized delete prompt as fallback when the
/// caller has none of its own.
pub fn confirm_delete(prompt: Option<String>) -> impl Future<Output = bool> {
    let prompt = prompt
        .filter(|prompt| !prompt.is_empty())
        .unwrap_or_else(|| config::messages().modal_delete);
    confirm(&prompt)
}

fn open(prompt: &str) -> Option<oneshot::Receiver<bool>> {
    let document = web_sys::window()?.document()?;
    if let Some(existing) = document.get_element_by_id(MODAL_ID) {
        existing.remove();
    }

    let messages = config::messages();
    let prompt = if prompt.is_empty() { DEFAULT_PROMPT } else { prompt };

    let overlay = document.create_element("div").ok()?;
    overlay.set_id(MODAL_ID);
    overlay.set_class_name("modal-overlay");

    let modal = document.create_element("div").ok()?;
    modal.set_class_name("modal");

    let message = document.create_element("p").ok()?;
    message.set_class_name("modal-message");
    message.set_text_content(Some(prompt));
    modal.append_child(&message).ok()?;

    let actions = document.create_element("div").ok()?;
    actions.set_class_name("modal-actions");
    let cancel_button = button(&document, "modal-cancel", "btn btn-secondary", &messages.modal_cancel)?;
    let confirm_button = button(&document, "modal-confirm", "btn btn-primary", &messages.modal_confirm)?;
    actions.append_child(&cancel_button).ok()?;
    actions.append_child(&confirm_button).ok()?;
    modal.append_child(&actions).ok()?;
    overlay.append_child(&modal).ok()?;
    document.body()?.append_child(&overlay).ok()?;

    let (sender, receiver) = oneshot::channel();
    let sender = Rc::new(RefCell::new(Some(sender)));
    for (element, choice) in [(cancel_button, false), (confirm_button, true)] {
        let overlay = overlay.clone();
        let sender = Rc::clone(&sender);
        let on_click = Closure::<dyn FnMut()>::new(move || {
            // Tear the overlay down before the deferred settles.
            overlay.remove();
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(choice);
            }
        });
        element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .ok()?;
        on_click.forget();
    }

    Some(receiver)
}

fn button(document: &Document, id: &str, class: &str, label: &str) -> Option<Element> {
    let button = document.create_element("button").ok()?;
    button.set_attribute("type", "button").ok()?;
    button.set_id(id);
    button.set_class_name(class);
    button.set_text_content(Some(label));
    Some(button)
}
