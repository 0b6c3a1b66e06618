use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlFormElement};

use crate::components::confirm_modal;

const PENDING_ATTR: &str = "data-confirm-pending";

/// Gate every `form[data-confirm]` behind the confirm modal. A submit is
/// cancelled while the user decides; confirming re-submits with a pending
/// marker that lets exactly that one submission through, after which the
/// form is back to being intercepted.
pub fn wire(document: &Document) {
    let Ok(forms) = document.query_selector_all("form[data-confirm]") else {
        return;
    };
    for index in 0..forms.length() {
        if let Some(form) = forms
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlFormElement>().ok())
        {
            wire_form(form);
        }
    }
}

fn wire_form(form: HtmlFormElement) {
    let target = form.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if target.get_attribute(PENDING_ATTR).as_deref() == Some("true") {
            // The confirmed re-submission: consume the marker, let it pass.
            let _ = target.remove_attribute(PENDING_ATTR);
            return;
        }
        event.prevent_default();
        let prompt = target.get_attribute("data-confirm").unwrap_or_default();
        let choice = confirm_modal::confirm(&prompt);
        let form = target.clone();
        spawn_local(async move {
            if choice.await {
                let _ = form.set_attribute(PENDING_ATTR, "true");
                let _ = form.request_submit();
            }
        });
    });
    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
}
