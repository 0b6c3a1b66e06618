use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::components::toast::{self, ToastKind};
use crate::config;

/// Stop transfers between an account and itself: whenever either selector
/// changes and both hold the same non-placeholder account, the destination
/// is cleared and the user told why.
pub fn wire_same_account(document: &Document) {
    let (Some(from), Some(to)) = (
        select_by_id(document, "fromAccount"),
        select_by_id(document, "toAccount"),
    ) else {
        return;
    };
    let message = config::messages().transfer_same_account;

    for selector in [&from, &to] {
        let from = from.clone();
        let to = to.clone();
        let message = message.clone();
        let on_change = Closure::<dyn FnMut()>::new(move || {
            let from_value = from.value();
            if !from_value.is_empty() && from_value == to.value() {
                toast::notify(&message, ToastKind::Error, toast::DEFAULT_DURATION_MS);
                to.set_value("");
            }
        });
        let _ = selector.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        on_change.forget();
    }
}

/// Keep exactly one of the two recipient input groups (email vs. account
/// id) visible and required. The deselected side loses its requirement and
/// its value, so a stale hidden field can't ride along in the submission.
pub fn wire_recipient_toggle(document: &Document) {
    let (Some(email_radio), Some(account_radio)) = (
        input_by_id(document, "recipientTypeEmail"),
        input_by_id(document, "recipientTypeAccountId"),
    ) else {
        return;
    };
    let (Some(email_group), Some(account_group)) = (
        html_by_id(document, "emailGroup"),
        html_by_id(document, "accountIdGroup"),
    ) else {
        return;
    };
    let (Some(email_input), Some(account_input)) = (
        input_by_id(document, "recipientEmail"),
        input_by_id(document, "recipientBankAccountId"),
    ) else {
        return;
    };

    wire_choice(
        &email_radio,
        email_group.clone(),
        account_group.clone(),
        email_input.clone(),
        account_input.clone(),
    );
    wire_choice(&account_radio, account_group, email_group, account_input, email_input);
}

fn wire_choice(
    radio: &HtmlInputElement,
    show_group: HtmlElement,
    hide_group: HtmlElement,
    require_input: HtmlInputElement,
    release_input: HtmlInputElement,
) {
    let state = radio.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        if !state.checked() {
            return;
        }
        let _ = show_group.style().set_property("display", "block");
        let _ = hide_group.style().set_property("display", "none");
        require_input.set_required(true);
        release_input.set_required(false);
        release_input.set_value("");
    });
    let _ = radio.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();
}

fn select_by_id(document: &Document, id: &str) -> Option<HtmlSelectElement> {
    document.get_element_by_id(id).and_then(|element| element.dyn_into().ok())
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document.get_element_by_id(id).and_then(|element| element.dyn_into().ok())
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(|element| element.dyn_into().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn toast_count() -> u32 {
        document()
            .get_element_by_id("toast-container")
            .map(|container| container.child_element_count())
            .unwrap_or(0)
    }

    fn change(target: &web_sys::EventTarget) {
        target.dispatch_event(&Event::new("change").unwrap()).unwrap();
    }

    fn mount_selects() -> (HtmlSelectElement, HtmlSelectElement) {
        let document = document();
        let body = document.body().unwrap();
        let mut selects = Vec::new();
        for id in ["fromAccount", "toAccount"] {
            let select: HtmlSelectElement = document.create_element("select").unwrap().unchecked_into();
            select.set_id(id);
            select.set_inner_html(
                "<option value=\"\"></option>\
                 <option value=\"acc-1\">Checking</option>\
                 <option value=\"acc-2\">Savings</option>",
            );
            body.append_child(&select).unwrap();
            selects.push(select);
        }
        let to = selects.pop().unwrap();
        let from = selects.pop().unwrap();
        (from, to)
    }

    #[wasm_bindgen_test]
    fn equal_accounts_are_rejected_from_either_side() {
        let (from, to) = mount_selects();
        wire_same_account(&document());

        from.set_value("acc-1");
        to.set_value("acc-1");
        let before = toast_count();
        change(&to);
        assert_eq!(to.value(), "");
        assert_eq!(toast_count(), before + 1);

        to.set_value("acc-1");
        change(&from);
        assert_eq!(to.value(), "");
        assert_eq!(toast_count(), before + 2);

        from.remove();
        to.remove();
    }

    #[wasm_bindgen_test]
    fn distinct_accounts_pass() {
        let (from, to) = mount_selects();
        wire_same_account(&document());

        from.set_value("acc-1");
        to.set_value("acc-2");
        let before = toast_count();
        change(&from);
        change(&to);
        assert_eq!(to.value(), "acc-2");
        assert_eq!(toast_count(), before);

        from.remove();
        to.remove();
    }

    #[wasm_bindgen_test]
    fn placeholder_on_both_sides_is_not_a_match() {
        let (from, to) = mount_selects();
        wire_same_account(&document());

        let before = toast_count();
        change(&from);
        change(&to);
        assert_eq!(toast_count(), before);

        from.remove();
        to.remove();
    }

    struct ToggleFixture {
        email_radio: HtmlInputElement,
        account_radio: HtmlInputElement,
        email_group: HtmlElement,
        account_group: HtmlElement,
        email_input: HtmlInputElement,
        account_input: HtmlInputElement,
    }

    impl ToggleFixture {
        fn remove(self) {
            self.email_radio.remove();
            self.account_radio.remove();
            self.email_group.remove();
            self.account_group.remove();
        }
    }

    fn mount_toggle() -> ToggleFixture {
        let document = document();
        let body = document.body().unwrap();

        let radio = |id: &str| -> HtmlInputElement {
            let input: HtmlInputElement = document.create_element("input").unwrap().unchecked_into();
            input.set_type("radio");
            input.set_name("recipientType");
            input.set_id(id);
            body.append_child(&input).unwrap();
            input
        };
        let group = |group_id: &str, input_id: &str| -> (HtmlElement, HtmlInputElement) {
            let group: HtmlElement = document.create_element("div").unwrap().unchecked_into();
            group.set_id(group_id);
            let input: HtmlInputElement = document.create_element("input").unwrap().unchecked_into();
            input.set_id(input_id);
            group.append_child(&input).unwrap();
            body.append_child(&group).unwrap();
            (group, input)
        };

        let email_radio = radio("recipientTypeEmail");
        let account_radio = radio("recipientTypeAccountId");
        let (email_group, email_input) = group("emailGroup", "recipientEmail");
        let (account_group, account_input) = group("accountIdGroup", "recipientBankAccountId");

        ToggleFixture {
            email_radio,
            account_radio,
            email_group,
            account_group,
            email_input,
            account_input,
        }
    }

    #[wasm_bindgen_test]
    fn toggle_leaves_exactly_one_group_active() {
        let fixture = mount_toggle();
        wire_recipient_toggle(&document());

        fixture.account_input.set_value("123456");
        fixture.email_radio.set_checked(true);
        fixture.account_radio.set_checked(false);
        change(&fixture.email_radio);

        assert_eq!(fixture.email_group.style().get_property_value("display").unwrap(), "block");
        assert_eq!(fixture.account_group.style().get_property_value("display").unwrap(), "none");
        assert!(fixture.email_input.required());
        assert!(!fixture.account_input.required());
        assert_eq!(fixture.account_input.value(), "");

        fixture.email_input.set_value("user@example.com");
        fixture.account_radio.set_checked(true);
        fixture.email_radio.set_checked(false);
        change(&fixture.account_radio);

        assert_eq!(fixture.account_group.style().get_property_value("display").unwrap(), "block");
        assert_eq!(fixture.email_group.style().get_property_value("display").unwrap(), "none");
        assert!(fixture.account_input.required());
        assert!(!fixture.email_input.required());
        assert_eq!(fixture.email_input.value(), "");

        fixture.remove();
    }

    #[wasm_bindgen_test]
    fn unchecked_radio_changes_nothing() {
        let fixture = mount_toggle();
        wire_recipient_toggle(&document());

        fixture.email_radio.set_checked(false);
        fixture.account_radio.set_checked(false);
        change(&fixture.email_radio);

        assert_eq!(fixture.email_group.style().get_property_value("display").unwrap(), "");
        assert!(!fixture.email_input.required());

        fixture.remove();
    }
}
