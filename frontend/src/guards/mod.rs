//! Form guards: rules that intercept DOM events to enforce a validation or
//! confirmation policy before the browser's default behavior runs. Each
//! guard wires itself only when its markup is present, so any page gets
//! exactly the guards it renders elements for.

pub mod amount;
pub mod confirm_gate;
pub mod registration;
pub mod transfer;

use web_sys::Document;

/// Wire every guard whose markup is present on the page.
pub fn wire_all(document: &Document) {
    registration::wire(document);
    confirm_gate::wire(document);
    transfer::wire_same_account(document);
    transfer::wire_recipient_toggle(document);
}
