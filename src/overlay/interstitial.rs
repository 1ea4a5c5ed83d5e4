//! The confirmation interstitial and the site-wide banner. At most one
//! interstitial exists; invoking it again replaces the open one.

use crate::dom::{ClickBinding, Document, ElementHandle};

pub const MODAL_ID: &str = "spendguard-shame-modal";
pub const BANNER_ID: &str = "spendguard-banner";

const CONFIRM_CLASS: &str = "shame-btn-close";
const DISMISS_CLASS: &str = "shame-btn-stay";
const OVERLAY_CLASS: &str = "shame-overlay";

/// Build and attach the interstitial, replacing any open instance.
pub fn show_interstitial(doc: &Document) {
    attach_interstitial(doc, build_modal());
}

/// Attach a caller-supplied modal subtree, replacing any open instance.
/// Controls are wired by lookup, so a subtree missing some of them still
/// attaches and works with whatever it has.
pub fn attach_interstitial(doc: &Document, modal: ElementHandle) {
    if let Some(existing) = doc.element_by_id(MODAL_ID) {
        doc.remove(&existing);
    }

    doc.append_child(&doc.body(), &modal);
    wire_controls(&modal);
}

/// Remove the interstitial if one is open.
pub fn dismiss_interstitial(doc: &Document) {
    if let Some(modal) = doc.element_by_id(MODAL_ID) {
        doc.remove(&modal);
    }
}

/// Insert the site-wide alert banner once, ahead of all page content.
pub fn add_banner(doc: &Document) {
    if doc.element_by_id(BANNER_ID).is_some() {
        return;
    }

    let banner = ElementHandle::new("div");
    banner.set_id(BANNER_ID);
    banner.set_text("\u{1f6a8} BUDGET ALERT: Shopping site detected! Your wallet is watching... \u{1f440} \u{1f4b8}");
    doc.prepend_child(&doc.body(), &banner);
}

/// The full modal subtree, not yet attached or wired.
pub fn build_modal() -> ElementHandle {
    let modal = ElementHandle::new("div");
    modal.set_id(MODAL_ID);

    let overlay = ElementHandle::new("div");
    overlay.add_class(OVERLAY_CLASS);
    modal.push_child(&overlay);

    let content = ElementHandle::new("div");
    content.add_class("shame-content");
    modal.push_child(&content);

    let emoji = ElementHandle::new("div");
    emoji.add_class("shame-emoji");
    emoji.set_text("\u{1f624}\u{1f4b8}\u{1f525}");
    content.push_child(&emoji);

    let heading = ElementHandle::new("h1");
    heading.set_text("HOLD UP, BIG SPENDER!");
    content.push_child(&heading);

    let subtitle = ElementHandle::new("p");
    subtitle.add_class("shame-subtitle");
    subtitle.set_text("Your wallet is filing for a restraining order");
    content.push_child(&subtitle);

    let stats = ElementHandle::new("div");
    stats.add_class("shame-stats");
    stats.push_child(&build_stat("$0.00", "Your Budget"));
    stats.push_child(&build_stat("\u{221e}", "Things You \"Need\""));
    content.push_child(&stats);

    let message = ElementHandle::new("p");
    message.add_class("shame-message");
    message.set_text(
        "Remember: That thing you \"absolutely need\" will still exist tomorrow. \
         Your savings account, however, might not.",
    );
    content.push_child(&message);

    let buttons = ElementHandle::new("div");
    buttons.add_class("shame-buttons");
    content.push_child(&buttons);

    let confirm = ElementHandle::new("button");
    confirm.add_class("shame-btn");
    confirm.add_class(CONFIRM_CLASS);
    confirm.set_text("\u{1f614} Fine, Close This Tab");
    buttons.push_child(&confirm);

    let stay = ElementHandle::new("button");
    stay.add_class("shame-btn");
    stay.add_class(DISMISS_CLASS);
    stay.set_text("\u{1f921} I'll Just Look (lies)");
    buttons.push_child(&stay);

    let footer = ElementHandle::new("p");
    footer.add_class("shame-footer");
    footer.set_text("- Brought to you by your future self");
    content.push_child(&footer);

    modal
}

fn build_stat(number: &str, label: &str) -> ElementHandle {
    let stat = ElementHandle::new("div");
    stat.add_class("stat");

    let value = ElementHandle::new("span");
    value.add_class("stat-number");
    value.set_text(number);
    stat.push_child(&value);

    let caption = ElementHandle::new("span");
    caption.add_class("stat-label");
    caption.set_text(label);
    stat.push_child(&caption);

    stat
}

/// Bind click behavior by looking the controls up, not by construction: a
/// missing control just leaves the interstitial without it, no crash.
fn wire_controls(modal: &ElementHandle) {
    if let Some(confirm) = find_by_class(modal, CONFIRM_CLASS) {
        confirm.bind_click(ClickBinding::ConfirmClose);
    }
    if let Some(stay) = find_by_class(modal, DISMISS_CLASS) {
        stay.bind_click(ClickBinding::DismissOverlay);
    }
    if let Some(overlay) = find_by_class(modal, OVERLAY_CLASS) {
        overlay.bind_click(ClickBinding::DismissOverlay);
    }
}

fn find_by_class(root: &ElementHandle, class: &str) -> Option<ElementHandle> {
    if root.has_class(class) {
        return Some(root.clone());
    }
    for child in root.children() {
        if let Some(found) = find_by_class(&child, class) {
            return Some(found);
        }
    }
    None
}
