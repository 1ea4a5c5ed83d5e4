mod common;

use common::{button, find_by_class, img, seeded_engine};
use spendguard::dom::Document;
use spendguard::overlay::{BANNER_ID, MODAL_ID, attach_interstitial, build_modal};
use spendguard::rewrite::assets::{SHAME_IMAGES, SHAME_LABEL};
use spendguard::runtime::ClickOutcome;

// =========================================================================
// End-to-end pipeline properties
// =========================================================================

#[test]
fn pipeline_is_idempotent_across_repeated_sweeps() {
    let doc = Document::new("shopee.sg");
    let product = img("https://cf.shopee.sg/file/p1", 640, 640);
    let buy = button("Add to Cart");
    doc.append_child(&doc.body(), &product);
    doc.append_child(&doc.body(), &buy);

    let (mut engine, _host) = seeded_engine(doc);
    engine.document_ready();

    let src_once = product.attr("src");
    let label_once = buy.visible_text();

    // Three more full sweeps on this host; nothing may change.
    engine.advance(3500);

    assert_eq!(engine.stats().sweeps, 4, "Repeat sweeps did run");
    assert_eq!(product.attr("src"), src_once, "Image state identical after re-sweeps");
    assert_eq!(buy.visible_text(), label_once, "Button state identical after re-sweeps");
    assert_eq!(
        engine.stats().images_rewritten,
        1,
        "Rewrite counted exactly once"
    );
    assert_eq!(
        engine.stats().buttons_rewritten,
        1,
        "Button rewrite counted exactly once"
    );
}

#[test]
fn lazy_load_update_cannot_resurrect_the_original() {
    let doc = Document::new("example.com");
    let product = img("https://example.com/product-1.jpg", 640, 640);
    product.set_attr_silent("data-src", "https://example.com/product-1.jpg");
    doc.append_child(&doc.body(), &product);

    let (mut engine, _host) = seeded_engine(doc);
    engine.document_ready();

    let replacement = product.attr("src").expect("rewritten src");
    assert!(SHAME_IMAGES.contains(&replacement.as_str()));

    // The page's lazy loader fires late and restores its staged URL.
    engine
        .document()
        .set_attr(&product, "data-src", "https://example.com/product-1.jpg");
    engine.pump();
    engine.advance(1000);

    assert_eq!(
        product.attr("src").as_deref(),
        Some(replacement.as_str()),
        "Visible source never leaves the replacement"
    );
}

#[test]
fn banner_is_added_once_ahead_of_content() {
    let doc = Document::new("example.com");
    let filler = button("Learn More");
    doc.append_child(&doc.body(), &filler);

    let (mut engine, _host) = seeded_engine(doc);
    engine.document_ready();

    let body_children = engine.document().body().children();
    assert_eq!(
        body_children.first().and_then(|el| el.id()).as_deref(),
        Some(BANNER_ID),
        "Banner sits before all page content"
    );
    let banners = body_children
        .iter()
        .filter(|el| el.id().as_deref() == Some(BANNER_ID))
        .count();
    assert_eq!(banners, 1, "Exactly one banner");
}

#[test]
fn visit_counters_are_reported_on_ready() {
    let doc = Document::new("example.com");
    let (mut engine, host) = seeded_engine(doc);
    engine.document_ready();

    let increments = host.increments();
    assert!(
        increments.iter().any(|(cat, n)| cat == "shopping_attempts" && *n == 1),
        "Visit counter incremented once"
    );
    let savings = increments
        .iter()
        .find(|(cat, _)| cat == "money_saved")
        .map(|(_, n)| *n)
        .expect("savings reported");
    assert!(
        (20..120).contains(&savings),
        "Simulated savings in the modeled range, got {}",
        savings
    );
}

// =========================================================================
// Interstitial flow
// =========================================================================

#[test]
fn shame_button_click_opens_single_interstitial() {
    let doc = Document::new("example.com");
    let buy = button("Buy Now");
    doc.append_child(&doc.body(), &buy);

    let (mut engine, _host) = seeded_engine(doc);
    engine.document_ready();
    assert_eq!(buy.visible_text(), SHAME_LABEL, "Button was rewritten");

    let outcome = engine.dispatch_click(&buy);
    assert_eq!(outcome, ClickOutcome::Intercepted, "Default action suppressed");
    let first = engine
        .document()
        .element_by_id(MODAL_ID)
        .expect("interstitial open");

    // Clicking again replaces the open instance rather than stacking one.
    engine.dispatch_click(&buy);
    let second = engine
        .document()
        .element_by_id(MODAL_ID)
        .expect("interstitial still open");
    assert!(second != first, "Reinvocation replaced the instance");

    let modal_count = engine
        .document()
        .body()
        .children()
        .iter()
        .filter(|el| el.id().as_deref() == Some(MODAL_ID))
        .count();
    assert_eq!(modal_count, 1, "Never more than one interstitial");
}

#[test]
fn interstitial_shows_the_budget_stats() {
    let doc = Document::new("example.com");
    let buy = button("Buy Now");
    doc.append_child(&doc.body(), &buy);

    let (mut engine, _host) = seeded_engine(doc);
    engine.document_ready();
    engine.dispatch_click(&buy);

    let modal = engine.document().element_by_id(MODAL_ID).unwrap();
    assert!(
        find_by_class(&modal, "shame-emoji").is_some(),
        "Emoji line present"
    );
    let stats = find_by_class(&modal, "shame-stats").expect("stats block present");
    let text = stats.visible_text();
    assert!(
        text.contains("$0.00") && text.contains("Your Budget"),
        "Budget stat rendered, got '{}'",
        text
    );
    assert!(
        text.contains("\u{221e}") && text.contains("Things You \"Need\""),
        "Needs stat rendered, got '{}'",
        text
    );
}

#[test]
fn interstitial_renders_without_a_missing_control() {
    let doc = Document::new("example.com");
    let (mut engine, host) = seeded_engine(doc);
    engine.document_ready();

    // A host page's style cleaner stripped the confirm button.
    let modal = build_modal();
    let confirm = find_by_class(&modal, "shame-btn-close").expect("built with confirm");
    engine.document().remove(&confirm);
    attach_interstitial(engine.document(), modal);

    let open = engine
        .document()
        .element_by_id(MODAL_ID)
        .expect("interstitial opens without the confirm control");
    assert!(
        find_by_class(&open, "shame-btn-close").is_none(),
        "Missing control stays missing, no crash"
    );

    let stay = find_by_class(&open, "shame-btn-stay").expect("remaining control present");
    engine.dispatch_click(&stay);
    assert!(
        engine.document().element_by_id(MODAL_ID).is_none(),
        "Remaining controls still work"
    );
    assert_eq!(host.close_requests(), 0);
}

#[test]
fn confirm_requests_view_close_dismiss_does_not() {
    let doc = Document::new("example.com");
    let buy = button("Buy Now");
    doc.append_child(&doc.body(), &buy);

    let (mut engine, host) = seeded_engine(doc);
    engine.document_ready();
    engine.dispatch_click(&buy);

    let modal = engine.document().element_by_id(MODAL_ID).unwrap();
    let stay = find_by_class(&modal, "shame-btn-stay").expect("dismiss control");
    engine.dispatch_click(&stay);

    assert!(
        engine.document().element_by_id(MODAL_ID).is_none(),
        "Dismiss removes the overlay"
    );
    assert_eq!(host.close_requests(), 0, "Dismiss never closes the view");

    engine.dispatch_click(&buy);
    let modal = engine.document().element_by_id(MODAL_ID).unwrap();
    let confirm = find_by_class(&modal, "shame-btn-close").expect("confirm control");
    engine.dispatch_click(&confirm);

    assert_eq!(
        host.close_requests(),
        1,
        "Close is requested only on explicit confirmation"
    );
}

#[test]
fn overlay_click_dismisses() {
    let doc = Document::new("example.com");
    let buy = button("Checkout");
    doc.append_child(&doc.body(), &buy);

    let (mut engine, _host) = seeded_engine(doc);
    engine.document_ready();
    engine.dispatch_click(&buy);

    let modal = engine.document().element_by_id(MODAL_ID).unwrap();
    let overlay = find_by_class(&modal, "shame-overlay").expect("overlay pane");
    engine.dispatch_click(&overlay);

    assert!(
        engine.document().element_by_id(MODAL_ID).is_none(),
        "Clicking outside the card dismisses the interstitial"
    );
}

#[test]
fn clicks_on_unbound_elements_stay_with_the_page() {
    let doc = Document::new("example.com");
    let link = button("Learn More");
    doc.append_child(&doc.body(), &link);

    let (mut engine, _host) = seeded_engine(doc);
    engine.document_ready();

    assert_eq!(
        engine.dispatch_click(&link),
        ClickOutcome::Default,
        "Untransformed elements keep their own behavior"
    );
}
