mod common;

use common::seeded_engine;
use spendguard::fixture::model::{FixtureStep, PageFixture};
use spendguard::fixture::runner::{apply_step, build_document};
use spendguard::rewrite::assets::{SHAME_IMAGES, SHAME_LABEL};
use spendguard::EngineError;

const PAGE_JSON: &str = r##"{
    "host": "shop.example.com",
    "body": [
        {
            "tag": "div",
            "id": "listing",
            "classes": ["product-grid"],
            "children": [
                {
                    "tag": "img",
                    "id": "hero",
                    "attrs": { "src": "https://shop.example.com/product-hero.jpg" },
                    "naturalWidth": 800,
                    "naturalHeight": 600
                },
                {
                    "tag": "button",
                    "id": "cta",
                    "text": "Buy Now"
                }
            ]
        }
    ]
}"##;

#[test]
fn parses_page_fixture_json() {
    let fixture: PageFixture = serde_json::from_str(PAGE_JSON).unwrap();
    assert_eq!(fixture.host, "shop.example.com");
    assert_eq!(fixture.body.len(), 1);
    let grid = &fixture.body[0];
    assert_eq!(grid.classes, vec!["product-grid".to_string()]);
    assert_eq!(grid.children.len(), 2);
    assert_eq!(grid.children[0].natural_width, 800);
    assert_eq!(grid.children[1].text.as_deref(), Some("Buy Now"));
}

#[test]
fn parses_step_script_json() {
    let json = r##"[
        { "step": "advance", "ms": 500 },
        { "step": "add_node", "parent": "listing", "node": { "tag": "img" } },
        { "step": "set_attr", "target": "hero", "name": "src", "value": "x" },
        { "step": "click", "target": "cta" },
        { "step": "fail_load", "target": "hero" }
    ]"##;
    let steps: Vec<FixtureStep> = serde_json::from_str(json).unwrap();
    assert_eq!(steps.len(), 5);
    assert!(matches!(steps[0], FixtureStep::Advance { ms: 500 }));
    assert!(matches!(
        &steps[1],
        FixtureStep::AddNode { parent: Some(p), .. } if p == "listing"
    ));
    assert!(matches!(&steps[3], FixtureStep::Click { target } if target == "cta"));
}

#[test]
fn build_document_materializes_the_tree() {
    let fixture: PageFixture = serde_json::from_str(PAGE_JSON).unwrap();
    let doc = build_document(&fixture);

    assert_eq!(doc.host(), "shop.example.com");
    let hero = doc.element_by_id("hero").expect("hero image present");
    assert_eq!(hero.natural_size(), (800, 600));
    let cta = doc.element_by_id("cta").expect("cta button present");
    assert_eq!(cta.visible_text(), "Buy Now");
    assert_eq!(
        cta.parent().and_then(|p| p.id()).as_deref(),
        Some("listing"),
        "Parent links wired up"
    );
}

#[test]
fn replayed_steps_drive_the_engine() {
    let fixture: PageFixture = serde_json::from_str(PAGE_JSON).unwrap();
    let doc = build_document(&fixture);
    let (mut engine, _host) = seeded_engine(doc);
    engine.document_ready();

    let cta = engine.document().element_by_id("cta").unwrap();
    assert_eq!(cta.visible_text(), SHAME_LABEL, "Initial sweep ran over the fixture");

    // A late-inserted product image gets picked up by the debounced sweep.
    let steps: Vec<FixtureStep> = serde_json::from_str(
        r##"[
            { "step": "add_node", "node": {
                "tag": "img", "id": "late",
                "attrs": { "src": "https://shop.example.com/product-2.jpg" },
                "naturalWidth": 640, "naturalHeight": 640
            } },
            { "step": "advance", "ms": 200 }
        ]"##,
    )
    .unwrap();
    for step in &steps {
        apply_step(&mut engine, step).unwrap();
    }

    let late = engine.document().element_by_id("late").unwrap();
    let src = late.attr("src").unwrap();
    assert!(SHAME_IMAGES.contains(&src.as_str()), "Late insert rewritten");
}

#[test]
fn step_with_unknown_target_reports_element_not_found() {
    let fixture: PageFixture = serde_json::from_str(PAGE_JSON).unwrap();
    let doc = build_document(&fixture);
    let (mut engine, _host) = seeded_engine(doc);
    engine.document_ready();

    let step = FixtureStep::Click {
        target: "missing".to_string(),
    };
    match apply_step(&mut engine, &step) {
        Err(EngineError::ElementNotFound { target, .. }) => assert_eq!(target, "missing"),
        other => panic!("Expected ElementNotFound, got {:?}", other),
    }
}
