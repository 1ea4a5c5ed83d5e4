use crate::dom::{Document, ElementHandle};
use crate::error::EngineError;
use crate::fixture::model::{FixtureNode, FixtureStep, PageFixture};
use crate::runtime::PageEngine;

pub fn load_fixture(path: &str) -> Result<PageFixture, EngineError> {
    let content = std::fs::read_to_string(path).map_err(|source| EngineError::FixtureIo {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| EngineError::FixtureParse {
        context: format!("page fixture {}", path),
        source,
    })
}

pub fn load_script(path: &str) -> Result<Vec<FixtureStep>, EngineError> {
    let content = std::fs::read_to_string(path).map_err(|source| EngineError::FixtureIo {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| EngineError::FixtureParse {
        context: format!("step script {}", path),
        source,
    })
}

/// Materialize a fixture into a live document.
pub fn build_document(fixture: &PageFixture) -> Document {
    let doc = Document::new(&fixture.host);
    let body = doc.body();
    for node in &fixture.body {
        let el = build_node(node);
        doc.append_child(&body, &el);
    }
    doc
}

pub fn build_node(node: &FixtureNode) -> ElementHandle {
    let el = ElementHandle::new(&node.tag);
    if let Some(id) = &node.id {
        el.set_id(id);
    }
    for class in &node.classes {
        el.add_class(class);
    }
    for (name, value) in &node.attrs {
        el.set_attr_silent(name, value);
    }
    if let Some(text) = &node.text {
        el.set_text(text);
    }
    el.set_natural_size(node.natural_width, node.natural_height);
    el.set_rendered_size(node.rendered_width, node.rendered_height);
    for child in &node.children {
        let child_el = build_node(child);
        el.push_child(&child_el);
    }
    el
}

/// Replay one scripted step against a running engine. Mutating steps pump
/// the journal afterwards, like a microtask boundary.
pub fn apply_step(engine: &mut PageEngine, step: &FixtureStep) -> Result<(), EngineError> {
    match step {
        FixtureStep::Advance { ms } => {
            engine.advance(*ms);
        }
        FixtureStep::AddNode { parent, node } => {
            let parent_el = match parent {
                Some(id) => find(engine, id, "add_node parent")?,
                None => engine.document().body(),
            };
            let el = build_node(node);
            engine.document().append_child(&parent_el, &el);
            engine.pump();
        }
        FixtureStep::SetAttr { target, name, value } => {
            let el = find(engine, target, "set_attr target")?;
            engine.document().set_attr(&el, name, value);
            engine.pump();
        }
        FixtureStep::Click { target } => {
            let el = find(engine, target, "click target")?;
            engine.dispatch_click(&el);
        }
        FixtureStep::FailLoad { target } => {
            let el = find(engine, target, "fail_load target")?;
            engine.document().fail_load(&el);
            engine.pump();
        }
    }
    Ok(())
}

fn find(engine: &PageEngine, id: &str, context: &str) -> Result<ElementHandle, EngineError> {
    engine
        .document()
        .element_by_id(id)
        .ok_or_else(|| EngineError::ElementNotFound {
            target: id.to_string(),
            context: context.to_string(),
        })
}
