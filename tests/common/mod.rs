use spendguard::Catalog;
use spendguard::dom::{Document, ElementHandle};
use spendguard::host::MockHost;
use spendguard::runtime::{EngineOptions, PageEngine};

pub fn img(src: &str, natural_w: u32, natural_h: u32) -> ElementHandle {
    let el = ElementHandle::new("img");
    el.set_attr_silent("src", src);
    el.set_natural_size(natural_w, natural_h);
    el
}

pub fn button(text: &str) -> ElementHandle {
    let el = ElementHandle::new("button");
    el.set_text(text);
    el
}

/// Depth-first search for the first element carrying `class`.
pub fn find_by_class(root: &ElementHandle, class: &str) -> Option<ElementHandle> {
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

/// Engine over `doc` with a fixed RNG seed so replacement choices are
/// reproducible, wired to a recording host.
pub fn seeded_engine(doc: Document) -> (PageEngine, MockHost) {
    let host = MockHost::new();
    let options = EngineOptions {
        seed: Some(7),
        ..Default::default()
    };
    let engine = PageEngine::new(
        doc,
        Catalog::builtin(),
        options,
        Box::new(host.clone()),
        Box::new(host.clone()),
    );
    (engine, host)
}
