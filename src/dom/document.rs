use std::cell::RefCell;

use crate::catalog::selector::StructuralPattern;
use crate::dom::element::{ElementHandle, ElementRole, WeakElement};

/// One observed document change. Targets are weak so the journal never keeps
/// a removed element alive.
#[derive(Debug, Clone)]
pub enum MutationRecord {
    NodesAdded { count: usize },
    AttributeChanged { target: WeakElement, attr: String },
}

/// In-memory stand-in for the live page: a mutable element tree plus a
/// mutation journal the engine drains, playing the MutationObserver role.
pub struct Document {
    host: String,
    root: ElementHandle,
    body: ElementHandle,
    journal: RefCell<Vec<MutationRecord>>,
}

impl Document {
    pub fn new(host: &str) -> Self {
        let root = ElementHandle::new("html");
        let body = ElementHandle::new("body");
        root.push_child(&body);
        Document {
            host: host.to_string(),
            root,
            body,
            journal: RefCell::new(Vec::new()),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn body(&self) -> ElementHandle {
        self.body.clone()
    }

    /// Attach a subtree; recorded as a node addition.
    pub fn append_child(&self, parent: &ElementHandle, child: &ElementHandle) {
        parent.push_child(child);
        self.journal
            .borrow_mut()
            .push(MutationRecord::NodesAdded { count: 1 });
    }

    /// Attach a subtree as the first child (banner placement).
    pub fn prepend_child(&self, parent: &ElementHandle, child: &ElementHandle) {
        parent.insert_child_front(child);
        self.journal
            .borrow_mut()
            .push(MutationRecord::NodesAdded { count: 1 });
    }

    /// Detach an element from its parent. The document holds no other strong
    /// reference, so marks and snapshots keyed weakly become unreachable with
    /// it.
    pub fn remove(&self, el: &ElementHandle) {
        if let Some(parent) = el.parent() {
            parent.remove_child(el);
        }
    }

    /// Journaled attribute write, the live-page mutation path. The engine's
    /// own rewrites go through here too, exactly as they would trip a real
    /// MutationObserver.
    pub fn set_attr(&self, el: &ElementHandle, name: &str, value: &str) {
        el.set_attr_silent(name, value);
        self.journal.borrow_mut().push(MutationRecord::AttributeChanged {
            target: el.downgrade(),
            attr: name.to_string(),
        });
    }

    pub fn remove_attr(&self, el: &ElementHandle, name: &str) {
        el.remove_attr_silent(name);
        self.journal.borrow_mut().push(MutationRecord::AttributeChanged {
            target: el.downgrade(),
            attr: name.to_string(),
        });
    }

    pub fn take_mutations(&self) -> Vec<MutationRecord> {
        self.journal.borrow_mut().drain(..).collect()
    }

    /// All elements matching a structural pattern, in document order.
    pub fn query(&self, pattern: &StructuralPattern) -> Vec<ElementHandle> {
        let mut out = Vec::new();
        Self::walk(&self.root, &mut |el| {
            if pattern.matches(el) {
                out.push(el.clone());
            }
        });
        out
    }

    /// Every image element on the page (host-fallback sweep support).
    pub fn all_images(&self) -> Vec<ElementHandle> {
        let mut out = Vec::new();
        Self::walk(&self.root, &mut |el| {
            if el.role() == ElementRole::Image {
                out.push(el.clone());
            }
        });
        out
    }

    pub fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        let mut found = None;
        Self::walk(&self.root, &mut |el| {
            if found.is_none() && el.id().as_deref() == Some(id) {
                found = Some(el.clone());
            }
        });
        found
    }

    /// Simulate the replacement image failing to load: the installed
    /// fallback source takes over, if one exists.
    pub fn fail_load(&self, el: &ElementHandle) {
        if let Some(fallback) = el.fallback_src() {
            self.set_attr(el, "src", &fallback);
        }
    }

    fn walk(el: &ElementHandle, visit: &mut impl FnMut(&ElementHandle)) {
        visit(el);
        for child in el.children() {
            Self::walk(&child, visit);
        }
    }
}
