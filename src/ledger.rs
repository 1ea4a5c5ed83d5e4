use std::collections::HashMap;

use crate::dom::{ElementHandle, WeakElement};

/// Write-once processed marks, keyed by element identity. The association is
/// non-owning: a mark holds only a `Weak`, so it never keeps a removed
/// element alive and needs no explicit cleanup. A dead entry whose address
/// got reused counts as unmarked and is overwritten on the next `set`.
#[derive(Default)]
pub struct ProcessedLedger {
    marks: HashMap<usize, WeakElement>,
}

impl ProcessedLedger {
    pub fn new() -> Self {
        ProcessedLedger {
            marks: HashMap::new(),
        }
    }

    pub fn has(&self, el: &ElementHandle) -> bool {
        match self.marks.get(&el.ptr_key()) {
            Some(weak) => weak.upgrade().is_some_and(|live| live == *el),
            None => false,
        }
    }

    pub fn set(&mut self, el: &ElementHandle) {
        self.marks.insert(el.ptr_key(), el.downgrade());
    }
}
