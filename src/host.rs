//! External collaborators, modeled as fire-and-forget trait objects. The
//! engine never depends on their results.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Counter categories the engine reports.
pub const VISIT_COUNTER: &str = "shopping_attempts";
pub const SAVINGS_COUNTER: &str = "money_saved";

/// Commands to the hosting environment.
pub trait HostBridge {
    /// Ask for the current view to be closed. No acknowledgment; issued only
    /// on explicit user confirmation in the interstitial.
    fn close_view(&self);
}

/// Best-effort usage counters, persisted elsewhere.
pub trait CounterStore {
    fn increment(&self, category: &str, amount: u64);
}

/// Host that swallows everything (library default).
pub struct NullHost;

impl HostBridge for NullHost {
    fn close_view(&self) {}
}

impl CounterStore for NullHost {
    fn increment(&self, _category: &str, _amount: u64) {}
}

/// Recording double for tests and the CLI harness report.
#[derive(Clone, Default)]
pub struct MockHost {
    inner: Rc<MockHostState>,
}

#[derive(Default)]
struct MockHostState {
    close_requests: Cell<u32>,
    increments: RefCell<Vec<(String, u64)>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close_requests(&self) -> u32 {
        self.inner.close_requests.get()
    }

    pub fn increments(&self) -> Vec<(String, u64)> {
        self.inner.increments.borrow().clone()
    }
}

impl HostBridge for MockHost {
    fn close_view(&self) {
        self.inner.close_requests.set(self.inner.close_requests.get() + 1);
    }
}

impl CounterStore for MockHost {
    fn increment(&self, category: &str, amount: u64) {
        self.inner
            .increments
            .borrow_mut()
            .push((category.to_string(), amount));
    }
}
