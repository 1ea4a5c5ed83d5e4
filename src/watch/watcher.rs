use crate::runtime::scheduler::{Scheduler, TimerId, TimerKind};

pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchState {
    Idle,
    PendingSweep { timer: TimerId },
}

/// Debounce state machine over document mutations. Node-addition bursts
/// (hydration, infinite scroll) collapse into one re-sweep; a fresh burst
/// cancels and replaces the pending timer rather than stacking sweeps.
/// Attribute changes are not handled here; the engine reclassifies those
/// single elements immediately, because waiting out the debounce would let a
/// lazy-loaded original flash visibly.
#[derive(Debug)]
pub struct MutationWatcher {
    debounce_ms: u64,
    state: WatchState,
}

impl MutationWatcher {
    pub fn new(debounce_ms: u64) -> Self {
        MutationWatcher {
            debounce_ms,
            state: WatchState::Idle,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, WatchState::PendingSweep { .. })
    }

    /// Nodes were inserted: arm the debounce, or restart it if armed.
    pub fn nodes_added(&mut self, scheduler: &mut Scheduler) {
        if let WatchState::PendingSweep { timer } = self.state {
            scheduler.cancel(timer);
        }
        let timer = scheduler.schedule(self.debounce_ms, TimerKind::DebouncedSweep);
        self.state = WatchState::PendingSweep { timer };
    }

    /// The engine ran the debounced sweep; back to Idle.
    pub fn debounce_fired(&mut self) {
        self.state = WatchState::Idle;
    }
}

impl Default for MutationWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
