//! Cancellable virtual-clock timers. Single-threaded: the engine advances
//! the clock explicitly and handles each expiry to completion before the
//! next fires.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Coalesced re-sweep armed by the mutation watcher.
    DebouncedSweep,
    /// Fixed-delay full sweep for slow-hydrating hosts.
    DelayedSweep,
}

#[derive(Debug)]
struct TimerEntry {
    id: TimerId,
    deadline_ms: u64,
    kind: TimerKind,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    timers: Vec<TimerEntry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn schedule(&mut self, delay_ms: u64, kind: TimerKind) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push(TimerEntry {
            id,
            deadline_ms: self.now_ms + delay_ms,
            kind,
        });
        id
    }

    /// Cancelling an already-fired or unknown timer is a no-op.
    pub fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    /// Remove and return the earliest timer due at or before `limit_ms`,
    /// moving the clock to its deadline. Ties fire in scheduling order.
    pub fn pop_due(&mut self, limit_ms: u64) -> Option<TimerKind> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline_ms <= limit_ms)
            .min_by_key(|(_, t)| (t.deadline_ms, t.id.0))
            .map(|(i, _)| i)?;

        let entry = self.timers.remove(idx);
        self.now_ms = self.now_ms.max(entry.deadline_ms);
        Some(entry.kind)
    }

    pub fn advance_to(&mut self, target_ms: u64) {
        self.now_ms = self.now_ms.max(target_ms);
    }
}
