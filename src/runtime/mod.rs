pub mod engine;
pub mod scheduler;

pub use engine::{ClickOutcome, EngineOptions, EngineStats, PageEngine};
pub use scheduler::{Scheduler, TimerId, TimerKind};
