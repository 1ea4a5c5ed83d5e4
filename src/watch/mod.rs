pub mod watcher;

pub use watcher::{DEFAULT_DEBOUNCE_MS, MutationWatcher};
