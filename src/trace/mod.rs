pub mod event;
pub mod logger;

pub use event::TraceEvent;
pub use logger::TraceLogger;
