pub mod catalog;
pub mod classify;
pub mod cli;
pub mod dom;
pub mod error;
pub mod fixture;
pub mod host;
pub mod ledger;
pub mod overlay;
pub mod report;
pub mod rewrite;
pub mod runtime;
pub mod scan;
pub mod trace;
pub mod watch;

pub use crate::catalog::Catalog;
pub use crate::classify::Verdict;
pub use crate::dom::{Document, ElementHandle};
pub use crate::error::EngineError;
pub use crate::runtime::{ClickOutcome, EngineOptions, EngineStats, PageEngine};

use crate::cli::config::{AppConfig, build_catalog, build_options};
use crate::fixture::{apply_step, build_document, load_fixture, load_script};
use crate::host::MockHost;

/// Load a page fixture, replay its script, and return the final stats plus
/// the number of close-view requests. The programmatic twin of `cmd_run`.
pub fn run_fixture(
    page_path: &str,
    script_path: Option<&str>,
    config: &AppConfig,
) -> Result<(EngineStats, u32), EngineError> {
    let fixture = load_fixture(page_path)?;
    let steps = match script_path {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };

    let host = MockHost::new();
    let document = build_document(&fixture);
    let mut engine = PageEngine::new(
        document,
        build_catalog(config),
        build_options(config, None, None),
        Box::new(host.clone()),
        Box::new(host.clone()),
    );

    engine.document_ready();
    for step in &steps {
        apply_step(&mut engine, step)?;
    }
    engine.advance(4000);

    Ok((engine.stats(), host.close_requests()))
}
