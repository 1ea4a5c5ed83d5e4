use crate::cli::config::{AppConfig, build_catalog, build_options};
use crate::error::EngineError;
use crate::fixture::{apply_step, build_document, load_fixture, load_script};
use crate::host::MockHost;
use crate::report::format_console_report;
use crate::runtime::PageEngine;

/// Replay a page fixture (and optional scripted events) through the engine
/// and print the run report.
pub fn cmd_run(
    page: &str,
    script: Option<&str>,
    trace: Option<&str>,
    seed: Option<u64>,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), EngineError> {
    let fixture = load_fixture(page)?;
    let steps = match script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };

    let host = MockHost::new();
    let document = build_document(&fixture);
    let mut engine = PageEngine::new(
        document,
        build_catalog(config),
        build_options(config, seed, trace),
        Box::new(host.clone()),
        Box::new(host.clone()),
    );

    engine.document_ready();

    for (i, step) in steps.iter().enumerate() {
        if verbose > 0 {
            println!("--- step {}: {:?}", i, step);
        }
        apply_step(&mut engine, step)?;
    }

    // Let any armed debounce or delayed sweep run out.
    engine.advance(4000);

    print!(
        "{}",
        format_console_report(&fixture.host, &engine.stats(), host.close_requests())
    );
    Ok(())
}

/// Print the active pattern catalog (built-ins plus config extensions).
pub fn cmd_patterns(config: &AppConfig) {
    let catalog = build_catalog(config);

    println!("=== image patterns ({}) ===", catalog.image_patterns.len());
    for p in &catalog.image_patterns {
        println!("  {}", p);
    }

    println!("\n=== button patterns ({}) ===", catalog.button_patterns.len());
    for p in &catalog.button_patterns {
        println!("  {}", p);
    }

    println!("\n=== purchase phrases ({}) ===", catalog.phrase_patterns.len());
    for p in &catalog.phrase_patterns {
        println!("  {}", p.as_str());
    }

    println!(
        "\n=== product host markers ({}) ===",
        catalog.product_host_markers.len()
    );
    for m in &catalog.product_host_markers {
        println!("  {}", m);
    }

    println!("\n=== slow hosts ({}) ===", catalog.slow_hosts.len());
    for h in &catalog.slow_hosts {
        println!("  {}", h);
    }
}
