use spendguard::catalog::Catalog;
use spendguard::cli::config::{build_catalog, build_options, load_config, AppConfig};
use spendguard::classify::DEFAULT_MIN_ICON_PX;
use spendguard::watch::DEFAULT_DEBOUNCE_MS;

#[test]
fn missing_config_file_yields_defaults() {
    let config = load_config(Some("/nonexistent/spendguard.yaml"));
    assert_eq!(config.engine.debounce_ms, DEFAULT_DEBOUNCE_MS);
    assert_eq!(config.engine.min_icon_px, DEFAULT_MIN_ICON_PX);
    assert!(config.engine.seed.is_none());
    assert!(config.patterns.images.is_empty());
    assert!(config.patterns.phrases.is_empty());
}

#[test]
fn malformed_config_file_falls_back_to_defaults() {
    use std::io::Write;

    let dir = std::env::temp_dir().join("spendguard_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.yaml");

    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(b"patterns: [not, a, mapping\n").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.engine.debounce_ms, DEFAULT_DEBOUNCE_MS);
    assert!(config.patterns.buttons.is_empty());

    std::fs::remove_file(&path).ok();
    std::fs::remove_dir(&dir).ok();
}

#[test]
fn partial_config_file_keeps_unset_defaults() {
    use std::io::Write;

    let dir = std::env::temp_dir().join("spendguard_config_partial");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("partial.yaml");

    let yaml = r##"
engine:
  debounce_ms: 250
patterns:
  images:
    - "img.store-photo"
  slow_hosts:
    - "slowmart"
"##;
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(yaml.as_bytes()).unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.engine.debounce_ms, 250);
    assert_eq!(
        config.engine.min_icon_px, DEFAULT_MIN_ICON_PX,
        "Unset fields keep defaults"
    );
    assert_eq!(config.patterns.images, vec!["img.store-photo".to_string()]);
    assert_eq!(config.patterns.slow_hosts, vec!["slowmart".to_string()]);

    std::fs::remove_file(&path).ok();
    std::fs::remove_dir(&dir).ok();
}

#[test]
fn build_catalog_layers_extensions_on_builtins() {
    let mut config = AppConfig::default();
    config.patterns.images.push("img.special-product".to_string());
    config.patterns.phrases.push(r"grab\s*it".to_string());
    config.patterns.host_markers.push("cdn.megashop".to_string());
    config.patterns.slow_hosts.push("megashop".to_string());

    let catalog = build_catalog(&config);
    let builtin = Catalog::builtin();

    assert_eq!(
        catalog.image_patterns.len(),
        builtin.image_patterns.len() + 1,
        "Extension appended, built-ins kept"
    );
    assert!(catalog.matches_phrase("GRAB IT"), "Config phrase matches case-insensitively");
    assert!(catalog.matches_phrase("buy now"), "Built-in phrases survive");
    assert!(catalog.is_product_host_src("https://cdn.megashop/x.jpg"));
    assert!(catalog.is_slow_host("www.megashop.com"));
    assert!(!builtin.is_slow_host("www.megashop.com"));
}

#[test]
fn invalid_phrase_extension_is_skipped_not_fatal() {
    let mut catalog = Catalog::builtin();
    let before = catalog.phrase_patterns.len();
    catalog.extend(
        &[],
        &[],
        &["(unclosed".to_string(), "checkout".to_string()],
        &[],
        &[],
    );
    assert_eq!(
        catalog.phrase_patterns.len(),
        before + 1,
        "Only the valid phrase was added"
    );
    assert!(catalog.matches_phrase("Checkout"));
}

#[test]
fn phrase_compilation_reports_the_failing_pattern() {
    use spendguard::EngineError;
    use spendguard::catalog::compile_phrase;

    match compile_phrase("(unclosed") {
        Err(EngineError::PhraseParse { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
        other => panic!("Expected PhraseParse, got {:?}", other),
    }
    assert!(compile_phrase(r"buy\s*now").is_ok());
}

#[test]
fn cli_flags_take_precedence_over_config() {
    let mut config = AppConfig::default();
    config.engine.seed = Some(11);
    config.engine.trace = Some("from-config.jsonl".to_string());
    config.engine.debounce_ms = 300;

    let opts = build_options(&config, Some(42), Some("from-cli.jsonl"));
    assert_eq!(opts.seed, Some(42));
    assert_eq!(opts.trace_path.as_deref(), Some("from-cli.jsonl"));
    assert_eq!(opts.debounce_ms, 300);

    let opts = build_options(&config, None, None);
    assert_eq!(opts.seed, Some(11), "Config value used when flag absent");
    assert_eq!(opts.trace_path.as_deref(), Some("from-config.jsonl"));
}
