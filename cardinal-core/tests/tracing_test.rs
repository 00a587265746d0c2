use cardinal_core::config::ObservabilityConfig;
use cardinal_core::tracing_setup::{init_tracing, init_tracing_with_config};

#[test]
fn tracing_init_is_idempotent() {
    init_tracing();
    init_tracing();
    init_tracing_with_config(&ObservabilityConfig {
        log_level: "debug".to_string(),
        json: true,
    });
    tracing::info!(target: "cardinal_core", "tracing initialized");
}

#[test]
fn version_matches_the_package() {
    assert_eq!(cardinal_core::constants::VERSION, env!("CARGO_PKG_VERSION"));
}
