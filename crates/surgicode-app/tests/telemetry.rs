use surgicode_app::config::AppConfig;
use surgicode_app::telemetry::init_tracing;

// One test per binary: the subscriber is process-global.
#[test]
fn installs_once() {
    let config = AppConfig {
        log_filter: "surgicode_onboarding=debug,info".to_string(),
        ..AppConfig::default()
    };
    init_tracing(&config).unwrap();
    tracing::info!("subscriber installed");

    assert!(init_tracing(&config).is_err());
}
