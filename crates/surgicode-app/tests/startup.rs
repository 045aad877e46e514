use surgicode_app::config::{config_file, save_config_to, AppConfig, ProgressBackend};
use surgicode_app::state::AppState;

// One test per binary: startup installs the process-global subscriber.
#[tokio::test]
async fn load_in_builds_state_from_config_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let config = AppConfig {
        progress: ProgressBackend::Memory,
        log_filter: "debug".to_string(),
        ..AppConfig::default()
    };
    save_config_to(&config, &config_file(tmp.path())).unwrap();

    let state = AppState::load_in(tmp.path()).await.unwrap();
    assert_eq!(state.store.backend(), "memory");
    assert!(state.session.lock().await.is_none());
}
