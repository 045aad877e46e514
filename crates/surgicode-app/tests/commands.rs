use std::sync::Arc;

use surgicode_app::commands;
use surgicode_app::config::AppConfig;
use surgicode_app::state::AppState;
use surgicode_storage::{LocalProgressStore, MemoryProgressStore, ProgressStore};

fn memory_state() -> (AppState, Arc<MemoryProgressStore>) {
    let store = Arc::new(MemoryProgressStore::new());
    (AppState::new(store.clone()), store)
}

#[tokio::test]
async fn commands_require_sign_in() {
    let (state, _) = memory_state();
    let err = commands::start_tutorial(&state, "basics".to_string())
        .await
        .unwrap_err();
    assert!(err.contains("not signed in"));
    assert!(commands::next_step(&state).await.is_err());
}

#[tokio::test]
async fn read_commands_fail_after_sign_out() {
    let (state, _) = memory_state();
    commands::sign_in(&state, "42".to_string()).await.unwrap();
    commands::sign_out(&state).await.unwrap();

    assert!(commands::current_step(&state)
        .await
        .unwrap_err()
        .contains("not signed in"));
    assert!(commands::completed_tutorials(&state)
        .await
        .unwrap_err()
        .contains("not signed in"));
    assert!(commands::recommended_tutorial(&state, "beginner".to_string())
        .await
        .unwrap_err()
        .contains("not signed in"));
}

#[tokio::test]
async fn list_works_before_sign_in() {
    let (state, _) = memory_state();
    let list = commands::list_tutorials(&state).await.unwrap();
    assert_eq!(list.len(), state.catalog.all().len());
    assert!(list.iter().all(|t| !t.completed));
}

#[tokio::test]
async fn full_walkthrough_through_commands() {
    let (state, store) = memory_state();
    commands::sign_in(&state, "42".to_string()).await.unwrap();

    let first = commands::start_tutorial(&state, "basics".to_string())
        .await
        .unwrap();
    assert_eq!(first.step.id, "welcome");
    assert!(first.is_first);

    let back = commands::previous_step(&state).await.unwrap().unwrap();
    assert_eq!(back.index, 0);

    let mut last = None;
    for _ in 0..3 {
        last = commands::next_step(&state).await.unwrap();
    }
    let last = last.unwrap();
    assert_eq!(last.step.id, "quick-actions");
    assert!(last.is_last);

    assert!(commands::next_step(&state).await.unwrap().is_none());
    assert!(commands::current_step(&state).await.unwrap().is_none());
    assert_eq!(
        commands::completed_tutorials(&state).await.unwrap(),
        vec!["basics".to_string()]
    );
    assert_eq!(store.save_count(), 1);

    let listed = commands::list_tutorials(&state).await.unwrap();
    let basics = listed.iter().find(|t| t.id == "basics").unwrap();
    assert!(basics.completed);
    let code_search = listed.iter().find(|t| t.id == "code-search").unwrap();
    assert!(code_search.prerequisites_met);
}

#[tokio::test]
async fn skip_and_recommendation() {
    let (state, _) = memory_state();
    commands::sign_in(&state, "42".to_string()).await.unwrap();

    let rec = commands::recommended_tutorial(&state, "beginner".to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rec.id, "basics");

    commands::start_tutorial(&state, "basics".to_string())
        .await
        .unwrap();
    commands::skip_tutorial(&state).await.unwrap();

    // Skipping earns nothing, so the recommendation is unchanged.
    let rec = commands::recommended_tutorial(&state, "beginner".to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rec.id, "basics");

    commands::start_tutorial(&state, "basics".to_string())
        .await
        .unwrap();
    commands::finish_tutorial(&state).await.unwrap();

    let rec = commands::recommended_tutorial(&state, "beginner".to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rec.id, "code-search");
}

#[tokio::test]
async fn unknown_ids_are_reported() {
    let (state, _) = memory_state();
    commands::sign_in(&state, "42".to_string()).await.unwrap();

    let err = commands::start_tutorial(&state, "ghost".to_string())
        .await
        .unwrap_err();
    assert!(err.contains("ghost"));

    assert!(commands::mark_tutorial_completed(&state, "ghost".to_string())
        .await
        .is_err());
    assert!(commands::recommended_tutorial(&state, "expert".to_string())
        .await
        .is_err());
}

#[tokio::test]
async fn mark_completed_is_idempotent() {
    let (state, store) = memory_state();
    commands::sign_in(&state, "42".to_string()).await.unwrap();

    assert!(commands::mark_tutorial_completed(&state, "leaderboards".to_string())
        .await
        .unwrap());
    assert!(!commands::mark_tutorial_completed(&state, "leaderboards".to_string())
        .await
        .unwrap());
    assert_eq!(
        commands::completed_tutorials(&state).await.unwrap(),
        vec!["leaderboards".to_string()]
    );
    assert_eq!(store.save_count(), 2);
}

#[tokio::test]
async fn blank_user_id_is_rejected() {
    let (state, _) = memory_state();
    assert!(commands::sign_in(&state, "   ".to_string()).await.is_err());
}

#[tokio::test]
async fn progress_follows_the_user_across_sign_ins() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(Arc::new(LocalProgressStore::new(tmp.path())));

    commands::sign_in(&state, "42".to_string()).await.unwrap();
    commands::mark_tutorial_completed(&state, "basics".to_string())
        .await
        .unwrap();
    commands::sign_out(&state).await.unwrap();

    commands::sign_in(&state, "7".to_string()).await.unwrap();
    assert!(commands::completed_tutorials(&state).await.unwrap().is_empty());

    commands::sign_in(&state, "42".to_string()).await.unwrap();
    assert_eq!(
        commands::completed_tutorials(&state).await.unwrap(),
        vec!["basics".to_string()]
    );
}

#[tokio::test]
async fn state_from_memory_config() {
    let config = AppConfig {
        progress: surgicode_app::config::ProgressBackend::Memory,
        ..AppConfig::default()
    };
    let state = AppState::from_config(&config).await.unwrap();
    assert_eq!(state.store.backend(), "memory");
}
