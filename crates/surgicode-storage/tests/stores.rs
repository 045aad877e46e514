use std::collections::BTreeSet;

use surgicode_core::models::{CompletedSet, ProgressRecord, UserId};
use surgicode_storage::{LocalProgressStore, MemoryProgressStore, ProgressStore, StoreError};

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn set(ids: &[&str]) -> CompletedSet {
    ids.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>()
}

#[tokio::test]
async fn memory_load_before_any_save_is_empty() {
    let store = MemoryProgressStore::new();
    assert!(store.load(&user("42")).await.unwrap().is_empty());
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn memory_save_overwrites_per_user() {
    let store = MemoryProgressStore::new();
    let a = user("a");
    let b = user("b");

    store.save(&a, &set(&["basics", "code-search"])).await.unwrap();
    store.save(&a, &set(&["basics"])).await.unwrap();
    store.save(&b, &set(&["leaderboards"])).await.unwrap();

    assert_eq!(store.load(&a).await.unwrap(), set(&["basics"]));
    assert_eq!(store.load(&b).await.unwrap(), set(&["leaderboards"]));
    assert_eq!(store.save_count(), 3);
}

#[tokio::test]
async fn memory_unavailable_fails_both_ways() {
    let store = MemoryProgressStore::new();
    store.set_available(false);

    let u = user("42");
    assert!(matches!(store.load(&u).await, Err(StoreError::Unavailable(_))));
    assert!(matches!(
        store.save(&u, &set(&["basics"])).await,
        Err(StoreError::Unavailable(_))
    ));
    assert_eq!(store.stored(&u).await, None);

    store.set_available(true);
    assert!(store.load(&u).await.unwrap().is_empty());
}

#[tokio::test]
async fn local_missing_dir_loads_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalProgressStore::new(tmp.path().join("not-created-yet"));
    assert!(store.load(&user("42")).await.unwrap().is_empty());
}

#[tokio::test]
async fn local_round_trips_across_instances() {
    let tmp = tempfile::tempdir().unwrap();
    let u = user("42");

    LocalProgressStore::new(tmp.path())
        .save(&u, &set(&["basics", "case-logging"]))
        .await
        .unwrap();

    let reopened = LocalProgressStore::new(tmp.path());
    assert_eq!(
        reopened.load(&u).await.unwrap(),
        set(&["basics", "case-logging"])
    );
    assert!(!reopened.path_for(&u).with_extension("json.tmp").exists());
}

#[tokio::test]
async fn local_file_is_a_versioned_record() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalProgressStore::new(tmp.path());
    let u = user("dr.jones@example.org");

    store.save(&u, &set(&["basics"])).await.unwrap();

    let path = store.path_for(&u);
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "dr%2Ejones%40example%2Eorg.json"
    );
    let record = ProgressRecord::from_json(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(record.user_id, u);
    assert_eq!(record.completed, set(&["basics"]));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[tokio::test]
async fn local_corrupt_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalProgressStore::new(tmp.path());
    let u = user("42");
    std::fs::write(store.path_for(&u), b"{ not json").unwrap();

    assert!(matches!(store.load(&u).await, Err(StoreError::Record(_))));
}

#[tokio::test]
async fn local_record_for_another_user_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let store = LocalProgressStore::new(tmp.path());
    let owner = user("7");
    store.save(&owner, &set(&["basics"])).await.unwrap();

    // Someone copied 7's file over 42's.
    let intruder = user("42");
    std::fs::copy(store.path_for(&owner), store.path_for(&intruder)).unwrap();

    assert!(matches!(
        store.load(&intruder).await,
        Err(StoreError::UserMismatch { .. })
    ));
}
