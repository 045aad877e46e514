use std::collections::BTreeSet;

use surgicode_core::models::{Category, CompletedSet, Step, Tutorial};
use surgicode_tutorials::sequences::{self, Sequence};
use surgicode_tutorials::{builtin, get_tutorial, prerequisites_met, Catalog, CatalogError};

fn tutorial(id: &str, step_ids: &[&str]) -> Tutorial {
    Tutorial {
        id: id.to_string(),
        title: id.to_string(),
        description: String::new(),
        category: Category::Basics,
        estimated_minutes: 2,
        steps: step_ids.iter().map(|s| Step::new(*s, *s, "")).collect(),
        prerequisites: Vec::new(),
    }
}

fn completed(ids: &[&str]) -> CompletedSet {
    ids.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>()
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = builtin();
    assert_eq!(catalog.all().len(), surgicode_tutorials::all_tutorials().len());
    assert_eq!(catalog.sequences().len(), 3);
}

#[test]
fn basics_has_the_four_orientation_steps() {
    let basics = get_tutorial("basics").unwrap();
    let ids: Vec<_> = basics.steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["welcome", "dashboard", "navigation", "quick-actions"]);
}

#[test]
fn unknown_id_is_not_found() {
    assert_eq!(
        get_tutorial("does-not-exist"),
        Err(CatalogError::NotFound("does-not-exist".to_string()))
    );
}

#[test]
fn by_category_keeps_catalog_order() {
    let workflow: Vec<_> = builtin()
        .by_category(Category::Workflow)
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(workflow, ["case-logging", "resident-tracking"]);
}

#[test]
fn empty_tutorial_is_rejected() {
    let err = Catalog::new(vec![tutorial("empty", &[])], Vec::new()).unwrap_err();
    assert_eq!(err, CatalogError::InvalidTutorial("empty".to_string()));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::new(
        vec![tutorial("a", &["one"]), tutorial("a", &["two"])],
        Vec::new(),
    )
    .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateTutorial("a".to_string()));

    let err = Catalog::new(vec![tutorial("a", &["one", "one"])], Vec::new()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateStep { ref step_id, .. } if step_id == "one"));
}

#[test]
fn zero_duration_is_rejected() {
    let mut t = tutorial("a", &["one"]);
    t.estimated_minutes = 0;
    assert_eq!(
        Catalog::new(vec![t], Vec::new()).unwrap_err(),
        CatalogError::ZeroDuration("a".to_string())
    );
}

#[test]
fn prerequisites_must_resolve() {
    let mut b = tutorial("b", &["one"]);
    b.prerequisites = vec!["missing".to_string()];
    assert!(matches!(
        Catalog::new(vec![tutorial("a", &["one"]), b], Vec::new()),
        Err(CatalogError::UnknownPrerequisite { .. })
    ));

    let mut c = tutorial("c", &["one"]);
    c.prerequisites = vec!["c".to_string()];
    assert_eq!(
        Catalog::new(vec![c], Vec::new()).unwrap_err(),
        CatalogError::SelfPrerequisite("c".to_string())
    );
}

#[test]
fn forward_prerequisites_are_allowed() {
    let mut a = tutorial("a", &["one"]);
    a.prerequisites = vec!["b".to_string()];
    assert!(Catalog::new(vec![a, tutorial("b", &["one"])], Vec::new()).is_ok());
}

#[test]
fn sequence_entries_must_resolve() {
    let seq = Sequence {
        id: "s".to_string(),
        title: "S".to_string(),
        tutorial_ids: vec!["a".to_string(), "ghost".to_string()],
    };
    assert_eq!(
        Catalog::new(vec![tutorial("a", &["one"])], vec![seq]).unwrap_err(),
        CatalogError::UnknownSequenceEntry {
            sequence_id: "s".to_string(),
            tutorial_id: "ghost".to_string(),
        }
    );
}

#[test]
fn recommend_next_walks_the_sequence_in_order() {
    let catalog = builtin();

    let first = catalog
        .recommend_next(sequences::BEGINNER, &completed(&[]))
        .unwrap()
        .unwrap();
    assert_eq!(first.id, "basics");

    let next = catalog
        .recommend_next(sequences::BEGINNER, &completed(&["basics"]))
        .unwrap()
        .unwrap();
    assert_eq!(next.id, "code-search");

    // A later entry being done does not skip an earlier one.
    let gap = catalog
        .recommend_next(sequences::BEGINNER, &completed(&["case-logging"]))
        .unwrap()
        .unwrap();
    assert_eq!(gap.id, "basics");
}

#[test]
fn recommend_next_is_none_when_sequence_done() {
    let done = completed(&["basics", "code-search", "case-logging"]);
    assert!(builtin()
        .recommend_next(sequences::BEGINNER, &done)
        .unwrap()
        .is_none());
}

#[test]
fn recommend_next_rejects_unknown_sequence() {
    assert_eq!(
        builtin().recommend_next("expert", &completed(&[])).unwrap_err(),
        CatalogError::UnknownSequence("expert".to_string())
    );
}

#[test]
fn prerequisites_met_is_advisory_check() {
    let case_logging = get_tutorial("case-logging").unwrap();
    assert!(!prerequisites_met(case_logging, &completed(&[])));
    assert!(prerequisites_met(case_logging, &completed(&["basics"])));

    let basics = get_tutorial("basics").unwrap();
    assert!(prerequisites_met(basics, &completed(&[])));
}

#[test]
fn tutorial_serializes_with_snake_case_category() {
    let json = serde_json::to_value(get_tutorial("analytics-overview").unwrap()).unwrap();
    assert_eq!(json["category"], "analytics");
    assert_eq!(json["steps"][0]["placement"], "bottom");
}
