use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named list of tutorials meant to be offered back-to-back.
///
/// Purely declarative. Finishing one entry never starts the next; the UI
/// decides whether to call `start` again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sequence {
    pub id: String,
    pub title: String,
    pub tutorial_ids: Vec<String>,
}

pub const BEGINNER: &str = "beginner";
pub const RESIDENT: &str = "resident";
pub const ADVANCED: &str = "advanced";

/// The sequences shipped with the built-in catalog.
pub fn builtin_sequences() -> Vec<Sequence> {
    vec![
        sequence(
            BEGINNER,
            "Getting Started",
            &["basics", "code-search", "case-logging"],
        ),
        sequence(
            RESIDENT,
            "Resident Track",
            &["basics", "case-logging", "resident-tracking"],
        ),
        sequence(
            ADVANCED,
            "Power Features",
            &["analytics-overview", "favorites-and-templates", "leaderboards"],
        ),
    ]
}

fn sequence(id: &str, title: &str, tutorial_ids: &[&str]) -> Sequence {
    Sequence {
        id: id.to_string(),
        title: title.to_string(),
        tutorial_ids: tutorial_ids.iter().map(|s| s.to_string()).collect(),
    }
}
