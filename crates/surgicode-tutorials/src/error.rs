use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown tutorial: {0}")]
    NotFound(String),

    #[error("unknown sequence: {0}")]
    UnknownSequence(String),

    #[error("tutorial id must not be empty")]
    EmptyId,

    #[error("duplicate tutorial id: {0}")]
    DuplicateTutorial(String),

    #[error("tutorial '{0}' has no steps")]
    InvalidTutorial(String),

    #[error("tutorial '{tutorial_id}' repeats step id '{step_id}'")]
    DuplicateStep {
        tutorial_id: String,
        step_id: String,
    },

    #[error("tutorial '{0}' must have a positive estimated duration")]
    ZeroDuration(String),

    #[error("tutorial '{tutorial_id}' lists unknown prerequisite '{prerequisite}'")]
    UnknownPrerequisite {
        tutorial_id: String,
        prerequisite: String,
    },

    #[error("tutorial '{0}' lists itself as a prerequisite")]
    SelfPrerequisite(String),

    #[error("sequence '{sequence_id}' references unknown tutorial '{tutorial_id}'")]
    UnknownSequenceEntry {
        sequence_id: String,
        tutorial_id: String,
    },
}
