use std::collections::HashSet;

use surgicode_core::models::{Category, CompletedSet, Tutorial};

use crate::error::CatalogError;
use crate::sequences::Sequence;

/// The immutable set of tutorials known to the application.
///
/// Construction validates every invariant the engine relies on, so a
/// `Catalog` in hand never contains an empty tutorial or a dangling id.
#[derive(Debug, Clone)]
pub struct Catalog {
    tutorials: Vec<Tutorial>,
    sequences: Vec<Sequence>,
}

impl Catalog {
    pub fn new(tutorials: Vec<Tutorial>, sequences: Vec<Sequence>) -> Result<Self, CatalogError> {
        validate(&tutorials, &sequences)?;
        Ok(Self {
            tutorials,
            sequences,
        })
    }

    /// All tutorials, in authored order.
    pub fn all(&self) -> &[Tutorial] {
        &self.tutorials
    }

    pub fn get(&self, id: &str) -> Result<&Tutorial, CatalogError> {
        self.tutorials
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tutorials.iter().any(|t| t.id == id)
    }

    pub fn by_category(&self, category: Category) -> Vec<&Tutorial> {
        self.tutorials
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn sequence(&self, id: &str) -> Result<&Sequence, CatalogError> {
        self.sequences
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::UnknownSequence(id.to_string()))
    }

    /// The first tutorial of `sequence_id` the user has not completed yet.
    ///
    /// `Ok(None)` means the whole sequence is done.
    pub fn recommend_next(
        &self,
        sequence_id: &str,
        completed: &CompletedSet,
    ) -> Result<Option<&Tutorial>, CatalogError> {
        let sequence = self.sequence(sequence_id)?;
        for id in &sequence.tutorial_ids {
            if !completed.contains(id) {
                return self.get(id).map(Some);
            }
        }
        Ok(None)
    }
}

/// Whether every listed prerequisite is in `completed`.
///
/// Advisory: the UI may use this to de-emphasise a tutorial, but starting
/// one never checks it.
pub fn prerequisites_met(tutorial: &Tutorial, completed: &CompletedSet) -> bool {
    tutorial
        .prerequisites
        .iter()
        .all(|p| completed.contains(p))
}

fn validate(tutorials: &[Tutorial], sequences: &[Sequence]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    for tutorial in tutorials {
        if tutorial.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if !ids.insert(tutorial.id.as_str()) {
            return Err(CatalogError::DuplicateTutorial(tutorial.id.clone()));
        }
        if tutorial.steps.is_empty() {
            return Err(CatalogError::InvalidTutorial(tutorial.id.clone()));
        }
        if tutorial.estimated_minutes == 0 {
            return Err(CatalogError::ZeroDuration(tutorial.id.clone()));
        }

        let mut step_ids = HashSet::new();
        for step in &tutorial.steps {
            if !step_ids.insert(step.id.as_str()) {
                return Err(CatalogError::DuplicateStep {
                    tutorial_id: tutorial.id.clone(),
                    step_id: step.id.clone(),
                });
            }
        }
    }

    // Prerequisites may point forward in authored order, so check after all ids are known.
    for tutorial in tutorials {
        for prerequisite in &tutorial.prerequisites {
            if *prerequisite == tutorial.id {
                return Err(CatalogError::SelfPrerequisite(tutorial.id.clone()));
            }
            if !ids.contains(prerequisite.as_str()) {
                return Err(CatalogError::UnknownPrerequisite {
                    tutorial_id: tutorial.id.clone(),
                    prerequisite: prerequisite.clone(),
                });
            }
        }
    }

    for sequence in sequences {
        for id in &sequence.tutorial_ids {
            if !ids.contains(id.as_str()) {
                return Err(CatalogError::UnknownSequenceEntry {
                    sequence_id: sequence.id.clone(),
                    tutorial_id: id.clone(),
                });
            }
        }
    }

    Ok(())
}
