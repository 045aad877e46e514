use serde::Serialize;
use surgicode_core::models::{Step, Tutorial};

/// Comparable snapshot of where the engine is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active { tutorial_id: String, step_index: usize },
}

impl Phase {
    pub fn active(tutorial_id: impl Into<String>, step_index: usize) -> Self {
        Self::Active {
            tutorial_id: tutorial_id.into(),
            step_index,
        }
    }
}

/// The operation a caller attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Advance,
    Retreat,
    Skip,
    Complete,
}

/// What an engine operation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// Now at step 0. `abandoned` is the tutorial that was running, if any.
    Started {
        tutorial_id: String,
        abandoned: Option<String>,
    },
    Moved {
        tutorial_id: String,
        from: usize,
        to: usize,
    },
    /// Retreat at step 0.
    Stayed {
        tutorial_id: String,
        step_index: usize,
    },
    Completed {
        tutorial_id: String,
    },
    Skipped {
        tutorial_id: String,
        step_index: usize,
    },
    /// The engine was idle; nothing changed.
    Ignored { action: Action },
}

/// The step currently on screen.
#[derive(Debug, Clone, Copy)]
pub struct ActiveStep<'a> {
    pub tutorial: &'a Tutorial,
    pub step: &'a Step,
    pub index: usize,
    pub total: usize,
}

impl ActiveStep<'_> {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// On the last step `advance` finishes the tutorial.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

#[derive(Debug, Clone)]
struct Run {
    tutorial: Tutorial,
    step_index: usize,
}

impl Run {
    fn id(&self) -> String {
        self.tutorial.id.clone()
    }

    fn on_last_step(&self) -> bool {
        self.step_index + 1 >= self.tutorial.steps.len()
    }
}

/// Linear walk through one tutorial at a time.
///
/// Holds no durable state. Every operation on an idle sequencer returns
/// [`Transition::Ignored`] and changes nothing.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    run: Option<Run>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin `tutorial` at step 0, replacing whatever was running.
    ///
    /// # Panics
    ///
    /// Panics if `tutorial` has no steps. Catalog tutorials are validated
    /// non-empty, so this only fires for hand-built definitions.
    pub fn start(&mut self, tutorial: Tutorial) -> Transition {
        assert!(
            !tutorial.steps.is_empty(),
            "cannot start tutorial '{}': it has no steps",
            tutorial.id
        );

        let abandoned = self.run.take().map(|r| r.id());
        let tutorial_id = tutorial.id.clone();
        self.run = Some(Run {
            tutorial,
            step_index: 0,
        });

        Transition::Started {
            tutorial_id,
            abandoned,
        }
    }

    /// Move forward one step; on the last step this finishes the run.
    pub fn advance(&mut self) -> Transition {
        let Some(run) = self.run.as_mut() else {
            return Transition::Ignored {
                action: Action::Advance,
            };
        };

        if run.on_last_step() {
            return self.complete();
        }

        let from = run.step_index;
        run.step_index += 1;
        Transition::Moved {
            tutorial_id: run.id(),
            from,
            to: run.step_index,
        }
    }

    pub fn retreat(&mut self) -> Transition {
        let Some(run) = self.run.as_mut() else {
            return Transition::Ignored {
                action: Action::Retreat,
            };
        };

        if run.step_index == 0 {
            return Transition::Stayed {
                tutorial_id: run.id(),
                step_index: 0,
            };
        }

        let from = run.step_index;
        run.step_index -= 1;
        Transition::Moved {
            tutorial_id: run.id(),
            from,
            to: run.step_index,
        }
    }

    pub fn skip(&mut self) -> Transition {
        match self.run.take() {
            Some(run) => Transition::Skipped {
                tutorial_id: run.id(),
                step_index: run.step_index,
            },
            None => Transition::Ignored {
                action: Action::Skip,
            },
        }
    }

    pub fn complete(&mut self) -> Transition {
        match self.run.take() {
            Some(run) => Transition::Completed {
                tutorial_id: run.id(),
            },
            None => Transition::Ignored {
                action: Action::Complete,
            },
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// True when running and the next `advance` would finish.
    pub fn on_last_step(&self) -> bool {
        self.run.as_ref().is_some_and(Run::on_last_step)
    }

    pub fn active_tutorial_id(&self) -> Option<&str> {
        self.run.as_ref().map(|r| r.tutorial.id.as_str())
    }

    pub fn phase(&self) -> Phase {
        match &self.run {
            Some(run) => Phase::active(run.tutorial.id.clone(), run.step_index),
            None => Phase::Idle,
        }
    }

    pub fn current(&self) -> Option<ActiveStep<'_>> {
        let run = self.run.as_ref()?;
        let step = run.tutorial.step(run.step_index)?;
        Some(ActiveStep {
            tutorial: &run.tutorial,
            step,
            index: run.step_index,
            total: run.tutorial.step_count(),
        })
    }
}
