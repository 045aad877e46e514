//! surgicode-onboarding
//!
//! The tutorial sequencing engine. [`Sequencer`] is the pure state machine
//! (one tutorial at a time, strictly linear). [`OnboardingSession`] owns a
//! sequencer for one signed-in user and records completions in a
//! [`ProgressStore`](surgicode_storage::ProgressStore).
//!
//! Public API:
//! - `start()` / `start_by_id()`: begin a tutorial at step 0
//! - `advance()`: next step, or finish when on the last one
//! - `retreat()`: previous step, floored at 0
//! - `skip()`: leave without credit
//! - `complete()`: leave with credit
//! - `mark_completed()`: credit a tutorial without running it

pub mod error;
pub mod events;
pub mod sequencer;
pub mod session;

pub use crate::error::OnboardingError;
pub use crate::sequencer::{Action, ActiveStep, Phase, Sequencer, Transition};
pub use crate::session::OnboardingSession;
