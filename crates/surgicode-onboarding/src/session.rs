use std::sync::Arc;

use surgicode_core::models::{CompletedSet, Tutorial, UserId};
use surgicode_storage::ProgressStore;
use surgicode_tutorials::Catalog;
use uuid::Uuid;

use crate::error::OnboardingError;
use crate::events::TransitionEvent;
use crate::sequencer::{ActiveStep, Phase, Sequencer, Transition};

pub type TransitionListener = Box<dyn Fn(&Transition) + Send + Sync>;

/// One signed-in user's onboarding state.
///
/// Owns the sequencer and a cached copy of the user's completed set. The
/// store is written after every completion with the full set; write
/// failures are logged and the cached set stays authoritative for the rest
/// of the session.
pub struct OnboardingSession {
    session_id: Uuid,
    user_id: UserId,
    store: Arc<dyn ProgressStore>,
    sequencer: Sequencer,
    completed: CompletedSet,
    listeners: Vec<TransitionListener>,
}

impl OnboardingSession {
    /// Open a session, starting from an empty ledger if the store fails.
    pub async fn open(user_id: UserId, store: Arc<dyn ProgressStore>) -> Self {
        let completed = match store.load(&user_id).await {
            Ok(completed) => completed,
            Err(e) => {
                tracing::warn!(
                    %user_id,
                    backend = store.backend(),
                    error = %e,
                    "failed to load tutorial progress, starting empty"
                );
                CompletedSet::new()
            }
        };
        Self::with_completed(user_id, store, completed)
    }

    /// Open a session, surfacing a load failure instead of masking it.
    pub async fn try_open(
        user_id: UserId,
        store: Arc<dyn ProgressStore>,
    ) -> Result<Self, OnboardingError> {
        let completed = store.load(&user_id).await?;
        Ok(Self::with_completed(user_id, store, completed))
    }

    fn with_completed(
        user_id: UserId,
        store: Arc<dyn ProgressStore>,
        completed: CompletedSet,
    ) -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!(
            %session_id,
            %user_id,
            backend = store.backend(),
            completed = completed.len(),
            "onboarding session opened"
        );
        Self {
            session_id,
            user_id,
            store,
            sequencer: Sequencer::new(),
            completed,
            listeners: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Register a callback invoked after every transition, including no-ops.
    pub fn on_transition<F>(&mut self, listener: F)
    where
        F: Fn(&Transition) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Begin `tutorial` at step 0. A running tutorial is abandoned without credit.
    ///
    /// # Panics
    ///
    /// Panics if `tutorial` has no steps.
    pub fn start(&mut self, tutorial: &Tutorial) -> Transition {
        let transition = self.sequencer.start(tutorial.clone());
        self.publish(transition)
    }

    /// Resolve `id` in `catalog` and start it. Unknown ids leave state untouched.
    pub fn start_by_id(
        &mut self,
        catalog: &Catalog,
        id: &str,
    ) -> Result<Transition, OnboardingError> {
        let tutorial = catalog
            .get(id)
            .map_err(|_| OnboardingError::NotFound(id.to_string()))?;
        Ok(self.start(tutorial))
    }

    pub async fn advance(&mut self) -> Transition {
        if self.sequencer.on_last_step() {
            return self.complete().await;
        }
        let transition = self.sequencer.advance();
        self.publish(transition)
    }

    pub fn retreat(&mut self) -> Transition {
        let transition = self.sequencer.retreat();
        self.publish(transition)
    }

    /// Leave the running tutorial. Nothing is written to the store.
    pub fn skip(&mut self) -> Transition {
        let transition = self.sequencer.skip();
        self.publish(transition)
    }

    /// Credit the running tutorial, then return to idle.
    pub async fn complete(&mut self) -> Transition {
        if let Some(tutorial_id) = self.sequencer.active_tutorial_id().map(str::to_owned) {
            self.record_completion(&tutorial_id).await;
        }
        let transition = self.sequencer.complete();
        self.publish(transition)
    }

    /// Credit `tutorial_id` without running it. Engine state is untouched.
    ///
    /// Returns whether the id was newly added.
    pub async fn mark_completed(&mut self, tutorial_id: &str) -> bool {
        self.record_completion(tutorial_id).await
    }

    pub fn is_running(&self) -> bool {
        self.sequencer.is_running()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    pub fn current(&self) -> Option<ActiveStep<'_>> {
        self.sequencer.current()
    }

    pub fn completed(&self) -> &CompletedSet {
        &self.completed
    }

    pub fn is_completed(&self, tutorial_id: &str) -> bool {
        self.completed.contains(tutorial_id)
    }

    async fn record_completion(&mut self, tutorial_id: &str) -> bool {
        let newly_added = self.completed.insert(tutorial_id.to_string());

        // Always write the full set, even when unchanged.
        match self.store.save(&self.user_id, &self.completed).await {
            Ok(()) => tracing::debug!(
                session_id = %self.session_id,
                user_id = %self.user_id,
                tutorial_id,
                newly_added,
                "tutorial progress saved"
            ),
            Err(e) => tracing::warn!(
                session_id = %self.session_id,
                user_id = %self.user_id,
                tutorial_id,
                backend = self.store.backend(),
                error = %e,
                "failed to save tutorial progress (kept in memory)"
            ),
        }

        newly_added
    }

    fn publish(&self, transition: Transition) -> Transition {
        TransitionEvent::new(self.session_id, &self.user_id, &transition).emit();
        for listener in &self.listeners {
            listener(&transition);
        }
        transition
    }
}
