use surgicode_core::models::UserId;
use tracing::{debug, info};
use uuid::Uuid;

use crate::sequencer::Transition;

/// A transition tagged with the session that produced it, for logging.
#[derive(Debug, Clone, Copy)]
pub struct TransitionEvent<'a> {
    pub session_id: Uuid,
    pub user_id: &'a UserId,
    pub transition: &'a Transition,
}

impl<'a> TransitionEvent<'a> {
    pub fn new(session_id: Uuid, user_id: &'a UserId, transition: &'a Transition) -> Self {
        Self {
            session_id,
            user_id,
            transition,
        }
    }

    /// Emit this event via tracing. Idle no-ops log at debug only.
    pub fn emit(&self) {
        let session_id = self.session_id;
        let user_id = self.user_id;
        match self.transition {
            Transition::Started {
                tutorial_id,
                abandoned,
            } => info!(
                %session_id,
                %user_id,
                tutorial_id = %tutorial_id,
                abandoned = ?abandoned,
                "tutorial started"
            ),
            Transition::Moved {
                tutorial_id,
                from,
                to,
            } => debug!(
                %session_id,
                %user_id,
                tutorial_id = %tutorial_id,
                from,
                to,
                "tutorial step changed"
            ),
            Transition::Stayed {
                tutorial_id,
                step_index,
            } => debug!(
                %session_id,
                %user_id,
                tutorial_id = %tutorial_id,
                step_index,
                "already at first step"
            ),
            Transition::Completed { tutorial_id } => info!(
                %session_id,
                %user_id,
                tutorial_id = %tutorial_id,
                "tutorial completed"
            ),
            Transition::Skipped {
                tutorial_id,
                step_index,
            } => info!(
                %session_id,
                %user_id,
                tutorial_id = %tutorial_id,
                step_index,
                "tutorial skipped"
            ),
            Transition::Ignored { action } => debug!(
                %session_id,
                %user_id,
                action = ?action,
                "no tutorial running, ignored"
            ),
        }
    }
}
