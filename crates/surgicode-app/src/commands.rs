//! Command handlers for the UI bridge.
//!
//! Every handler returns `Result<T, String>` so errors cross the bridge as
//! plain messages. No handler holds logic beyond shaping engine output.

use serde::Serialize;
use surgicode_core::models::{Category, CompletedSet, Step, Tutorial, UserId};
use surgicode_onboarding::{ActiveStep, OnboardingSession};
use surgicode_tutorials::prerequisites_met;
use tokio::sync::MutexGuard;

use crate::state::AppState;

/// A tutorial as shown in the picker.
#[derive(Debug, Clone, Serialize)]
pub struct TutorialSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub estimated_minutes: u32,
    pub step_count: usize,
    pub completed: bool,
    pub prerequisites_met: bool,
}

impl TutorialSummary {
    fn new(tutorial: &Tutorial, completed: &CompletedSet) -> Self {
        Self {
            id: tutorial.id.clone(),
            title: tutorial.title.clone(),
            description: tutorial.description.clone(),
            category: tutorial.category,
            estimated_minutes: tutorial.estimated_minutes,
            step_count: tutorial.step_count(),
            completed: completed.contains(&tutorial.id),
            prerequisites_met: prerequisites_met(tutorial, completed),
        }
    }
}

/// The step the overlay should render.
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub tutorial_id: String,
    pub tutorial_title: String,
    pub step: Step,
    pub index: usize,
    pub total: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl From<ActiveStep<'_>> for StepView {
    fn from(active: ActiveStep<'_>) -> Self {
        Self {
            tutorial_id: active.tutorial.id.clone(),
            tutorial_title: active.tutorial.title.clone(),
            step: active.step.clone(),
            index: active.index,
            total: active.total,
            is_first: active.is_first(),
            is_last: active.is_last(),
        }
    }
}

const NOT_SIGNED_IN: &str = "not signed in: call sign_in() first";

type SessionGuard<'a> = MutexGuard<'a, Option<OnboardingSession>>;

async fn require_session(state: &AppState) -> Result<SessionGuard<'_>, String> {
    let guard = state.session.lock().await;
    if guard.is_none() {
        return Err(NOT_SIGNED_IN.to_string());
    }
    Ok(guard)
}

fn session_ref<'g>(guard: &'g SessionGuard<'_>) -> Result<&'g OnboardingSession, String> {
    guard.as_ref().ok_or_else(|| NOT_SIGNED_IN.to_string())
}

fn session_mut<'g>(guard: &'g mut SessionGuard<'_>) -> Result<&'g mut OnboardingSession, String> {
    guard.as_mut().ok_or_else(|| NOT_SIGNED_IN.to_string())
}

fn current_view(session: &OnboardingSession) -> Option<StepView> {
    session.current().map(StepView::from)
}

/// Open a session for `user_id`, replacing any existing one.
pub async fn sign_in(state: &AppState, user_id: String) -> Result<(), String> {
    let user = UserId::new(user_id).map_err(|e| e.to_string())?;
    let session = OnboardingSession::open(user, state.store.clone()).await;
    *state.session.lock().await = Some(session);
    Ok(())
}

pub async fn sign_out(state: &AppState) -> Result<(), String> {
    if let Some(session) = state.session.lock().await.take() {
        tracing::info!(user_id = %session.user_id(), "signed out");
    }
    Ok(())
}

/// All tutorials with completion flags for the signed-in user, if any.
pub async fn list_tutorials(state: &AppState) -> Result<Vec<TutorialSummary>, String> {
    let guard = state.session.lock().await;
    let empty = CompletedSet::new();
    let completed = guard.as_ref().map_or(&empty, |s| s.completed());

    Ok(state
        .catalog
        .all()
        .iter()
        .map(|t| TutorialSummary::new(t, completed))
        .collect())
}

pub async fn start_tutorial(state: &AppState, tutorial_id: String) -> Result<StepView, String> {
    let mut guard = require_session(state).await?;
    let session = session_mut(&mut guard)?;

    session
        .start_by_id(state.catalog, &tutorial_id)
        .map_err(|e| e.to_string())?;

    current_view(session).ok_or_else(|| format!("tutorial '{tutorial_id}' did not start"))
}

/// Advance one step. `None` means the tutorial just finished (or none was running).
pub async fn next_step(state: &AppState) -> Result<Option<StepView>, String> {
    let mut guard = require_session(state).await?;
    let session = session_mut(&mut guard)?;
    session.advance().await;
    Ok(current_view(session))
}

pub async fn previous_step(state: &AppState) -> Result<Option<StepView>, String> {
    let mut guard = require_session(state).await?;
    let session = session_mut(&mut guard)?;
    session.retreat();
    Ok(current_view(session))
}

pub async fn skip_tutorial(state: &AppState) -> Result<(), String> {
    let mut guard = require_session(state).await?;
    session_mut(&mut guard)?.skip();
    Ok(())
}

pub async fn finish_tutorial(state: &AppState) -> Result<(), String> {
    let mut guard = require_session(state).await?;
    session_mut(&mut guard)?.complete().await;
    Ok(())
}

/// Credit a catalog tutorial without running it. Returns whether it was new.
pub async fn mark_tutorial_completed(
    state: &AppState,
    tutorial_id: String,
) -> Result<bool, String> {
    state.catalog.get(&tutorial_id).map_err(|e| e.to_string())?;

    let mut guard = require_session(state).await?;
    Ok(session_mut(&mut guard)?.mark_completed(&tutorial_id).await)
}

pub async fn current_step(state: &AppState) -> Result<Option<StepView>, String> {
    let guard = require_session(state).await?;
    Ok(current_view(session_ref(&guard)?))
}

pub async fn completed_tutorials(state: &AppState) -> Result<Vec<String>, String> {
    let guard = require_session(state).await?;
    Ok(session_ref(&guard)?.completed().iter().cloned().collect())
}

/// Next unfinished tutorial in `sequence_id`, or `None` when it is done.
pub async fn recommended_tutorial(
    state: &AppState,
    sequence_id: String,
) -> Result<Option<TutorialSummary>, String> {
    let guard = require_session(state).await?;
    let completed = session_ref(&guard)?.completed();

    let next = state
        .catalog
        .recommend_next(&sequence_id, completed)
        .map_err(|e| e.to_string())?;

    Ok(next.map(|t| TutorialSummary::new(t, completed)))
}
