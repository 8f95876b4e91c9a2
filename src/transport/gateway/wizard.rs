use crate::core::actions::dispatch::step_index;
use crate::core::wizard::{ProfilePatch, WizardStep, review_sections, simulate_submit};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct StepBody {
    pub step: Option<f64>,
    pub direction: Option<Direction>,
}

fn step_meta(step: WizardStep) -> Value {
    json!({
        "number": step.number(),
        "title": step.title(),
        "description": step.description(),
        "fields": step.fields(),
    })
}

/// GET /api/sessions/{id}/wizard
pub(super) async fn handle_wizard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(&id).await?;
    let session = session.lock().await;
    let wizard = &session.wizard;
    Ok(Json(json!({
        "state": wizard.readable(),
        "isFirstStep": wizard.is_first_step(),
        "isLastStep": wizard.is_last_step(),
        "canSubmit": wizard.can_submit(),
        "isSubmitting": wizard.is_submitting(),
        "lastEnhanced": wizard.last_enhanced(),
        "steps": WizardStep::ALL.map(step_meta),
        "review": review_sections(wizard.record()),
    })))
}

/// PATCH /api/sessions/{id}/wizard/fields
pub(super) async fn handle_update_fields(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProfilePatch>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;
    let updated = session.wizard.update_fields(patch);
    Ok(Json(json!({
        "updated": updated,
        "state": session.wizard.readable(),
    })))
}

/// POST /api/sessions/{id}/wizard/step: `{step}` jumps, `{direction}` moves by one
pub(super) async fn handle_step(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StepBody>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;
    let wizard = &mut session.wizard;

    let moved = match (body.step, body.direction) {
        (Some(step), None) => {
            wizard.go_to_step(step_index(step));
            true
        }
        (None, Some(Direction::Next)) => wizard.next(),
        (None, Some(Direction::Prev)) => wizard.prev(),
        _ => {
            return Err(ApiError::bad_request(
                "expected exactly one of `step` or `direction`",
            ));
        }
    };

    Ok(Json(json!({
        "moved": moved,
        "step": step_meta(wizard.current_step()),
    })))
}

/// POST /api/sessions/{id}/wizard/submit
pub(super) async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(&id).await?;
    let receipt = simulate_submit(&session, state.submit_delay).await?;
    Ok(Json(receipt))
}
