use crate::core::actions::{InvocationStatus, invoke, render};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::Value;

use super::AppState;
use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub(super) struct InvokeBody {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Deserialize)]
pub(super) struct RenderBody {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
    pub status: InvocationStatus,
}

/// POST /api/sessions/{id}/actions: apply once, reply with the confirmation
pub(super) async fn handle_invoke(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<InvokeBody>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;
    let outcome = invoke(
        &mut session,
        body.id.as_deref(),
        &body.name,
        &body.arguments,
    )
    .inspect_err(|error| tracing::warn!(session = %id, %error, "action rejected"))?;
    Ok(Json(outcome))
}

/// POST /api/sessions/{id}/actions/render
pub(super) async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<RenderBody>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(&id).await?;
    let session = session.lock().await;
    let view = render(&body.name, &body.arguments, body.status, &session)?;
    Ok(Json(view))
}
