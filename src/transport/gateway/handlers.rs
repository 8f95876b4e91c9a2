use crate::core::actions::{ActionSpec, Surface, all_actions};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use super::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub(super) struct SurfaceQuery {
    pub surface: Option<Surface>,
}

/// GET /health
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "sessions": state.sessions.len().await,
    }))
}

fn declaration(spec: &ActionSpec) -> Value {
    json!({
        "name": spec.name,
        "description": spec.description,
        "parameters": spec.parameters,
        "schema": spec.function_schema(),
    })
}

/// GET /api/actions?surface=
pub(super) async fn handle_list_actions(Query(query): Query<SurfaceQuery>) -> impl IntoResponse {
    let specs = match query.surface {
        Some(surface) => surface.actions(),
        None => all_actions(),
    };
    Json(json!({
        "actions": specs.iter().map(declaration).collect::<Vec<_>>(),
    }))
}

/// POST /api/sessions
pub(super) async fn handle_create_session(State(state): State<AppState>) -> impl IntoResponse {
    let (id, session) = state.sessions.create().await;
    let created_at = session.lock().await.created_at();
    tracing::info!(session = %id, "session created");
    (
        StatusCode::CREATED,
        Json(json!({ "id": id, "createdAt": created_at })),
    )
}

/// GET /api/sessions/{id}/readable?surface=
pub(super) async fn handle_readable(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<SurfaceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(&id).await?;
    let session = session.lock().await;
    let readables: Vec<_> = match query.surface {
        Some(surface) => session.readable(surface).into_iter().collect(),
        None => Surface::ALL
            .into_iter()
            .filter_map(|surface| session.readable(surface))
            .collect(),
    };
    Ok(Json(json!({ "readables": readables })))
}
