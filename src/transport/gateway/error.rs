use crate::error::{ActionError, SessionError, WizardError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Error reply rendered as `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        Self::new(StatusCode::NOT_FOUND, error.to_string())
    }
}

impl From<ActionError> for ApiError {
    fn from(error: ActionError) -> Self {
        let status = match error {
            ActionError::Unknown { .. } => StatusCode::NOT_FOUND,
            ActionError::InvalidArguments { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        Self::new(status, error.to_string())
    }
}

impl From<WizardError> for ApiError {
    fn from(error: WizardError) -> Self {
        let status = match error {
            WizardError::MissingRequired(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WizardError::AlreadySubmitting | WizardError::NotSubmitting => StatusCode::CONFLICT,
        };
        Self::new(status, error.to_string())
    }
}
