use super::types::ErrorResponse;
use crate::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Terminal outcome of a failed details invocation.
#[derive(Debug, Error)]
pub enum DetailsError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Restaurant name is required.")]
    MissingName,

    #[error("API Key not configured on the server.")]
    MissingApiKey,

    #[error("Error from Google AI API.")]
    Upstream { status: StatusCode },

    #[error("{0}")]
    Unexpected(String),
}

impl DetailsError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingName => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status } => *status,
        }
    }

    /// Client mistakes, as opposed to server faults.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MethodNotAllowed | Self::MissingName)
    }
}

impl From<Error> for DetailsError {
    fn from(err: Error) -> Self {
        match err {
            Error::Upstream { status, .. } => Self::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            },
            other => Self::Unexpected(other.detail()),
        }
    }
}

impl IntoResponse for DetailsError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Unexpected(error) => (status, Json(ErrorResponse { error })).into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}
