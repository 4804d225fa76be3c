use super::protocol::{
    ErrorBody, MSG_APPOINTMENT_NOT_FOUND, MSG_INVALID_ID, MSG_STATUS_REQUIRED, MSG_VALIDATION,
};
use crate::schema::ValidationError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Every way a request can fail. Handlers return this and never build error
/// responses themselves.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid JSON body: {0}")]
    MalformedPayload(String),

    #[error("Malformed identifier: {0:?}")]
    MalformedId(String),

    #[error("Missing or empty status")]
    MissingStatus,

    #[error("Appointment {0} not found")]
    AppointmentNotFound(i64),

    /// Numeric but outside the identifier range.
    #[error("Appointment {0} not found")]
    UnknownId(String),

    /// `public` goes to the client, `cause` only to the logs.
    #[error("{public}")]
    Internal {
        public: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(public: &'static str, cause: anyhow::Error) -> Self {
        ApiError::Internal { public, cause }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::MalformedPayload(_)
            | ApiError::MalformedId(_)
            | ApiError::MissingStatus => StatusCode::BAD_REQUEST,
            ApiError::AppointmentNotFound(_) | ApiError::UnknownId(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ApiError::Validation(err) => {
                tracing::warn!("Rejected payload: {}", err);
                ErrorBody {
                    message: MSG_VALIDATION.to_string(),
                    errors: Some(err.issues.into_iter().map(Into::into).collect()),
                }
            }
            ApiError::MalformedPayload(detail) => {
                tracing::warn!("Unreadable request body: {}", detail);
                ErrorBody {
                    message: format!("Invalid JSON body: {detail}"),
                    errors: None,
                }
            }
            ApiError::MalformedId(_) => ErrorBody {
                message: MSG_INVALID_ID.to_string(),
                errors: None,
            },
            ApiError::MissingStatus => ErrorBody {
                message: MSG_STATUS_REQUIRED.to_string(),
                errors: None,
            },
            ApiError::AppointmentNotFound(_) | ApiError::UnknownId(_) => ErrorBody {
                message: MSG_APPOINTMENT_NOT_FOUND.to_string(),
                errors: None,
            },
            ApiError::Internal { public, cause } => {
                tracing::error!("{}: {:#}", public, cause);
                ErrorBody {
                    message: public.to_string(),
                    errors: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
