use super::error::ApiError;
use super::protocol::*;
use crate::schema::{
    Appointment, AppointmentStatus, ContactMessage, RecordId, validate_insert_appointment,
    validate_insert_contact_message,
};
use crate::storage::Storage;

use axum::{
    Extension, Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::Value;
use std::num::IntErrorKind;
use std::sync::Arc;

/// JSON body whose rejection is turned into an `ApiError` instead of axum's plain-text reply.
pub type JsonBody = Result<Json<Value>, JsonRejection>;

/// Path segment whose rejection (e.g. invalid UTF-8) is answered in JSON like any bad id.
pub type IdSegment = Result<Path<String>, PathRejection>;

type Created<T> = (StatusCode, Json<Envelope<T>>);

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn handle_create_contact<S: Storage>(
    Extension(storage): Extension<Arc<S>>,
    body: JsonBody,
) -> Result<Created<ContactMessage>, ApiError> {
    let insert = validate_insert_contact_message(&read_body(body)?)?;

    let message = storage
        .create_contact_message(insert)
        .await
        .map_err(|e| ApiError::internal(MSG_CONTACT_CREATE_FAILED, e))?;

    tracing::info!("Contact message {} received", message.id);
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(MSG_CONTACT_CREATED, message)),
    ))
}

pub async fn handle_list_contacts<S: Storage>(
    Extension(storage): Extension<Arc<S>>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let messages = storage
        .get_contact_messages()
        .await
        .map_err(|e| ApiError::internal(MSG_CONTACT_LIST_FAILED, e))?;

    Ok(Json(messages))
}

pub async fn handle_create_appointment<S: Storage>(
    Extension(storage): Extension<Arc<S>>,
    body: JsonBody,
) -> Result<Created<Appointment>, ApiError> {
    let insert = validate_insert_appointment(&read_body(body)?)?;

    let appointment = storage
        .create_appointment(insert)
        .await
        .map_err(|e| ApiError::internal(MSG_APPOINTMENT_CREATE_FAILED, e))?;

    tracing::info!(
        "Appointment {} requested for {}",
        appointment.id,
        appointment.service
    );
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(MSG_APPOINTMENT_CREATED, appointment)),
    ))
}

pub async fn handle_list_appointments<S: Storage>(
    Extension(storage): Extension<Arc<S>>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let appointments = storage
        .get_appointments()
        .await
        .map_err(|e| ApiError::internal(MSG_APPOINTMENT_LIST_FAILED, e))?;

    Ok(Json(appointments))
}

pub async fn handle_get_appointment<S: Storage>(
    Extension(storage): Extension<Arc<S>>,
    id_segment: IdSegment,
) -> Result<Json<Appointment>, ApiError> {
    let id = parse_id(id_segment)?;

    match storage
        .get_appointment_by_id(id)
        .await
        .map_err(|e| ApiError::internal(MSG_APPOINTMENT_GET_FAILED, e))?
    {
        Some(appointment) => Ok(Json(appointment)),
        None => {
            tracing::debug!("Appointment not found: {}", id);
            Err(ApiError::AppointmentNotFound(id))
        }
    }
}

pub async fn handle_update_appointment_status<S: Storage>(
    Extension(storage): Extension<Arc<S>>,
    id_segment: IdSegment,
    body: JsonBody,
) -> Result<Json<Envelope<Appointment>>, ApiError> {
    let id = parse_id(id_segment)?;
    let status = read_status(&read_body(body)?)?;

    let updated = storage
        .update_appointment_status(id, status)
        .await
        .map_err(|e| ApiError::internal(MSG_APPOINTMENT_UPDATE_FAILED, e))?
        .ok_or(ApiError::AppointmentNotFound(id))?;

    tracing::info!("Appointment {} status set to {}", id, updated.status);
    Ok(Json(Envelope::new(MSG_STATUS_UPDATED, updated)))
}

fn read_body(body: JsonBody) -> Result<Value, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::MalformedPayload(rejection.body_text()))
}

/// Digits-only ids beyond the integer range cannot have been issued, so they
/// are reported as unknown rather than malformed.
fn parse_id(segment: IdSegment) -> Result<RecordId, ApiError> {
    let Path(raw) = segment.map_err(|rejection| ApiError::MalformedId(rejection.body_text()))?;

    raw.parse::<RecordId>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ApiError::UnknownId(raw.clone()),
        _ => ApiError::MalformedId(raw.clone()),
    })
}

/// Any non-empty string is accepted as a status.
fn read_status(body: &Value) -> Result<AppointmentStatus, ApiError> {
    body.get("status")
        .and_then(Value::as_str)
        .filter(|label| !label.is_empty())
        .map(AppointmentStatus::from)
        .ok_or(ApiError::MissingStatus)
}

/// JSON 404 for routes outside the API when no static assets are served.
pub async fn handle_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: MSG_ROUTE_NOT_FOUND.to_string(),
            errors: None,
        }),
    )
}
