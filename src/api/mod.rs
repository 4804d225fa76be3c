//! REST API Module
//!
//! Binds the record schemas and a `Storage` implementation to the `/api` surface.
//!
//! ## Endpoints
//! - `POST /api/contact`, `GET /api/contact`
//! - `POST /api/appointments`, `GET /api/appointments`
//! - `GET /api/appointments/:id`, `PATCH /api/appointments/:id/status`
//! - `GET /api/health`
//!
//! ## Submodules
//! - **`error`**: `ApiError`, the single place outcomes become status codes.
//! - **`handlers`**: Axum handlers, generic over the storage backend.
//! - **`protocol`**: Paths, envelopes and response messages.

pub mod error;
pub mod handlers;
pub mod protocol;

use crate::storage::Storage;
use handlers::*;
use protocol::*;

use axum::{
    Extension, Router,
    routing::{get, patch, post},
};
use std::sync::Arc;

/// Routes for the whole API, backed by `storage`.
pub fn router<S: Storage>(storage: Arc<S>) -> Router {
    Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(
            ENDPOINT_CONTACT,
            post(handle_create_contact::<S>).get(handle_list_contacts::<S>),
        )
        .route(
            ENDPOINT_APPOINTMENTS,
            post(handle_create_appointment::<S>).get(handle_list_appointments::<S>),
        )
        .route(ENDPOINT_APPOINTMENT, get(handle_get_appointment::<S>))
        .route(
            ENDPOINT_APPOINTMENT_STATUS,
            patch(handle_update_appointment_status::<S>),
        )
        .layer(Extension(storage))
}
