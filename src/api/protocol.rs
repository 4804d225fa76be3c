//! API Protocol
//!
//! Endpoint paths, response envelopes and the user-facing messages served by
//! the site (French, like the rest of the frontend).

use crate::schema::FieldIssue;
use serde::Serialize;

// --- API Endpoints ---

pub const ENDPOINT_HEALTH: &str = "/api/health";
/// Contact form submissions (POST) and listing (GET).
pub const ENDPOINT_CONTACT: &str = "/api/contact";
/// Appointment requests (POST) and listing (GET).
pub const ENDPOINT_APPOINTMENTS: &str = "/api/appointments";
pub const ENDPOINT_APPOINTMENT: &str = "/api/appointments/:id";
pub const ENDPOINT_APPOINTMENT_STATUS: &str = "/api/appointments/:id/status";

// --- Messages ---

pub const MSG_CONTACT_CREATED: &str = "Message envoyé avec succès";
pub const MSG_APPOINTMENT_CREATED: &str = "Rendez-vous demandé avec succès";
pub const MSG_STATUS_UPDATED: &str = "Statut mis à jour avec succès";

pub const MSG_VALIDATION: &str = "Validation error";
pub const MSG_INVALID_ID: &str = "ID invalide";
pub const MSG_STATUS_REQUIRED: &str = "Le statut est requis";
pub const MSG_APPOINTMENT_NOT_FOUND: &str = "Rendez-vous non trouvé";
pub const MSG_ROUTE_NOT_FOUND: &str = "Ressource introuvable";

pub const MSG_CONTACT_CREATE_FAILED: &str =
    "Une erreur s'est produite lors de l'envoi du message.";
pub const MSG_CONTACT_LIST_FAILED: &str = "Erreur lors de la récupération des messages.";
pub const MSG_APPOINTMENT_CREATE_FAILED: &str = "Erreur lors de la demande de rendez-vous.";
pub const MSG_APPOINTMENT_LIST_FAILED: &str = "Erreur lors de la récupération des rendez-vous.";
pub const MSG_APPOINTMENT_GET_FAILED: &str = "Erreur lors de la récupération du rendez-vous.";
pub const MSG_APPOINTMENT_UPDATE_FAILED: &str = "Erreur lors de la mise à jour du rendez-vous.";

// --- Data Transfer Objects ---

/// Success envelope for writes: `{ "message": ..., "data": record }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data,
        }
    }
}

/// Body of every error response. `errors` is only present for validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldIssueBody>>,
}

/// Wire form of a `FieldIssue`.
#[derive(Debug, Serialize, PartialEq)]
pub struct FieldIssueBody {
    pub path: Vec<String>,
    pub message: String,
}

impl From<FieldIssue> for FieldIssueBody {
    fn from(issue: FieldIssue) -> Self {
        Self {
            path: issue.path,
            message: issue.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
