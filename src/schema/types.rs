//! Record Types
//!
//! The three persisted entities and their "insertable" counterparts. Insertables
//! carry only client-supplied fields; identifiers, timestamps and the appointment
//! status are assigned by the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Integer identifier assigned by storage. Starts at 1 per entity type.
pub type RecordId = i64;

/// A back-office account.
///
/// The password is stored exactly as provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

/// A message sent through the contact form. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// An appointment request for one of the clinic's services.
///
/// `status` is the only field that changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Identifier from the static service catalog (e.g. `"radiologie"`).
    pub service: String,
    pub message: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Returns a copy of this appointment carrying `status`, every other field unchanged.
    pub fn with_status(&self, status: AppointmentStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertAppointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: Option<String>,
}

/// Lifecycle state of an appointment.
///
/// The known states get their own variant; any other non-empty label is kept
/// verbatim in `Other` since the back office may use its own vocabulary. No
/// transition graph is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    Other(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Other(label) => label,
        }
    }
}

impl From<&str> for AppointmentStatus {
    fn from(label: &str) -> Self {
        match label {
            "pending" => AppointmentStatus::Pending,
            "confirmed" => AppointmentStatus::Confirmed,
            "cancelled" => AppointmentStatus::Cancelled,
            "completed" => AppointmentStatus::Completed,
            other => AppointmentStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AppointmentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(AppointmentStatus::from(label.as_str()))
    }
}
