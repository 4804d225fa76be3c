//! Storage Module
//!
//! Identifier-keyed persistence for users, contact messages and appointments.
//!
//! ## Core Concepts
//! - **Identifiers**: Each entity type has its own counter starting at 1. Identifiers
//!   are never reused.
//! - **Absence**: Lookups return `Ok(None)` for unknown identifiers. `Err` is reserved
//!   for backend failures, which the API turns into a 500.
//! - **Immutability**: Returned records are snapshots. Updating a status stores a new
//!   record under the same identifier.

pub mod memory;

use crate::schema::{
    Appointment, AppointmentStatus, ContactMessage, InsertAppointment, InsertContactMessage,
    InsertUser, RecordId, User,
};

use anyhow::Result;
use std::future::Future;

pub use memory::MemStorage;

/// Persistence seam consumed by the route handlers.
///
/// Operations are asynchronous so a database-backed implementation can slot in
/// behind the same handlers.
pub trait Storage: Send + Sync + 'static {
    fn get_user(&self, id: RecordId) -> impl Future<Output = Result<Option<User>>> + Send;

    /// Linear lookup; usernames are not unique at write time.
    fn get_user_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>>> + Send;

    fn create_user(&self, user: InsertUser) -> impl Future<Output = Result<User>> + Send;

    fn create_contact_message(
        &self,
        message: InsertContactMessage,
    ) -> impl Future<Output = Result<ContactMessage>> + Send;

    /// All contact messages in insertion order.
    fn get_contact_messages(&self) -> impl Future<Output = Result<Vec<ContactMessage>>> + Send;

    /// Stores a new appointment with status `pending`.
    fn create_appointment(
        &self,
        appointment: InsertAppointment,
    ) -> impl Future<Output = Result<Appointment>> + Send;

    /// All appointments in insertion order.
    fn get_appointments(&self) -> impl Future<Output = Result<Vec<Appointment>>> + Send;

    fn get_appointment_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<Appointment>>> + Send;

    /// Replaces the stored appointment with a copy carrying `status`.
    /// Returns `Ok(None)` when no appointment has this identifier.
    fn update_appointment_status(
        &self,
        id: RecordId,
        status: AppointmentStatus,
    ) -> impl Future<Output = Result<Option<Appointment>>> + Send;
}
