use super::Storage;
use crate::schema::{
    Appointment, AppointmentStatus, ContactMessage, InsertAppointment, InsertContactMessage,
    InsertUser, RecordId, User,
};

use anyhow::Result;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Process-local store. Contents live as long as the instance.
///
/// Construct one per server (or per test) and share it behind an `Arc`.
pub struct MemStorage {
    users: Table<User>,
    contact_messages: Table<ContactMessage>,
    appointments: Table<Appointment>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            contact_messages: Table::new(),
            appointments: Table::new(),
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn contact_message_count(&self) -> usize {
        self.contact_messages.len()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    async fn get_user(&self, id: RecordId) -> Result<Option<User>> {
        Ok(self.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.find_first(|user| user.username == username))
    }

    async fn create_user(&self, user: InsertUser) -> Result<User> {
        let created = self.users.insert_with(|id| User {
            id,
            username: user.username,
            password: user.password,
        });
        tracing::debug!("Created user {}", created.id);
        Ok(created)
    }

    async fn create_contact_message(&self, message: InsertContactMessage) -> Result<ContactMessage> {
        let created = self.contact_messages.insert_with(|id| ContactMessage {
            id,
            name: message.name,
            email: message.email,
            phone: message.phone,
            message: message.message,
            created_at: Utc::now(),
        });
        tracing::debug!("Stored contact message {}", created.id);
        Ok(created)
    }

    async fn get_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        Ok(self.contact_messages.all())
    }

    async fn create_appointment(&self, appointment: InsertAppointment) -> Result<Appointment> {
        let created = self.appointments.insert_with(|id| Appointment {
            id,
            name: appointment.name,
            email: appointment.email,
            phone: appointment.phone,
            service: appointment.service,
            message: appointment.message,
            status: AppointmentStatus::Pending,
            created_at: Utc::now(),
        });
        tracing::debug!(
            "Stored appointment {} for service {}",
            created.id,
            created.service
        );
        Ok(created)
    }

    async fn get_appointments(&self) -> Result<Vec<Appointment>> {
        Ok(self.appointments.all())
    }

    async fn get_appointment_by_id(&self, id: RecordId) -> Result<Option<Appointment>> {
        Ok(self.appointments.get(id))
    }

    async fn update_appointment_status(
        &self,
        id: RecordId,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>> {
        let updated = self
            .appointments
            .replace_with(id, |current| current.with_status(status));

        if let Some(appointment) = &updated {
            tracing::debug!("Appointment {} is now {}", id, appointment.status);
        }
        Ok(updated)
    }
}

/// One entity's rows plus its identifier counter.
struct Table<T> {
    rows: DashMap<RecordId, T>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn insert_with(&self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = build(id);
        self.rows.insert(id, record.clone());
        record
    }

    fn get(&self, id: RecordId) -> Option<T> {
        self.rows.get(&id).map(|entry| entry.value().clone())
    }

    /// Rows ordered by identifier, i.e. by insertion.
    fn all(&self) -> Vec<T> {
        let mut entries: Vec<(RecordId, T)> = self
            .rows
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, record)| record).collect()
    }

    fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows
            .iter()
            .filter(|entry| predicate(entry.value()))
            .min_by_key(|entry| *entry.key())
            .map(|entry| entry.value().clone())
    }

    fn replace_with(&self, id: RecordId, update: impl FnOnce(&T) -> T) -> Option<T> {
        let mut entry = self.rows.get_mut(&id)?;
        let updated = update(entry.value());
        *entry.value_mut() = updated.clone();
        Some(updated)
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
