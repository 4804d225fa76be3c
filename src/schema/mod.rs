//! Record Schemas
//!
//! Shapes and validation rules for the three entities the site persists:
//! back-office users, contact messages and appointment requests.
//!
//! ## Submodules
//! - **`types`**: Stored records, insertable shapes and `AppointmentStatus`.
//! - **`validation`**: Raw JSON body -> insertable conversion with per-field issues.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{
    FieldIssue, ValidationError, validate_insert_appointment, validate_insert_contact_message,
    validate_insert_user,
};

#[cfg(test)]
mod tests;
