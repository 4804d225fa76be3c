//! Payload Validation
//!
//! Turns raw JSON request bodies into insertable records. Every failing field is
//! reported with its path and a human-readable reason; unknown fields are ignored.

use super::types::{InsertAppointment, InsertContactMessage, InsertUser};

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use thiserror::Error;

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 8;

// Lookarounds are not supported by `regex`; the leading-dot and double-dot
// rules are checked in `is_valid_email`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Location of the offending value; empty when the body itself is wrong.
    pub path: Vec<String>,
    pub message: String,
}

/// Every constraint a payload failed, in field declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed ({})", describe(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Whether any issue points at `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.path.first().map(String::as_str) == Some(field))
    }
}

fn describe(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            if issue.path.is_empty() {
                issue.message.clone()
            } else {
                format!("{}: {}", issue.path.join("."), issue.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate_insert_user(input: &Value) -> Result<InsertUser, ValidationError> {
    let mut fields = Fields::of(input)?;

    let username = fields
        .string("username")
        .and_then(|value| fields.min_chars("username", value, MIN_USERNAME_CHARS));
    let password = fields
        .string("password")
        .and_then(|value| fields.min_chars("password", value, MIN_PASSWORD_CHARS));

    match (username, password) {
        (Some(username), Some(password)) => Ok(InsertUser { username, password }),
        _ => Err(fields.into_error()),
    }
}

pub fn validate_insert_contact_message(
    input: &Value,
) -> Result<InsertContactMessage, ValidationError> {
    let mut fields = Fields::of(input)?;

    let name = fields
        .string("name")
        .and_then(|value| fields.min_chars("name", value, 1));
    let email = fields
        .string("email")
        .and_then(|value| fields.email("email", value));
    let phone = fields.string("phone");
    let message = fields.string("message");

    match (name, email, phone, message) {
        (Some(name), Some(email), Some(phone), Some(message)) => Ok(InsertContactMessage {
            name,
            email,
            phone,
            message,
        }),
        _ => Err(fields.into_error()),
    }
}

pub fn validate_insert_appointment(input: &Value) -> Result<InsertAppointment, ValidationError> {
    let mut fields = Fields::of(input)?;

    let name = fields
        .string("name")
        .and_then(|value| fields.min_chars("name", value, 1));
    let email = fields
        .string("email")
        .and_then(|value| fields.email("email", value));
    let phone = fields.string("phone");
    let service = fields
        .string("service")
        .and_then(|value| fields.min_chars("service", value, 1));
    let message = fields.optional_string("message");

    match (name, email, phone, service, message) {
        (Some(name), Some(email), Some(phone), Some(service), Some(message)) => {
            Ok(InsertAppointment {
                name,
                email,
                phone,
                service,
                message,
            })
        }
        _ => Err(fields.into_error()),
    }
}

pub fn is_valid_email(candidate: &str) -> bool {
    let Some((local, _)) = candidate.split_once('@') else {
        return false;
    };

    !local.starts_with('.') && !candidate.contains("..") && EMAIL_RE.is_match(candidate)
}

/// Reads fields off a JSON object, collecting issues as it goes.
///
/// Each accessor returns `None` exactly when it recorded an issue.
struct Fields<'a> {
    object: &'a Map<String, Value>,
    issues: Vec<FieldIssue>,
}

impl<'a> Fields<'a> {
    fn of(input: &'a Value) -> Result<Self, ValidationError> {
        match input {
            Value::Object(object) => Ok(Self {
                object,
                issues: Vec::new(),
            }),
            other => Err(ValidationError {
                issues: vec![FieldIssue {
                    path: Vec::new(),
                    message: format!("Expected object, received {}", json_type(other)),
                }],
            }),
        }
    }

    fn string(&mut self, field: &str) -> Option<String> {
        match self.object.get(field) {
            None | Some(Value::Null) => {
                self.fail(field, "Required".to_string());
                None
            }
            Some(Value::String(value)) => Some(value.clone()),
            Some(other) => {
                self.fail(
                    field,
                    format!("Expected string, received {}", json_type(other)),
                );
                None
            }
        }
    }

    /// Outer `None` on a type error, inner `None` when the field is absent or null.
    fn optional_string(&mut self, field: &str) -> Option<Option<String>> {
        match self.object.get(field) {
            None | Some(Value::Null) => Some(None),
            Some(_) => self.string(field).map(Some),
        }
    }

    fn min_chars(&mut self, field: &str, value: String, min: usize) -> Option<String> {
        if value.chars().count() < min {
            self.fail(
                field,
                format!("String must contain at least {min} character(s)"),
            );
            return None;
        }
        Some(value)
    }

    fn email(&mut self, field: &str, value: String) -> Option<String> {
        if !is_valid_email(&value) {
            self.fail(field, "Invalid email".to_string());
            return None;
        }
        Some(value)
    }

    fn fail(&mut self, field: &str, message: String) {
        self.issues.push(FieldIssue {
            path: vec![field.to_string()],
            message,
        });
    }

    fn into_error(self) -> ValidationError {
        ValidationError {
            issues: self.issues,
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
