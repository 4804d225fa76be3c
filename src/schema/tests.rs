//! Schema Module Tests
//!
//! Validates the payload rules for every insertable record and the string form
//! of appointment statuses.

#[cfg(test)]
mod tests {
    use crate::schema::types::{Appointment, AppointmentStatus};
    use crate::schema::validation::{
        is_valid_email, validate_insert_appointment, validate_insert_contact_message,
        validate_insert_user,
    };
    use chrono::Utc;
    use serde_json::json;

    // ============================================================
    // USER
    // ============================================================

    #[test]
    fn test_user_accepts_minimum_lengths() {
        let user = validate_insert_user(&json!({
            "username": "doc",
            "password": "12345678"
        }))
        .unwrap();

        assert_eq!(user.username, "doc");
        assert_eq!(user.password, "12345678");
    }

    #[test]
    fn test_user_reports_both_short_fields() {
        let err = validate_insert_user(&json!({
            "username": "ab",
            "password": "short"
        }))
        .unwrap_err();

        assert_eq!(err.issues.len(), 2);
        assert_eq!(err.issues[0].path, vec!["username".to_string()]);
        assert_eq!(
            err.issues[0].message,
            "String must contain at least 3 character(s)"
        );
        assert_eq!(err.issues[1].path, vec!["password".to_string()]);
        assert_eq!(
            err.issues[1].message,
            "String must contain at least 8 character(s)"
        );
    }

    #[test]
    fn test_user_length_counts_characters_not_bytes() {
        // Three characters, six bytes
        let user = validate_insert_user(&json!({
            "username": "éàè",
            "password": "motdepasse"
        }));

        assert!(user.is_ok());
    }

    // ============================================================
    // CONTACT MESSAGE
    // ============================================================

    #[test]
    fn test_contact_message_valid_payload() {
        let message = validate_insert_contact_message(&json!({
            "name": "Sara",
            "email": "sara@example.com",
            "phone": "",
            "message": ""
        }))
        .unwrap();

        assert_eq!(message.name, "Sara");
        assert_eq!(message.email, "sara@example.com");
        assert!(message.phone.is_empty());
    }

    #[test]
    fn test_contact_message_invalid_email_is_reported() {
        let err = validate_insert_contact_message(&json!({
            "name": "Sara",
            "email": "not-an-email",
            "phone": "0661000000",
            "message": "Bonjour"
        }))
        .unwrap_err();

        assert!(err.mentions("email"));
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].message, "Invalid email");
    }

    #[test]
    fn test_validation_error_display_names_fields() {
        let err = validate_insert_contact_message(&json!({
            "email": "not-an-email",
            "phone": "0661000000",
            "message": "Bonjour"
        }))
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "validation failed (name: Required; email: Invalid email)"
        );
    }

    #[test]
    fn test_contact_message_missing_and_mistyped_fields() {
        let err = validate_insert_contact_message(&json!({
            "name": 42,
            "email": null
        }))
        .unwrap_err();

        let reported: Vec<(&str, &str)> = err
            .issues
            .iter()
            .map(|issue| (issue.path[0].as_str(), issue.message.as_str()))
            .collect();

        assert_eq!(
            reported,
            vec![
                ("name", "Expected string, received number"),
                ("email", "Required"),
                ("phone", "Required"),
                ("message", "Required"),
            ]
        );
    }

    #[test]
    fn test_contact_message_empty_name_rejected() {
        let err = validate_insert_contact_message(&json!({
            "name": "",
            "email": "sara@example.com",
            "phone": "",
            "message": ""
        }))
        .unwrap_err();

        assert!(err.mentions("name"));
    }

    #[test]
    fn test_non_object_body_rejected() {
        let err = validate_insert_contact_message(&json!(["name"])).unwrap_err();

        assert_eq!(err.issues.len(), 1);
        assert!(err.issues[0].path.is_empty());
        assert_eq!(err.issues[0].message, "Expected object, received array");
    }

    // ============================================================
    // APPOINTMENT
    // ============================================================

    #[test]
    fn test_appointment_message_is_optional() {
        let appointment = validate_insert_appointment(&json!({
            "name": "Amine B.",
            "email": "amine@example.com",
            "phone": "0661000000",
            "service": "radiologie"
        }))
        .unwrap();

        assert_eq!(appointment.service, "radiologie");
        assert_eq!(appointment.message, None);

        let with_null = validate_insert_appointment(&json!({
            "name": "Amine B.",
            "email": "amine@example.com",
            "phone": "0661000000",
            "service": "radiologie",
            "message": null
        }))
        .unwrap();

        assert_eq!(with_null.message, None);
    }

    #[test]
    fn test_appointment_keeps_empty_message() {
        let appointment = validate_insert_appointment(&json!({
            "name": "Amine B.",
            "email": "amine@example.com",
            "phone": "0661000000",
            "service": "radiologie",
            "message": ""
        }))
        .unwrap();

        assert_eq!(appointment.message, Some(String::new()));
    }

    #[test]
    fn test_appointment_requires_service() {
        let err = validate_insert_appointment(&json!({
            "name": "Amine B.",
            "email": "amine@example.com",
            "phone": "0661000000",
            "service": ""
        }))
        .unwrap_err();

        assert!(err.mentions("service"));
        assert!(!err.mentions("message"));
    }

    #[test]
    fn test_appointment_message_type_is_checked() {
        let err = validate_insert_appointment(&json!({
            "name": "Amine B.",
            "email": "amine@example.com",
            "phone": "0661000000",
            "service": "scanner",
            "message": 12
        }))
        .unwrap_err();

        assert!(err.mentions("message"));
    }

    // ============================================================
    // EMAIL SYNTAX
    // ============================================================

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("amine@example.com"));
        assert!(is_valid_email("first.last+tag@sub.clinic.dz"));
        assert!(is_valid_email("o'neil@example.org"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("amine@"));
        assert!(!is_valid_email(".amine@example.com"));
        assert!(!is_valid_email("ami..ne@example.com"));
        assert!(!is_valid_email("amine.@example.com"));
        assert!(!is_valid_email("amine@example.c"));
        assert!(!is_valid_email("amine@-example.com"));
    }

    // ============================================================
    // STATUS
    // ============================================================

    #[test]
    fn test_status_known_and_custom_labels() {
        assert_eq!(AppointmentStatus::from("confirmed"), AppointmentStatus::Confirmed);
        assert_eq!(
            AppointmentStatus::from("rescheduled"),
            AppointmentStatus::Other("rescheduled".to_string())
        );
        assert_eq!(AppointmentStatus::default().as_str(), "pending");
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let value = serde_json::to_value(AppointmentStatus::Cancelled).unwrap();
        assert_eq!(value, json!("cancelled"));

        let parsed: AppointmentStatus = serde_json::from_value(json!("on-hold")).unwrap();
        assert_eq!(parsed.to_string(), "on-hold");
    }

    #[test]
    fn test_appointment_json_shape() {
        let appointment = Appointment {
            id: 7,
            name: "Amine B.".to_string(),
            email: "amine@example.com".to_string(),
            phone: "0661000000".to_string(),
            service: "radiologie".to_string(),
            message: None,
            status: AppointmentStatus::Pending,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&appointment).unwrap();

        assert_eq!(value["id"], json!(7));
        assert_eq!(value["status"], json!("pending"));
        assert_eq!(value["message"], json!(null));
        assert!(value["createdAt"].is_string());

        let updated = appointment.with_status(AppointmentStatus::Confirmed);
        assert_eq!(updated.status, AppointmentStatus::Confirmed);
        assert_eq!(updated.created_at, appointment.created_at);
        assert_eq!(updated.name, appointment.name);
    }
}
