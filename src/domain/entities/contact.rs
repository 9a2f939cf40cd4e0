use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{entities::validation::validate_email_shape, errors::AppError};

/// Contact form body. Every field is optional on the wire so that a missing
/// field is reported by name instead of as a JSON decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ContactForm {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }

    /// Reports the first absent or blank field, checked in form order.
    pub fn check_required(&self) -> Result<(), AppError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];

        match fields
            .iter()
            .find(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        {
            Some((field, _)) => Err(AppError::validation(field, format!("{} is required", field))),
            None => Ok(()),
        }
    }
}

/// A validated submission, stamped for the log.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = AppError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        form.check_required()?;
        form.validate()?;

        let required = |value: Option<String>, field: &str| {
            value.ok_or_else(|| AppError::validation(field, format!("{} is required", field)))
        };

        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            name: required(form.name, "name")?,
            email: required(form.email, "email")?,
            subject: required(form.subject, "subject")?,
            message: required(form.message, "message")?,
            received_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub message: String,
    pub success: bool,
}
