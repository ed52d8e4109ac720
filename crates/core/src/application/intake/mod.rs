// Registration Intake - caller-side validation in front of the engine
//
// The engine never validates what it is given. Front ends that collect
// requester details run them through here first.

use crate::application::queue_engine::QueueEngine;
use crate::domain::error::{DomainError, Result as DomainResult};
use crate::domain::Token;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Raw registration details as typed by the requester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub mobile: String,
    pub department: String,
}

impl RegistrationForm {
    pub fn new(
        name: impl Into<String>,
        mobile: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            department: department.into(),
        }
    }
}

/// Check a form: all fields present after trimming, contact long enough
pub fn validate_form(form: &RegistrationForm, min_contact_len: usize) -> DomainResult<()> {
    if form.name.trim().is_empty() {
        return Err(DomainError::MissingField("name"));
    }

    let mobile = form.mobile.trim();
    if mobile.is_empty() {
        return Err(DomainError::MissingField("mobile"));
    }

    if form.department.trim().is_empty() {
        return Err(DomainError::MissingField("department"));
    }

    let len = mobile.chars().count();
    if len < min_contact_len {
        return Err(DomainError::ContactTooShort {
            len,
            min: min_contact_len,
        });
    }

    Ok(())
}

/// Validate a form and issue a token for it
///
/// Fields are trimmed before they reach the engine.
pub fn register(engine: &mut QueueEngine, form: &RegistrationForm) -> Result<Token> {
    if let Err(e) = validate_form(form, engine.config().min_contact_len) {
        warn!(error = %e, "Registration rejected");
        return Err(e.into());
    }

    Ok(engine.issue(
        form.name.trim(),
        form.mobile.trim(),
        form.department.trim(),
    ))
}

#[cfg(test)]
mod intake_test;
