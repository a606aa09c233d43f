//! The registration record a caller submits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registration request before any network round-trip.
///
/// Serializes to exactly the create endpoint's body:
/// `{"username": ..., "email": ..., "password": ...}`.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistrationCandidate {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationCandidate {
    /// Creates a candidate from its three fields.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the value of a single field.
    pub fn value(&self, field: crate::Field) -> &str {
        match field {
            crate::Field::Username => &self.username,
            crate::Field::Email => &self.email,
            crate::Field::Password => &self.password,
        }
    }
}

// Candidates are logged on submit; the password must never reach the logs.
impl fmt::Debug for RegistrationCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationCandidate")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
