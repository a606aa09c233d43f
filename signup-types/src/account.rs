//! Accounts as listed by the remote directory.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An existing account in the remote directory.
///
/// Only `email` is interpreted. Every other attribute the directory returns
/// (`id`, `name`, `address`, ...) is kept verbatim in `attributes` and written
/// back unchanged when the account is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier used for duplicate detection.
    pub email: String,
    /// Opaque pass-through attributes.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Account {
    /// Creates an account with only an email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            attributes: Map::new(),
        }
    }

    /// Adds an opaque attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the directory's `id` attribute rendered as text, if present.
    pub fn id(&self) -> Option<String> {
        match self.attributes.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
