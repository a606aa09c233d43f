use serde::{Deserialize, Serialize};

/// What `submit` does when the directory cannot answer a duplicate check
/// (still loading, or the last fetch failed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryPolicy {
    /// Treat the email as not registered and submit anyway.
    #[default]
    Optimistic,
    /// Refuse to submit until the directory is ready.
    Block,
}

/// Configuration for the submission coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    pub unavailable_directory: DirectoryPolicy,
}

impl CoordinatorConfig {
    /// A config that blocks submission while the directory is unavailable.
    pub fn blocking() -> Self {
        Self {
            unavailable_directory: DirectoryPolicy::Block,
        }
    }
}
