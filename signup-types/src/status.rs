//! Lifecycle states observed by the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single creation request.
///
/// ```text
/// Idle --valid--> Submitting --ok--> Succeeded
///                            --err-> Failed
/// Succeeded/Failed --reset--> Idle
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// True while a creation request is pending.
    pub fn is_in_flight(self) -> bool {
        self == SubmissionState::Submitting
    }

    /// True once the last attempt has produced an outcome.
    pub fn is_settled(self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Freshness of the cached directory listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheStatus {
    /// No fetch has settled yet, or a refresh is in flight.
    #[default]
    Loading,
    /// The last fetch succeeded.
    Ready,
    /// The last fetch failed; accounts hold the previous successful listing.
    Error,
}

impl CacheStatus {
    pub fn is_ready(self) -> bool {
        self == CacheStatus::Ready
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CacheStatus::Loading => "loading",
            CacheStatus::Ready => "ready",
            CacheStatus::Error => "error",
        };
        f.write_str(s)
    }
}
