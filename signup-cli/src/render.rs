//! Text rendering of coordinator state.

use signup_core::SubmitOutcome;
use signup_types::{Account, CacheStatus, SubmissionState, ValidationErrors};

pub const LOADING: &str = "Loading...";
pub const LOAD_FAILED: &str = "Error loading data";
pub const SIGN_UP: &str = "Sign Up";
pub const SIGNING_UP: &str = "Signing up...";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const SIGNUP_SUCCEEDED: &str = "Signup successful!";

/// Placeholder shown for the directory, if any.
pub fn directory_banner(status: CacheStatus) -> Option<&'static str> {
    match status {
        CacheStatus::Loading => Some(LOADING),
        CacheStatus::Error => Some(LOAD_FAILED),
        CacheStatus::Ready => None,
    }
}

/// Submit control label; the control is disabled while in flight.
pub fn button_label(state: SubmissionState) -> &'static str {
    if state.is_in_flight() { SIGNING_UP } else { SIGN_UP }
}

/// One `field: message` line per invalid field, in form order.
pub fn field_lines(errors: &ValidationErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect()
}

/// Submission-level feedback for an outcome.
pub fn outcome_lines(outcome: &SubmitOutcome, created: Option<&Account>) -> Vec<String> {
    match outcome {
        SubmitOutcome::Settled(SubmissionState::Succeeded) => {
            let mut lines = vec![SIGNUP_SUCCEEDED.to_string()];
            if let Some(id) = created.and_then(Account::id) {
                lines.push(format!("Account id: {id}"));
            }
            lines
        }
        SubmitOutcome::Settled(_) => vec![SIGNUP_FAILED.to_string()],
        SubmitOutcome::DirectoryUnavailable => {
            vec!["Cannot check for an existing account right now".to_string()]
        }
        SubmitOutcome::Busy => vec![SIGNING_UP.to_string()],
        // Field lines already explain these.
        SubmitOutcome::Invalid(_) | SubmitOutcome::Duplicate(_) | SubmitOutcome::NeedsReset(_) => {
            Vec::new()
        }
    }
}
