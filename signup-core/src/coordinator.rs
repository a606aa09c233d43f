//! Submission coordinator: validation, duplicate check and the single
//! in-flight creation request.

use crate::config::{CoordinatorConfig, DirectoryPolicy};
use crate::directory::DirectoryCache;
use crate::validation::{self, EMAIL_ALREADY_REGISTERED};
use signup_api::{ApiResult, RegistryApi};
use signup_types::{
    Account, CacheStatus, Field, RegistrationCandidate, SubmissionState, ValidationErrors,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

/// What a call to [`SubmissionCoordinator::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The email is already in the directory; nothing was sent.
    Duplicate(ValidationErrors),
    /// The directory is not ready and the policy blocks submission.
    DirectoryUnavailable,
    /// A creation request is already in flight; this call did nothing.
    Busy,
    /// The previous attempt has settled and the caller has not reset yet.
    NeedsReset(SubmissionState),
    /// A creation request was sent and resolved to this state.
    Settled(SubmissionState),
}

impl SubmitOutcome {
    /// True if this call issued a creation request.
    pub fn reached_network(&self) -> bool {
        matches!(self, SubmitOutcome::Settled(_))
    }
}

#[derive(Debug, Default)]
struct CoordinatorState {
    errors: ValidationErrors,
    submission: SubmissionState,
    created: Option<Account>,
}

/// Drives one registration form against the remote directory.
pub struct SubmissionCoordinator {
    api: Arc<dyn RegistryApi>,
    directory: DirectoryCache,
    config: CoordinatorConfig,
    state: Mutex<CoordinatorState>,
}

impl SubmissionCoordinator {
    /// Creates a coordinator and its (still empty) directory cache.
    pub fn new(api: Arc<dyn RegistryApi>, config: CoordinatorConfig) -> Self {
        Self {
            directory: DirectoryCache::new(Arc::clone(&api)),
            api,
            config,
            state: Mutex::new(CoordinatorState::default()),
        }
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    pub fn directory(&self) -> &DirectoryCache {
        &self.directory
    }

    /// Refreshes the directory cache. Called once at startup by the owner.
    pub async fn refresh_directory(&self) -> CacheStatus {
        self.directory.refresh().await
    }

    /// Validates the candidate and publishes the resulting error map,
    /// replacing whatever the previous pass produced.
    pub fn validate(&self, candidate: &RegistrationCandidate) -> ValidationErrors {
        let errors = validation::validate(candidate);
        self.lock().errors = errors.clone();
        errors
    }

    /// Validates, checks for a duplicate email and, if both pass, issues one
    /// creation request.
    ///
    /// Never fails: every path resolves into the returned outcome and the
    /// exposed errors/state.
    pub async fn submit(&self, candidate: &RegistrationCandidate) -> SubmitOutcome {
        if let Err(outcome) = self.begin(candidate) {
            return outcome;
        }

        debug!(?candidate, "Submitting registration");
        let attempt = InFlight { coordinator: self };
        let result = self.api.create_account(candidate).await;
        SubmitOutcome::Settled(attempt.settle(result))
    }

    /// Clears a settled attempt back to `Idle` so the form can be submitted
    /// again. Refused while a request is in flight. Field errors are kept.
    pub fn reset(&self) -> bool {
        let mut state = self.lock();
        if state.submission.is_in_flight() {
            return false;
        }
        state.submission = SubmissionState::Idle;
        true
    }

    /// Current field errors.
    pub fn errors(&self) -> ValidationErrors {
        self.lock().errors.clone()
    }

    /// Current submission state.
    pub fn state(&self) -> SubmissionState {
        self.lock().submission
    }

    /// The record echoed by the last successful creation, if any.
    pub fn created_account(&self) -> Option<Account> {
        self.lock().created.clone()
    }

    /// Runs every check and moves to `Submitting` under one lock, so no
    /// second caller can slip in between the busy check and the transition.
    fn begin(&self, candidate: &RegistrationCandidate) -> Result<(), SubmitOutcome> {
        let mut state = self.lock();

        match state.submission {
            SubmissionState::Idle => {}
            SubmissionState::Submitting => {
                debug!("Submission already in flight; ignoring");
                return Err(SubmitOutcome::Busy);
            }
            settled => return Err(SubmitOutcome::NeedsReset(settled)),
        }

        let mut errors = validation::validate(candidate);
        if !errors.is_empty() {
            debug!("Validation failed for {} field(s)", errors.len());
            state.errors = errors.clone();
            return Err(SubmitOutcome::Invalid(errors));
        }

        match self.directory.lookup_email(&candidate.email) {
            Some(true) => {
                warn!("Rejecting registration: {} is already registered", candidate.email);
                errors.insert(Field::Email, EMAIL_ALREADY_REGISTERED);
                state.errors = errors.clone();
                return Err(SubmitOutcome::Duplicate(errors));
            }
            Some(false) => {}
            None => match self.config.unavailable_directory {
                DirectoryPolicy::Optimistic => {
                    debug!("Directory unavailable; submitting without duplicate check");
                }
                DirectoryPolicy::Block => {
                    warn!("Directory unavailable; submission blocked");
                    state.errors = errors;
                    return Err(SubmitOutcome::DirectoryUnavailable);
                }
            },
        }

        state.errors = errors;
        state.created = None;
        state.submission = SubmissionState::Submitting;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, CoordinatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Returns true if the cache is ready and holds the candidate's email.
///
/// An unready cache cannot prove a duplicate, so this reports `false`.
pub fn check_duplicate(candidate: &RegistrationCandidate, cache: &DirectoryCache) -> bool {
    cache.lookup_email(&candidate.email).unwrap_or(false)
}

/// The directory may echo the whole request body back; the password must
/// not outlive the attempt.
fn without_password(mut account: Account) -> Account {
    account.attributes.remove(Field::Password.as_str());
    account
}

/// The pending creation request. If the submitting future is dropped before
/// the request settles, the attempt is recorded as failed so the
/// coordinator cannot stay `Submitting` forever.
struct InFlight<'a> {
    coordinator: &'a SubmissionCoordinator,
}

impl InFlight<'_> {
    fn settle(self, result: ApiResult<Option<Account>>) -> SubmissionState {
        let mut state = self.coordinator.lock();
        let settled = match result {
            Ok(created) => {
                match created.as_ref().and_then(Account::id) {
                    Some(id) => info!("Registration succeeded (id {id})"),
                    None => info!("Registration succeeded"),
                }
                state.created = created.map(without_password);
                SubmissionState::Succeeded
            }
            Err(e) => {
                if e.is_server_error() {
                    warn!("Registration failed: {e}");
                } else {
                    error!("Registration failed: {e}");
                }
                SubmissionState::Failed
            }
        };
        state.submission = settled;
        // Release before `self` drops; `Drop` takes the same lock.
        drop(state);
        settled
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.coordinator.lock();
        if state.submission.is_in_flight() {
            warn!("Registration abandoned before it settled");
            state.submission = SubmissionState::Failed;
        }
    }
}
