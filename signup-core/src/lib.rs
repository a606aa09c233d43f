//! Registration submission coordinator.
//!
//! Two components, both free of rendering concerns:
//!
//! - [`DirectoryCache`]: fetches and holds the remote listing of existing
//!   accounts, with a `loading`/`ready`/`error` status.
//! - [`SubmissionCoordinator`]: validates a candidate, checks its email
//!   against the cache and issues at most one creation request at a time,
//!   exposing the per-field errors and the submission state.
//!
//! # Example
//!
//! ```no_run
//! use signup_api::{ApiConfig, HttpRegistryClient};
//! use signup_core::{CoordinatorConfig, SubmissionCoordinator, SubmitOutcome};
//! use signup_types::RegistrationCandidate;
//! use std::sync::Arc;
//!
//! # async fn run() -> signup_api::ApiResult<()> {
//! let api = Arc::new(HttpRegistryClient::new(ApiConfig::default())?);
//! let coordinator = SubmissionCoordinator::new(api, CoordinatorConfig::default());
//! coordinator.refresh_directory().await;
//!
//! let candidate = RegistrationCandidate::new("bob", "bob@example.com", "secret1");
//! match coordinator.submit(&candidate).await {
//!     SubmitOutcome::Settled(state) => println!("submission {state}"),
//!     other => println!("not submitted: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod coordinator;
mod directory;
pub mod validation;

pub use config::{CoordinatorConfig, DirectoryPolicy};
pub use coordinator::{SubmissionCoordinator, SubmitOutcome, check_duplicate};
pub use directory::{DirectoryCache, DirectoryCacheState};
pub use validation::validate;
