//! Core type definitions for the signup coordinator.
//!
//! This crate defines the plain data shared by the remote API client, the
//! coordinator and whatever renders its state:
//! - Directory accounts and the registration candidate
//! - Form fields and the per-field error map
//! - Submission and directory-cache status values
//!
//! Nothing here performs I/O.

mod account;
mod candidate;
mod field;
mod status;

pub use account::Account;
pub use candidate::RegistrationCandidate;
pub use field::{Field, ValidationErrors};
pub use status::{CacheStatus, SubmissionState};
