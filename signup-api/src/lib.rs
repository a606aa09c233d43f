//! Remote account directory client.
//!
//! The directory service exposes one collection resource:
//! - `GET {base}/users` lists existing accounts as a JSON array
//! - `POST {base}/users` creates an account from a JSON body
//!
//! [`RegistryApi`] is the seam the coordinator depends on;
//! [`HttpRegistryClient`] is the reqwest-backed implementation.

mod client;
mod config;
mod error;

pub use client::{HttpRegistryClient, RegistryApi};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
