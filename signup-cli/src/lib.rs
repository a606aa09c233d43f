//! Text front end for the signup coordinator.
//!
//! Renders the same feedback a form would: directory loading/error
//! placeholders, per-field error lines, the busy label and the final
//! success or failure banner.

pub mod config;
pub mod render;

use anyhow::{Context, Result};
use signup_api::HttpRegistryClient;
use signup_core::{SubmissionCoordinator, SubmitOutcome};
use signup_types::{CacheStatus, RegistrationCandidate, SubmissionState};
use std::sync::Arc;
use tracing::info;

pub use config::CliConfig;

/// Result of one signup run: the coordinator outcome plus the lines shown
/// to the user, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: SubmitOutcome,
    pub lines: Vec<String>,
}

impl Report {
    pub fn succeeded(&self) -> bool {
        self.outcome == SubmitOutcome::Settled(SubmissionState::Succeeded)
    }
}

/// Loads the directory once, then submits `candidate`.
pub async fn run_signup(config: &CliConfig, candidate: &RegistrationCandidate) -> Result<Report> {
    let api = HttpRegistryClient::new(config.api.clone())
        .context("Failed to build directory client")?;
    let coordinator = SubmissionCoordinator::new(Arc::new(api), config.coordinator.clone());

    let mut lines = Vec::new();
    lines.extend(render::directory_banner(CacheStatus::Loading).map(str::to_string));

    let status = coordinator.refresh_directory().await;
    info!("Directory status: {status}");
    lines.extend(render::directory_banner(status).map(str::to_string));

    let outcome = coordinator.submit(candidate).await;
    if outcome.reached_network() {
        lines.push(render::button_label(SubmissionState::Submitting).to_string());
    }

    lines.extend(render::field_lines(&coordinator.errors()));
    lines.extend(render::outcome_lines(&outcome, coordinator.created_account().as_ref()));

    Ok(Report { outcome, lines })
}
