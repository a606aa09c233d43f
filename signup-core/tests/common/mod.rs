//! Shared test helpers for coordinator tests.

#![allow(dead_code)]

use async_trait::async_trait;
use signup_api::{ApiError, ApiResult, RegistryApi};
use signup_types::{Account, RegistrationCandidate};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Outcome fed through a gate: accounts, or the HTTP status to fail with.
pub type ListReply = Result<Vec<Account>, u16>;

/// In-memory directory service with call counters and optional gates that
/// hold a request pending until the test releases it.
#[derive(Default)]
pub struct FakeRegistry {
    accounts: Mutex<Option<Vec<Account>>>,
    create_status: Mutex<Option<u16>>,
    list_gates: Mutex<VecDeque<oneshot::Receiver<ListReply>>>,
    create_gate: Mutex<Option<oneshot::Receiver<bool>>>,
    created: Mutex<Vec<RegistrationCandidate>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl FakeRegistry {
    /// A directory holding accounts with the given emails.
    pub fn with_emails(emails: &[&str]) -> Arc<Self> {
        let fake = Self::default();
        *fake.accounts.lock().unwrap() = Some(emails.iter().map(|e| Account::new(*e)).collect());
        Arc::new(fake)
    }

    /// A directory whose read endpoint is down.
    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every create call fail with `status`.
    pub fn reject_creates(&self, status: u16) {
        *self.create_status.lock().unwrap() = Some(status);
    }

    /// Holds the next list call until the returned sender fires.
    pub fn gate_list(&self) -> oneshot::Sender<ListReply> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.lock().unwrap().push_back(rx);
        tx
    }

    /// Holds the next create call until the returned sender fires;
    /// `true` releases it as a success, `false` as a failure.
    pub fn gate_create(&self) -> oneshot::Sender<bool> {
        let (tx, rx) = oneshot::channel();
        *self.create_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Candidates the service received, in order.
    pub fn created(&self) -> Vec<RegistrationCandidate> {
        self.created.lock().unwrap().clone()
    }
}

fn server_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        body: "fake failure".to_string(),
    }
}

#[async_trait]
impl RegistryApi for FakeRegistry {
    async fn list_accounts(&self) -> ApiResult<Vec<Account>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.list_gates.lock().unwrap().pop_front();
        if let Some(rx) = gate {
            return match rx.await {
                Ok(Ok(accounts)) => Ok(accounts),
                Ok(Err(status)) => Err(server_error(status)),
                Err(_) => Err(server_error(599)),
            };
        }

        let accounts = self.accounts.lock().unwrap().clone();
        accounts.ok_or_else(|| server_error(503))
    }

    async fn create_account(
        &self,
        candidate: &RegistrationCandidate,
    ) -> ApiResult<Option<Account>> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created.lock().unwrap().push(candidate.clone());

        let gate = self.create_gate.lock().unwrap().take();
        if let Some(rx) = gate {
            if !rx.await.unwrap_or(false) {
                return Err(server_error(500));
            }
        }

        let status = *self.create_status.lock().unwrap();
        match status {
            Some(status) => Err(server_error(status)),
            None => Ok(Some(
                Account::new(candidate.email.clone())
                    .with_attribute("id", 11)
                    .with_attribute("username", candidate.username.clone())
                    .with_attribute("password", candidate.password.clone()),
            )),
        }
    }
}

/// `{username: "bob", email, password: "secret1"}`.
pub fn bob(email: &str) -> RegistrationCandidate {
    RegistrationCandidate::new("bob", email, "secret1")
}
