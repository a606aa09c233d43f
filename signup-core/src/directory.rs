//! Cached view of the remote account directory.
//!
//! The cache is filled by an explicit [`DirectoryCache::refresh`]; there is no
//! background polling. Readers never block on the network: they see the last
//! published listing together with its status.

use signup_api::RegistryApi;
use signup_types::{Account, CacheStatus};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, info, warn};

/// Accounts plus the status of the fetch that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryCacheState {
    /// Listing from the last successful fetch; empty before the first one.
    pub accounts: Vec<Account>,
    pub status: CacheStatus,
}

#[derive(Debug, Default)]
struct Inner {
    state: DirectoryCacheState,
    /// Incremented by every refresh; only the newest refresh may publish.
    generation: u64,
}

/// Owns the cached directory listing.
pub struct DirectoryCache {
    api: Arc<dyn RegistryApi>,
    inner: RwLock<Inner>,
}

impl DirectoryCache {
    /// Creates an empty cache in the `Loading` state.
    pub fn new(api: Arc<dyn RegistryApi>) -> Self {
        Self {
            api,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Fetches the directory once and publishes the result.
    ///
    /// Success replaces the accounts wholesale and marks the cache ready.
    /// Any failure marks it as errored and keeps the previous accounts.
    /// Failures are reported through the returned status, never as an error.
    pub async fn refresh(&self) -> CacheStatus {
        let generation = {
            let mut inner = self.write();
            inner.generation += 1;
            inner.state.status = CacheStatus::Loading;
            inner.generation
        };

        let result = self.api.list_accounts().await;

        let mut inner = self.write();
        if inner.generation != generation {
            debug!(
                "Discarding directory refresh {generation}; refresh {} is newer",
                inner.generation
            );
            return inner.state.status;
        }

        match result {
            Ok(accounts) => {
                info!("Directory ready with {} accounts", accounts.len());
                inner.state.accounts = accounts;
                inner.state.status = CacheStatus::Ready;
            }
            Err(e) => {
                if e.is_server_error() {
                    warn!("Directory refresh failed: {e}");
                } else {
                    error!("Directory refresh failed: {e}");
                }
                inner.state.status = CacheStatus::Error;
            }
        }
        inner.state.status
    }

    /// Returns a copy of the cached accounts.
    pub fn accounts(&self) -> Vec<Account> {
        self.read().state.accounts.clone()
    }

    pub fn status(&self) -> CacheStatus {
        self.read().state.status
    }

    /// Returns accounts and status from a single consistent read.
    pub fn snapshot(&self) -> DirectoryCacheState {
        self.read().state.clone()
    }

    /// Looks up an email (exact, case-sensitive match).
    ///
    /// Returns `None` when the cache is not ready, since the answer would be
    /// indeterminate.
    pub fn lookup_email(&self, email: &str) -> Option<bool> {
        let inner = self.read();
        if !inner.state.status.is_ready() {
            return None;
        }
        Some(inner.state.accounts.iter().any(|a| a.email == email))
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
