//! Directory API trait and its HTTP implementation.

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use signup_types::{Account, RegistrationCandidate};
use tracing::{debug, warn};

/// Remote directory operations the coordinator relies on.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Fetches every existing account. Issues exactly one read request.
    async fn list_accounts(&self) -> ApiResult<Vec<Account>>;

    /// Creates an account from the candidate's fields. Issues exactly one
    /// create request.
    ///
    /// Returns the record echoed by the service when it sends one back;
    /// a 2xx answer with an empty or unrecognised body is still a success.
    async fn create_account(&self, candidate: &RegistrationCandidate)
    -> ApiResult<Option<Account>>;
}

/// reqwest-backed directory client.
pub struct HttpRegistryClient {
    config: ApiConfig,
    accounts_url: Url,
    client: Client,
}

impl HttpRegistryClient {
    /// Creates a client for the configured service.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let accounts_url = Url::parse(&config.accounts_url()).map_err(|e| {
            ApiError::Config(format!("invalid accounts URL {:?}: {e}", config.accounts_url()))
        })?;

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            config,
            accounts_url,
            client,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn ensure_success(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RegistryApi for HttpRegistryClient {
    async fn list_accounts(&self) -> ApiResult<Vec<Account>> {
        debug!("Fetching accounts from {}", self.accounts_url);

        let response = self.client.get(self.accounts_url.clone()).send().await?;
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        let accounts: Vec<Account> = serde_json::from_str(&body)?;

        debug!("Fetched {} accounts", accounts.len());
        Ok(accounts)
    }

    async fn create_account(
        &self,
        candidate: &RegistrationCandidate,
    ) -> ApiResult<Option<Account>> {
        debug!("Creating account for {}", candidate.email);

        let response = self
            .client
            .post(self.accounts_url.clone())
            .json(candidate)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<Account>(&body) {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                warn!("Create succeeded but response was not an account: {e}");
                Ok(None)
            }
        }
    }
}
