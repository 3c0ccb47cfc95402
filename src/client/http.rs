//! HTTP client implementation for the Stripe API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::{BankAccountsService, ChargesService, PaymentSourcesService, SourcesService};
use crate::auth::ApiKey;
use crate::form::Values;
use crate::models::Params;
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the Stripe API.
///
/// The client is cheap to clone and can be shared between tasks. Each
/// client carries its own API key and configuration.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::StripeClient;
/// use stripe_rs::models::{ChargeParams, Currency, SourceParams};
///
/// # async fn example() -> stripe_rs::Result<()> {
/// let client = StripeClient::new("sk_test_4eC39HqLyjWDarjtT1zdp7dc")?;
///
/// let charge = client
///     .charges()
///     .create(&ChargeParams {
///         amount: Some(2000),
///         currency: Some(Currency::Usd),
///         source: Some(SourceParams::token("tok_visa")),
///         ..Default::default()
///     })
///     .await?;
/// println!("Charge {} is {:?}", charge.id, charge.status);
/// # Ok(())
/// # }
/// ```
pub struct StripeClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) api_key: ApiKey,
    pub(crate) config: ClientConfig,
}

impl StripeClient {
    /// Create a client with the default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ApiKey::new(api_key)?, ClientConfig::default())
    }

    /// Create a client with the key from `STRIPE_SECRET_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ApiKey::from_env()?, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(api_key: ApiKey, config: ClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                api_key,
                config,
            }),
        })
    }

    /// Get the bank accounts service.
    pub fn bank_accounts(&self) -> BankAccountsService {
        BankAccountsService::new(self.inner.clone())
    }

    /// Get the charges service.
    pub fn charges(&self) -> ChargesService {
        ChargesService::new(self.inner.clone())
    }

    /// Get the sources service.
    pub fn sources(&self) -> SourcesService {
        SourcesService::new(self.inner.clone())
    }

    /// Get the customer payment sources service.
    pub fn payment_sources(&self) -> PaymentSourcesService {
        PaymentSourcesService::new(self.inner.clone())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Returns `true` if the client uses a test mode key.
    pub fn is_test_mode(&self) -> bool {
        self.inner.api_key.is_test_mode()
    }
}

impl ClientInner {
    /// Build request headers with authentication and per-request options.
    fn build_headers(&self, params: &Params) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.api_key.bearer())
                .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?,
        );

        if let Some(ref version) = self.config.api_version {
            headers.insert(
                "Stripe-Version",
                HeaderValue::from_str(version.as_str())
                    .map_err(|_| Error::InvalidInput("Invalid API version".to_string()))?,
            );
        }

        if let Some(ref key) = params.idempotency_key {
            headers.insert(
                "Idempotency-Key",
                HeaderValue::from_str(key)
                    .map_err(|_| Error::InvalidInput("Invalid idempotency key".to_string()))?,
            );
        }

        if let Some(ref account) = params.stripe_account {
            headers.insert(
                "Stripe-Account",
                HeaderValue::from_str(account)
                    .map_err(|_| Error::InvalidInput("Invalid Stripe-Account value".to_string()))?,
            );
        }

        Ok(headers)
    }

    /// Execute a request and decode the JSON response.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &Values,
        params: &Params,
    ) -> Result<T> {
        let bytes = self.execute(method, path, body, params).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute a request and return the raw response body.
    ///
    /// GET and DELETE send `body` as the query string, other methods as a
    /// form-encoded body. Transient failures are retried according to the
    /// configured [`RetryConfig`](super::RetryConfig) when the request is
    /// safe to repeat.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: &Values,
        params: &Params,
    ) -> Result<Vec<u8>> {
        let retry = &self.config.retry;
        let can_retry = matches!(method, Method::GET | Method::DELETE)
            || params.idempotency_key.is_some();
        let mut attempt = 0;

        loop {
            tracing::debug!(%method, path, attempt, "sending Stripe request");

            match self.send(method.clone(), path, body, params).await {
                Ok(bytes) => return Ok(bytes),
                Err(failure) => {
                    let retryable = match &failure {
                        Failure::Status(status, _) => retry.should_retry_status(status.as_u16()),
                        Failure::Transport(err) => err.is_connect() || err.is_timeout(),
                        Failure::Local(_) => false,
                    };

                    if !(can_retry && retryable && attempt < retry.max_retries) {
                        return Err(failure.into_error());
                    }

                    let backoff = retry.backoff_for_attempt(attempt);
                    tracing::warn!(
                        %method,
                        path,
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        "retrying Stripe request"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: &Values,
        params: &Params,
    ) -> std::result::Result<Vec<u8>, Failure> {
        let headers = self.build_headers(params).map_err(Failure::Local)?;
        let mut url = format!("{}{}", self.config.base_url, path);

        let request = if matches!(method, Method::GET | Method::DELETE) {
            if !body.is_empty() {
                url.push('?');
                url.push_str(&body.encode());
            }
            self.http.request(method, &url).headers(headers)
        } else {
            self.http
                .request(method, &url)
                .headers(headers)
                .header(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                )
                .body(body.encode())
        };

        let response = request.send().await.map_err(Failure::Transport)?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let bytes = response.bytes().await.map_err(Failure::Transport)?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap_or_default();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Failure::Status(
                status,
                Error::RateLimited {
                    retry_after_secs: retry_after.unwrap_or(1),
                },
            ));
        }

        Err(Failure::Status(
            status,
            Error::from_api_response(status.as_u16(), body),
        ))
    }
}

/// Outcome of a single failed attempt, kept apart so the retry loop can
/// inspect it before it becomes an [`Error`].
enum Failure {
    Status(StatusCode, Error),
    Transport(reqwest::Error),
    Local(Error),
}

impl Failure {
    fn into_error(self) -> Error {
        match self {
            Failure::Status(_, err) | Failure::Local(err) => err,
            Failure::Transport(err) if err.is_timeout() => Error::Timeout,
            Failure::Transport(err) => Error::Http(err),
        }
    }
}

impl Clone for StripeClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("api_key", &self.inner.api_key)
            .field("config", &self.inner.config)
            .finish()
    }
}
