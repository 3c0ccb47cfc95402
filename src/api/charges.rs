//! Charges service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::paginated::ListIterBuilder;
use crate::client::{ClientInner, ListIter};
use crate::form;
use crate::models::{CaptureParams, Charge, ChargeListParams, ChargeParams, Params};
use crate::Result;

/// Service for charge operations.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::models::{CaptureParams, ChargeParams, Currency, SourceParams};
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// // Authorize now, capture later
/// let charge = client
///     .charges()
///     .create(&ChargeParams {
///         amount: Some(1500),
///         currency: Some(Currency::Eur),
///         source: Some(SourceParams::token("tok_visa")),
///         capture: Some(false),
///         ..Default::default()
///     })
///     .await?;
///
/// let captured = client
///     .charges()
///     .capture(&charge.id, &CaptureParams::default())
///     .await?;
/// assert!(captured.captured);
/// # Ok(())
/// # }
/// ```
pub struct ChargesService {
    inner: Arc<ClientInner>,
}

impl ChargesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a charge.
    pub async fn create(&self, params: &ChargeParams) -> Result<Charge> {
        let body = form::to_values(params)?;
        self.inner
            .call(Method::POST, "/v1/charges", &body, &params.params)
            .await
    }

    /// Retrieve a charge.
    pub async fn get(&self, id: &str, params: Option<&Params>) -> Result<Charge> {
        let params = params.cloned().unwrap_or_default();
        let query = form::to_values(&params)?;

        self.inner
            .call(Method::GET, &format!("/v1/charges/{id}"), &query, &params)
            .await
    }

    /// Update a charge's description, metadata, fraud report or shipping.
    pub async fn update(&self, id: &str, params: &ChargeParams) -> Result<Charge> {
        let body = form::to_values(params)?;
        self.inner
            .call(Method::POST, &format!("/v1/charges/{id}"), &body, &params.params)
            .await
    }

    /// Capture a charge created with `capture: Some(false)`.
    pub async fn capture(&self, id: &str, params: &CaptureParams) -> Result<Charge> {
        let body = form::to_values(params)?;
        self.inner
            .call(
                Method::POST,
                &format!("/v1/charges/{id}/capture"),
                &body,
                &params.params,
            )
            .await
    }

    /// List charges, most recent first.
    pub async fn list(&self, params: &ChargeListParams) -> Result<ListIter<Charge>> {
        let query = form::to_values(params)?;

        Ok(ListIterBuilder::new(self.inner.clone(), "/v1/charges")
            .start(&params.list, query)
            .await)
    }
}
