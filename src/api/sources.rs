//! Sources service for source objects.

use std::sync::Arc;

use reqwest::Method;

use crate::client::ClientInner;
use crate::form;
use crate::models::{Params, SourceObject, SourceObjectDetachParams, SourceObjectParams};
use crate::Result;

use super::require_customer;

/// Service for source object operations.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::models::{Currency, SourceObjectParams, SourceOwnerParams};
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// let source = client
///     .sources()
///     .create(&SourceObjectParams {
///         source_type: Some("bitcoin".into()),
///         amount: Some(1000),
///         currency: Some(Currency::Usd),
///         owner: Some(SourceOwnerParams {
///             email: Some("jenny.rosen@example.com".into()),
///             ..Default::default()
///         }),
///         ..Default::default()
///     })
///     .await?;
/// println!("{} is {:?}", source.id, source.status);
/// # Ok(())
/// # }
/// ```
pub struct SourcesService {
    inner: Arc<ClientInner>,
}

impl SourcesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a source object.
    pub async fn create(&self, params: &SourceObjectParams) -> Result<SourceObject> {
        let body = form::to_values(params)?;
        self.inner
            .call(Method::POST, "/v1/sources", &body, &params.params)
            .await
    }

    /// Retrieve a source object.
    pub async fn get(&self, id: &str, params: Option<&Params>) -> Result<SourceObject> {
        let params = params.cloned().unwrap_or_default();
        let query = form::to_values(&params)?;

        self.inner
            .call(Method::GET, &format!("/v1/sources/{id}"), &query, &params)
            .await
    }

    /// Update a source object's owner, metadata or other mutable fields.
    pub async fn update(&self, id: &str, params: &SourceObjectParams) -> Result<SourceObject> {
        let body = form::to_values(params)?;
        self.inner
            .call(Method::POST, &format!("/v1/sources/{id}"), &body, &params.params)
            .await
    }

    /// Detach a source object from a customer.
    pub async fn detach(&self, id: &str, params: &SourceObjectDetachParams) -> Result<SourceObject> {
        let customer = require_customer(params.customer.as_ref())?;
        let query = form::to_values(params)?;

        self.inner
            .call(
                Method::DELETE,
                &format!("/v1/customers/{customer}/sources/{id}"),
                &query,
                &params.params,
            )
            .await
    }
}
