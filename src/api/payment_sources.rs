//! Payment sources service for a customer's cards, bank accounts and
//! source objects.

use std::sync::Arc;

use reqwest::Method;

use crate::client::paginated::ListIterBuilder;
use crate::client::{ClientInner, ListIter};
use crate::form;
use crate::models::{CustomerSourceParams, PaymentSource, SourceListParams, SourceVerifyParams};
use crate::Result;

use super::require_customer;

/// Service for customer payment source operations.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::models::{CustomerSourceParams, Object, SourceVerifyParams};
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// let mut params = CustomerSourceParams::for_customer("cus_123");
/// params.set_source("btok_123");
/// let source = client.payment_sources().create(&params).await?;
///
/// let verified = client
///     .payment_sources()
///     .verify(source.id(), &SourceVerifyParams::new("cus_123", [32, 45]))
///     .await?;
/// println!("{:?}", verified.as_bank_account().map(|b| b.status));
/// # Ok(())
/// # }
/// ```
pub struct PaymentSourcesService {
    inner: Arc<ClientInner>,
}

impl PaymentSourcesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Attach a source to a customer.
    pub async fn create(&self, params: &CustomerSourceParams) -> Result<PaymentSource> {
        let customer = require_customer(params.customer.as_ref())?;
        let body = form::to_values(params)?;

        self.inner
            .call(
                Method::POST,
                &format!("/v1/customers/{customer}/sources"),
                &body,
                &params.params,
            )
            .await
    }

    /// Retrieve one of a customer's sources.
    pub async fn get(&self, id: &str, params: &CustomerSourceParams) -> Result<PaymentSource> {
        let customer = require_customer(params.customer.as_ref())?;
        let query = form::to_values(&params.params)?;

        self.inner
            .call(
                Method::GET,
                &format!("/v1/customers/{customer}/sources/{id}"),
                &query,
                &params.params,
            )
            .await
    }

    /// Update one of a customer's sources.
    pub async fn update(&self, id: &str, params: &CustomerSourceParams) -> Result<PaymentSource> {
        let customer = require_customer(params.customer.as_ref())?;
        let body = form::to_values(params)?;

        self.inner
            .call(
                Method::POST,
                &format!("/v1/customers/{customer}/sources/{id}"),
                &body,
                &params.params,
            )
            .await
    }

    /// Remove a source from a customer.
    pub async fn delete(&self, id: &str, params: &CustomerSourceParams) -> Result<PaymentSource> {
        let customer = require_customer(params.customer.as_ref())?;
        let query = form::to_values(&params.params)?;

        self.inner
            .call(
                Method::DELETE,
                &format!("/v1/customers/{customer}/sources/{id}"),
                &query,
                &params.params,
            )
            .await
    }

    /// List a customer's sources.
    pub async fn list(&self, params: &SourceListParams) -> Result<ListIter<PaymentSource>> {
        let customer = require_customer(params.customer.as_ref())?;
        let query = form::to_values(params)?;

        Ok(
            ListIterBuilder::new(self.inner.clone(), format!("/v1/customers/{customer}/sources"))
                .start(&params.list, query)
                .await,
        )
    }

    /// Verify a bank account with the two micro-deposit amounts.
    pub async fn verify(&self, id: &str, params: &SourceVerifyParams) -> Result<PaymentSource> {
        let customer = require_customer(params.customer.as_ref())?;
        let body = form::to_values(params)?;

        self.inner
            .call(
                Method::POST,
                &format!("/v1/customers/{customer}/sources/{id}/verify"),
                &body,
                &params.params,
            )
            .await
    }
}
