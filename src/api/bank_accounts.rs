//! Bank accounts service for customer sources and connected account
//! external accounts.

use std::sync::Arc;

use reqwest::Method;

use crate::client::paginated::ListIterBuilder;
use crate::client::{ClientInner, ListIter};
use crate::form::{self, Values};
use crate::models::{AccountId, BankAccount, BankAccountListParams, BankAccountParams, CustomerId};
use crate::{Error, Result};

/// Service for bank account operations.
///
/// Every call is scoped to a parent: a customer or a connected account.
///
/// # Example
///
/// ```no_run
/// use stripe_rs::models::{AccountHolderType, BankAccountParams, Currency};
///
/// # async fn example(client: stripe_rs::StripeClient) -> stripe_rs::Result<()> {
/// let account = client
///     .bank_accounts()
///     .create(&BankAccountParams {
///         country: Some("US".into()),
///         currency: Some(Currency::Usd),
///         account_number: Some("000123456789".into()),
///         routing_number: Some("110000000".into()),
///         account_holder_name: Some("Jane Austen".into()),
///         account_holder_type: Some(AccountHolderType::Individual),
///         ..BankAccountParams::for_customer("cus_123")
///     })
///     .await?;
/// println!("{}", account.display());
/// # Ok(())
/// # }
/// ```
pub struct BankAccountsService {
    inner: Arc<ClientInner>,
}

impl BankAccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Attach a new bank account to a customer or connected account.
    pub async fn create(&self, params: &BankAccountParams) -> Result<BankAccount> {
        let path = collection_path(params.customer.as_ref(), params.account_id.as_ref())?;

        let mut body = Values::new();
        params.append_to_as_source_or_external_account(&mut body);
        form::append_to(&mut body, &params.params)?;

        self.inner
            .call(Method::POST, &path, &body, &params.params)
            .await
    }

    /// Retrieve a bank account.
    pub async fn get(&self, id: &str, params: &BankAccountParams) -> Result<BankAccount> {
        let path = item_path(params.customer.as_ref(), params.account_id.as_ref(), id)?;
        let query = form::to_values(&params.params)?;

        self.inner
            .call(Method::GET, &path, &query, &params.params)
            .await
    }

    /// Update a bank account.
    pub async fn update(&self, id: &str, params: &BankAccountParams) -> Result<BankAccount> {
        let path = item_path(params.customer.as_ref(), params.account_id.as_ref(), id)?;
        let body = form::to_values(params)?;

        self.inner
            .call(Method::POST, &path, &body, &params.params)
            .await
    }

    /// Delete a bank account.
    ///
    /// The returned object has `deleted` set.
    pub async fn delete(&self, id: &str, params: &BankAccountParams) -> Result<BankAccount> {
        let path = item_path(params.customer.as_ref(), params.account_id.as_ref(), id)?;
        let query = form::to_values(&params.params)?;

        self.inner
            .call(Method::DELETE, &path, &query, &params.params)
            .await
    }

    /// List the bank accounts of a customer or connected account.
    pub async fn list(&self, params: &BankAccountListParams) -> Result<ListIter<BankAccount>> {
        let path = collection_path(params.customer.as_ref(), params.account_id.as_ref())?;

        let mut query = form::to_values(params)?;
        query.add("object", "bank_account");

        Ok(ListIterBuilder::new(self.inner.clone(), path)
            .start(&params.list, query)
            .await)
    }
}

/// The parent's collection path. The customer wins when both are set;
/// empty IDs count as unset.
fn collection_path(customer: Option<&CustomerId>, account: Option<&AccountId>) -> Result<String> {
    let customer = customer.filter(|c| !c.as_str().is_empty());
    let account = account.filter(|a| !a.as_str().is_empty());
    match (customer, account) {
        (Some(customer), _) => Ok(format!("/v1/customers/{customer}/sources")),
        (None, Some(account)) => Ok(format!("/v1/accounts/{account}/external_accounts")),
        (None, None) => Err(Error::InvalidInput(
            "Either a customer or an account ID must be set for bank account requests".to_string(),
        )),
    }
}

fn item_path(customer: Option<&CustomerId>, account: Option<&AccountId>, id: &str) -> Result<String> {
    Ok(format!("{}/{}", collection_path(customer, account)?, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_per_parent() {
        let customer = CustomerId::new("cus_123");
        let account = AccountId::new("acct_123");

        assert_eq!(
            collection_path(Some(&customer), None).unwrap(),
            "/v1/customers/cus_123/sources"
        );
        assert_eq!(
            item_path(None, Some(&account), "ba_123").unwrap(),
            "/v1/accounts/acct_123/external_accounts/ba_123"
        );
        assert_eq!(
            item_path(Some(&customer), Some(&account), "ba_123").unwrap(),
            "/v1/customers/cus_123/sources/ba_123"
        );
    }

    #[test]
    fn test_missing_parent() {
        let err = collection_path(None, None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_empty_ids_count_as_unset() {
        let empty = CustomerId::new("");
        let account = AccountId::new("acct_123");

        assert_eq!(
            collection_path(Some(&empty), Some(&account)).unwrap(),
            "/v1/accounts/acct_123/external_accounts"
        );
        assert!(matches!(
            collection_path(Some(&empty), None),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            item_path(None, Some(&AccountId::new("")), "ba_123"),
            Err(Error::InvalidInput(_))
        ));
    }
}
