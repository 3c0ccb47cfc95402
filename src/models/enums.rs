//! Enumeration types for the Stripe API.
//!
//! String enums returned by or sent to the API. Variants the API may add
//! later deserialize as `Unknown` where one is provided.

use serde::{Deserialize, Serialize};

/// Verification status of a bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BankAccountStatus {
    /// Added but not yet validated or verified
    #[default]
    New,
    /// Micro-deposit or instant validation succeeded
    Validated,
    /// Ownership has been verified
    Verified,
    /// Verification failed
    VerificationFailed,
    /// A transfer to this account failed
    Errored,
    /// Unknown status
    #[serde(other)]
    Unknown,
}

impl BankAccountStatus {
    /// Returns `true` once the account can be debited.
    pub fn is_usable(&self) -> bool {
        matches!(self, BankAccountStatus::Validated | BankAccountStatus::Verified)
    }
}

/// Type of entity holding a bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountHolderType {
    /// A person
    Individual,
    /// A business
    Company,
}

impl AccountHolderType {
    /// Wire value, as sent in form bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountHolderType::Individual => "individual",
            AccountHolderType::Company => "company",
        }
    }
}

/// Card brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    /// American Express
    #[serde(rename = "American Express")]
    Amex,
    /// Diners Club
    #[serde(rename = "Diners Club")]
    DinersClub,
    /// Discover
    Discover,
    /// JCB
    #[serde(rename = "JCB")]
    Jcb,
    /// Mastercard
    MasterCard,
    /// UnionPay
    UnionPay,
    /// Visa
    Visa,
    /// Brand could not be determined
    #[serde(other)]
    Unknown,
}

impl CardBrand {
    /// Display name of the brand.
    pub fn name(&self) -> &'static str {
        match self {
            CardBrand::Amex => "American Express",
            CardBrand::DinersClub => "Diners Club",
            CardBrand::Discover => "Discover",
            CardBrand::Jcb => "JCB",
            CardBrand::MasterCard => "MasterCard",
            CardBrand::UnionPay => "UnionPay",
            CardBrand::Visa => "Visa",
            CardBrand::Unknown => "Unknown",
        }
    }
}

/// Funding type of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFunding {
    /// Credit card
    Credit,
    /// Debit card
    Debit,
    /// Prepaid card
    Prepaid,
    /// Funding could not be determined
    #[serde(other)]
    Unknown,
}

/// Status of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    /// The charge succeeded
    Succeeded,
    /// The charge is still being processed
    Pending,
    /// The charge failed
    Failed,
}

/// Fraud assessment reported by the merchant on a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudReport {
    /// The merchant believes the charge is fraudulent
    Fraudulent,
    /// The merchant believes the charge is legitimate
    Safe,
    /// Unknown report value
    #[serde(other)]
    Unknown,
}

/// Status of a source object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    /// Canceled, can no longer be used
    Canceled,
    /// Ready to be charged
    Chargeable,
    /// Single-use source that has been charged
    Consumed,
    /// Failed to become chargeable
    Failed,
    /// Waiting on customer action
    Pending,
    /// Unknown status
    #[serde(other)]
    Unknown,
}

impl SourceStatus {
    /// Returns `true` if the source can be charged now.
    pub fn is_chargeable(&self) -> bool {
        matches!(self, SourceStatus::Chargeable)
    }
}

/// Authentication flow a source requires from the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFlow {
    /// The customer is redirected to authenticate
    Redirect,
    /// The customer pushes funds to a receiver
    Receiver,
    /// The customer enters a verification code
    CodeVerification,
    /// No flow required
    None,
}

/// Whether a source can be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceUsage {
    /// Can be charged repeatedly
    Reusable,
    /// Can be charged once
    SingleUse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_brand_names() {
        let brand: CardBrand = serde_json::from_str(r#""American Express""#).unwrap();
        assert_eq!(brand, CardBrand::Amex);
        assert_eq!(brand.name(), "American Express");

        let unknown: CardBrand = serde_json::from_str(r#""Cartes Bancaires""#).unwrap();
        assert_eq!(unknown, CardBrand::Unknown);
    }

    #[test]
    fn test_bank_account_status() {
        let status: BankAccountStatus = serde_json::from_str(r#""verification_failed""#).unwrap();
        assert_eq!(status, BankAccountStatus::VerificationFailed);
        assert!(!status.is_usable());
        assert!(BankAccountStatus::Verified.is_usable());
    }

    #[test]
    fn test_fraud_report_fallback() {
        let report: FraudReport = serde_json::from_str(r#""fraudulent""#).unwrap();
        assert_eq!(report, FraudReport::Fraudulent);

        let other: FraudReport = serde_json::from_str(r#""suspicious""#).unwrap();
        assert_eq!(other, FraudReport::Unknown);
    }

    #[test]
    fn test_source_enums_snake_case() {
        assert_eq!(
            serde_json::to_string(&SourceFlow::CodeVerification).unwrap(),
            r#""code_verification""#
        );
        assert_eq!(
            serde_json::to_string(&SourceUsage::SingleUse).unwrap(),
            r#""single_use""#
        );
        assert_eq!(AccountHolderType::Company.as_str(), "company");
    }
}
