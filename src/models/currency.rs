//! Three-letter ISO currency codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// A currency supported by Stripe.
///
/// Serialized in lowercase as Stripe expects (`usd`). Codes outside this
/// catalog are kept in [`Currency::Unknown`] and sent back unchanged.
///
/// # Example
///
/// ```
/// use stripe_rs::models::Currency;
///
/// let usd: Currency = "USD".parse().unwrap();
/// assert_eq!(usd, Currency::Usd);
/// assert_eq!(usd.to_string(), "usd");
/// assert!(Currency::Jpy.is_zero_decimal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    /// United Arab Emirates Dirham
    Aed,
    /// Australian Dollar
    Aud,
    /// Brazilian Real
    Brl,
    /// Canadian Dollar
    Cad,
    /// Swiss Franc
    Chf,
    /// Chinese Renminbi Yuan
    Cny,
    /// Czech Koruna
    Czk,
    /// Danish Krone
    Dkk,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Hong Kong Dollar
    Hkd,
    /// Hungarian Forint
    Huf,
    /// Indian Rupee
    Inr,
    /// Japanese Yen
    Jpy,
    /// South Korean Won
    Krw,
    /// Mexican Peso
    Mxn,
    /// Norwegian Krone
    Nok,
    /// New Zealand Dollar
    Nzd,
    /// Polish Złoty
    Pln,
    /// Swedish Krona
    Sek,
    /// Singapore Dollar
    Sgd,
    /// United States Dollar
    Usd,
    /// South African Rand
    Zar,
    /// Any other code, lowercased
    Unknown(String),
}

impl Currency {
    /// Lowercase ISO code, as sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Currency::Aed => "aed",
            Currency::Aud => "aud",
            Currency::Brl => "brl",
            Currency::Cad => "cad",
            Currency::Chf => "chf",
            Currency::Cny => "cny",
            Currency::Czk => "czk",
            Currency::Dkk => "dkk",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
            Currency::Hkd => "hkd",
            Currency::Huf => "huf",
            Currency::Inr => "inr",
            Currency::Jpy => "jpy",
            Currency::Krw => "krw",
            Currency::Mxn => "mxn",
            Currency::Nok => "nok",
            Currency::Nzd => "nzd",
            Currency::Pln => "pln",
            Currency::Sek => "sek",
            Currency::Sgd => "sgd",
            Currency::Usd => "usd",
            Currency::Zar => "zar",
            Currency::Unknown(code) => code.as_str(),
        }
    }

    fn from_code(code: &str) -> Self {
        let code = code.to_ascii_lowercase();
        match code.as_str() {
            "aed" => Currency::Aed,
            "aud" => Currency::Aud,
            "brl" => Currency::Brl,
            "cad" => Currency::Cad,
            "chf" => Currency::Chf,
            "cny" => Currency::Cny,
            "czk" => Currency::Czk,
            "dkk" => Currency::Dkk,
            "eur" => Currency::Eur,
            "gbp" => Currency::Gbp,
            "hkd" => Currency::Hkd,
            "huf" => Currency::Huf,
            "inr" => Currency::Inr,
            "jpy" => Currency::Jpy,
            "krw" => Currency::Krw,
            "mxn" => Currency::Mxn,
            "nok" => Currency::Nok,
            "nzd" => Currency::Nzd,
            "pln" => Currency::Pln,
            "sek" => Currency::Sek,
            "sgd" => Currency::Sgd,
            "usd" => Currency::Usd,
            "zar" => Currency::Zar,
            _ => Currency::Unknown(code),
        }
    }

    /// Returns `true` if amounts are given in whole units rather than
    /// hundredths (e.g. `1000` JPY is ¥1000, `1000` USD is $10.00).
    pub fn is_zero_decimal(&self) -> bool {
        matches!(self, Currency::Jpy | Currency::Krw)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidInput(format!("Invalid currency code: {s}")));
        }
        Ok(Currency::from_code(s))
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Currency::from_code(&code))
    }
}
