//! Account types

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Account classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountKind {
    #[serde(rename = "bank")]
    Bank,
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "cash")]
    Cash,
    #[serde(rename = "savings")]
    Savings,
    /// Anything the server reports that we don't model explicitly
    #[serde(other, rename = "other")]
    Other,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Bank => "bank",
            AccountKind::Card => "card",
            AccountKind::Cash => "cash",
            AccountKind::Savings => "savings",
            AccountKind::Other => "other",
        }
    }
}

impl std::str::FromStr for AccountKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bank" => Ok(AccountKind::Bank),
            "card" => Ok(AccountKind::Card),
            "cash" => Ok(AccountKind::Cash),
            "savings" => Ok(AccountKind::Savings),
            "other" => Ok(AccountKind::Other),
            unknown => bail!("unknown account kind: {unknown} (expected bank|card|cash|savings|other)"),
        }
    }
}

/// A money account the user tracks payments against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub kind: AccountKind,
    /// Current balance as reported by the server
    pub balance: f64,
}
