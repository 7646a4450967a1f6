//! Transaction and payment-item types

use anyhow::bail;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction/category of a transaction as reported by the API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
    #[serde(rename = "transfer")]
    Transfer,
    #[serde(rename = "withdrawal")]
    Withdrawal,
}

impl TransactionKind {
    /// Wire name, identical to the serde rename
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Transfer => "transfer",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            "transfer" => Ok(TransactionKind::Transfer),
            "withdrawal" => Ok(TransactionKind::Withdrawal),
            other => bail!("unknown transaction kind: {other} (expected income|expense|transfer|withdrawal)"),
        }
    }
}

/// A transaction or scheduled payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    /// Human-readable label ("Rent March", "Salary")
    pub name: String,
    /// Signed amount; `kind` is authoritative for direction
    pub amount: f64,
    /// Wire name is `type`
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Date of the transaction (YYYY-MM-DD)
    pub date: NaiveDate,
    pub account_id: i64,
    /// True when line items exist for this payment
    #[serde(default)]
    pub has_items: bool,
    /// True for payments scheduled into the future
    #[serde(default)]
    pub is_scheduled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

/// A line item attached to a payment (`has_items` on the parent)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentItem {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl PaymentItem {
    /// amount * quantity
    pub fn line_total(&self) -> f64 {
        self.amount * self.quantity as f64
    }
}
