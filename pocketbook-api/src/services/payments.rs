//! Payment create/update/delete and line-item listing

use chrono::NaiveDate;
use pocketbook_core::{Page, PaymentItem, Transaction, TransactionKind};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::listing::PageSource;

#[derive(Debug, Clone, Serialize)]
pub struct NewPaymentItem {
    pub name: String,
    pub amount: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPayment {
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub account_id: i64,
    pub is_scheduled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Line items create `has_items` payments in one request
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NewPaymentItem>,
}

/// Partial update; unset fields are left untouched server-side
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_scheduled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PaymentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.account_id.is_none()
            && self.is_scheduled.is_none()
            && self.notes.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct PaymentService {
    client: ApiClient,
}

impl PaymentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The server answers with its copy of the payment; callers re-fetch
    /// lists instead of splicing it in locally.
    pub async fn create(&self, payment: &NewPayment) -> Result<Transaction, ApiError> {
        self.client.post("payments", payment).await?.into_data()
    }

    pub async fn update(&self, id: i64, patch: &PaymentPatch) -> Result<Transaction, ApiError> {
        self.client
            .put(&format!("payments/{id}"), patch)
            .await?
            .into_data()
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("payments/{id}"))
            .await?
            .into_unit()
    }

    /// `GET payments/{id}/items?page=N`
    pub async fn items(&self, payment_id: i64, page: u32) -> Result<Page<PaymentItem>, ApiError> {
        let query = vec![("page".to_string(), page.to_string())];
        self.client
            .get::<Vec<PaymentItem>>(&format!("payments/{payment_id}/items"), &query)
            .await?
            .into_page()
    }
}

/// Page source for one payment's line items (the item-list view)
pub struct PaymentItemsSource {
    service: PaymentService,
    payment_id: i64,
}

impl PaymentItemsSource {
    pub fn new(service: PaymentService, payment_id: i64) -> Self {
        Self { service, payment_id }
    }
}

impl PageSource for PaymentItemsSource {
    type Item = PaymentItem;
    type Filter = ();

    async fn fetch_page(&self, page: u32, _filter: &()) -> Result<Page<PaymentItem>, ApiError> {
        self.service.items(self.payment_id, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = PaymentPatch {
            amount: Some(-12.5),
            notes: Some("split with flatmate".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"amount": -12.5, "notes": "split with flatmate"})
        );
    }

    #[test]
    fn test_empty_patch_is_detectable() {
        assert!(PaymentPatch::default().is_empty());
        let patch = PaymentPatch { amount: Some(1.0), ..Default::default() };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_new_payment_omits_empty_items() {
        let payment = NewPayment {
            name: "Rent".to_string(),
            amount: -900.0,
            kind: TransactionKind::Expense,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            account_id: 1,
            is_scheduled: true,
            notes: None,
            items: Vec::new(),
        };
        let json = serde_json::to_value(&payment).unwrap();
        assert!(json.get("items").is_none());
        assert!(json.get("notes").is_none());
        assert_eq!(json["type"], "expense");
    }
}
