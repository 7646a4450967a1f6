//! Reporting totals

use pocketbook_core::{TransactionFilter, TransactionKind};
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct KindTotal {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub total: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub income_total: f64,
    pub expense_total: f64,
    pub net: f64,
    #[serde(default)]
    pub by_kind: Vec<KindTotal>,
}

#[derive(Debug, Clone)]
pub struct ReportService {
    client: ApiClient,
}

impl ReportService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET reports/summary?<filter>`: totals for a date range / account
    pub async fn summary(&self, filter: &TransactionFilter) -> Result<ReportSummary, ApiError> {
        let query = filter.to_query_pairs();
        self.client
            .get("reports/summary", &query)
            .await?
            .into_data()
    }
}
