//! Transaction listing and lookup

use pocketbook_core::{Page, Transaction, TransactionFilter};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::listing::PageSource;

#[derive(Debug, Clone)]
pub struct TransactionService {
    client: ApiClient,
    per_page: Option<u32>,
}

impl TransactionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client, per_page: None }
    }

    /// Ask the server for a specific page size instead of its default
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// `GET transactions?page=N&<filter>`
    pub async fn list(
        &self,
        page: u32,
        filter: &TransactionFilter,
    ) -> Result<Page<Transaction>, ApiError> {
        let mut query = filter.to_query_pairs();
        query.push(("page".to_string(), page.to_string()));
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        self.client
            .get::<Vec<Transaction>>("transactions", &query)
            .await?
            .into_page()
    }

    pub async fn get(&self, id: i64) -> Result<Transaction, ApiError> {
        self.client
            .get(&format!("transactions/{id}"), &[])
            .await?
            .into_data()
    }
}

impl PageSource for TransactionService {
    type Item = Transaction;
    type Filter = TransactionFilter;

    async fn fetch_page(
        &self,
        page: u32,
        filter: &TransactionFilter,
    ) -> Result<Page<Transaction>, ApiError> {
        self.list(page, filter).await
    }
}
