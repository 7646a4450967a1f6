//! Account CRUD

use pocketbook_core::{Account, AccountKind};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    pub name: String,
    pub kind: AccountKind,
    /// Opening balance
    pub balance: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<AccountKind>,
}

#[derive(Debug, Clone)]
pub struct AccountService {
    client: ApiClient,
}

impl AccountService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Accounts are few; the endpoint is not paginated
    pub async fn list(&self) -> Result<Vec<Account>, ApiError> {
        self.client.get("accounts", &[]).await?.into_data()
    }

    pub async fn get(&self, id: i64) -> Result<Account, ApiError> {
        self.client
            .get(&format!("accounts/{id}"), &[])
            .await?
            .into_data()
    }

    pub async fn create(&self, account: &NewAccount) -> Result<Account, ApiError> {
        self.client.post("accounts", account).await?.into_data()
    }

    pub async fn update(&self, id: i64, patch: &AccountPatch) -> Result<Account, ApiError> {
        self.client
            .put(&format!("accounts/{id}"), patch)
            .await?
            .into_data()
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("accounts/{id}"))
            .await?
            .into_unit()
    }
}
