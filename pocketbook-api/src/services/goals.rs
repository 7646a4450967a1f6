//! Savings-goal CRUD

use chrono::NaiveDate;
use pocketbook_core::{Goal, Page};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::listing::PageSource;

#[derive(Debug, Clone, Serialize)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GoalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct GoalService {
    client: ApiClient,
}

impl GoalService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET goals?page=N`
    pub async fn list(&self, page: u32) -> Result<Page<Goal>, ApiError> {
        let query = vec![("page".to_string(), page.to_string())];
        self.client
            .get::<Vec<Goal>>("goals", &query)
            .await?
            .into_page()
    }

    pub async fn create(&self, goal: &NewGoal) -> Result<Goal, ApiError> {
        self.client.post("goals", goal).await?.into_data()
    }

    pub async fn update(&self, id: i64, patch: &GoalPatch) -> Result<Goal, ApiError> {
        self.client
            .put(&format!("goals/{id}"), patch)
            .await?
            .into_data()
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("goals/{id}"))
            .await?
            .into_unit()
    }
}

impl PageSource for GoalService {
    type Item = Goal;
    type Filter = ();

    async fn fetch_page(&self, page: u32, _filter: &()) -> Result<Page<Goal>, ApiError> {
        self.list(page).await
    }
}
