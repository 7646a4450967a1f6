//! The JSON envelope every endpoint responds with:
//! `{ success, data, message?, errors?, pagination? }`

use pocketbook_core::{Page, PageCursor};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, FieldErrors};

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
    #[serde(default)]
    pub pagination: Option<PageCursor>,
}

impl<T> Envelope<T> {
    fn check_success(&mut self) -> Result<(), ApiError> {
        if self.success {
            return Ok(());
        }
        let message = self
            .message
            .take()
            .unwrap_or_else(|| "request rejected".to_string());
        Err(ApiError::Rejected(message))
    }

    /// Payload of a successful response
    pub fn into_data(mut self) -> Result<T, ApiError> {
        self.check_success()?;
        self.data
            .ok_or_else(|| ApiError::Decode("successful response carried no data".to_string()))
    }

    /// For endpoints whose payload we don't care about (delete, logout)
    pub fn into_unit(mut self) -> Result<(), ApiError> {
        self.check_success()
    }
}

impl<T> Envelope<Vec<T>> {
    /// Collection payload plus its pagination cursor
    pub fn into_page(mut self) -> Result<Page<T>, ApiError> {
        self.check_success()?;
        let items = self
            .data
            .take()
            .ok_or_else(|| ApiError::Decode("paged response carried no data".to_string()))?;
        let cursor = self
            .pagination
            .ok_or_else(|| ApiError::Decode("paged response carried no pagination".to_string()))?;
        Ok(Page { items, cursor })
    }
}

/// Parse a response body into an envelope
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_core::Transaction;

    #[test]
    fn test_paged_envelope_decodes() {
        let body = r#"{
            "success": true,
            "data": [
                {"id": 1, "name": "Salary", "amount": 2400.0, "type": "income",
                 "date": "2026-02-01", "account_id": 1},
                {"id": 2, "name": "Rent", "amount": -900.0, "type": "expense",
                 "date": "2026-02-03", "account_id": 1, "has_items": false}
            ],
            "pagination": {"current_page": 1, "last_page": 3, "total": 5, "per_page": 2}
        }"#;
        let page = decode::<Vec<Transaction>>(body).unwrap().into_page().unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Salary");
        assert_eq!(page.cursor.last_page, 3);
    }

    #[test]
    fn test_rejected_envelope_surfaces_message() {
        let body = r#"{"success": false, "message": "account is archived"}"#;
        let err = decode::<Vec<Transaction>>(body)
            .unwrap()
            .into_page()
            .unwrap_err();
        match err {
            ApiError::Rejected(message) => assert_eq!(message, "account is archived"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_pagination_is_a_decode_error() {
        let body = r#"{"success": true, "data": []}"#;
        let err = decode::<Vec<Transaction>>(body)
            .unwrap()
            .into_page()
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        let err = decode::<Vec<Transaction>>("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_into_unit_ignores_payload() {
        let body = r#"{"success": true, "message": "deleted"}"#;
        decode::<serde_json::Value>(body).unwrap().into_unit().unwrap();
    }
}
