//! Authenticated JSON client for the Pocketbook API.
//!
//! Thin wrapper over `reqwest`: base URL + optional bearer token, JSON in
//! and out, every body read through the shared envelope. Status-to-error
//! mapping lives in `error_from_response` so it can be tested without a
//! server.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::envelope::{self, Envelope};
use crate::error::{ApiError, FieldErrors};
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client carrying the session's bearer token (if any)
    pub fn new(base_url: impl Into<String>, session: &Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: session.token.clone(),
        }
    }

    /// Tokenless client, for login
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self::new(base_url, &Session::default())
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Envelope<T>, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let resp = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .query(query)
            .send()
            .await?;
        Self::read(resp).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let resp = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(body)
            .send()
            .await?;
        Self::read(resp).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let resp = self
            .http
            .put(&url)
            .headers(self.headers()?)
            .json(body)
            .send()
            .await?;
        Self::read(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Envelope<serde_json::Value>, ApiError> {
        let url = self.url(path);
        debug!(%url, "DELETE");
        let resp = self
            .http
            .delete(&url)
            .headers(self.headers()?)
            .send()
            .await?;
        Self::read(resp).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            // A token that can't be put in a header is as good as no token.
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::NotAuthenticated)?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    async fn read<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Envelope<T>, ApiError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "api error response");
            return Err(error_from_response(status.as_u16(), &body));
        }
        envelope::decode(&body)
    }
}

/// Map a non-2xx response to the error taxonomy. The body is expected to be
/// an envelope with `message`/`errors`, but anything (HTML error pages,
/// empty bodies) degrades gracefully.
pub(crate) fn error_from_response(status: u16, body: &str) -> ApiError {
    #[derive(Debug, Default, Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        errors: Option<FieldErrors>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.message.unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            format!("HTTP {status}")
        } else {
            trimmed.chars().take(200).collect()
        }
    });

    match status {
        401 => ApiError::Unauthorized(message),
        403 => ApiError::Forbidden(message),
        404 => ApiError::NotFound(message),
        422 => ApiError::Validation {
            message,
            errors: parsed.errors.unwrap_or_default(),
        },
        500..=599 => ApiError::Server { status, message },
        _ => ApiError::Http { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized() {
        let err = error_from_response(401, r#"{"success": false, "message": "token expired"}"#);
        match err {
            ApiError::Unauthorized(message) => assert_eq!(message, "token expired"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_keeps_field_errors() {
        let body = r#"{
            "success": false,
            "message": "The given data was invalid.",
            "errors": {
                "name": ["The name field is required."],
                "amount": ["The amount must be a number.", "The amount field is required."]
            }
        }"#;
        let err = error_from_response(422, body);
        let fields = err.field_errors().expect("validation error");
        assert_eq!(fields["name"].len(), 1);
        assert_eq!(fields["amount"].len(), 2);
        assert_eq!(err.to_string(), "The given data was invalid.");
    }

    #[test]
    fn test_server_error() {
        let err = error_from_response(503, "");
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "HTTP 503");
            }
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_degrades_to_text() {
        let err = error_from_response(404, "not found");
        match err {
            ApiError::NotFound(message) => assert_eq!(message, "not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_unmapped_status_is_generic_http() {
        let err = error_from_response(418, r#"{"message": "teapot"}"#);
        assert!(matches!(err, ApiError::Http { status: 418, .. }));
    }
}
