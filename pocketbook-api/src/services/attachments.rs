//! Attachment upload and listing.
//!
//! The API takes upload payloads as base64 inside the JSON body, the same
//! way the mobile clients send picked images.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use pocketbook_core::Attachment;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    filename: &'a str,
    content_type: &'static str,
    /// Base64 of the file bytes
    data: String,
}

#[derive(Debug, Clone)]
pub struct AttachmentService {
    client: ApiClient,
}

impl AttachmentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST transactions/{id}/attachments` with the encoded payload
    pub async fn upload(
        &self,
        transaction_id: i64,
        filename: &str,
        bytes: &[u8],
    ) -> Result<Attachment, ApiError> {
        let body = UploadRequest {
            filename,
            content_type: guess_content_type(filename),
            data: BASE64.encode(bytes),
        };
        self.client
            .post(&format!("transactions/{transaction_id}/attachments"), &body)
            .await?
            .into_data()
    }

    pub async fn list(&self, transaction_id: i64) -> Result<Vec<Attachment>, ApiError> {
        self.client
            .get(&format!("transactions/{transaction_id}/attachments"), &[])
            .await?
            .into_data()
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("attachments/{id}"))
            .await?
            .into_unit()
    }
}

/// Content type from the filename extension; the server re-checks anyway
fn guess_content_type(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("receipt.JPG"), "image/jpeg");
        assert_eq!(guess_content_type("scan.pdf"), "application/pdf");
        assert_eq!(guess_content_type("noextension"), "application/octet-stream");
        assert_eq!(guess_content_type("archive.tar.gz"), "application/octet-stream");
    }

    #[test]
    fn test_upload_payload_is_base64() {
        let body = UploadRequest {
            filename: "receipt.png",
            content_type: guess_content_type("receipt.png"),
            data: BASE64.encode(b"fake image bytes"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["content_type"], "image/png");
        let decoded = BASE64.decode(json["data"].as_str().unwrap()).unwrap();
        assert_eq!(decoded, b"fake image bytes");
    }
}
