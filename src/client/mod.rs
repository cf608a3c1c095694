//! Backend client
//!
//! HTTP access to the analysis service: `/chat` for fact-checking a
//! statement and `/ocr` for pulling text out of an uploaded image.

use crate::types::locale::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend connection settings
#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("FACTLENS_BACKEND_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| "http://127.0.0.1:5000".to_string()),
        }
    }
}

/// Backend request errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Failure reported by the backend itself, shown verbatim
    #[error("{0}")]
    Backend(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: String,
}

#[derive(Debug, Default, Deserialize)]
struct OcrResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl OcrResponse {
    fn into_text(self, success: bool) -> Result<String, ClientError> {
        if !success {
            return Err(ClientError::Backend(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }
        match self.text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ClientError::Backend(
                self.error
                    .unwrap_or_else(|| "No recognizable text found in the image.".to_string()),
            )),
        }
    }
}

/// Guess an upload's MIME type from its file extension
fn image_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Client for the analysis backend
pub struct BackendClient {
    config: BackendConfig,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(BackendConfig::default())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Ask the backend to fact-check `message`, answering in `locale`.
    ///
    /// Returns the raw reply text; parsing is left to the caller.
    pub async fn analyze(&self, message: &str, locale: Locale) -> Result<String, ClientError> {
        tracing::info!(
            language = locale.language_name(),
            tag = locale.tag(),
            preview = crate::truncate_str(message, 80),
            "Requesting analysis"
        );

        let response: ChatResponse = self
            .client
            .post(self.endpoint("chat"))
            .json(&ChatRequest {
                message,
                language: locale.tag(),
            })
            .send()
            .await?
            .json()
            .await?;

        tracing::debug!(chars = response.reply.len(), "Received analysis reply");
        Ok(response.reply)
    }

    /// Upload an image and return the text the backend read from it
    pub async fn extract_text(&self, file_name: String, bytes: Vec<u8>) -> Result<String, ClientError> {
        tracing::info!(file = %file_name, size = bytes.len(), "Uploading image for OCR");

        let mime = image_mime(&file_name);
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(self.endpoint("ocr"))
            .multipart(form)
            .send()
            .await?;

        let success = response.status().is_success();
        let status = response.status();
        let body: OcrResponse = response.json().await.unwrap_or_else(|e| {
            tracing::warn!("Unreadable OCR response ({}): {}", status, e);
            OcrResponse::default()
        });

        body.into_text(success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let client = BackendClient::new(BackendConfig {
            base_url: "http://localhost:5000/".to_string(),
        });
        assert_eq!(client.endpoint("chat"), "http://localhost:5000/chat");
        assert_eq!(client.endpoint("ocr"), "http://localhost:5000/ocr");
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest {
            message: "The moon is cheese",
            language: Locale::HiIn.tag(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "The moon is cheese", "language": "hi-IN" })
        );
    }

    #[test]
    fn test_ocr_success() {
        let body: OcrResponse = serde_json::from_str(r#"{"text": "BREAKING NEWS"}"#).unwrap();
        assert_eq!(body.into_text(true).unwrap(), "BREAKING NEWS");
    }

    #[test]
    fn test_ocr_backend_error_is_verbatim() {
        let body: OcrResponse = serde_json::from_str(r#"{"error": "No image part in the request"}"#).unwrap();
        let err = body.into_text(false).unwrap_err();
        assert!(matches!(err, ClientError::Backend(_)));
        assert_eq!(err.to_string(), "No image part in the request");
    }

    #[test]
    fn test_ocr_failure_without_body() {
        let err = OcrResponse::default().into_text(false).unwrap_err();
        assert_eq!(err.to_string(), "Unknown error");
    }

    #[test]
    fn test_ocr_empty_text() {
        let body: OcrResponse = serde_json::from_str(r#"{"text": "  "}"#).unwrap();
        assert!(body.into_text(true).is_err());
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime("photo.JPG"), "image/jpeg");
        assert_eq!(image_mime("scan.png"), "image/png");
        assert_eq!(image_mime("noext"), "application/octet-stream");
    }
}
