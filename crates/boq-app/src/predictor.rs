//! Structural prediction client
//!
//! The prediction service maps a floor-plan image to building attributes.
//! Anything that turns image bytes into a [`PredictionPayload`] can act as
//! a predictor, including plain closures.

use boq_types::{Error, PredictionPayload, Result};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;

/// Source of structural predictions for an uploaded image
pub trait StructuralPredictor {
    fn predict(&self, image: &[u8]) -> Result<PredictionPayload>;
}

impl<F> StructuralPredictor for F
where
    F: Fn(&[u8]) -> Result<PredictionPayload>,
{
    fn predict(&self, image: &[u8]) -> Result<PredictionPayload> {
        self(image)
    }
}

/// Predictor backed by the HTTP prediction service.
///
/// Posts the image as the multipart field `image` and expects a JSON
/// attribute record back.
pub struct HttpPredictor {
    client: Client,
    url: String,
}

impl HttpPredictor {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Prediction(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.predictor_url.clone(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StructuralPredictor for HttpPredictor {
    fn predict(&self, image: &[u8]) -> Result<PredictionPayload> {
        let (file_name, mime) = upload_metadata(image);
        debug!(url = %self.url, bytes = image.len(), mime, "sending image to predictor");

        let part = Part::bytes(image.to_vec())
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| Error::Prediction(e.to_string()))?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .map_err(|e| Error::Prediction(format!("request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::Prediction(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            warn!(%status, "predictor rejected the request");
            return Err(Error::Prediction(error_message(status.as_u16(), &body)));
        }

        PredictionPayload::from_json(&body)
    }
}

/// File name and MIME type for the upload, guessed from the image bytes
fn upload_metadata(image: &[u8]) -> (String, &'static str) {
    match image::guess_format(image) {
        Ok(format) => {
            let ext = format.extensions_str().first().copied().unwrap_or("img");
            (format!("upload.{}", ext), format.to_mime_type())
        }
        Err(_) => ("upload.bin".to_string(), "application/octet-stream"),
    }
}

/// Human-readable error for a failed prediction response.
///
/// The service reports failures as `{"error": "..."}`.
fn error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().chars().take(200).collect());

    if detail.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    #[test]
    fn test_upload_metadata_png() {
        let (name, mime) = upload_metadata(PNG_MAGIC);
        assert_eq!(name, "upload.png");
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn test_upload_metadata_unknown() {
        let (name, mime) = upload_metadata(b"plain text");
        assert_eq!(name, "upload.bin");
        assert_eq!(mime, "application/octet-stream");
    }

    #[test]
    fn test_error_message_from_json() {
        let msg = error_message(400, r#"{"error": "No image provided."}"#);
        assert_eq!(msg, "HTTP 400: No image provided.");
    }

    #[test]
    fn test_error_message_plain_body() {
        assert_eq!(error_message(502, "Bad Gateway\n"), "HTTP 502: Bad Gateway");
        assert_eq!(error_message(500, ""), "HTTP 500");
    }

    #[test]
    fn test_closure_predictor() {
        let predictor = |_: &[u8]| PredictionPayload::from_json(r#"{"square_feet": 10}"#);
        let payload = predictor.predict(b"img").unwrap();
        assert_eq!(payload.square_feet, Some(serde_json::json!(10)));
    }

    #[test]
    fn test_http_predictor_builds() {
        let config = Config::default();
        let predictor = HttpPredictor::from_config(&config).unwrap();
        assert_eq!(predictor.url(), "http://127.0.0.1:8000/api/predict/");
    }
}
