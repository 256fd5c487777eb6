use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::upload::UploadedImage;

/// Something that can look at a landmark photo and describe it.
#[async_trait]
pub trait Describer: Send + Sync {
    async fn describe(&self, image: &UploadedImage, prompt: &str) -> Result<String, AppError>;

    /// Model name shown next to the result.
    fn model(&self) -> &str;
}

/// Google Gemini `generateContent` client.
pub struct GeminiDescriber {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiDescriber {
    pub fn new(client: reqwest::Client, api_key: String, model: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

/// Prompt first, then the photo.
fn request_payload(image: &UploadedImage, prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "parts": [
                { "text": prompt },
                {
                    "inline_data": {
                        "mime_type": image.mime_type(),
                        "data": image.to_base64()
                    }
                }
            ]
        }]
    })
}

/// Joins every text part of the first candidate.
fn extract_text(result: &serde_json::Value) -> Result<String, AppError> {
    let candidate = result["candidates"].get(0).ok_or_else(|| {
        let reason = result["promptFeedback"]["blockReason"]
            .as_str()
            .unwrap_or("no candidates returned");
        AppError::Describe(format!("No description in response ({})", reason))
    })?;

    let parts = candidate["content"]["parts"].as_array().ok_or_else(|| {
        let reason = candidate["finishReason"].as_str().unwrap_or("empty content");
        AppError::Describe(format!("No description in response ({})", reason))
    })?;

    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();

    if text.trim().is_empty() {
        return Err(AppError::Describe("No description in response".to_string()));
    }
    Ok(text)
}

#[async_trait]
impl Describer for GeminiDescriber {
    async fn describe(&self, image: &UploadedImage, prompt: &str) -> Result<String, AppError> {
        let payload = request_payload(image, prompt);

        info!(
            "Sending {} ({} bytes) to {}",
            image.mime_type(),
            image.bytes().len(),
            self.model
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Describe(e.without_url().to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::Describe(e.without_url().to_string()))?;

        if !status.is_success() {
            warn!(
                "Gemini returned {}: {}",
                status,
                preview(&response_text, 500)
            );
            return Err(AppError::Describe(format!(
                "API Error {}: {}",
                status,
                preview(&response_text, 500)
            )));
        }

        let result: serde_json::Value = serde_json::from_str(&response_text)
            .map_err(|e| AppError::Describe(format!("Malformed response: {}", e)))?;

        let description = extract_text(&result)?;
        debug!("Description ready ({} chars)", description.chars().count());

        Ok(description)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
