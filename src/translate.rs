use std::future::Future;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::language::Language;

/// The web translate endpoint starts rejecting queries well before 5000 chars
/// once they are URL-encoded, so longer descriptions go out in pieces.
pub const MAX_CHUNK_CHARS: usize = 4500;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: Language) -> Result<String, AppError>;
}

/// Translates `text` into `target`, leaving it untouched for the default
/// language without calling the service.
pub async fn translate_text(
    translator: &dyn Translator,
    text: &str,
    target: Language,
) -> Result<String, AppError> {
    if target.is_default() {
        return Ok(text.to_string());
    }
    translator.translate(text, target).await
}

/// Google Translate web endpoint (`client=gtx`), source language auto-detected.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn translate_chunk(&self, chunk: &str, target: Language) -> Result<String, AppError> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", chunk),
            ])
            .header(
                "User-Agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .send()
            .await
            .map_err(|e| AppError::Translate(format!("Failed to reach translation service: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Translate returned {}: {}", status, body);
            return Err(AppError::Translate(format!(
                "Translation service returned error: {}",
                status
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Translate(format!("Failed to parse translation response: {}", e)))?;

        let translation = join_segments(&json)?;
        if translation.is_empty() {
            return Err(AppError::Translate(
                "Empty translation received".to_string(),
            ));
        }
        Ok(translation)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String, AppError> {
        debug!(
            "Translating {} chars to {}",
            text.chars().count(),
            target.code()
        );
        translate_in_chunks(text, MAX_CHUNK_CHARS, |chunk| {
            self.translate_chunk(chunk, target)
        })
        .await
    }
}

/// Runs `translate_chunk` over each piece of `text` in order and joins the
/// results. Whitespace-only pieces are kept as they are without a call.
pub async fn translate_in_chunks<'a, F, Fut>(
    text: &'a str,
    max_chars: usize,
    mut translate_chunk: F,
) -> Result<String, AppError>
where
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<String, AppError>>,
{
    let mut translated = String::with_capacity(text.len());
    for chunk in split_chunks(text, max_chars) {
        if chunk.trim().is_empty() {
            translated.push_str(chunk);
            continue;
        }
        translated.push_str(&translate_chunk(chunk).await?);
    }
    Ok(translated)
}

/// The response is an array whose first element holds `[translated, source, ...]`
/// segments; the translation is the concatenation of `[0][*][0]`.
fn join_segments(json: &serde_json::Value) -> Result<String, AppError> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| AppError::Translate("Invalid translation response format".to_string()))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect())
}

/// Splits on line boundaries into pieces of at most `max_chars` characters.
/// Line breaks stay attached to the line before them, so joining the pieces
/// gives back the input. A single line longer than the limit is cut on
/// character boundaries.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut chunk_chars = 0;
    let mut cursor = 0;

    for line in text.split_inclusive('\n') {
        let line_chars = line.chars().count();

        if chunk_chars + line_chars > max_chars && chunk_chars > 0 {
            chunks.push(&text[start..cursor]);
            start = cursor;
            chunk_chars = 0;
        }

        if line_chars > max_chars {
            let mut piece_start = cursor;
            let mut piece_chars = 0;
            for (offset, _) in line.char_indices() {
                if piece_chars == max_chars {
                    chunks.push(&text[piece_start..cursor + offset]);
                    piece_start = cursor + offset;
                    piece_chars = 0;
                }
                piece_chars += 1;
            }
            start = piece_start;
            chunk_chars = piece_chars;
        } else {
            chunk_chars += line_chars;
        }
        cursor += line.len();
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}
