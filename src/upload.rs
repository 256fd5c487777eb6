use base64::{engine::general_purpose, Engine as _};
use image::ImageFormat;

use crate::error::AppError;

/// An uploaded landmark photo: declared MIME type plus raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    mime_type: String,
    bytes: Vec<u8>,
}

impl UploadedImage {
    /// Turns the raw upload into an image the model can take.
    ///
    /// `file` is `(declared content type, bytes)` as it came off the form.
    /// No file, or an empty one, is `AppError::MissingFile`.
    pub fn ingest(file: Option<(Option<String>, Vec<u8>)>) -> Result<Self, AppError> {
        let (declared, bytes) = file.ok_or(AppError::MissingFile)?;
        if bytes.is_empty() {
            return Err(AppError::MissingFile);
        }

        let mime_type = match declared.as_deref().map(normalise_mime) {
            Some(Some(mime)) => mime,
            Some(None) if !is_generic(declared.as_deref()) => {
                return Err(AppError::UnsupportedImage(declared.unwrap_or_default()));
            }
            _ => sniff_mime(&bytes)?,
        };

        Ok(Self {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Re-encodes the upload as PNG for the in-page preview.
    pub fn preview_data_url(&self) -> Result<String, AppError> {
        let img = image::load_from_memory(&self.bytes)
            .map_err(|e| AppError::InvalidImage(e.to_string()))?;

        let mut png_bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut png_bytes),
            image::ImageOutputFormat::Png,
        )
        .map_err(|e| AppError::InvalidImage(e.to_string()))?;

        Ok(format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(&png_bytes)
        ))
    }
}

fn normalise_mime(mime: &str) -> Option<&'static str> {
    match mime.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => Some("image/jpeg"),
        "image/png" => Some("image/png"),
        _ => None,
    }
}

fn is_generic(mime: Option<&str>) -> bool {
    match mime {
        None => true,
        Some(m) => {
            let m = m.trim();
            m.is_empty() || m.eq_ignore_ascii_case("application/octet-stream")
        }
    }
}

fn sniff_mime(bytes: &[u8]) -> Result<&'static str, AppError> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg) => Ok("image/jpeg"),
        Ok(ImageFormat::Png) => Ok("image/png"),
        Ok(other) => Err(AppError::UnsupportedImage(format!("{:?}", other))),
        Err(_) => Err(AppError::UnsupportedImage("unknown".to_string())),
    }
}
