use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use tracing::warn;
use uuid::Uuid;

/// `landmark_description_<8 hex>.txt`, suffix taken from a fresh v4 uuid.
pub fn export_filename() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("landmark_description_{}.txt", &suffix[..8])
}

/// A description packaged as a plain-text download.
#[derive(Debug, Clone)]
pub struct Export {
    pub filename: String,
    pub body: String,
}

impl Export {
    pub fn new(filename: String, body: String) -> Self {
        Self { filename, body }
    }
}

impl IntoResponse for Export {
    fn into_response(self) -> Response {
        let mut response = (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            )],
            self.body,
        )
            .into_response();
        match HeaderValue::try_from(format!("attachment; filename=\"{}\"", self.filename)) {
            Ok(disposition) => {
                response
                    .headers_mut()
                    .insert(header::CONTENT_DISPOSITION, disposition);
            }
            Err(e) => warn!("Bad export filename {:?}: {}", self.filename, e),
        }
        response
    }
}
