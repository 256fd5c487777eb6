use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::describe::Describer;
use crate::discover::discover;
use crate::error::AppError;
use crate::export::Export;
use crate::history::HistoryEntryView;
use crate::language::Language;
use crate::render::render_markdown;
use crate::scenario::Scenario;
use crate::session::{SessionId, SessionStore};
use crate::translate::Translator;
use crate::ui;
use crate::upload::UploadedImage;

pub struct AppState {
    pub describer: Arc<dyn Describer>,
    pub translator: Arc<dyn Translator>,
    pub sessions: SessionStore,
}

pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/options", get(options))
        .route("/api/preview", post(preview))
        .route("/api/discover", post(discover_landmark))
        .route("/api/history", get(history))
        .route("/api/download", get(download))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct LanguageOption {
    label: &'static str,
    code: &'static str,
}

#[derive(Debug, Serialize)]
struct OptionsResponse {
    languages: Vec<LanguageOption>,
    scenarios: Vec<&'static str>,
    default_language: &'static str,
    default_scenario: &'static str,
    model: String,
}

#[derive(Debug, Serialize)]
struct PreviewResponse {
    data_url: String,
}

#[derive(Debug, Serialize)]
struct DiscoverResponse {
    id: usize,
    description: String,
    html: String,
    original: String,
    language: String,
    scenario: &'static str,
    model: String,
    filename: String,
    processing_time_ms: u128,
}

#[derive(Debug, Deserialize)]
struct DownloadQuery {
    id: Option<usize>,
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    entries: Vec<HistoryEntryView>,
    total: usize,
}

/// Form fields of an upload request.
#[derive(Default)]
struct UploadForm {
    file: Option<(Option<String>, Vec<u8>)>,
    scenario: Option<String>,
    language: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                form.file = Some((content_type, data.to_vec()));
            }
            "scenario" | "language" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                if name == "scenario" {
                    form.scenario = Some(value);
                } else {
                    form.language = Some(value);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Attaches the session cookie when the session was created by this request.
fn with_session(response: impl IntoResponse, id: SessionId, fresh: bool) -> Response {
    let mut response = response.into_response();
    if fresh {
        match id.set_cookie() {
            Ok(cookie) => {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
            Err(e) => warn!("Could not build session cookie: {}", e),
        }
    }
    response
}

async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn options(State(state): State<Arc<AppState>>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        languages: Language::ALL
            .into_iter()
            .map(|l| LanguageOption {
                label: l.label(),
                code: l.code(),
            })
            .collect(),
        scenarios: Scenario::ALL.into_iter().map(Scenario::label).collect(),
        default_language: Language::DEFAULT.label(),
        default_scenario: Scenario::DEFAULT.label(),
        model: state.describer.model().to_string(),
    })
}

async fn preview(multipart: Multipart) -> Result<Json<PreviewResponse>, AppError> {
    let form = read_form(multipart).await?;
    let image = UploadedImage::ingest(form.file)?;
    Ok(Json(PreviewResponse {
        data_url: image.preview_data_url()?,
    }))
}

async fn discover_landmark(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let start = Instant::now();
    let (session, fresh) = SessionId::resolve(&headers);

    let form = read_form(multipart).await?;
    let scenario = match form.scenario.as_deref() {
        Some(label) => Scenario::from_label(label)?,
        None => Scenario::DEFAULT,
    };
    let language = match form.language.as_deref() {
        Some(value) => Language::parse(value)?,
        None => Language::DEFAULT,
    };

    let result = discover(
        state.describer.as_ref(),
        state.translator.as_ref(),
        form.file,
        scenario,
        language,
    )
    .await?;

    let (id, filename) = state
        .sessions
        .with_history(session, |log| {
            let entry = log.append(result.clone());
            (entry.id, entry.filename.clone())
        })
        .await;

    let body = DiscoverResponse {
        id,
        html: render_markdown(&result.translated_text),
        description: result.translated_text,
        original: result.original_text,
        language: result.language_code,
        scenario: scenario.label(),
        model: state.describer.model().to_string(),
        filename,
        processing_time_ms: start.elapsed().as_millis(),
    };

    Ok(with_session(Json(body), session, fresh))
}

async fn history(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let (session, fresh) = SessionId::resolve(&headers);
    let log = state.sessions.snapshot(session).await;
    let body = HistoryResponse {
        entries: log.sidebar(),
        total: log.len(),
    };
    with_session(Json(body), session, fresh)
}

/// Serves the result with the given id, or the latest one, under the
/// filename it was given when recorded.
async fn download(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<DownloadQuery>,
) -> Result<Export, AppError> {
    let session = SessionId::from_headers(&headers).ok_or(AppError::NothingToExport)?;
    let log = state.sessions.snapshot(session).await;
    let entry = match query.id {
        Some(id) => log.get(id),
        None => log.latest(),
    }
    .ok_or(AppError::NothingToExport)?;
    Ok(Export::new(
        entry.filename.clone(),
        entry.result.translated_text.clone(),
    ))
}
