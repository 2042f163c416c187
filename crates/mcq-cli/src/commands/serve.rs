//! HTTP upload endpoint.
//!
//! `POST /upload` takes a multipart form with a single `pdf` file field and
//! answers with the JSON array of extracted questions. Every failure, from a
//! malformed form to a PDF pdftotext cannot read, collapses into one generic
//! 500 response; the cause only goes to the log. That includes uploads over
//! the size limit, which surface as multipart read errors.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use mcq_core::error::McqError;
use mcq_core::extraction::pdftotext::PdftotextExtractor;
use mcq_core::extraction::PdfExtractor;
use mcq_core::parsing::clean::TextCleaner;
use mcq_core::profiles::resolve_cleaner;
use mcq_core::Question;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::ProfileArgs;

const UPLOAD_FIELD: &str = "pdf";
const FAILURE_BODY: &str = "Error processing the PDF.";

#[derive(Clone)]
struct AppState {
    cleaner: Arc<TextCleaner>,
    extractor: Arc<dyn PdfExtractor>,
}

// ============================================================================
// Error type
// ============================================================================

#[derive(Debug)]
enum UploadError {
    Rejected(MultipartRejection),
    Multipart(MultipartError),
    MissingField,
    Parse(McqError),
    Worker(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let cause = match self {
            UploadError::Rejected(e) => format!("not a multipart upload: {}", e),
            UploadError::Multipart(e) => format!("malformed multipart body: {}", e),
            UploadError::MissingField => format!("no '{}' field in upload", UPLOAD_FIELD),
            UploadError::Parse(e) => e.to_string(),
            UploadError::Worker(e) => format!("extraction task failed: {}", e),
        };
        log::error!("Error parsing PDF: {}", cause);
        (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_BODY).into_response()
    }
}

impl From<MultipartRejection> for UploadError {
    fn from(e: MultipartRejection) -> Self {
        UploadError::Rejected(e)
    }
}

impl From<MultipartError> for UploadError {
    fn from(e: MultipartError) -> Self {
        UploadError::Multipart(e)
    }
}

impl From<McqError> for UploadError {
    fn from(e: McqError) -> Self {
        UploadError::Parse(e)
    }
}

// ============================================================================
// Handlers
// ============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    pdftotext: bool,
}

// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        pdftotext: PdftotextExtractor::is_available(),
    })
}

// POST /upload
async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Vec<Question>>, UploadError> {
    let mut multipart = multipart?;
    let mut pdf_bytes = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            let file_name = field.file_name().unwrap_or("<unnamed>").to_string();
            let bytes = field.bytes().await?;
            log::info!("[POST /upload] {} ({} bytes)", file_name, bytes.len());
            pdf_bytes = Some(bytes);
            break;
        }
    }
    let pdf_bytes = pdf_bytes.ok_or(UploadError::MissingField)?;

    // pdftotext is a blocking subprocess
    let cleaner = state.cleaner.clone();
    let extractor = state.extractor.clone();
    let parsed = tokio::task::spawn_blocking(move || {
        mcq_core::parse_pdf(&pdf_bytes, extractor.as_ref(), &cleaner)
    })
    .await
    .map_err(|e| UploadError::Worker(e.to_string()))??;

    log::info!(
        "[POST /upload] extracted {} question(s)",
        parsed.questions.len()
    );
    Ok(Json(parsed.questions))
}

fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// Entry point
// ============================================================================

pub fn run(bind: SocketAddr, max_upload_mb: usize, profile: &ProfileArgs) -> Result<(), McqError> {
    let cleaner = resolve_cleaner(profile.preset.as_deref(), profile.profile_file.as_deref())?;

    if !PdftotextExtractor::is_available() {
        log::warn!("pdftotext not found on PATH; every upload will fail until it is installed");
    }

    let state = AppState {
        cleaner: Arc::new(cleaner),
        extractor: Arc::new(PdftotextExtractor::new()),
    };
    let app = router(state, max_upload_mb.saturating_mul(1024 * 1024));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(bind).await?;
        eprintln!("Server running on {}", bind);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok::<(), McqError>(())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}
