//! HTTP surface for the three-button UI. Each handler runs its pipeline
//! stage to completion before responding; there is no background
//! execution.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::{BriefPipeline, Error, HfInferenceClient, WhisperCli, YtDlpFetcher};

/// The pipeline over the production collaborators.
pub type ProductionPipeline = BriefPipeline<YtDlpFetcher, WhisperCli, HfInferenceClient>;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ProductionPipeline>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    pub video_url: String,
}

fn error_status(e: &Error) -> StatusCode {
    match e {
        Error::InvalidUrl(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::PrerequisiteMissing { .. } => StatusCode::CONFLICT,
        Error::DownloadFailed(_) | Error::Transcription(_) => StatusCode::BAD_GATEWAY,
        Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(e: &Error) -> Response {
    (
        error_status(e),
        Json(ApiResponse::<serde_json::Value>::err(e.to_string())),
    )
        .into_response()
}

pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/fetch", post(fetch_handler))
        .route("/api/transcribe", post(transcribe_handler))
        .route("/api/summarize", post(summarize_handler))
        .route("/api/audio", get(audio_handler))
        .route("/api/transcript", get(transcript_handler))
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(port, "Web UI listening");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler() -> impl IntoResponse {
    Html(include_str!("../../assets/index.html"))
}

async fn fetch_handler(
    State(state): State<AppState>,
    Json(req): Json<FetchRequest>,
) -> Response {
    match state.pipeline.fetch(&req.video_url).await {
        Ok(_) => Json(ApiResponse::ok(serde_json::json!({ "audio": "/api/audio" })))
            .into_response(),
        Err(e) => error_response(&e),
    }
}

async fn transcribe_handler(State(state): State<AppState>) -> Response {
    match state.pipeline.transcribe().await {
        Ok(transcript) => {
            Json(ApiResponse::ok(serde_json::json!({ "transcript": transcript }))).into_response()
        }
        Err(e) => error_response(&e),
    }
}

async fn summarize_handler(State(state): State<AppState>) -> Response {
    match state.pipeline.summarize().await {
        Ok(summary) => Json(ApiResponse::ok(summary)).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn audio_handler(State(state): State<AppState>) -> Response {
    match tokio::fs::read(state.pipeline.audio_artifact()).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "audio/wav")], bytes).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<serde_json::Value>::err(
                "no audio has been downloaded yet",
            )),
        )
            .into_response(),
    }
}

async fn transcript_handler(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(state.pipeline.transcript_artifact()).await {
        Ok(text) => ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<serde_json::Value>::err(
                "no transcript has been produced yet",
            )),
        )
            .into_response(),
    }
}
