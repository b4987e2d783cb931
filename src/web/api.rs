//! Defines the Axum API routes and handlers.

use crate::config::Config;
use crate::job::JobFile;
use crate::spooler::Spooler;
use crate::web::models::{PrintErrorResponse, PrintResponse, StatusErrorResponse, StatusResponse};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;

pub struct AppStateInner {
    pub config: Config,
    pub spooler: Box<dyn Spooler>,
}
pub type AppState = Arc<AppStateInner>;

/// For tests: create a router over an arbitrary spooler implementation.
pub fn app_with_state(state: AppState) -> Router {
    create_router_with_state(state)
}

/// Creates the Axum router with all the API endpoints.
pub fn create_router(config: Config, spooler: Box<dyn Spooler>) -> Router {
    create_router_with_state(Arc::new(AppStateInner { config, spooler }))
}

pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/print", post(submit_print))
        .route("/status", get(query_status))
        // Documents of any size are accepted as-is
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// Handler to submit a document to the spooler.
///
/// The body is staged to the job directory under a random name, handed to the
/// spooler, and the staged file is removed before the response is built —
/// also on every error path, since `JobFile` deletes on drop.
async fn submit_print(State(state): State<AppState>, body: Bytes) -> axum::response::Response {
    let dir = state.config.jobs.dir.clone();
    let job = match tokio::task::spawn_blocking(move || JobFile::stage(&dir, &body)).await {
        Ok(Ok(job)) => job,
        Ok(Err(e)) => return print_error(&state, e.to_string()).await,
        Err(e) => return print_error(&state, e.to_string()).await,
    };

    let submitted = state.spooler.submit(&state.config.printer.name, job.path()).await;
    let job_id = job.id().to_string();
    drop(job);

    match submitted {
        Ok(()) => {
            let printer_status = printer_status(&state).await;
            tracing::info!("Print job {} submitted", job_id);
            (
                StatusCode::OK,
                Json(PrintResponse {
                    status: "print job submitted".to_string(),
                    job_id,
                    printer_status,
                }),
            )
                .into_response()
        }
        Err(e) => print_error(&state, e.details()).await,
    }
}

/// Handler to query the printer's status.
///
/// Always 200: a failed query reports the diagnostic under `error` instead of
/// `status`, so callers can tell the shapes apart.
async fn query_status(State(state): State<AppState>) -> axum::response::Response {
    match state.spooler.status(&state.config.printer.name).await {
        Ok(text) => (StatusCode::OK, Json(StatusResponse { status: text })).into_response(),
        Err(e) => (
            StatusCode::OK,
            Json(StatusErrorResponse { error: e.details() }),
        )
            .into_response(),
    }
}

/// 500 response for a failed submission. The printer status is queried
/// regardless of which step failed.
async fn print_error(state: &AppState, details: String) -> axum::response::Response {
    tracing::error!("Print job failed: {}", details);
    let printer_status = printer_status(state).await;
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(PrintErrorResponse {
            error: "print job failed".to_string(),
            details,
            printer_status,
        }),
    )
        .into_response()
}

/// Current device status folded to a single string for inclusion in print
/// responses.
async fn printer_status(state: &AppState) -> String {
    match state.spooler.status(&state.config.printer.name).await {
        Ok(text) => text,
        Err(e) => e.details(),
    }
}
