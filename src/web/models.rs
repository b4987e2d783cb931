//! Contains the data models for API responses.

use serde::Serialize;

/// Successful print submission.
#[derive(Serialize)]
pub struct PrintResponse {
    pub status: String,
    pub job_id: String,
    pub printer_status: String,
}

/// Failed print submission: either the spooler rejected the job or something
/// went wrong staging it.
#[derive(Serialize)]
pub struct PrintErrorResponse {
    pub error: String,
    pub details: String,
    pub printer_status: String,
}

/// Printer status query result.
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Printer status query that came back with a non-zero exit.
#[derive(Serialize)]
pub struct StatusErrorResponse {
    pub error: String,
}
