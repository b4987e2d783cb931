// src/spooler.rs - Command-line interface to the OS print spooler
use crate::config::SpoolerConfig;
use async_trait::async_trait;
use std::path::Path;
use std::process::Output;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum SpoolerError {
    #[error("spooler command failed: {details}")]
    Failed { details: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpoolerError {
    /// Diagnostic text suitable for an HTTP response body.
    pub fn details(&self) -> String {
        match self {
            SpoolerError::Failed { details } => details.clone(),
            SpoolerError::Io(e) => e.to_string(),
        }
    }
}

/// Interface to the print spooler. Behind a trait so tests can substitute a
/// recording double for the real CLI.
#[async_trait]
pub trait Spooler: Send + Sync {
    /// Submit a staged document to the named printer.
    async fn submit(&self, printer: &str, document: &Path) -> Result<(), SpoolerError>;

    /// Query the named printer's current status. The invocation blocks until
    /// the command exits; there is no timeout and no retry.
    async fn status(&self, printer: &str) -> Result<String, SpoolerError>;
}

/// Spooler backed by the CUPS `lp`/`lpstat` binaries.
pub struct CupsSpooler {
    lp: String,
    lpstat: String,
}

impl CupsSpooler {
    pub fn new(config: &SpoolerConfig) -> Self {
        Self {
            lp: config.lp.clone(),
            lpstat: config.lpstat.clone(),
        }
    }
}

/// Best diagnostic text a finished command has to offer: stderr, then stdout,
/// then the exit status itself.
fn diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }
    output.status.to_string()
}

#[async_trait]
impl Spooler for CupsSpooler {
    async fn submit(&self, printer: &str, document: &Path) -> Result<(), SpoolerError> {
        tracing::info!("Submitting {} to printer '{}'", document.display(), printer);
        let output = Command::new(&self.lp)
            .arg("-d")
            .arg(printer)
            .arg(document)
            .output()
            .await?;
        if output.status.success() {
            Ok(())
        } else {
            let details = diagnostics(&output);
            tracing::error!("{} exited with {}: {}", self.lp, output.status, details);
            Err(SpoolerError::Failed { details })
        }
    }

    async fn status(&self, printer: &str) -> Result<String, SpoolerError> {
        let output = Command::new(&self.lpstat)
            .arg("-p")
            .arg(printer)
            .output()
            .await?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let details = diagnostics(&output);
            tracing::error!("{} exited with {}: {}", self.lpstat, output.status, details);
            Err(SpoolerError::Failed { details })
        }
    }
}
