// src/config.rs - Gateway configuration
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration struct for the gateway: HTTP server, target printer,
/// job staging directory and spooler command names.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub printer: PrinterConfig,
    #[serde(default)]
    pub jobs: JobsConfig,
    #[serde(default)]
    pub spooler: SpoolerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            printer: PrinterConfig::default(),
            jobs: JobsConfig::default(),
            spooler: SpoolerConfig::default(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// Target printer configuration. All jobs go to this one device.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrinterConfig {
    #[serde(default = "default_printer_name")]
    pub name: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            name: default_printer_name(),
        }
    }
}

/// Job staging configuration. Incoming documents are written here for the
/// duration of their request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobsConfig {
    #[serde(default = "default_jobs_dir")]
    pub dir: PathBuf,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            dir: default_jobs_dir(),
        }
    }
}

/// Spooler command-line interface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpoolerConfig {
    #[serde(default = "default_lp")]
    pub lp: String,
    #[serde(default = "default_lpstat")]
    pub lpstat: String,
}

impl Default for SpoolerConfig {
    fn default() -> Self {
        Self {
            lp: default_lp(),
            lpstat: default_lpstat(),
        }
    }
}

// Default value functions
fn default_bind() -> String {
    "0.0.0.0:5000".to_string()
}
fn default_printer_name() -> String {
    "default".to_string()
}
fn default_jobs_dir() -> PathBuf {
    std::env::temp_dir().join("spoolgate-jobs")
}
fn default_lp() -> String {
    "lp".to_string()
}
fn default_lpstat() -> String {
    "lpstat".to_string()
}

/// Load configuration from a TOML file at the given path.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::error!("Failed to parse config TOML: {}", e);
                Err(ConfigError::Toml(e))
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file '{}': {}", path.display(), e);
            Err(ConfigError::Io(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.server.bind, "0.0.0.0:5000");
        assert_eq!(config.printer.name, "default");
        assert_eq!(config.spooler.lp, "lp");
        assert_eq!(config.spooler.lpstat, "lpstat");
        assert_eq!(config.jobs.dir, std::env::temp_dir().join("spoolgate-jobs"));
    }

    #[test]
    fn test_load_config_success() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            "[printer]\nname = 'office-laser'\n[server]\nbind = '127.0.0.1:8080'"
        )
        .unwrap();
        file.flush().unwrap();
        let config = load_config(&file_path).unwrap();
        assert_eq!(config.printer.name, "office-laser");
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        // Defaults for missing sections
        assert_eq!(config.spooler.lp, "lp");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("nonexistent_file.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "not a valid toml").unwrap();
        file.flush().unwrap();
        let result = load_config(&file_path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
