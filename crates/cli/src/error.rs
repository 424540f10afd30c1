use thiserror::Error;

/// Invalid report configuration value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown output format {0:?} (expected \"text\" or \"json\")")]
    UnknownFormat(String),
}

/// Failure while writing a delivery note.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report section: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendered report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
