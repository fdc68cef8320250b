//! Error types for subwire.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubwireError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Submission errors (the service rejected or never received the job)
    #[error("Submission failed: {message}")]
    Submission { message: String },

    // Status polling errors (a single query failed or returned bad data)
    #[error("Status query failed: {message}")]
    StatusQuery { message: String },

    // The service reports the job itself failed; message is verbatim
    #[error("Job failed: {message}")]
    JobFailure { message: String },

    // Export errors
    #[error("Export validation failed for {subject}: {message}")]
    ExportValidation { subject: String, message: String },

    // Caption store errors
    #[error("Cue index {index} out of range (store has {len} cues)")]
    CueIndexOutOfRange { index: usize, len: usize },

    #[error("Unknown cue field: {field}")]
    UnknownCueField { field: String },

    #[error("Invalid cue value for {field}: {message}")]
    InvalidCueValue { field: String, message: String },

    // Session file errors
    #[error("Session file not found at {path}")]
    SessionFileNotFound { path: String },

    #[error("Failed to parse session file: {message}")]
    SessionParse { message: String },

    // Artifact download errors
    #[error("Download failed: {message}")]
    Download { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SubwireError>;
