//! subwire - Command-line client for a remote video captioning service
//!
//! Submit videos for caption rendering, track jobs to completion, edit
//! the recognized cues, and export them as SRT or ASS subtitle files.

// Library code propagates errors; panics are confined to main and tests
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod app;
pub mod captions;
pub mod cli;
pub mod color;
pub mod config;
pub mod defaults;
pub mod error;
pub mod export;
pub mod output;
pub mod service;
pub mod session;
pub mod timecode;
pub mod tracker;

// Caption model (cue → store → palette)
pub use captions::{Caption, CaptionStore, SpeakerPalette};

// Job tracking
pub use tracker::{StatusSource, TaskSession, TaskTracker, TrackerState};

// Service boundary
pub use service::{ServiceClient, StatusResponse};

// Error handling
pub use error::{Result, SubwireError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.3.1+abc1234"` when git hash is available, `"0.3.1"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
