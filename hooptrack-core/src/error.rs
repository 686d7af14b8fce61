//! Error types for the hooptrack-core library.
//!
//! All fallible operations in the core return [`CoreResult`], keeping error
//! handling consistent between the library and its consumers (hooptrack-cli).

use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for hooptrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A raw detection record failed validation during normalization.
    /// The whole batch for the video is rejected; partial sessions are
    /// never created.
    #[error("malformed detection at frame {frame}: {reason}")]
    MalformedDetection { frame: u64, reason: String },

    /// The requested classifier identifier has no entry in the registry.
    #[error("unknown classifier: {0}")]
    UnknownClassifierConfig(String),

    /// Evaluation was requested but no ground-truth file exists for the
    /// video. Recoverable: the session remains valid without an evaluation.
    #[error("no ground truth for '{video_name}' (looked for {})", path.display())]
    NoGroundTruth { video_name: String, path: PathBuf },

    /// No stored session matches the requested identifier.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for hooptrack-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
