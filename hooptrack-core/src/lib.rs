//! Core library for basketball action detection analysis and evaluation.
//!
//! This crate turns raw per-frame model detections into a temporally
//! coherent event timeline, aggregates it into a box score, and — when
//! ground-truth annotations exist — scores the result against that ground
//! truth to produce a confusion matrix and derived accuracy metrics.
//!
//! The pipeline is a single-threaded, purely computational batch
//! transformation: each invocation consumes immutable inputs and produces a
//! new immutable output, so independent sessions can be processed
//! concurrently with no shared mutable state beyond the read-only
//! configuration.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use hooptrack_core::{classify_and_score, evaluate, PipelineConfig};
//! use hooptrack_core::events::{GroundTruth, RawDetection};
//!
//! let config = PipelineConfig::default();
//! config.validate().unwrap();
//!
//! let raw: Vec<RawDetection> = serde_json::from_str(r#"[
//!     { "frame": 30, "detected_action": "shooting basketball", "confidence": 0.82 }
//! ]"#).unwrap();
//!
//! let session = classify_and_score(&raw, 30.0, "videomae", &config, Local::now()).unwrap();
//!
//! let ground_truth: GroundTruth = serde_json::from_str(r#"{
//!     "video_name": "trim.mp4",
//!     "expected_detections": [ { "type": "SHOT", "timestamp": 1.0 } ]
//! }"#).unwrap();
//!
//! let (result, _report) = evaluate(&session, &ground_truth, &config);
//! let session = session.with_evaluation(result);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod processing;
pub mod session;
pub mod store;
pub mod utils;

// Re-exports for public API
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use events::{
    ClassifiedEvent, DetectionEvent, EventLabel, GroundTruth, GroundTruthEvent, RawDetection,
    ShotType,
};
pub use history::{EvaluationHistory, HistoryRecord};
pub use processing::{
    classify_and_score, evaluate, BoxScore, ConfusionMatrix, EvaluationResult, MatchReport,
};
pub use session::{Session, SessionBuilder};
pub use store::SessionStore;
