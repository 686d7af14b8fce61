//! Event types flowing through the detection pipeline.
//!
//! A video is analyzed by an external action-recognition model whose raw
//! per-clip output enters the core as [`RawDetection`] records. The
//! normalizer turns those into validated [`DetectionEvent`]s, and the
//! classifier resolves each one to a [`ClassifiedEvent`] carrying exactly
//! one [`EventLabel`]. Ground-truth annotations use the same taxonomy.
//!
//! Field names on the serializable types are the wire contract consumed by
//! the UI layer and must not change.

use serde::{Deserialize, Serialize};

/// Closed taxonomy of event classifications.
///
/// `Ignored` events stay in the session timeline for inspection but are
/// excluded from both the box score and the confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventLabel {
    #[serde(rename = "SHOT", alias = "shot", alias = "Shot")]
    Shot,
    #[serde(rename = "ASSIST", alias = "assist", alias = "Assist")]
    Assist,
    #[serde(rename = "STEAL", alias = "steal", alias = "Steal")]
    Steal,
    #[serde(rename = "BLOCK", alias = "block", alias = "Block")]
    Block,
    #[serde(rename = "REBOUND", alias = "rebound", alias = "Rebound")]
    Rebound,
    #[serde(rename = "IGNORED", alias = "ignored", alias = "Ignored")]
    Ignored,
}

impl EventLabel {
    /// Labels that can carry a stat, i.e. everything except `Ignored`.
    pub const STAT_LABELS: [EventLabel; 5] = [
        EventLabel::Shot,
        EventLabel::Assist,
        EventLabel::Steal,
        EventLabel::Block,
        EventLabel::Rebound,
    ];

    /// The wire spelling of the label (e.g. `SHOT`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EventLabel::Shot => "SHOT",
            EventLabel::Assist => "ASSIST",
            EventLabel::Steal => "STEAL",
            EventLabel::Block => "BLOCK",
            EventLabel::Rebound => "REBOUND",
            EventLabel::Ignored => "IGNORED",
        }
    }
}

impl std::fmt::Display for EventLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shot value class attached by the model when it can tell a two-point
/// attempt from a three-point attempt. Absent means the default applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotType {
    #[serde(rename = "2PT", alias = "2pt")]
    TwoPoint,
    #[serde(rename = "3PT", alias = "3pt")]
    ThreePoint,
}

/// One raw observation as produced by the inference step, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Starting frame of the clip the detection came from.
    pub frame: u64,
    /// Action label from the model's vocabulary.
    pub detected_action: String,
    /// Model confidence in [0, 1].
    pub confidence: f64,
    /// Optional two/three point classification for shot-flavored actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<ShotType>,
    /// Optional filename of the saved representative frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_image: Option<String>,
}

/// A validated raw observation with its derived timestamp.
///
/// Immutable once produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionEvent {
    /// Frame number, non-decreasing across the sequence.
    pub frame: u64,
    /// Seconds from the start of the video (`frame / frame_rate`).
    pub timestamp: f64,
    /// Action label from the model's vocabulary.
    pub detected_action: String,
    /// Model confidence in [0, 1].
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<ShotType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_image: Option<String>,
}

/// A detection resolved to exactly one taxonomy label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedEvent {
    #[serde(flatten)]
    pub event: DetectionEvent,
    pub classified_as: EventLabel,
}

impl ClassifiedEvent {
    /// Whether this event counts toward the box score and confusion matrix.
    #[must_use]
    pub fn is_counted(&self) -> bool {
        self.classified_as != EventLabel::Ignored
    }
}

/// An externally supplied ground-truth annotation. Read-only input to the
/// matcher; `event_type` is never `Ignored`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthEvent {
    #[serde(rename = "type")]
    pub event_type: EventLabel,
    /// Seconds from the start of the video.
    pub timestamp: f64,
}

/// A full ground-truth annotation file for one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruth {
    pub video_name: String,
    pub expected_detections: Vec<GroundTruthEvent>,
    /// Expected stat totals, when the annotator recorded them. Enables the
    /// stats-accuracy metric; detection matching works without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_stats: Option<std::collections::BTreeMap<String, u64>>,
}
