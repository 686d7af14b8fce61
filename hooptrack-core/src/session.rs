//! Session records: the persisted unit of one analysis run.
//!
//! A session combines the full classified timeline, the derived box score,
//! and metadata about the run. Its serialized field names are the wire
//! contract consumed by the UI layer. The optional evaluation is attached by
//! a later evaluation run without touching anything else in the record.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::events::ClassifiedEvent;
use crate::processing::boxscore::BoxScore;
use crate::processing::metrics::EvaluationResult;

/// Format of session identifiers: the creation time, second resolution.
/// Lexicographic order equals creation order.
pub const SESSION_ID_FORMAT: &str = "%Y%m%d_%H%M%S";

/// The persisted record of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Lexicographically sortable identifier derived from the creation time.
    pub session_id: String,
    /// Creation timestamp, RFC 3339.
    pub timestamp: String,
    /// Registry identifier of the classifier that produced the detections.
    /// Stored verbatim at creation; display-name lookup is presentation-side
    /// enrichment, never done here.
    pub classifier_used: String,
    pub stats: BoxScore,
    pub total_detections: u64,
    pub detections: Vec<ClassifiedEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationResult>,
}

impl Session {
    /// Returns the session with an evaluation attached (or replaced).
    /// Timeline and box score are untouched, so evaluating twice only
    /// overwrites this field.
    #[must_use]
    pub fn with_evaluation(mut self, evaluation: EvaluationResult) -> Self {
        self.evaluation = Some(evaluation);
        self
    }
}

/// Assembles [`Session`] records from pipeline output plus caller-supplied
/// metadata.
///
/// The creation time is a parameter rather than read from the clock, so
/// rebuilding from the same classified timeline always yields a bit-identical
/// record.
///
/// # Examples
///
/// ```rust
/// use chrono::{Local, TimeZone};
/// use hooptrack_core::session::SessionBuilder;
///
/// let created_at = Local.with_ymd_and_hms(2026, 1, 13, 5, 38, 47).unwrap();
/// let session = SessionBuilder::new("videomae", created_at).build();
/// assert_eq!(session.session_id, "20260113_053847");
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    classifier_id: String,
    created_at: DateTime<Local>,
    detections: Vec<ClassifiedEvent>,
    stats: BoxScore,
}

impl SessionBuilder {
    /// Creates a builder for a session produced by `classifier_id` at
    /// `created_at`.
    #[must_use]
    pub fn new(classifier_id: &str, created_at: DateTime<Local>) -> Self {
        Self {
            classifier_id: classifier_id.to_string(),
            created_at,
            detections: Vec::new(),
            stats: BoxScore::default(),
        }
    }

    /// Sets the classified timeline.
    #[must_use]
    pub fn detections(mut self, detections: Vec<ClassifiedEvent>) -> Self {
        self.detections = detections;
        self
    }

    /// Sets the box score derived from the timeline.
    #[must_use]
    pub fn stats(mut self, stats: BoxScore) -> Self {
        self.stats = stats;
        self
    }

    /// Builds the session record. No evaluation is attached.
    #[must_use]
    pub fn build(self) -> Session {
        Session {
            session_id: self.created_at.format(SESSION_ID_FORMAT).to_string(),
            timestamp: self.created_at.to_rfc3339(),
            classifier_used: self.classifier_id,
            total_detections: self.detections.len() as u64,
            stats: self.stats,
            detections: self.detections,
            evaluation: None,
        }
    }
}
