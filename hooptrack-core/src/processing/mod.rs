//! Core pipeline logic and orchestration.
//!
//! This module organizes the batch transformation stages into submodules and
//! exposes the two top-level operations consumed by callers:
//! [`classify_and_score`] (raw detections to a session) and [`evaluate`]
//! (session plus ground truth to an evaluation result). Both are
//! deterministic: fixed configuration and fixed inputs always produce
//! byte-identical output.

/// Raw detection validation and timestamp derivation
pub mod normalize;

/// Event classification against the taxonomy
pub mod classify;

/// Box score aggregation from classified timelines
pub mod boxscore;

/// Greedy ground-truth matching
pub mod matching;

/// Accuracy metric calculation
pub mod metrics;

use chrono::{DateTime, Local};
use log::info;

use crate::config::{classifier_profile, PipelineConfig};
use crate::error::CoreResult;
use crate::events::{GroundTruth, RawDetection};
use crate::session::{Session, SessionBuilder};

pub use boxscore::{aggregate, BoxScore};
pub use classify::classify;
pub use matching::{match_events, ConfusionMatrix, MatchReport};
pub use metrics::{evaluate_matrix, EvaluationResult};
pub use normalize::normalize;

/// Runs the full analysis pipeline for one video.
///
/// Normalizes the raw model output, classifies every detection, aggregates
/// the box score, and assembles the session record. The returned session has
/// no evaluation attached; [`evaluate`] produces one on demand.
///
/// `created_at` is caller-supplied so that rebuilding from the same inputs
/// yields a bit-identical record.
///
/// # Errors
///
/// * [`CoreError::UnknownClassifierConfig`](crate::CoreError::UnknownClassifierConfig)
///   when `classifier_id` has no registry entry (checked before any work).
/// * [`CoreError::MalformedDetection`](crate::CoreError::MalformedDetection)
///   when any raw record fails validation; no partial session is created.
pub fn classify_and_score(
    raw: &[RawDetection],
    frame_rate: f64,
    classifier_id: &str,
    config: &PipelineConfig,
    created_at: DateTime<Local>,
) -> CoreResult<Session> {
    let profile = classifier_profile(classifier_id)?;
    info!(
        "Analyzing {} detections with classifier '{}' ({})",
        raw.len(),
        classifier_id,
        profile.display_name
    );

    let events = normalize(raw, frame_rate)?;
    let classified = classify(&events, profile, config);
    let stats = aggregate(&classified, &config.scoring);

    let session = SessionBuilder::new(classifier_id, created_at)
        .detections(classified)
        .stats(stats)
        .build();
    info!(
        "Session {} complete: {} detections, stats {}",
        session.session_id,
        session.total_detections,
        session.stats
    );
    Ok(session)
}

/// Scores a session against a ground-truth annotation timeline.
///
/// Pure with respect to the session: the timeline and box score are read,
/// never altered. Callers attach the returned result with
/// [`Session::with_evaluation`]. The [`MatchReport`] carries the per-event
/// matching detail behind the confusion matrix, for reporting.
#[must_use]
pub fn evaluate(
    session: &Session,
    ground_truth: &GroundTruth,
    config: &PipelineConfig,
) -> (EvaluationResult, MatchReport) {
    let report = match_events(
        &session.detections,
        &ground_truth.expected_detections,
        config.match_tolerance_secs,
    );
    let result = evaluate_matrix(
        report.matrix(),
        &session.stats,
        ground_truth.expected_stats.as_ref(),
        &config.weights,
    );
    info!(
        "Evaluated session {} against '{}': overall {}",
        session.session_id,
        ground_truth.video_name,
        crate::utils::format_percent(result.overall_score)
    );
    (result, report)
}
