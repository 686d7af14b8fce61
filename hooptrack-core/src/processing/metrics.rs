//! Accuracy metric calculation.
//!
//! Derives precision, recall, F1, stats accuracy, and the weighted overall
//! score from a confusion matrix and the session's box score. Every zero
//! denominator has an explicit defined value, so a metric is never NaN, and
//! every persisted percentage is rounded half-up to a fixed precision so
//! repeated runs are byte-identical.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{ScoreWeights, METRIC_DECIMAL_PLACES};
use crate::processing::boxscore::BoxScore;
use crate::processing::matching::ConfusionMatrix;
use crate::utils::round_half_up;

/// Accuracy metrics for one evaluation run. All score fields are
/// percentages in [0, 100] with one decimal. Never mutated once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub overall_score: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub stats_accuracy: f64,
    #[serde(flatten)]
    pub matrix: ConfusionMatrix,
}

/// Computes the evaluation metrics from a matching run.
///
/// * precision: `TP / (TP + FP)`, 100% when the denominator is zero.
/// * recall: `TP / (TP + FN)`, 100% when the denominator is zero.
/// * f1: harmonic mean of the two, 0 when both are zero.
/// * stats accuracy: per-stat relative accuracy against the expected totals,
///   averaged; 100% when ground truth carries no expected stats.
/// * overall: the configured weighted blend of f1, stats accuracy, and
///   precision.
#[must_use]
pub fn evaluate_matrix(
    matrix: ConfusionMatrix,
    detected_stats: &BoxScore,
    expected_stats: Option<&BTreeMap<String, u64>>,
    weights: &ScoreWeights,
) -> EvaluationResult {
    let tp = matrix.true_positives as f64;
    let fp = matrix.false_positives as f64;
    let fn_ = matrix.false_negatives as f64;

    let precision = if tp + fp == 0.0 {
        100.0
    } else {
        tp / (tp + fp) * 100.0
    };
    let recall = if tp + fn_ == 0.0 {
        100.0
    } else {
        tp / (tp + fn_) * 100.0
    };
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };
    let stats_accuracy = stats_accuracy_percent(detected_stats, expected_stats);
    let overall = weights.f1 * f1
        + weights.stats_accuracy * stats_accuracy
        + weights.precision * precision;

    EvaluationResult {
        overall_score: round_half_up(overall, METRIC_DECIMAL_PLACES),
        precision: round_half_up(precision, METRIC_DECIMAL_PLACES),
        recall: round_half_up(recall, METRIC_DECIMAL_PLACES),
        f1_score: round_half_up(f1, METRIC_DECIMAL_PLACES),
        stats_accuracy: round_half_up(stats_accuracy, METRIC_DECIMAL_PLACES),
        matrix,
    }
}

/// Per-stat relative accuracy `1 - |detected - expected| / max(expected, 1)`,
/// clamped to [0, 1], averaged over the stats present in ground truth.
fn stats_accuracy_percent(
    detected: &BoxScore,
    expected: Option<&BTreeMap<String, u64>>,
) -> f64 {
    let Some(expected) = expected.filter(|stats| !stats.is_empty()) else {
        return 100.0;
    };

    let total: f64 = expected
        .iter()
        .map(|(stat, &expected_count)| {
            let detected_count = detected.get(stat) as f64;
            let expected_count = expected_count as f64;
            let error = (detected_count - expected_count).abs() / expected_count.max(1.0);
            (1.0 - error).clamp(0.0, 1.0)
        })
        .sum();

    total / expected.len() as f64 * 100.0
}
