use std::collections::BTreeMap;

use hooptrack_core::config::{ScoreWeights, ScoringTable, STAT_ASSISTS, STAT_POINTS};
use hooptrack_core::events::{ClassifiedEvent, DetectionEvent, EventLabel};
use hooptrack_core::processing::{aggregate, evaluate_matrix, BoxScore, ConfusionMatrix};
use hooptrack_core::utils::round_half_up;

fn matrix(tp: u64, fp: u64, fn_: u64) -> ConfusionMatrix {
    ConfusionMatrix {
        true_positives: tp,
        false_positives: fp,
        false_negatives: fn_,
    }
}

fn classified(timestamp: f64, label: EventLabel) -> ClassifiedEvent {
    ClassifiedEvent {
        event: DetectionEvent {
            frame: (timestamp * 30.0) as u64,
            timestamp,
            detected_action: "test action".to_string(),
            confidence: 0.9,
            shot_type: None,
            frame_image: None,
        },
        classified_as: label,
    }
}

fn empty_score() -> BoxScore {
    BoxScore::zeroed(&ScoringTable::default())
}

#[test]
fn worked_example_percentages() {
    // TP=1, FP=2, FN=1: precision 33.3%, recall 50.0%, f1 40.0%.
    let result = evaluate_matrix(matrix(1, 2, 1), &empty_score(), None, &ScoreWeights::default());

    assert_eq!(result.precision, 33.3);
    assert_eq!(result.recall, 50.0);
    assert_eq!(result.f1_score, 40.0);
    assert_eq!(result.stats_accuracy, 100.0);
    // 0.4*40 + 0.3*100 + 0.3*33.33 = 56.0
    assert_eq!(result.overall_score, 56.0);
}

#[test]
fn zero_denominators_default_to_one_hundred_percent() {
    let result = evaluate_matrix(matrix(0, 0, 0), &empty_score(), None, &ScoreWeights::default());

    assert_eq!(result.precision, 100.0);
    assert_eq!(result.recall, 100.0);
    assert_eq!(result.f1_score, 100.0);
    assert_eq!(result.overall_score, 100.0);
}

#[test]
fn f1_is_zero_when_precision_and_recall_are_zero() {
    let result = evaluate_matrix(matrix(0, 3, 2), &empty_score(), None, &ScoreWeights::default());

    assert_eq!(result.precision, 0.0);
    assert_eq!(result.recall, 0.0);
    assert_eq!(result.f1_score, 0.0);
}

#[test]
fn perfect_matching_scores_one_hundred() {
    let result = evaluate_matrix(matrix(5, 0, 0), &empty_score(), None, &ScoreWeights::default());

    assert_eq!(result.precision, 100.0);
    assert_eq!(result.recall, 100.0);
    assert_eq!(result.f1_score, 100.0);
    assert_eq!(result.overall_score, 100.0);
}

#[test]
fn stats_accuracy_averages_per_stat_relative_error() {
    // Two made shots and one assist: points=4, assists=1.
    let detected = aggregate(
        &[
            classified(1.0, EventLabel::Shot),
            classified(2.0, EventLabel::Shot),
            classified(3.0, EventLabel::Assist),
        ],
        &ScoringTable::default(),
    );
    let expected: BTreeMap<String, u64> =
        BTreeMap::from([(STAT_POINTS.to_string(), 4), (STAT_ASSISTS.to_string(), 2)]);

    let result = evaluate_matrix(
        matrix(3, 0, 0),
        &detected,
        Some(&expected),
        &ScoreWeights::default(),
    );

    // points: 1 - |4-4|/4 = 1.0; assists: 1 - |1-2|/2 = 0.5; average 75%.
    assert_eq!(result.stats_accuracy, 75.0);
    // 0.4*100 + 0.3*75 + 0.3*100 = 92.5
    assert_eq!(result.overall_score, 92.5);
}

#[test]
fn stat_overcount_clamps_to_zero_accuracy() {
    // Five detected steals against one expected: relative error 4/1 clamps
    // the per-stat accuracy at 0, never below.
    let detected = aggregate(
        &vec![classified(1.0, EventLabel::Steal); 5],
        &ScoringTable::default(),
    );
    let expected: BTreeMap<String, u64> = BTreeMap::from([("steals".to_string(), 1)]);

    let result = evaluate_matrix(
        matrix(1, 4, 0),
        &detected,
        Some(&expected),
        &ScoreWeights::default(),
    );

    assert_eq!(result.stats_accuracy, 0.0);
}

#[test]
fn expected_stat_of_zero_uses_unit_denominator() {
    // 1 - |0-0|/max(0,1) = 1.0
    let expected: BTreeMap<String, u64> = BTreeMap::from([("blocks".to_string(), 0)]);

    let result = evaluate_matrix(
        matrix(0, 0, 0),
        &empty_score(),
        Some(&expected),
        &ScoreWeights::default(),
    );

    assert_eq!(result.stats_accuracy, 100.0);
}

#[test]
fn metrics_are_bounded() {
    let cases = [
        matrix(0, 0, 0),
        matrix(0, 10, 0),
        matrix(0, 0, 10),
        matrix(7, 3, 2),
        matrix(1, 100, 100),
    ];
    for case in cases {
        let result = evaluate_matrix(case, &empty_score(), None, &ScoreWeights::default());
        for value in [
            result.precision,
            result.recall,
            result.f1_score,
            result.stats_accuracy,
            result.overall_score,
        ] {
            assert!((0.0..=100.0).contains(&value), "{value} out of range for {case:?}");
        }
    }
}

#[test]
fn results_carry_the_matrix_counts() {
    let result = evaluate_matrix(matrix(3, 2, 1), &empty_score(), None, &ScoreWeights::default());

    assert_eq!(result.matrix.true_positives, 3);
    assert_eq!(result.matrix.false_positives, 2);
    assert_eq!(result.matrix.false_negatives, 1);
}

#[test]
fn rounding_is_half_up_to_one_decimal() {
    assert_eq!(round_half_up(56.25, 1), 56.3);
    assert_eq!(round_half_up(56.24, 1), 56.2);
    assert_eq!(round_half_up(100.0 / 3.0, 1), 33.3);
    assert_eq!(round_half_up(0.0, 1), 0.0);
    assert_eq!(round_half_up(100.0, 1), 100.0);
}
