//! Greedy ground-truth matching.
//!
//! Aligns a classified timeline against a ground-truth annotation timeline
//! with a time-tolerance window, producing the confusion matrix behind the
//! evaluation metrics. Matching is one-to-one and greedy: each ground-truth
//! event claims the closest unmatched classified event of the same type, so
//! a duplicate detection of an already-matched event stays a false positive.
//!
//! Session sizes are bounded (one video, hundreds of events), so the
//! O(n*m) candidate scan is fine. The greedy choice is deterministic and
//! reproduced exactly by the tests; ambiguity is resolved by the tie-break
//! rules, never surfaced to the caller.

use serde::{Deserialize, Serialize};

use crate::events::{ClassifiedEvent, EventLabel, GroundTruthEvent};

/// True/false positive/negative counts from one matching run.
///
/// There is no true-negative count: event detection is open-world.
/// Invariants: `true_positives + false_negatives` equals the ground-truth
/// count, and `true_positives + false_positives` equals the count of
/// non-ignored classified events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
}

/// One ground-truth event paired with the detection that matched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    #[serde(rename = "type")]
    pub event_type: EventLabel,
    pub expected_time: f64,
    pub actual_time: f64,
    pub time_error: f64,
}

/// A counted detection no ground-truth event claimed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedDetection {
    #[serde(rename = "type")]
    pub event_type: EventLabel,
    pub timestamp: f64,
}

/// A ground-truth event no detection matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedEvent {
    #[serde(rename = "type")]
    pub event_type: EventLabel,
    pub expected_time: f64,
}

/// Full matching detail: the confusion matrix counts plus the per-event
/// lists the evaluation report prints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<MatchedPair>,
    pub false_positives: Vec<UnmatchedDetection>,
    pub false_negatives: Vec<MissedEvent>,
}

impl MatchReport {
    /// The confusion matrix these lists reduce to.
    #[must_use]
    pub fn matrix(&self) -> ConfusionMatrix {
        ConfusionMatrix {
            true_positives: self.matches.len() as u64,
            false_positives: self.false_positives.len() as u64,
            false_negatives: self.false_negatives.len() as u64,
        }
    }
}

/// Matches classified events against ground truth, one-to-one.
///
/// For each ground-truth event in timestamp order, the unmatched classified
/// event of the same type with the smallest absolute time difference within
/// `tolerance_secs` wins; ties go to the earlier classified timestamp, then
/// to timeline order. `IGNORED` events never participate.
#[must_use]
pub fn match_events(
    classified: &[ClassifiedEvent],
    ground_truth: &[GroundTruthEvent],
    tolerance_secs: f64,
) -> MatchReport {
    // Both sequences are time-ordered by construction; sort defensively so
    // the greedy pass sees them that way regardless of the caller.
    let mut truth_order: Vec<usize> = (0..ground_truth.len()).collect();
    truth_order.sort_by(|&a, &b| {
        ground_truth[a]
            .timestamp
            .total_cmp(&ground_truth[b].timestamp)
            .then(a.cmp(&b))
    });

    let counted: Vec<usize> = (0..classified.len())
        .filter(|&i| classified[i].is_counted())
        .collect();
    let mut matched = vec![false; classified.len()];
    let mut report = MatchReport::default();

    for &truth_idx in &truth_order {
        let expected = &ground_truth[truth_idx];

        let mut best: Option<(usize, f64)> = None;
        for &event_idx in &counted {
            let event = &classified[event_idx];
            if matched[event_idx] || event.classified_as != expected.event_type {
                continue;
            }
            let time_error = (event.event.timestamp - expected.timestamp).abs();
            if time_error > tolerance_secs {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_idx, best_error)) => {
                    time_error < best_error
                        || (time_error == best_error
                            && classified[event_idx].event.timestamp
                                < classified[best_idx].event.timestamp)
                }
            };
            if better {
                best = Some((event_idx, time_error));
            }
        }

        match best {
            Some((event_idx, time_error)) => {
                matched[event_idx] = true;
                report.matches.push(MatchedPair {
                    event_type: expected.event_type,
                    expected_time: expected.timestamp,
                    actual_time: classified[event_idx].event.timestamp,
                    time_error,
                });
            }
            None => report.false_negatives.push(MissedEvent {
                event_type: expected.event_type,
                expected_time: expected.timestamp,
            }),
        }
    }

    for &event_idx in &counted {
        if !matched[event_idx] {
            let event = &classified[event_idx];
            report.false_positives.push(UnmatchedDetection {
                event_type: event.classified_as,
                timestamp: event.event.timestamp,
            });
        }
    }

    report
}
