//! Event classification: one taxonomy label per detection.
//!
//! Classification happens in three deterministic passes over the timeline:
//!
//! 1. Resolve each detection's candidate labels from the classifier
//!    vocabulary and the per-label confidence thresholds.
//! 2. Pick a base label per detection by fixed precedence when the raw
//!    vocabulary is coarser than the taxonomy (e.g. "throw" can mean a shot
//!    or a pass).
//! 3. Link assists: a pass becomes an `Assist` only when a made shot follows
//!    it within the temporal window. Each shot credits at most one assist,
//!    the nearest qualifying prior pass; ties at equal distance favor the
//!    earlier event. Unlinked passes are `Ignored`.
//!
//! The result is a pure function of the input sequence and the configured
//! thresholds: same input, same output, every run.

use log::debug;

use crate::config::{ClassifierProfile, PipelineConfig};
use crate::events::{ClassifiedEvent, DetectionEvent, EventLabel};

/// Precedence for coarse-vocabulary disambiguation. A detection matching
/// several labels resolves to the first of these it matched.
const LABEL_PRECEDENCE: [EventLabel; 5] = [
    EventLabel::Shot,
    EventLabel::Block,
    EventLabel::Steal,
    EventLabel::Rebound,
    EventLabel::Assist,
];

/// Classifies every detection, preserving input order and length.
#[must_use]
pub fn classify(
    events: &[DetectionEvent],
    profile: &ClassifierProfile,
    config: &PipelineConfig,
) -> Vec<ClassifiedEvent> {
    let mut labels: Vec<EventLabel> = events
        .iter()
        .map(|event| base_label(event, profile, config))
        .collect();

    link_assists(events, &mut labels, config.temporal_window_secs);

    let classified: Vec<ClassifiedEvent> = events
        .iter()
        .zip(labels)
        .map(|(event, classified_as)| ClassifiedEvent {
            event: event.clone(),
            classified_as,
        })
        .collect();

    let counted = classified.iter().filter(|e| e.is_counted()).count();
    debug!(
        "Classified {} events ({} counted, {} ignored)",
        classified.len(),
        counted,
        classified.len() - counted
    );
    classified
}

/// Resolves one detection to its base label: the highest-precedence
/// candidate whose keywords match the action and whose threshold the
/// confidence clears. Detections below the global floor, or with no
/// qualifying candidate, are `Ignored`.
fn base_label(
    event: &DetectionEvent,
    profile: &ClassifierProfile,
    config: &PipelineConfig,
) -> EventLabel {
    if event.confidence < config.thresholds.floor {
        return EventLabel::Ignored;
    }

    let action = event.detected_action.to_lowercase();
    for label in LABEL_PRECEDENCE {
        let matches_keywords = profile
            .keywords_for(label)
            .iter()
            .any(|keyword| action.contains(keyword.as_str()));
        if matches_keywords && event.confidence >= config.thresholds.for_label(label) {
            return label;
        }
    }
    EventLabel::Ignored
}

/// Second pass: ties pass-flavored events to the made shots they set up.
///
/// Walks the shots left to right. For each shot, the nearest unconsumed
/// pass no earlier than `window_secs` before it is promoted to `Assist`;
/// two passes at the same distance (a shared-frame batch) resolve to the
/// earlier one in sequence order. Passes that set up no shot drop to
/// `Ignored`.
fn link_assists(events: &[DetectionEvent], labels: &mut [EventLabel], window_secs: f64) {
    let mut consumed = vec![false; labels.len()];

    for shot_idx in 0..labels.len() {
        if labels[shot_idx] != EventLabel::Shot {
            continue;
        }
        let shot_time = events[shot_idx].timestamp;

        let mut best: Option<(usize, f64)> = None;
        for pass_idx in 0..shot_idx {
            if labels[pass_idx] != EventLabel::Assist || consumed[pass_idx] {
                continue;
            }
            let distance = shot_time - events[pass_idx].timestamp;
            if !(0.0..=window_secs).contains(&distance) {
                continue;
            }
            // Strict comparison keeps the earlier pass on equal distance.
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((pass_idx, distance)),
            }
        }

        if let Some((pass_idx, distance)) = best {
            consumed[pass_idx] = true;
            debug!(
                "Assist at {:.2}s credited to shot at {:.2}s ({distance:.2}s apart)",
                events[pass_idx].timestamp, shot_time
            );
        }
    }

    for (label, was_consumed) in labels.iter_mut().zip(consumed) {
        if *label == EventLabel::Assist && !was_consumed {
            *label = EventLabel::Ignored;
        }
    }
}
