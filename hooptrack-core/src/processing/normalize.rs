//! Detection normalization: raw model output to validated events.
//!
//! The inference step hands the core an ordered list of per-clip detections.
//! This module validates each record and derives its timestamp from the
//! video's frame rate. Validation is all-or-nothing: one malformed record
//! rejects the whole batch, so partial sessions are never created.

use log::debug;

use crate::error::{CoreError, CoreResult};
use crate::events::{DetectionEvent, RawDetection};

/// Validates raw detections and derives timestamps.
///
/// Multiple detections may share a frame (one clip can yield several
/// observations), but the frame sequence must never decrease.
///
/// # Errors
///
/// * [`CoreError::InvalidConfig`] when `frame_rate` is not a positive finite
///   number; timestamps cannot be derived without it.
/// * [`CoreError::MalformedDetection`] on out-of-range or non-finite
///   confidence, an empty action label, or a decreasing frame number.
pub fn normalize(raw: &[RawDetection], frame_rate: f64) -> CoreResult<Vec<DetectionEvent>> {
    if !frame_rate.is_finite() || frame_rate <= 0.0 {
        return Err(CoreError::InvalidConfig(format!(
            "frame rate {frame_rate} must be a positive number"
        )));
    }

    let mut events = Vec::with_capacity(raw.len());
    let mut previous_frame: Option<u64> = None;

    for record in raw {
        if !record.confidence.is_finite() || !(0.0..=1.0).contains(&record.confidence) {
            return Err(CoreError::MalformedDetection {
                frame: record.frame,
                reason: format!("confidence {} outside [0, 1]", record.confidence),
            });
        }
        if record.detected_action.trim().is_empty() {
            return Err(CoreError::MalformedDetection {
                frame: record.frame,
                reason: "missing action label".to_string(),
            });
        }
        if let Some(previous) = previous_frame {
            if record.frame < previous {
                return Err(CoreError::MalformedDetection {
                    frame: record.frame,
                    reason: format!("frame ordering decreased from {previous}"),
                });
            }
        }
        previous_frame = Some(record.frame);

        events.push(DetectionEvent {
            frame: record.frame,
            timestamp: record.frame as f64 / frame_rate,
            detected_action: record.detected_action.clone(),
            confidence: record.confidence,
            shot_type: record.shot_type,
            frame_image: record.frame_image.clone(),
        });
    }

    debug!("Normalized {} detections at {frame_rate} fps", events.len());
    Ok(events)
}
