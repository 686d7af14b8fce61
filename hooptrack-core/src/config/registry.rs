// hooptrack-core/src/config/registry.rs
//
// Built-in classifier profiles. The registry key is the identifier stored on
// every session at creation time; display names are presentation-only
// enrichment and are never used for lookup.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::{CoreError, CoreResult};
use crate::events::EventLabel;

/// Identifier of the classifier used when the caller does not name one.
pub const DEFAULT_CLASSIFIER_ID: &str = "videomae";

/// Vocabulary and metadata for one upstream action-recognition model.
///
/// `vocabulary` maps each taxonomy label to the keywords that mark an action
/// string as a candidate for that label (case-insensitive substring match).
/// Keywords may overlap between labels; the classifier disambiguates.
#[derive(Debug, Clone)]
pub struct ClassifierProfile {
    /// Human-readable model name, for display only.
    pub display_name: String,
    pub vocabulary: Vec<(EventLabel, Vec<String>)>,
}

impl ClassifierProfile {
    fn new(display_name: &str, vocabulary: &[(EventLabel, &[&str])]) -> Self {
        Self {
            display_name: display_name.to_string(),
            vocabulary: vocabulary
                .iter()
                .map(|(label, words)| {
                    (*label, words.iter().map(|w| (*w).to_string()).collect())
                })
                .collect(),
        }
    }

    /// Keywords for one label, empty if the profile has none.
    #[must_use]
    pub fn keywords_for(&self, label: EventLabel) -> &[String] {
        self.vocabulary
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, words)| words.as_slice())
            .unwrap_or(&[])
    }
}

/// Kinetics-style vocabulary shared by the video-transformer models.
/// "throw" is deliberately present for both shots and passes; those models
/// cannot tell the two apart and the classifier resolves the ambiguity.
const DEFAULT_VOCABULARY: &[(EventLabel, &[&str])] = &[
    (EventLabel::Shot, &["shooting", "throw", "toss", "dunk", "slam"]),
    (EventLabel::Assist, &["passing", "hand", "throw"]),
    (EventLabel::Steal, &["steal", "intercept", "strip"]),
    (EventLabel::Block, &["block", "defend"]),
    (EventLabel::Rebound, &["rebound", "catch", "grab"]),
];

/// YOLO emits phrase-style labels from its own fine-tuned head.
const YOLO_VOCABULARY: &[(EventLabel, &[&str])] = &[
    (
        EventLabel::Shot,
        &["shooting basketball", "shot", "throw", "dunk", "slam"],
    ),
    (EventLabel::Assist, &["passing basketball", "pass"]),
    (EventLabel::Steal, &["steal", "intercept"]),
    (EventLabel::Block, &["block", "defend"]),
    (
        EventLabel::Rebound,
        &["catching basketball", "catch", "rebound"],
    ),
];

static REGISTRY: Lazy<BTreeMap<&'static str, ClassifierProfile>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "videomae",
            ClassifierProfile::new("VideoMAE", DEFAULT_VOCABULARY),
        ),
        (
            "timesformer",
            ClassifierProfile::new("TimesFormer", DEFAULT_VOCABULARY),
        ),
        ("x3d", ClassifierProfile::new("X3D", DEFAULT_VOCABULARY)),
        (
            "clip",
            ClassifierProfile::new("CLIP Zero-Shot", DEFAULT_VOCABULARY),
        ),
        ("vivit", ClassifierProfile::new("ViViT", DEFAULT_VOCABULARY)),
        (
            "slowfast",
            ClassifierProfile::new("SlowFast", DEFAULT_VOCABULARY),
        ),
        (
            "yolo",
            ClassifierProfile::new("YOLO Ball Tracking", YOLO_VOCABULARY),
        ),
    ])
});

/// Looks up the profile for a classifier identifier.
///
/// # Errors
///
/// Returns [`CoreError::UnknownClassifierConfig`] when the identifier has no
/// registry entry. This is checked before classification starts.
pub fn classifier_profile(id: &str) -> CoreResult<&'static ClassifierProfile> {
    REGISTRY
        .get(id)
        .ok_or_else(|| CoreError::UnknownClassifierConfig(id.to_string()))
}

/// All registered classifier identifiers, in stable order.
#[must_use]
pub fn classifier_ids() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}
