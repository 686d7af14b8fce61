//! Configuration structures and constants for the hooptrack-core library.
//!
//! This module provides the configuration system for the detection pipeline:
//! per-label confidence thresholds, the temporal window used for classifier
//! disambiguation, the ground-truth matching tolerance, the label-to-stat
//! scoring table, and the overall-score weighting. Configuration is loaded
//! once at process start and treated as read-only afterwards; every pipeline
//! invocation borrows the same immutable [`PipelineConfig`].

mod builder;
mod registry;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::events::{EventLabel, ShotType};

pub use builder::PipelineConfigBuilder;
pub use registry::{
    classifier_ids, classifier_profile, ClassifierProfile, DEFAULT_CLASSIFIER_ID,
};

// Default constants

/// Default confidence threshold for shot-flavored detections.
pub const DEFAULT_SHOT_THRESHOLD: f64 = 0.5;

/// Default confidence threshold for pass-flavored detections.
pub const DEFAULT_ASSIST_THRESHOLD: f64 = 0.4;

/// Default confidence threshold for steal-flavored detections.
pub const DEFAULT_STEAL_THRESHOLD: f64 = 0.45;

/// Default confidence threshold for block-flavored detections.
pub const DEFAULT_BLOCK_THRESHOLD: f64 = 0.45;

/// Default confidence threshold for rebound-flavored detections.
pub const DEFAULT_REBOUND_THRESHOLD: f64 = 0.4;

/// Detections below this confidence are ignored regardless of their action
/// label. Matches the detection floor the inference step applies.
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.3;

/// Default half-width of the temporal window (seconds) the classifier
/// searches for neighboring context, e.g. the pass preceding a made shot.
pub const DEFAULT_TEMPORAL_WINDOW_SECS: f64 = 1.0;

/// Default tolerance (seconds) when matching classified events against
/// ground-truth annotations.
pub const DEFAULT_MATCH_TOLERANCE_SECS: f64 = 1.0;

/// Point value of a made shot without a shot-type attribute, and of an
/// explicit two-point shot.
pub const DEFAULT_TWO_POINT_VALUE: u64 = 2;

/// Point value of an explicit three-point shot.
pub const DEFAULT_THREE_POINT_VALUE: u64 = 3;

/// Weight of the F1 score in the overall evaluation score.
pub const OVERALL_WEIGHT_F1: f64 = 0.4;

/// Weight of the stats accuracy in the overall evaluation score.
pub const OVERALL_WEIGHT_STATS: f64 = 0.3;

/// Weight of the precision in the overall evaluation score.
pub const OVERALL_WEIGHT_PRECISION: f64 = 0.3;

/// Decimal places kept when rounding percentages for persisted output.
pub const METRIC_DECIMAL_PLACES: u32 = 1;

// Stat names (wire contract of the session `stats` object)

pub const STAT_POINTS: &str = "points";
pub const STAT_ASSISTS: &str = "assists";
pub const STAT_STEALS: &str = "steals";
pub const STAT_BLOCKS: &str = "blocks";
pub const STAT_REBOUNDS: &str = "rebounds";

/// Per-label confidence thresholds applied by the classifier.
///
/// A detection whose confidence falls below the threshold of a candidate
/// label loses that candidate; a detection below `floor` is ignored outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    pub shot: f64,
    pub assist: f64,
    pub steal: f64,
    pub block: f64,
    pub rebound: f64,
    /// Global minimum confidence for a detection to be considered at all.
    pub floor: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            shot: DEFAULT_SHOT_THRESHOLD,
            assist: DEFAULT_ASSIST_THRESHOLD,
            steal: DEFAULT_STEAL_THRESHOLD,
            block: DEFAULT_BLOCK_THRESHOLD,
            rebound: DEFAULT_REBOUND_THRESHOLD,
            floor: DEFAULT_CONFIDENCE_FLOOR,
        }
    }
}

impl ConfidenceThresholds {
    /// Threshold for one stat label. `Ignored` has no threshold; callers
    /// only ask about stat labels.
    #[must_use]
    pub fn for_label(&self, label: EventLabel) -> f64 {
        match label {
            EventLabel::Shot => self.shot,
            EventLabel::Assist => self.assist,
            EventLabel::Steal => self.steal,
            EventLabel::Block => self.block,
            EventLabel::Rebound => self.rebound,
            EventLabel::Ignored => 1.0,
        }
    }

    fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("shot", self.shot),
            ("assist", self.assist),
            ("steal", self.steal),
            ("block", self.block),
            ("rebound", self.rebound),
            ("floor", self.floor),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} threshold {value} outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Rule mapping one taxonomy label to the stat it increments and the value
/// each event contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRule {
    pub label: EventLabel,
    pub stat: String,
    pub value: u64,
}

/// The label-to-stat scoring table.
///
/// Aggregation walks this table instead of hard-coding stat names, so new
/// labels only require a new rule here. Shots are the one special case:
/// an explicit three-point shot contributes `three_point_value` instead of
/// the rule's base value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringTable {
    pub rules: Vec<ScoringRule>,
    pub three_point_value: u64,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            rules: vec![
                ScoringRule {
                    label: EventLabel::Shot,
                    stat: STAT_POINTS.to_string(),
                    value: DEFAULT_TWO_POINT_VALUE,
                },
                ScoringRule {
                    label: EventLabel::Assist,
                    stat: STAT_ASSISTS.to_string(),
                    value: 1,
                },
                ScoringRule {
                    label: EventLabel::Steal,
                    stat: STAT_STEALS.to_string(),
                    value: 1,
                },
                ScoringRule {
                    label: EventLabel::Block,
                    stat: STAT_BLOCKS.to_string(),
                    value: 1,
                },
                ScoringRule {
                    label: EventLabel::Rebound,
                    stat: STAT_REBOUNDS.to_string(),
                    value: 1,
                },
            ],
            three_point_value: DEFAULT_THREE_POINT_VALUE,
        }
    }
}

impl ScoringTable {
    /// The rule for a label, if the label carries a stat.
    #[must_use]
    pub fn rule_for(&self, label: EventLabel) -> Option<&ScoringRule> {
        self.rules.iter().find(|rule| rule.label == label)
    }

    /// Contribution of one classified event of `label` with the given
    /// optional shot type.
    #[must_use]
    pub fn value_for(&self, label: EventLabel, shot_type: Option<ShotType>) -> Option<u64> {
        let rule = self.rule_for(label)?;
        let value = match (label, shot_type) {
            (EventLabel::Shot, Some(ShotType::ThreePoint)) => self.three_point_value,
            _ => rule.value,
        };
        Some(value)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.rules.is_empty() {
            return Err(CoreError::InvalidConfig(
                "scoring table has no rules".to_string(),
            ));
        }
        for rule in &self.rules {
            if rule.stat.is_empty() {
                return Err(CoreError::InvalidConfig(format!(
                    "scoring rule for {} has an empty stat name",
                    rule.label
                )));
            }
            if rule.value == 0 {
                return Err(CoreError::InvalidConfig(format!(
                    "scoring rule for {} has a zero value",
                    rule.label
                )));
            }
            if rule.label == EventLabel::Ignored {
                return Err(CoreError::InvalidConfig(
                    "scoring table must not map IGNORED to a stat".to_string(),
                ));
            }
        }
        if self.three_point_value == 0 {
            return Err(CoreError::InvalidConfig(
                "three-point value must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Weights blending the component metrics into the overall score.
///
/// The weights are the one deliberately tunable policy in the system; they
/// must be non-negative and sum to 1 so the overall score stays in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub f1: f64,
    pub stats_accuracy: f64,
    pub precision: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            f1: OVERALL_WEIGHT_F1,
            stats_accuracy: OVERALL_WEIGHT_STATS,
            precision: OVERALL_WEIGHT_PRECISION,
        }
    }
}

impl ScoreWeights {
    fn validate(&self) -> CoreResult<()> {
        let parts = [self.f1, self.stats_accuracy, self.precision];
        if parts.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(CoreError::InvalidConfig(
                "score weights must be finite and non-negative".to_string(),
            ));
        }
        let sum: f64 = parts.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(CoreError::InvalidConfig(format!(
                "score weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(())
    }
}

/// Main configuration structure for the hooptrack-core library.
///
/// Typically created once by the consumer (e.g. hooptrack-cli) via
/// [`PipelineConfigBuilder`] and shared read-only across all pipeline
/// invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Per-label confidence thresholds used by the classifier.
    pub thresholds: ConfidenceThresholds,

    /// Half-width (seconds) of the classifier's context window.
    pub temporal_window_secs: f64,

    /// Tolerance (seconds) for ground-truth matching.
    pub match_tolerance_secs: f64,

    /// Label-to-stat mapping and point values.
    pub scoring: ScoringTable,

    /// Overall-score blend weights.
    pub weights: ScoreWeights,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            thresholds: ConfidenceThresholds::default(),
            temporal_window_secs: DEFAULT_TEMPORAL_WINDOW_SECS,
            match_tolerance_secs: DEFAULT_MATCH_TOLERANCE_SECS,
            scoring: ScoringTable::default(),
            weights: ScoreWeights::default(),
        }
    }
}

impl PipelineConfig {
    /// Validates all configuration values, returning the first violation.
    pub fn validate(&self) -> CoreResult<()> {
        self.thresholds.validate()?;
        if !self.temporal_window_secs.is_finite() || self.temporal_window_secs <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "temporal window {} must be positive",
                self.temporal_window_secs
            )));
        }
        if !self.match_tolerance_secs.is_finite() || self.match_tolerance_secs < 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "match tolerance {} must be non-negative",
                self.match_tolerance_secs
            )));
        }
        self.scoring.validate()?;
        self.weights.validate()
    }
}
