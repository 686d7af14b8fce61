// hooptrack-core/src/config/builder.rs
//
// Builder pattern for PipelineConfig.

use super::{
    ConfidenceThresholds, PipelineConfig, ScoreWeights, ScoringTable,
};

/// Builder for creating [`PipelineConfig`] instances.
///
/// Every field starts from the documented default, so callers only set what
/// they want to change.
///
/// # Examples
///
/// ```rust
/// use hooptrack_core::config::PipelineConfigBuilder;
///
/// let config = PipelineConfigBuilder::new()
///     .temporal_window_secs(1.5)
///     .match_tolerance_secs(0.75)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the per-label confidence thresholds.
    #[must_use]
    pub fn thresholds(mut self, thresholds: ConfidenceThresholds) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    /// Sets the confidence threshold for shot-flavored detections.
    #[must_use]
    pub fn shot_threshold(mut self, value: f64) -> Self {
        self.config.thresholds.shot = value;
        self
    }

    /// Sets the confidence threshold for pass-flavored detections.
    #[must_use]
    pub fn assist_threshold(mut self, value: f64) -> Self {
        self.config.thresholds.assist = value;
        self
    }

    /// Sets the global confidence floor.
    #[must_use]
    pub fn confidence_floor(mut self, value: f64) -> Self {
        self.config.thresholds.floor = value;
        self
    }

    /// Sets the half-width of the classifier's context window, in seconds.
    #[must_use]
    pub fn temporal_window_secs(mut self, value: f64) -> Self {
        self.config.temporal_window_secs = value;
        self
    }

    /// Sets the ground-truth matching tolerance, in seconds.
    #[must_use]
    pub fn match_tolerance_secs(mut self, value: f64) -> Self {
        self.config.match_tolerance_secs = value;
        self
    }

    /// Replaces the label-to-stat scoring table.
    #[must_use]
    pub fn scoring(mut self, scoring: ScoringTable) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Replaces the overall-score blend weights.
    #[must_use]
    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Builds the configuration. Call [`PipelineConfig::validate`] on the
    /// result before first use.
    #[must_use]
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}
