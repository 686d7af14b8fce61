//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Runs the analysis pipeline on a raw detections file and stores the session.
pub mod analyze;

/// Scores a stored session against ground truth and records the result.
pub mod evaluate;

/// Lists stored sessions and the classifier registry.
pub mod sessions;
