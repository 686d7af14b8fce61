//! Implementation of the 'analyze' subcommand.
//!
//! Reads the raw detections the inference step serialized for one video,
//! runs the core pipeline, persists the resulting session, and prints the
//! box score.

use std::fs;

use chrono::Local;
use log::info;

use hooptrack_core::{classify_and_score, CoreResult, PipelineConfig, RawDetection, Session, SessionStore};

use crate::cli::AnalyzeArgs;
use crate::report;

/// Runs the analysis pipeline and returns the stored session.
pub fn run_analyze(args: &AnalyzeArgs) -> CoreResult<Session> {
    let config = PipelineConfig::default();
    config.validate()?;

    info!("Reading detections from {}", args.detections.display());
    let raw: Vec<RawDetection> = serde_json::from_str(&fs::read_to_string(&args.detections)?)?;

    let session = classify_and_score(&raw, args.fps, &args.classifier, &config, Local::now())?;

    let store = SessionStore::open(&args.data_dir)?;
    store.create(&session)?;
    info!("Saved session {}", session.session_id);

    report::print_box_score(&session);
    Ok(session)
}
