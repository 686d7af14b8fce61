//! Implementation of the 'evaluate' subcommand.
//!
//! Loads a stored session and the ground truth annotated for the video,
//! scores the session, attaches the result to the stored record, appends a
//! line to the evaluation history, and prints the detailed report.
//!
//! A missing ground-truth file is a recoverable condition: the command
//! reports it and leaves the session untouched.

use std::fs;
use std::path::Path;

use chrono::Local;
use console::style;
use log::{info, warn};

use hooptrack_core::{
    evaluate, CoreError, CoreResult, EvaluationHistory, GroundTruth, HistoryRecord,
    PipelineConfig, SessionStore,
};

use crate::cli::EvaluateArgs;
use crate::report;

/// Runs one evaluation. Returns `Ok(())` even when ground truth is missing;
/// hard failures (broken store, malformed files) still error out.
pub fn run_evaluate(args: &EvaluateArgs) -> CoreResult<()> {
    let config = PipelineConfig::default();
    config.validate()?;

    let store = SessionStore::open(&args.data_dir)?;
    let session = store
        .get(&args.session)?
        .ok_or_else(|| CoreError::SessionNotFound(args.session.clone()))?;

    let ground_truth = match load_ground_truth(&args.ground_truth_dir, &args.video) {
        Ok(ground_truth) => ground_truth,
        Err(error @ CoreError::NoGroundTruth { .. }) => {
            warn!("{error}");
            println!(
                "{} {error}; session {} is left without an evaluation",
                style("Skipping evaluation:").yellow().bold(),
                session.session_id
            );
            return Ok(());
        }
        Err(error) => return Err(error),
    };

    let (result, match_report) = evaluate(&session, &ground_truth, &config);

    let updated = store.attach_evaluation(&session.session_id, &result)?;
    let history = EvaluationHistory::open(&args.data_dir)?;
    history.append(&HistoryRecord {
        evaluated_at: Local::now().to_rfc3339(),
        video_name: ground_truth.video_name.clone(),
        session_id: updated.session_id.clone(),
        evaluation: result.clone(),
    })?;
    info!("Evaluation added to session {}", updated.session_id);

    report::print_evaluation_report(&ground_truth.video_name, &updated, &result, &match_report);
    Ok(())
}

/// Loads `<ground_truth_dir>/<video-stem>.json`.
///
/// # Errors
///
/// [`CoreError::NoGroundTruth`] when the file does not exist.
fn load_ground_truth(ground_truth_dir: &Path, video_name: &str) -> CoreResult<GroundTruth> {
    let stem = Path::new(video_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| video_name.to_string());
    let path = ground_truth_dir.join(format!("{stem}.json"));

    if !path.exists() {
        return Err(CoreError::NoGroundTruth {
            video_name: video_name.to_string(),
            path,
        });
    }
    Ok(serde_json::from_str(&fs::read_to_string(&path)?)?)
}
