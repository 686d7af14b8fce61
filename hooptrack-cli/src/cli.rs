// hooptrack-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Hooptrack: Basketball action detection analysis",
    long_about = "Turns raw action-recognition detections into box-score sessions and \
                  evaluates them against ground-truth annotations via hooptrack-core."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classifies raw detections for one video and stores the session
    Analyze(AnalyzeArgs),
    /// Scores a stored session against the video's ground truth
    Evaluate(EvaluateArgs),
    /// Lists stored sessions, newest first
    Sessions(SessionsArgs),
    /// Lists the available classifier identifiers
    Classifiers,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// JSON file with the raw detections produced by the inference step
    #[arg(short = 'd', long = "detections", required = true, value_name = "DETECTIONS_JSON")]
    pub detections: PathBuf,

    /// Frame rate of the analyzed video
    #[arg(long, required = true, value_name = "FPS")]
    pub fps: f64,

    /// Classifier identifier the detections came from
    #[arg(
        short = 'c',
        long,
        value_name = "CLASSIFIER_ID",
        env = "HOOPTRACK_CLASSIFIER",
        default_value = hooptrack_core::config::DEFAULT_CLASSIFIER_ID
    )]
    pub classifier: String,

    /// Directory for the session store and evaluation history
    #[arg(long, value_name = "DATA_DIR", env = "HOOPTRACK_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Video filename the ground truth is named after (e.g. trim.mp4)
    #[arg(short = 'v', long, required = true, value_name = "VIDEO_NAME")]
    pub video: String,

    /// Identifier of the session to evaluate
    #[arg(short = 's', long, required = true, value_name = "SESSION_ID")]
    pub session: String,

    /// Directory holding ground-truth annotation files (<video-stem>.json)
    #[arg(
        long,
        value_name = "GROUND_TRUTH_DIR",
        env = "HOOPTRACK_GROUND_TRUTH_DIR",
        default_value = "ground_truth"
    )]
    pub ground_truth_dir: PathBuf,

    /// Directory for the session store and evaluation history
    #[arg(long, value_name = "DATA_DIR", env = "HOOPTRACK_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Parser, Debug)]
pub struct SessionsArgs {
    /// Directory for the session store
    #[arg(long, value_name = "DATA_DIR", env = "HOOPTRACK_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
}
