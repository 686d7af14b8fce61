//! Append-only evaluation history log.
//!
//! Every evaluation run appends one line to `evaluation_history.jsonl`: the
//! evaluation shape plus the session id and video name, for trend inspection
//! across runs. The log is a pure append and is never rewritten.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::processing::metrics::EvaluationResult;

/// Filename of the history log inside the data directory.
pub const HISTORY_FILE_NAME: &str = "evaluation_history.jsonl";

/// One line of the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// When the evaluation ran, RFC 3339.
    pub evaluated_at: String,
    pub video_name: String,
    pub session_id: String,
    #[serde(flatten)]
    pub evaluation: EvaluationResult,
}

/// The append-only evaluation history.
#[derive(Debug, Clone)]
pub struct EvaluationHistory {
    path: PathBuf,
}

impl EvaluationHistory {
    /// Opens (and creates, if needed) the history under `data_dir`.
    pub fn open(data_dir: &Path) -> CoreResult<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(HISTORY_FILE_NAME),
        })
    }

    /// Appends one record.
    pub fn append(&self, record: &HistoryRecord) -> CoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", serde_json::to_string(record)?)?;
        Ok(())
    }

    /// All records, oldest first.
    pub fn read_all(&self) -> CoreResult<Vec<HistoryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }
}
