//! JSONL persistence for session records.
//!
//! Sessions live one-per-line in `sessions.jsonl` under the data directory.
//! Creation appends; attaching an evaluation rewrites the file with the one
//! updated record. The pipeline itself never touches storage; the CLI wires
//! this store around [`classify_and_score`](crate::classify_and_score) and
//! [`evaluate`](crate::evaluate).

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CoreError, CoreResult};
use crate::processing::metrics::EvaluationResult;
use crate::session::Session;

/// Filename of the session log inside the data directory.
pub const SESSIONS_FILE_NAME: &str = "sessions.jsonl";

/// Line-delimited session storage rooted at a data directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Opens (and creates, if needed) the store under `data_dir`.
    pub fn open(data_dir: &Path) -> CoreResult<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(SESSIONS_FILE_NAME),
        })
    }

    /// Appends a new session record.
    pub fn create(&self, session: &Session) -> CoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", serde_json::to_string(session)?)?;
        debug!("Stored session {} in {}", session.session_id, self.path.display());
        Ok(())
    }

    /// Loads one session by identifier.
    pub fn get(&self, session_id: &str) -> CoreResult<Option<Session>> {
        Ok(self
            .read_all()?
            .into_iter()
            .find(|session| session.session_id == session_id))
    }

    /// All sessions, newest first.
    pub fn list(&self) -> CoreResult<Vec<Session>> {
        let mut sessions = self.read_all()?;
        sessions.reverse();
        Ok(sessions)
    }

    /// Attaches an evaluation to a stored session and returns the updated
    /// record. Only the `evaluation` field changes; a second evaluation run
    /// overwrites the first.
    ///
    /// # Errors
    ///
    /// [`CoreError::SessionNotFound`] when no stored session has the id.
    pub fn attach_evaluation(
        &self,
        session_id: &str,
        evaluation: &EvaluationResult,
    ) -> CoreResult<Session> {
        let mut sessions = self.read_all()?;
        let session = sessions
            .iter_mut()
            .find(|session| session.session_id == session_id)
            .ok_or_else(|| CoreError::SessionNotFound(session_id.to_string()))?;
        session.evaluation = Some(evaluation.clone());
        let updated = session.clone();

        let mut lines = String::new();
        for session in &sessions {
            lines.push_str(&serde_json::to_string(session)?);
            lines.push('\n');
        }
        fs::write(&self.path, lines)?;
        Ok(updated)
    }

    fn read_all(&self) -> CoreResult<Vec<Session>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut sessions = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            sessions.push(serde_json::from_str(&line)?);
        }
        Ok(sessions)
    }
}
