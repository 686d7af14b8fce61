//! Implementation of the 'sessions' and 'classifiers' listing subcommands.

use console::style;

use hooptrack_core::config::{classifier_ids, classifier_profile};
use hooptrack_core::{CoreResult, SessionStore};

use crate::cli::SessionsArgs;
use crate::report;

/// Lists stored sessions, newest first.
pub fn run_sessions(args: &SessionsArgs) -> CoreResult<()> {
    let store = SessionStore::open(&args.data_dir)?;
    let sessions = store.list()?;

    if sessions.is_empty() {
        println!("No sessions stored in {}", args.data_dir.display());
        return Ok(());
    }
    for session in &sessions {
        report::print_session_line(session);
    }
    Ok(())
}

/// Lists the classifier registry: identifier and display name.
pub fn run_classifiers() -> CoreResult<()> {
    for id in classifier_ids() {
        // Ids come straight from the registry, so the lookup cannot fail.
        let profile = classifier_profile(id)?;
        println!("{:<14} {}", style(id).cyan(), profile.display_name);
    }
    Ok(())
}
