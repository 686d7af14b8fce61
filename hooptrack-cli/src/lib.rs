// hooptrack-cli/src/lib.rs
//
// Library portion of the Hooptrack CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod report;

// Re-export items needed by the binary or integration tests
pub use cli::{AnalyzeArgs, Cli, Commands, EvaluateArgs, SessionsArgs};
pub use commands::analyze::run_analyze;
pub use commands::evaluate::run_evaluate;
pub use commands::sessions::{run_classifiers, run_sessions};
