//! Lifecycle — resolve, execute, print, release.

use crate::context::ConnectionContext;
use crate::printer::print_results;
use crate::resolver::load_command;
use tracing::error;
use tutorial_core::TutorialError;

/// How a single invocation ended. The process exits 0 in every case.
#[derive(Debug)]
pub enum RunOutcome {
    /// Token did not name a command; nothing ran
    NoMatch,
    /// Command ran and its result was printed
    Completed,
    /// Command ran and failed; the error was logged
    Failed(TutorialError),
}

/// Run the command named by `token`, then release `context`.
///
/// The context is consumed, so it is released exactly once whichever way the
/// run ends.
pub fn run(token: &str, context: ConnectionContext) -> RunOutcome {
    let outcome = execute_token(token, &context);
    context.close();
    outcome
}

fn execute_token(token: &str, context: &ConnectionContext) -> RunOutcome {
    let Some(command) = load_command(token, context) else {
        return RunOutcome::NoMatch;
    };

    match command.execute() {
        Ok(result) => {
            print_results(&result);
            RunOutcome::Completed
        }
        Err(e) => {
            error!(command = command.name(), "Problem executing command: {:?}", e);
            RunOutcome::Failed(e)
        }
    }
}
