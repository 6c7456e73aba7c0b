use std::io;
use std::path::PathBuf;

use tracing::info;

use super::init_agent;

/// Input parameters for the interactive session.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Knowledge base document
    pub data_file: PathBuf,
    /// Optional rule table replacing the built-in one
    pub rules_file: Option<PathBuf>,
}

/// Strategy for the interactive question loop on stdin/stdout.
///
/// Ends when the user types `exit` or stdin is closed.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let agent = init_agent(&input.data_file, input.rules_file.as_deref())?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let answered = agent.run_interactive(stdin.lock(), stdout.lock())?;

        info!("Interactive session finished, {} questions answered", answered);
        Ok(())
    }
}
