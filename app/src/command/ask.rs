use std::path::PathBuf;

use super::init_agent;

/// Input parameters for answering a single question.
#[derive(Debug, Clone)]
pub struct AskInput {
    pub data_file: PathBuf,
    pub rules_file: Option<PathBuf>,
    /// The question to answer
    pub message: String,
}

/// Strategy for non-interactive mode: answer one question and exit.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let agent = init_agent(&input.data_file, input.rules_file.as_deref())?;
        println!("{}", agent.answer(&input.message));
        Ok(())
    }
}
