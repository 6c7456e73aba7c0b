use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::intent::IntentRouter;
use crate::knowledge::KnowledgeStore;

pub const BANNER: &str = "JSON QA エージェントが起動しました。'exit'と入力すると終了します。";
pub const USAGE_HINT: &str =
    "JSONデータに基づいて質問に答えます。例：「ノートパソコンの価格はいくらですか？」";
pub const FAREWELL: &str = "エージェントを終了します。";

const PROMPT: &str = "\nあなた: ";
const EXIT_COMMAND: &str = "exit";

/// Question-answering agent over an immutable store and rule table.
#[derive(Debug, Clone)]
pub struct QaAgent {
    store: KnowledgeStore,
    router: IntentRouter,
}

impl QaAgent {
    #[must_use]
    pub const fn new(store: KnowledgeStore, router: IntentRouter) -> Self {
        Self { store, router }
    }

    #[must_use]
    pub fn answer(&self, question: &str) -> String {
        self.router.classify(&self.store, question)
    }

    /// Read questions line by line from `input` and write answers to `output`.
    ///
    /// Stops on `exit` (any case) or end of input. Blank lines are skipped.
    /// Bytes that are not valid UTF-8 are replaced, so such a line still gets
    /// an answer. Returns the number of questions answered.
    pub fn run_interactive<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> std::io::Result<usize> {
        writeln!(output, "{BANNER}")?;
        writeln!(output, "{USAGE_HINT}")?;

        let mut answered = 0;
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input reached");
                writeln!(output)?;
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let question = line.trim();

            if question.eq_ignore_ascii_case(EXIT_COMMAND) {
                break;
            }

            if question.is_empty() {
                continue;
            }

            let response = self.answer(question);
            writeln!(output, "エージェント: {response}")?;
            answered += 1;
        }

        writeln!(output, "{FAREWELL}")?;
        output.flush()?;
        info!("Session ended after {} questions", answered);
        Ok(answered)
    }
}
