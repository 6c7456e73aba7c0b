//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use std::path::Path;

use anyhow::Context;
use jsonqa_core::{IntentRouter, KnowledgeStore, QaAgent};
use tracing::info;

mod ask;
mod chat;
mod rules;

pub use ask::{AskInput, AskStrategy};
pub use chat::{ChatInput, ChatStrategy};
pub use rules::DumpRulesStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without runtime casting or boxing.
pub trait CommandStrategy {
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if the knowledge base or rule table cannot be loaded,
    /// or if writing to the terminal fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Load the knowledge base and build the router shared by the answering commands.
fn init_agent(data_file: &Path, rules_file: Option<&Path>) -> anyhow::Result<QaAgent> {
    let store = KnowledgeStore::load(data_file).with_context(|| {
        format!(
            "JSONファイルの読み込み中にエラーが発生しました: {}",
            data_file.display()
        )
    })?;

    let router = match rules_file {
        Some(path) => {
            info!("Using rule table from {}", path.display());
            IntentRouter::from_rules_file(path)
        }
        None => IntentRouter::with_default_rules(),
    }
    .context("ルールテーブルの構築に失敗しました")?;

    Ok(QaAgent::new(store, router))
}
