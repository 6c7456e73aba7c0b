#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use command::{
    AskInput, AskStrategy, ChatInput, ChatStrategy, CommandStrategy, DumpRulesStrategy,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const DEFAULT_DATA_FILE: &str = "knowledge_base.json";

#[derive(Parser, Debug)]
#[command(name = "jsonqa", version)]
#[command(about = "Answer questions about products, FAQ and company info from a JSON file", long_about = None)]
struct Cli {
    /// Knowledge base JSON document
    #[arg(default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Answer a single question and exit
    #[arg(short = 'm', long)]
    message: Option<String>,

    /// JSON rule table replacing the built-in one
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Print the built-in rule table as JSON and exit
    #[arg(long, conflicts_with_all = ["message", "rules"])]
    dump_rules: bool,

    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.dump_rules {
        return DumpRulesStrategy.execute(());
    }

    match cli.message {
        Some(message) => AskStrategy.execute(AskInput {
            data_file: cli.data_file,
            rules_file: cli.rules,
            message,
        }),
        None => ChatStrategy.execute(ChatInput {
            data_file: cli.data_file,
            rules_file: cli.rules,
        }),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
