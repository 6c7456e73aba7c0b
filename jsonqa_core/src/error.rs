use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the knowledge base document. Fatal at startup.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to build the rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule #{rule}: invalid pattern `{pattern}`")]
    InvalidPattern {
        rule: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule #{rule} has no patterns")]
    EmptyRule { rule: usize },

    #[error("failed to read rule file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rule file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
