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

//! Pattern-routed question answering over a JSON knowledge base.
//!
//! A [`KnowledgeStore`] is loaded once and never mutated. An [`IntentRouter`]
//! walks an ordered rule table and the first rule whose patterns match the
//! question decides which lookup answers it.

pub mod agent;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod util;

pub use agent::QaAgent;
pub use error::{DataLoadError, RuleError};
pub use intent::{Action, FALLBACK_ANSWER, IntentRouter, Rule, RuleSpec};
pub use knowledge::{Company, ContactInfo, FaqEntry, KnowledgeBase, KnowledgeStore, Product};
