//! Intent routing using an ordered table of regex rules.
//!
//! Each rule carries one or more patterns (any match triggers it) and an
//! [`Action`] whose argument is fixed when the rule is registered. Rules are
//! tried in order; the first hit answers and no later rule is consulted.

mod answer;
mod router;
mod rule;
mod table;

pub use answer::FALLBACK_ANSWER;
pub use router::IntentRouter;
pub use rule::{Action, Rule, RuleSpec};
pub use table::default_rules;
