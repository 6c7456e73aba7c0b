use std::path::Path;

use tracing::{debug, info};

use super::answer::FALLBACK_ANSWER;
use super::table::default_rules;
use super::{Action, Rule, RuleSpec};
use crate::error::RuleError;
use crate::knowledge::KnowledgeStore;

/// Ordered rule table. The first matching rule answers.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<Rule>,
}

impl IntentRouter {
    /// Compile `specs`, keeping their order.
    pub fn new(specs: Vec<RuleSpec>) -> Result<Self, RuleError> {
        let rules = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Rule::compile(index, spec))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Intent router ready with {} rules", rules.len());
        Ok(Self { rules })
    }

    /// Router over the built-in table.
    pub fn with_default_rules() -> Result<Self, RuleError> {
        Self::new(default_rules())
    }

    /// Router over a JSON array of rules read from `path`, replacing the built-in table.
    pub fn from_rules_file(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let specs: Vec<RuleSpec> =
            serde_json::from_str(&content).map_err(|source| RuleError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded {} rules from {}", specs.len(), path.display());
        Self::new(specs)
    }

    /// Action of the first rule with a pattern found anywhere in `text`.
    #[must_use]
    pub fn route(&self, text: &str) -> Option<&Action> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.first_match(text).map(|pattern| {
                debug!(
                    "Question matched rule #{} pattern #{} -> {}",
                    index,
                    pattern,
                    rule.action().as_str()
                );
                rule.action()
            })
        })
    }

    /// Answer `text` from `store`, or [`FALLBACK_ANSWER`] if no rule matches.
    #[must_use]
    pub fn classify(&self, store: &KnowledgeStore, text: &str) -> String {
        self.route(text).map_or_else(
            || {
                debug!("No rule matched question: {text}");
                FALLBACK_ANSWER.to_string()
            },
            |action| action.answer(store),
        )
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> KnowledgeStore {
        KnowledgeStore::from_json_str(
            r#"{"company": {"name": "テック", "locations": ["東京"]}}"#,
        )
        .unwrap()
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        let router = IntentRouter::new(vec![
            RuleSpec::new(["会社"], Action::CompanyName),
            RuleSpec::new(["会社.*どこ"], Action::CompanyLocations),
        ])
        .unwrap();

        assert_eq!(router.route("会社はどこ？"), Some(&Action::CompanyName));
        assert_eq!(router.classify(&store(), "会社はどこ？"), "会社名はテックです。");
    }

    #[test]
    fn reordering_changes_the_winner() {
        let router = IntentRouter::new(vec![
            RuleSpec::new(["会社.*どこ"], Action::CompanyLocations),
            RuleSpec::new(["会社"], Action::CompanyName),
        ])
        .unwrap();

        assert_eq!(
            router.classify(&store(), "会社はどこ？"),
            "会社の所在地は東京です。"
        );
        assert_eq!(router.classify(&store(), "会社"), "会社名はテックです。");
    }

    #[test]
    fn unmatched_returns_fallback() {
        let router = IntentRouter::new(vec![RuleSpec::new(["会社"], Action::CompanyName)]).unwrap();
        assert_eq!(router.route("天気は？"), None);
        assert_eq!(router.classify(&store(), "天気は？"), FALLBACK_ANSWER);
        assert_eq!(router.classify(&store(), ""), FALLBACK_ANSWER);
    }

    #[test]
    fn empty_table_always_falls_back() {
        let router = IntentRouter::new(Vec::new()).unwrap();
        assert!(router.rules().is_empty());
        assert_eq!(router.classify(&store(), "会社"), FALLBACK_ANSWER);
    }

    #[test]
    fn bad_rule_reports_its_index() {
        let err = IntentRouter::new(vec![
            RuleSpec::new(["ok"], Action::CompanyName),
            RuleSpec::new(["[z-a]"], Action::CompanyName),
        ])
        .unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { rule: 1, .. }));
    }

    #[test]
    fn default_table_compiles() {
        let router = IntentRouter::with_default_rules().unwrap();
        assert_eq!(router.rules().len(), 15);
    }
}
