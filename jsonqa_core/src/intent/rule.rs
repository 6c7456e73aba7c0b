use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// What a matched rule does, with its bound argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "arg", rename_all = "snake_case")]
pub enum Action {
    /// Price of the product whose name contains the fragment.
    Price(String),
    /// Specs of the product whose name contains the fragment.
    Specs(String),
    /// Stock status of the product whose name contains the fragment.
    Availability(String),
    /// Answer of the FAQ entry whose question contains the keyword.
    Faq(String),
    CompanyName,
    CompanyLocations,
    CompanyContact,
    ListProducts,
}

impl Action {
    /// Returns the string representation of the action kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Price(_) => "price",
            Self::Specs(_) => "specs",
            Self::Availability(_) => "availability",
            Self::Faq(_) => "faq",
            Self::CompanyName => "company_name",
            Self::CompanyLocations => "company_locations",
            Self::CompanyContact => "company_contact",
            Self::ListProducts => "list_products",
        }
    }

    /// The bound product fragment or FAQ keyword, if any.
    #[must_use]
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::Price(arg) | Self::Specs(arg) | Self::Availability(arg) | Self::Faq(arg) => {
                Some(arg.as_str())
            }
            Self::CompanyName
            | Self::CompanyLocations
            | Self::CompanyContact
            | Self::ListProducts => None,
        }
    }
}

/// Declarative form of a rule, as written in the built-in table or a rule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub patterns: Vec<String>,
    pub action: Action,
}

impl RuleSpec {
    #[must_use]
    pub fn new<I, S>(patterns: I, action: Action) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            action,
        }
    }
}

/// A compiled rule: case-insensitive patterns tried in declaration order.
#[derive(Debug, Clone)]
pub struct Rule {
    patterns: Vec<Regex>,
    action: Action,
}

impl Rule {
    /// Compile `spec`; `index` is only used to label errors.
    pub fn compile(index: usize, spec: RuleSpec) -> Result<Self, RuleError> {
        if spec.patterns.is_empty() {
            return Err(RuleError::EmptyRule { rule: index });
        }

        let patterns = spec
            .patterns
            .into_iter()
            .map(|pattern| {
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| RuleError::InvalidPattern {
                        rule: index,
                        pattern,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            action: spec.action,
        })
    }

    /// Index of the first pattern found anywhere in `text`.
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<usize> {
        self.patterns.iter().position(|re| re.is_match(text))
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    #[must_use]
    pub const fn action(&self) -> &Action {
        &self.action
    }
}
