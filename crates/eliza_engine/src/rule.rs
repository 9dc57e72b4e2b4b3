//! Ordered rule table.
//!
//! A rule pairs a case-insensitive regular expression with the response
//! templates it may answer with. Rules are tried in table order and the first
//! one whose pattern matches anywhere in the input wins.

use eliza_foundation::{Error, ErrorContext, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

// =============================================================================
// Rule Spec
// =============================================================================

/// Uncompiled form of a rule, as written in a script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Regular expression source (matched case-insensitively).
    pub pattern: String,
    /// Response templates, `%N` referring to capture group N.
    pub responses: Vec<String>,
}

impl RuleSpec {
    /// Creates a rule spec from a pattern and its responses.
    #[must_use]
    pub fn new<I, S>(pattern: impl Into<String>, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// Compiled Rule
// =============================================================================

/// A compiled rule ready for matching.
#[derive(Clone, Debug)]
pub struct Rule {
    regex: Regex,
    source: String,
    responses: Vec<String>,
}

impl Rule {
    /// Compiles a rule spec. `index` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regular expression or
    /// the rule has no responses.
    pub fn compile(index: usize, spec: &RuleSpec) -> Result<Self> {
        if spec.responses.is_empty() {
            return Err(Error::empty_responses(index, &spec.pattern)
                .with_context(ErrorContext::new().with_rule(index)));
        }

        let regex = RegexBuilder::new(&spec.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                Error::invalid_pattern(index, &spec.pattern, e.to_string())
                    .with_context(ErrorContext::new().with_rule(index))
            })?;

        Ok(Self {
            regex,
            source: spec.pattern.clone(),
            responses: spec.responses.clone(),
        })
    }

    /// The pattern source this rule was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// The response templates, never empty.
    #[must_use]
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Number of capture groups, not counting the implicit whole-match group.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Returns true if the pattern matches somewhere in `input`.
    #[must_use]
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Searches `input` and returns groups 0..=K on success.
    ///
    /// Groups that did not participate in the match are reported as "".
    #[must_use]
    pub fn captures<'i>(&self, input: &'i str) -> Option<Vec<&'i str>> {
        let caps = self.regex.captures(input)?;
        Some(
            caps.iter()
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect(),
        )
    }

    /// Returns the uncompiled form of this rule.
    #[must_use]
    pub fn to_spec(&self) -> RuleSpec {
        RuleSpec {
            pattern: self.source.clone(),
            responses: self.responses.clone(),
        }
    }
}

// =============================================================================
// Rule Match
// =============================================================================

/// The first rule that matched an input, with its captured groups.
#[derive(Clone, Debug)]
pub struct RuleMatch<'r, 'i> {
    /// Position of the rule in the table.
    pub index: usize,
    /// The matching rule.
    pub rule: &'r Rule,
    /// Group 0 is the whole match, groups 1..=K the parenthesized captures.
    pub groups: Vec<&'i str>,
}

// =============================================================================
// Rule Table
// =============================================================================

/// Inputs the last rule must accept to count as a catch-all.
const CATCH_ALL_SAMPLES: &[&str] = &["", "x", "Hello there.", "why?", "\n"];

/// An ordered, immutable sequence of compiled rules.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compiles every spec in order.
    ///
    /// # Errors
    ///
    /// Returns the first compilation error, tagged with the rule index.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| Rule::compile(index, spec))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Finds the first rule whose pattern matches `input`.
    #[must_use]
    pub fn find_match<'r, 'i>(&'r self, input: &'i str) -> Option<RuleMatch<'r, 'i>> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.captures(input)
                .map(|groups| RuleMatch { index, rule, groups })
        })
    }

    /// Returns true if the last rule matches any input.
    ///
    /// The last pattern must match the empty string and a few non-empty
    /// samples; an anchored empty pattern such as `^$` matches "" but is not
    /// a catch-all.
    #[must_use]
    pub fn has_catch_all(&self) -> bool {
        self.rules
            .last()
            .is_some_and(|rule| CATCH_ALL_SAMPLES.iter().all(|s| rule.is_match(s)))
    }

    /// Returns the rule at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Iterates rules in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
