//! The responder: one line of input in, one line of output out.
//!
//! ```text
//! input ─► first matching rule ─► pick template ─► expand %N ─► fix punctuation
//! ```
//!
//! The compiled script is shared read-only behind an [`Arc`]; each responder
//! owns its own [`Selector`], so one responder per conversation needs no
//! locking.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::script::CompiledScript;
use crate::selector::{RandomSelector, Selector};
use crate::template::{fix_punctuation, substitute};

/// A response together with how it was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Index of the rule that matched.
    pub rule: usize,
    /// Index of the chosen template within that rule.
    pub template: usize,
    /// The final text.
    pub text: String,
}

/// Answers input lines using a compiled script.
#[derive(Clone, Debug)]
pub struct Responder<S = RandomSelector> {
    script: Arc<CompiledScript>,
    selector: S,
}

impl Responder<RandomSelector> {
    /// Creates a responder whose choices are seeded from entropy.
    #[must_use]
    pub fn new(script: Arc<CompiledScript>) -> Self {
        Self::with_selector(script, RandomSelector::from_entropy())
    }

    /// Creates a responder whose choices are reproducible for `seed`.
    #[must_use]
    pub fn seeded(script: Arc<CompiledScript>, seed: u64) -> Self {
        Self::with_selector(script, RandomSelector::seeded(seed))
    }
}

impl<S: Selector> Responder<S> {
    /// Creates a responder with an explicit selector.
    #[must_use]
    pub fn with_selector(script: Arc<CompiledScript>, selector: S) -> Self {
        Self { script, selector }
    }

    /// Returns the response to `input`, or an empty string if no rule matches.
    ///
    /// The caller is expected to have stripped trailing `!` and `.`; a
    /// trailing `?` is kept so question rules can see it.
    pub fn respond(&mut self, input: &str) -> String {
        self.respond_traced(input)
            .map(|response| response.text)
            .unwrap_or_default()
    }

    /// Like [`respond`](Self::respond), but reports which rule and template
    /// produced the text.
    pub fn respond_traced(&mut self, input: &str) -> Option<Response> {
        let Some(found) = self.script.rules().find_match(input) else {
            trace!(input, "no rule matched");
            return None;
        };

        let templates = found.rule.responses();
        let template = self.selector.select(templates.len());
        let expanded = substitute(
            &templates[template],
            &found.groups,
            self.script.reflections(),
        );
        let text = fix_punctuation(expanded);

        debug!(
            rule = found.index,
            pattern = found.rule.pattern(),
            template,
            "matched rule"
        );

        Some(Response {
            rule: found.index,
            template,
            text,
        })
    }

    /// The script this responder answers from.
    #[must_use]
    pub fn script(&self) -> &Arc<CompiledScript> {
        &self.script
    }

    /// Mutable access to the selector.
    pub fn selector_mut(&mut self) -> &mut S {
        &mut self.selector
    }

    /// Consumes the responder, returning its selector.
    pub fn into_selector(self) -> S {
        self.selector
    }
}
