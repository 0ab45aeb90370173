//! Ordered, first-match-wins intent tables.

use tracing::debug;

use crate::interpreter::Query;

/// A keyword test over the lower-cased query.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// At least one keyword occurs in the query.
    Any(&'static [&'static str]),
    /// Every keyword occurs in the query.
    All(&'static [&'static str]),
}

impl Predicate {
    pub fn matches(&self, query: &Query) -> bool {
        match self {
            Predicate::Any(keywords) => keywords.iter().any(|k| query.contains(k)),
            Predicate::All(keywords) => {
                !keywords.is_empty() && keywords.iter().all(|k| query.contains(k))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntentRule<I: 'static> {
    pub intent: I,
    pub predicate: Predicate,
}

/// Rules are tested in order; earlier rules shadow later ones on overlapping text.
#[derive(Debug, Clone, Copy)]
pub struct IntentTable<I: 'static> {
    pub rules: &'static [IntentRule<I>],
    pub fallback: I,
}

impl<I: Copy + std::fmt::Debug> IntentTable<I> {
    pub fn classify(&self, query: &Query) -> I {
        let intent = self
            .rules
            .iter()
            .find(|rule| rule.predicate.matches(query))
            .map(|rule| rule.intent)
            .unwrap_or(self.fallback);
        debug!(query = query.raw(), ?intent, "classified query");
        intent
    }
}
