//! Behavior patterns: conjunctions of required and forbidden tokens.

use super::token::{BehaviorSequence, BehaviorToken, EffectiveState};
use crate::error::BehaviorError;
use std::fmt;

/// A space-separated conjunction tested against an [`EffectiveState`]
///
/// A positive term requires the name to be enabled; a negated term requires
/// the name to be absent or negated. An empty pattern is always satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorPattern {
    terms: Vec<BehaviorToken>,
}

impl BehaviorPattern {
    pub fn parse(text: &str) -> Result<Self, BehaviorError> {
        let terms = BehaviorSequence::parse(text)?.tokens().to_vec();
        Ok(Self { terms })
    }

    pub fn from_terms(terms: Vec<BehaviorToken>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[BehaviorToken] {
        &self.terms
    }

    pub fn is_satisfied_by(&self, state: &EffectiveState<'_>) -> bool {
        self.terms.iter().all(|term| {
            if term.is_negated() {
                !state.is_enabled(term.name())
            } else {
                state.is_enabled(term.name())
            }
        })
    }

    /// Whether this pattern forbids `name`
    pub fn excludes(&self, name: &str) -> bool {
        self.terms
            .iter()
            .any(|term| term.is_negated() && term.name() == name)
    }
}

impl fmt::Display for BehaviorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.terms.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn satisfied(pattern: &str, behavior: &str) -> bool {
        let pattern = BehaviorPattern::parse(pattern).unwrap();
        let seq = BehaviorSequence::parse(behavior).unwrap();
        pattern.is_satisfied_by(&seq.effective_state())
    }

    #[test]
    fn test_positive_term_requires_enabled() {
        assert!(satisfied("connection", "connection"));
        assert!(!satisfied("connection", "list"));
        assert!(!satisfied("connection", "connection -connection"));
    }

    #[test]
    fn test_negative_term_accepts_absent_or_negated() {
        assert!(satisfied("connection -list", "connection"));
        assert!(satisfied("connection -list", "connection -list"));
        assert!(!satisfied("connection -list", "connection list"));
    }

    #[test]
    fn test_empty_pattern_always_satisfied() {
        assert!(satisfied("", ""));
        assert!(satisfied("", "-list"));
    }

    #[test]
    fn test_excludes() {
        let pattern = BehaviorPattern::parse("connection -list").unwrap();
        assert!(pattern.excludes("list"));
        assert!(!pattern.excludes("connection"));
        assert_eq!(pattern.to_string(), "connection -list");
    }
}
