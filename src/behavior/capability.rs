//! Named capabilities and their accepted patterns.
//!
//! Capabilities are looked up by name in a [`CapabilityTable`], so adding a
//! new field kind means registering a rule, not touching the evaluator.
//!
//! Evaluation order: accepted patterns are tried in the order they were
//! registered and the first satisfied one enables the capability. A pattern
//! that excludes the capability it is registered for (`connection -list` under
//! `list`) never enables it and is skipped.

use super::pattern::BehaviorPattern;
use super::token::{BehaviorSequence, BehaviorToken};
use crate::error::BehaviorError;
use std::collections::BTreeMap;

/// Capability for the paginated connection field
pub const CONNECTION: &str = "connection";
/// Capability for the plain list field
pub const LIST: &str = "list";

/// Ordered accepted patterns for one capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRule {
    name: String,
    accepted: Vec<BehaviorPattern>,
}

impl CapabilityRule {
    /// Build a rule from pattern strings
    pub fn new(name: impl Into<String>, accepted: &[&str]) -> Result<Self, BehaviorError> {
        let accepted = accepted
            .iter()
            .map(|pattern| BehaviorPattern::parse(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.into(),
            accepted,
        })
    }

    pub fn from_patterns(name: impl Into<String>, accepted: Vec<BehaviorPattern>) -> Self {
        Self {
            name: name.into(),
            accepted,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accepted(&self) -> &[BehaviorPattern] {
        &self.accepted
    }

    /// The first accepted pattern that enables this capability, if any
    pub fn matching_pattern(&self, behavior: &BehaviorSequence) -> Option<&BehaviorPattern> {
        let state = behavior.effective_state();
        self.accepted
            .iter()
            .filter(|pattern| !pattern.excludes(&self.name))
            .find(|pattern| pattern.is_satisfied_by(&state))
    }

    pub fn is_enabled(&self, behavior: &BehaviorSequence) -> bool {
        self.matching_pattern(behavior).is_some()
    }
}

/// Evaluate a capability against ad hoc pattern strings
///
/// # Example
///
/// ```
/// use edgetable::behavior::{evaluate, BehaviorSequence};
///
/// let behavior = BehaviorSequence::parse("connection -list").unwrap();
/// assert!(evaluate(&behavior, "connection", &["connection", "connection -list"]).unwrap());
/// assert!(!evaluate(&behavior, "list", &["list", "connection -list"]).unwrap());
/// ```
pub fn evaluate(
    behavior: &BehaviorSequence,
    capability: &str,
    accepted: &[&str],
) -> Result<bool, BehaviorError> {
    Ok(CapabilityRule::new(capability, accepted)?.is_enabled(behavior))
}

/// Capability name to rule mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityTable {
    rules: BTreeMap<String, CapabilityRule>,
}

impl CapabilityTable {
    /// A table with no capabilities registered
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Register or replace a rule
    pub fn register(&mut self, rule: CapabilityRule) -> &mut Self {
        self.rules.insert(rule.name().to_string(), rule);
        self
    }

    pub fn rule(&self, name: &str) -> Option<&CapabilityRule> {
        self.rules.get(name)
    }

    /// Unregistered capabilities are never enabled
    pub fn is_enabled(&self, name: &str, behavior: &BehaviorSequence) -> bool {
        self.rules
            .get(name)
            .map(|rule| rule.is_enabled(behavior))
            .unwrap_or(false)
    }

    pub fn matching_pattern<'t>(
        &'t self,
        name: &str,
        behavior: &BehaviorSequence,
    ) -> Option<&'t BehaviorPattern> {
        self.rules.get(name)?.matching_pattern(behavior)
    }
}

impl Default for CapabilityTable {
    /// `connection` and `list`, sharing the `connection -list` pattern
    fn default() -> Self {
        let shared = || {
            BehaviorPattern::from_terms(vec![
                BehaviorToken::enabled(CONNECTION),
                BehaviorToken::negated(LIST),
            ])
        };
        let mut table = Self::empty();
        table
            .register(CapabilityRule::from_patterns(
                CONNECTION,
                vec![
                    BehaviorPattern::from_terms(vec![BehaviorToken::enabled(CONNECTION)]),
                    shared(),
                ],
            ))
            .register(CapabilityRule::from_patterns(
                LIST,
                vec![
                    BehaviorPattern::from_terms(vec![BehaviorToken::enabled(LIST)]),
                    shared(),
                ],
            ));
        table
    }
}
