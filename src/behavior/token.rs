//! Behavior tokens and merged token sequences.
//!
//! A behavior source is a whitespace-separated list such as `"connection -list"`.
//! Sources are concatenated in precedence order (least specific first) into a
//! [`BehaviorSequence`]; folding the sequence left to right yields the
//! [`EffectiveState`], where the last occurrence of each name wins.

use crate::error::BehaviorError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

static TOKEN_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_:]*$").expect("valid token regex"));

/// A single, optionally negated, capability name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BehaviorToken {
    name: String,
    negated: bool,
}

impl BehaviorToken {
    /// A positive token (`name`)
    pub fn enabled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            negated: false,
        }
    }

    /// A negated token (`-name`)
    pub fn negated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            negated: true,
        }
    }

    /// Parse one raw token; `source_text` is only used for error reporting
    ///
    /// Accepts `name`, `+name` and `-name`.
    pub fn parse(raw: &str, source_text: &str) -> Result<Self, BehaviorError> {
        let (negated, name) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        if !TOKEN_NAME.is_match(name) {
            return Err(BehaviorError::InvalidToken {
                token: raw.to_string(),
                source_text: source_text.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            negated,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl fmt::Display for BehaviorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "-{}", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Ordered tokens from one or more behavior sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BehaviorSequence {
    tokens: Vec<BehaviorToken>,
}

impl BehaviorSequence {
    /// Tokenize a single source
    pub fn parse(text: &str) -> Result<Self, BehaviorError> {
        let tokens = text
            .split_whitespace()
            .map(|raw| BehaviorToken::parse(raw, text))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens })
    }

    /// Merge sources in the given order; later sources override earlier ones
    ///
    /// # Example
    ///
    /// ```
    /// use edgetable::behavior::BehaviorSequence;
    ///
    /// let seq = BehaviorSequence::merge(["connection list", "-list"]).unwrap();
    /// assert_eq!(seq.to_string(), "connection list -list");
    ///
    /// let state = seq.effective_state();
    /// assert!(state.is_enabled("connection"));
    /// assert!(!state.is_enabled("list"));
    /// ```
    pub fn merge<I, S>(sources: I) -> Result<Self, BehaviorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut merged = Self::default();
        for source in sources {
            merged.append(Self::parse(source.as_ref())?);
        }
        Ok(merged)
    }

    /// Append another sequence after this one
    pub fn append(&mut self, other: BehaviorSequence) {
        self.tokens.extend(other.tokens);
    }

    pub fn tokens(&self) -> &[BehaviorToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Fold the sequence so that the last mention of each name wins
    pub fn effective_state(&self) -> EffectiveState<'_> {
        let mut states = BTreeMap::new();
        for token in &self.tokens {
            if let Some(previous) = states.insert(token.name(), !token.is_negated()) {
                log::trace!(
                    "behavior token '{}' overrides earlier {}",
                    token,
                    if previous { "enable" } else { "negation" }
                );
            }
        }
        EffectiveState { states }
    }
}

impl fmt::Display for BehaviorSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Final enabled/negated state per name after folding a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveState<'a> {
    states: BTreeMap<&'a str, bool>,
}

impl EffectiveState<'_> {
    /// `Some(true)` if enabled, `Some(false)` if negated, `None` if never mentioned
    pub fn get(&self, name: &str) -> Option<bool> {
        self.states.get(name).copied()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.get(name) == Some(true)
    }
}
