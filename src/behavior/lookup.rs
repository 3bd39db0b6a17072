//! Behavior sources for a relationship.
//!
//! The lookup gathers raw behavior strings in precedence order, least
//! specific first: the configured default, the junction entity, then the
//! junction entity's relation towards the right entity.

use super::token::BehaviorSequence;
use crate::config::EdgeTableConfig;
use crate::error::BehaviorError;
use crate::relation::ManyToManyRelationship;
use std::fmt;

/// Where a behavior source came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    Default,
    JunctionEntity,
    JunctionRelation,
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOrigin::Default => f.write_str("default"),
            SourceOrigin::JunctionEntity => f.write_str("junction entity"),
            SourceOrigin::JunctionRelation => f.write_str("junction relation"),
        }
    }
}

/// One raw behavior declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorSource {
    pub origin: SourceOrigin,
    pub text: String,
}

/// Produces the behavior sources for a relationship
pub trait BehaviorLookup: Send + Sync {
    /// Sources in precedence order, least specific first
    fn behavior_sources(&self, relationship: &ManyToManyRelationship) -> Vec<BehaviorSource>;

    /// Merge all sources into one effective sequence
    fn effective_behavior(
        &self,
        relationship: &ManyToManyRelationship,
    ) -> Result<BehaviorSequence, BehaviorError> {
        let sources = self.behavior_sources(relationship);
        BehaviorSequence::merge(sources.iter().map(|source| source.text.as_str()))
    }
}

/// Reads behaviors from entity and relation extensions
#[derive(Debug, Clone, Default)]
pub struct ExtensionBehaviorLookup {
    default_behavior: String,
}

impl ExtensionBehaviorLookup {
    pub fn new(default_behavior: impl Into<String>) -> Self {
        Self {
            default_behavior: default_behavior.into(),
        }
    }

    pub fn from_config(config: &EdgeTableConfig) -> Self {
        Self::new(config.default_behavior.as_str())
    }
}

impl BehaviorLookup for ExtensionBehaviorLookup {
    fn behavior_sources(&self, relationship: &ManyToManyRelationship) -> Vec<BehaviorSource> {
        let mut sources = Vec::with_capacity(3);
        if !self.default_behavior.trim().is_empty() {
            sources.push(BehaviorSource {
                origin: SourceOrigin::Default,
                text: self.default_behavior.clone(),
            });
        }

        let junction = relationship.junction_entity();
        sources.push(BehaviorSource {
            origin: SourceOrigin::JunctionEntity,
            text: junction.extensions.behavior_text(),
        });

        match relationship.junction_right_relation() {
            Some(relation) => sources.push(BehaviorSource {
                origin: SourceOrigin::JunctionRelation,
                text: relation.extensions.behavior_text(),
            }),
            None => log::warn!(
                "junction entity '{}' has no relation named '{}'; ignoring its relation behaviors",
                junction.name,
                relationship.right_relation_name()
            ),
        }
        sources
    }
}
