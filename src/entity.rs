//! Record type handles consumed during schema assembly.
//!
//! An [`Entity`] is the schema-level view of a table: its name, the single-hop
//! relations it declares, and the extension metadata (behavior strings) that
//! configuration attached to it. Entities are built by the surrounding
//! assembly process and shared read-only via [`Arc`].

use std::collections::BTreeMap;
use std::sync::Arc;

/// Extension metadata attached to an entity or a relation
///
/// Each entry in `behaviors` is one whitespace-separated token list as it was
/// declared (for example from a smart tag or a config file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extensions {
    pub behaviors: Vec<String>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one behavior declaration
    pub fn with_behavior(mut self, behavior: impl Into<String>) -> Self {
        self.behaviors.push(behavior.into());
        self
    }

    /// All declarations joined in declaration order
    pub fn behavior_text(&self) -> String {
        self.behaviors.join(" ")
    }
}

/// A single-hop relation declared on an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Name of the entity on the other side of the relation
    pub remote_entity: String,
    /// Columns on the declaring entity that reference the remote entity
    pub local_columns: Vec<String>,
    pub extensions: Extensions,
}

impl Relation {
    pub fn new(remote_entity: impl Into<String>, local_columns: &[&str]) -> Self {
        Self {
            remote_entity: remote_entity.into(),
            local_columns: local_columns.iter().map(|c| c.to_string()).collect(),
            extensions: Extensions::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: impl Into<String>) -> Self {
        self.extensions = self.extensions.with_behavior(behavior);
        self
    }
}

/// Record type handle
///
/// # Example
///
/// ```
/// use edgetable::entity::{Entity, Relation};
///
/// let post_tags = Entity::new("post_tag")
///     .with_relation("post", Relation::new("post", &["post_id"]))
///     .with_relation("tag", Relation::new("tag", &["tag_id"]))
///     .with_behavior("list");
///
/// assert!(post_tags.relation("tag").is_some());
/// assert_eq!(post_tags.extensions.behavior_text(), "list");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub relations: BTreeMap<String, Relation>,
    pub extensions: Extensions,
}

/// Shared entity handle
pub type EntityRef = Arc<Entity>;

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: BTreeMap::new(),
            extensions: Extensions::default(),
        }
    }

    pub fn with_relation(mut self, identifier: impl Into<String>, relation: Relation) -> Self {
        self.relations.insert(identifier.into(), relation);
        self
    }

    pub fn with_behavior(mut self, behavior: impl Into<String>) -> Self {
        self.extensions = self.extensions.with_behavior(behavior);
        self
    }

    /// Look up a relation by its identifier
    pub fn relation(&self, identifier: &str) -> Option<&Relation> {
        self.relations.get(identifier)
    }

    /// Wrap into a shared handle
    pub fn into_ref(self) -> EntityRef {
        Arc::new(self)
    }
}
