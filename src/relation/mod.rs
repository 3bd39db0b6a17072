//! Relation module for many-to-many relationships.
//!
//! This module provides the descriptor of a many-to-many relationship mediated
//! by a junction entity, and the eligibility check that decides whether its
//! junction rows should be exposed as edge fields:
//! - **Descriptor**: [`ManyToManyRelationship`], built upstream from schema and
//!   constraint metadata, immutable afterwards
//! - **Details**: [`RelationDetails`], the naming input derived from the left side
//! - **Eligibility**: [`check_eligibility`], gates everything else

pub mod eligibility;
#[doc(inline)]
pub use eligibility::{check_eligibility, Eligibility};

use crate::entity::{EntityRef, Relation};

/// A many-to-many relationship between two entities through a junction entity
///
/// # Example
///
/// ```
/// use edgetable::entity::{Entity, Relation};
/// use edgetable::relation::ManyToManyRelationship;
///
/// let post = Entity::new("post")
///     .with_relation("post_tags_by_post_id", Relation::new("post_tag", &["post_id"]))
///     .into_ref();
/// let tag = Entity::new("tag").into_ref();
/// let post_tag = Entity::new("post_tag")
///     .with_relation("tag", Relation::new("tag", &["tag_id"]))
///     .into_ref();
///
/// let rel = ManyToManyRelationship::new(
///     post, "post_tags_by_post_id", tag, "tag", post_tag, true,
/// );
/// assert!(rel.allows_multiple_edges_to_node());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManyToManyRelationship {
    left_entity: EntityRef,
    left_relation_name: String,
    right_entity: EntityRef,
    right_relation_name: String,
    junction_entity: EntityRef,
    allows_multiple_edges_to_node: bool,
}

impl ManyToManyRelationship {
    /// Create a relationship descriptor
    ///
    /// `allows_multiple_edges_to_node` must be `true` iff the junction is not
    /// unique per (left, right) pair.
    pub fn new(
        left_entity: EntityRef,
        left_relation_name: impl Into<String>,
        right_entity: EntityRef,
        right_relation_name: impl Into<String>,
        junction_entity: EntityRef,
        allows_multiple_edges_to_node: bool,
    ) -> Self {
        Self {
            left_entity,
            left_relation_name: left_relation_name.into(),
            right_entity,
            right_relation_name: right_relation_name.into(),
            junction_entity,
            allows_multiple_edges_to_node,
        }
    }

    pub fn left_entity(&self) -> &EntityRef {
        &self.left_entity
    }

    pub fn left_relation_name(&self) -> &str {
        &self.left_relation_name
    }

    pub fn right_entity(&self) -> &EntityRef {
        &self.right_entity
    }

    pub fn right_relation_name(&self) -> &str {
        &self.right_relation_name
    }

    pub fn junction_entity(&self) -> &EntityRef {
        &self.junction_entity
    }

    pub fn allows_multiple_edges_to_node(&self) -> bool {
        self.allows_multiple_edges_to_node
    }

    /// The junction entity's relation towards the right entity, if declared
    pub fn junction_right_relation(&self) -> Option<&Relation> {
        self.junction_entity.relation(&self.right_relation_name)
    }

    /// Naming input for the edge fields: the left entity and its relation
    pub fn left_relation_details(&self) -> RelationDetails<'_> {
        RelationDetails {
            source: &self.left_entity,
            identifier: &self.left_relation_name,
            relation: self.left_entity.relation(&self.left_relation_name),
        }
    }
}

/// Relation details handed to the naming strategy
#[derive(Debug, Clone, Copy)]
pub struct RelationDetails<'a> {
    pub source: &'a EntityRef,
    pub identifier: &'a str,
    /// `None` when the source entity does not declare `identifier`
    pub relation: Option<&'a Relation>,
}
