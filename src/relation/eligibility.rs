//! Relationship eligibility.
//!
//! Only relationships whose junction may hold several rows for the same
//! (left, right) pair get edge table fields. Unique joins already have a
//! single implicit edge, so they are skipped without error.

use super::ManyToManyRelationship;

/// Outcome of the eligibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Proceed,
    Skip,
}

impl Eligibility {
    pub fn is_proceed(self) -> bool {
        matches!(self, Eligibility::Proceed)
    }
}

/// Decide whether a relationship can produce multiple edges to the same node
pub fn check_eligibility(relationship: &ManyToManyRelationship) -> Eligibility {
    if relationship.allows_multiple_edges_to_node() {
        Eligibility::Proceed
    } else {
        Eligibility::Skip
    }
}
