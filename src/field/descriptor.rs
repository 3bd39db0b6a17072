//! Field descriptors and edge table field synthesis.

use crate::behavior::{CONNECTION, LIST};
use crate::entity::EntityRef;
use crate::relation::ManyToManyRelationship;
use crate::schema::{Projections, TypeRef};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Shape of an edge table field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RepresentationKind {
    /// Paginated, cursor-based
    Connection,
    /// Plain, non-paginated
    List,
}

impl RepresentationKind {
    pub const ALL: [RepresentationKind; 2] = [RepresentationKind::Connection, RepresentationKind::List];

    /// Behavior capability that switches this kind on
    pub fn capability(self) -> &'static str {
        match self {
            RepresentationKind::Connection => CONNECTION,
            RepresentationKind::List => LIST,
        }
    }
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepresentationKind::Connection => f.write_str("connection"),
            RepresentationKind::List => f.write_str("simple collection"),
        }
    }
}

/// Introspectable metadata other collaborators may read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTags {
    pub is_edge_table_field: bool,
    #[serde(serialize_with = "serialize_entity_name")]
    pub junction_entity: Option<EntityRef>,
    pub is_connection: bool,
    pub is_simple_collection: bool,
}

fn serialize_entity_name<S: Serializer>(
    entity: &Option<EntityRef>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match entity {
        Some(entity) => serializer.serialize_some(&entity.name),
        None => serializer.serialize_none(),
    }
}

/// A field declared on a parent output type
///
/// Descriptors are immutable once built; the registry compares them by value
/// to tell an idempotent re-merge from a collision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    field_name: String,
    kind: Option<RepresentationKind>,
    type_ref: TypeRef,
    description: Option<String>,
    args: BTreeMap<String, TypeRef>,
    tags: FieldTags,
    origin: String,
}

impl FieldDescriptor {
    /// A plain field contributed by some other part of schema assembly
    pub fn new(field_name: impl Into<String>, type_ref: TypeRef, origin: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            kind: None,
            type_ref,
            description: None,
            args: BTreeMap::new(),
            tags: FieldTags::default(),
            origin: origin.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn kind(&self) -> Option<RepresentationKind> {
        self.kind
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn args(&self) -> &BTreeMap<String, TypeRef> {
        &self.args
    }

    pub fn tags(&self) -> &FieldTags {
        &self.tags
    }

    /// Who contributed this field, for collision reports
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn is_edge_table_field(&self) -> bool {
        self.tags.is_edge_table_field
    }
}

/// Build the edge table field of one kind
///
/// Returns `None` when the projection this kind needs is unavailable
/// (connection kind without a connection type).
pub fn synthesize(
    kind: RepresentationKind,
    field_name: String,
    parent_type: &str,
    relationship: &ManyToManyRelationship,
    projections: &Projections,
) -> Option<FieldDescriptor> {
    let right = relationship.right_relation_name();
    let (type_ref, description) = match kind {
        RepresentationKind::Connection => {
            let connection = projections.connection.as_ref()?;
            (
                TypeRef::named_nn(connection.as_str()),
                format!(
                    "Reads and enables pagination through a set of `{}` edge records on `{}` for `{}`.",
                    projections.plain, parent_type, right
                ),
            )
        }
        RepresentationKind::List => (
            TypeRef::named_nn_list_nn(projections.plain.as_str()),
            format!(
                "Reads a set of `{}` edge records on `{}` for `{}`.",
                projections.plain, parent_type, right
            ),
        ),
    };

    Some(FieldDescriptor {
        field_name,
        kind: Some(kind),
        type_ref,
        description: Some(description),
        args: BTreeMap::new(),
        tags: FieldTags {
            is_edge_table_field: true,
            junction_entity: Some(relationship.junction_entity().clone()),
            is_connection: kind == RepresentationKind::Connection,
            is_simple_collection: kind == RepresentationKind::List,
        },
        origin: format!(
            "Many-to-many relation edge table ({}) on {} type for {}.",
            kind, parent_type, right
        ),
    })
}
