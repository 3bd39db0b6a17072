//! Naming strategy for edge table fields and their types.
//!
//! The [`Inflector`] trait is the seam where callers plug in their own naming
//! rules; [`DefaultInflector`] derives camelCase field names and PascalCase
//! type names from snake_case entity and column names.

use crate::config::EdgeTableConfig;
use crate::entity::Entity;
use crate::relation::RelationDetails;

/// Derives field and type names for schema assembly
pub trait Inflector: Send + Sync {
    /// Field name of the connection-kind edge table field
    fn many_relation_connection(&self, details: &RelationDetails<'_>) -> String;

    /// Field name of the list-kind edge table field
    fn many_relation_list(&self, details: &RelationDetails<'_>) -> String;

    /// Name of an entity's plain output type
    fn table_type(&self, entity: &Entity) -> String;

    /// Name of an entity's connection type
    fn table_connection_type(&self, entity: &Entity) -> String;
}

/// Default naming rules
///
/// # Example
///
/// ```
/// use edgetable::entity::{Entity, Relation};
/// use edgetable::inflection::{DefaultInflector, Inflector};
/// use edgetable::relation::ManyToManyRelationship;
///
/// let post = Entity::new("post")
///     .with_relation("post_tags", Relation::new("post_tag", &["post_id"]))
///     .into_ref();
/// let rel = ManyToManyRelationship::new(
///     post,
///     "post_tags",
///     Entity::new("tag").into_ref(),
///     "tag",
///     Entity::new("post_tag").into_ref(),
///     true,
/// );
///
/// let inflector = DefaultInflector::default();
/// let details = rel.left_relation_details();
/// assert_eq!(inflector.many_relation_connection(&details), "postTagsByPostId");
/// assert_eq!(inflector.many_relation_list(&details), "postTagsByPostIdList");
/// assert_eq!(inflector.table_connection_type(rel.junction_entity()), "PostTagsConnection");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultInflector {
    list_suffix: String,
}

const DEFAULT_LIST_SUFFIX: &str = "List";

impl DefaultInflector {
    /// A blank suffix would give the list field the connection field's name,
    /// so it is replaced with `"List"`.
    pub fn new(list_suffix: impl Into<String>) -> Self {
        let mut list_suffix = list_suffix.into();
        if list_suffix.trim().is_empty() {
            log::warn!(
                "blank list suffix would collide with the connection field; using '{}'",
                DEFAULT_LIST_SUFFIX
            );
            list_suffix = DEFAULT_LIST_SUFFIX.to_string();
        }
        Self { list_suffix }
    }

    pub fn from_config(config: &EdgeTableConfig) -> Self {
        Self::new(config.list_suffix.as_str())
    }

    pub fn list_suffix(&self) -> &str {
        &self.list_suffix
    }
}

impl Default for DefaultInflector {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_SUFFIX)
    }
}

impl Inflector for DefaultInflector {
    fn many_relation_connection(&self, details: &RelationDetails<'_>) -> String {
        match details.relation {
            Some(relation) if !relation.local_columns.is_empty() => camel_case(&format!(
                "{}_by_{}",
                pluralize(&relation.remote_entity),
                relation.local_columns.join("_and_")
            )),
            Some(relation) => camel_case(&pluralize(&relation.remote_entity)),
            None => camel_case(details.identifier),
        }
    }

    fn many_relation_list(&self, details: &RelationDetails<'_>) -> String {
        format!("{}{}", self.many_relation_connection(details), self.list_suffix)
    }

    fn table_type(&self, entity: &Entity) -> String {
        pascal_case(&entity.name)
    }

    fn table_connection_type(&self, entity: &Entity) -> String {
        format!("{}Connection", pascal_case(&pluralize(&entity.name)))
    }
}

/// Convert snake_case to PascalCase
pub fn pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize = true;
    for c in s.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            result.extend(c.to_uppercase());
            capitalize = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert snake_case to camelCase
pub fn camel_case(s: &str) -> String {
    let pascal = pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Naive English plural of the last word of a snake_case name
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let lower = s.to_lowercase();
    if let Some(stem) = s.strip_suffix('y') {
        let before = stem.chars().last();
        if !matches!(before, Some('a' | 'e' | 'i' | 'o' | 'u') | None) {
            return format!("{}ies", stem);
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|end| lower.ends_with(end)) {
        return format!("{}es", s);
    }
    format!("{}s", s)
}
