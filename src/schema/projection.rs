//! Type projection lookup for junction entities.
//!
//! A junction entity must have a plain output type; its connection type is
//! optional because not every entity is paginable.

use crate::entity::Entity;
use crate::error::{EdgeTableError, Result};
use crate::inflection::Inflector;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Resolves the output type names an entity is projected to
pub trait TypeProjections: Send + Sync {
    /// Plain output type of the entity
    fn output_type(&self, entity: &Entity) -> Option<String>;

    /// Paginated connection type of the entity
    fn connection_type(&self, entity: &Entity) -> Option<String>;
}

/// Available projections for one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projections {
    pub plain: String,
    pub connection: Option<String>,
}

/// Resolve both projections, failing if the plain output type is missing
pub fn resolve_projections(types: &dyn TypeProjections, entity: &Entity) -> Result<Projections> {
    let plain = types
        .output_type(entity)
        .ok_or_else(|| EdgeTableError::MissingTypeProjection {
            entity: entity.name.clone(),
        })?;
    let connection = types.connection_type(entity);
    if connection.is_none() {
        log::debug!("entity '{}' has no connection type; connection field unavailable", entity.name);
    }
    Ok(Projections { plain, connection })
}

/// In-memory registry of output types
///
/// Entities map to their plain output type directly. Connection types are
/// registered by name and found through [`Inflector::table_connection_type`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use edgetable::entity::Entity;
/// use edgetable::inflection::DefaultInflector;
/// use edgetable::schema::{TypeCatalog, TypeProjections};
///
/// let post_tag = Entity::new("post_tag");
/// let mut catalog = TypeCatalog::new(Arc::new(DefaultInflector::default()));
/// catalog.register_entity(&post_tag, true);
///
/// assert_eq!(catalog.output_type(&post_tag).as_deref(), Some("PostTag"));
/// assert_eq!(catalog.connection_type(&post_tag).as_deref(), Some("PostTagsConnection"));
/// ```
#[derive(Clone)]
pub struct TypeCatalog {
    inflector: Arc<dyn Inflector>,
    output_types: BTreeMap<String, String>,
    type_names: BTreeSet<String>,
}

impl std::fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeCatalog")
            .field("output_types", &self.output_types)
            .field("type_names", &self.type_names)
            .finish()
    }
}

impl TypeCatalog {
    pub fn new(inflector: Arc<dyn Inflector>) -> Self {
        Self {
            inflector,
            output_types: BTreeMap::new(),
            type_names: BTreeSet::new(),
        }
    }

    /// Map an entity to its plain output type
    pub fn register_output(&mut self, entity: &str, type_name: impl Into<String>) -> &mut Self {
        let type_name = type_name.into();
        self.type_names.insert(type_name.clone());
        self.output_types.insert(entity.to_string(), type_name);
        self
    }

    /// Register a type by name only
    pub fn register_type(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.type_names.insert(type_name.into());
        self
    }

    /// Register an entity's plain type and, optionally, its connection type
    /// using the inflector's names
    pub fn register_entity(&mut self, entity: &Entity, with_connection: bool) -> &mut Self {
        let plain = self.inflector.table_type(entity);
        self.register_output(&entity.name, plain);
        if with_connection {
            let connection = self.inflector.table_connection_type(entity);
            self.register_type(connection);
        }
        self
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.type_names.contains(type_name)
    }
}

impl TypeProjections for TypeCatalog {
    fn output_type(&self, entity: &Entity) -> Option<String> {
        self.output_types.get(&entity.name).cloned()
    }

    fn connection_type(&self, entity: &Entity) -> Option<String> {
        let name = self.inflector.table_connection_type(entity);
        self.has_type(&name).then_some(name)
    }
}
