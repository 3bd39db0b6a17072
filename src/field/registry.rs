//! Per-type field registry.
//!
//! [`ObjectFields`] is the parent type's field mapping. Merges are all or
//! nothing: every incoming field is checked before any is inserted, so a
//! collision leaves the mapping exactly as it was.

use super::descriptor::FieldDescriptor;
use crate::error::{EdgeTableError, Result};
use std::collections::btree_map::{self, BTreeMap};

/// Result of a successful merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Names inserted by this merge
    pub added: Vec<String>,
    /// Names that were already present with an identical descriptor
    pub unchanged: Vec<String>,
}

/// Fields of one parent output type, keyed by field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectFields {
    type_name: String,
    fields: BTreeMap<String, FieldDescriptor>,
}

impl ObjectFields {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn get(&self, field_name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(field_name)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.fields.contains_key(field_name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Values<'_, String, FieldDescriptor> {
        self.fields.values()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Introspection dump of the type and its fields
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "typeName": self.type_name,
            "fields": self.fields.values().collect::<Vec<_>>(),
        })
    }

    /// Declare a single field
    ///
    /// Returns `Ok(true)` if inserted, `Ok(false)` if an identical field was
    /// already present.
    pub fn insert(&mut self, field: FieldDescriptor) -> Result<bool> {
        let report = self.extend_with(vec![field])?;
        Ok(!report.added.is_empty())
    }

    /// Merge a batch of fields atomically
    ///
    /// # Errors
    ///
    /// Returns [`EdgeTableError::FieldNameCollision`] if a name is already
    /// taken by a different field, on this type or earlier in the batch.
    pub fn extend_with(&mut self, incoming: Vec<FieldDescriptor>) -> Result<MergeReport> {
        let mut report = MergeReport::default();
        let mut pending: BTreeMap<String, FieldDescriptor> = BTreeMap::new();

        for field in incoming {
            let existing = self
                .fields
                .get(field.field_name())
                .or_else(|| pending.get(field.field_name()));
            match existing {
                Some(existing) if *existing == field => {
                    report.unchanged.push(field.field_name().to_string());
                }
                Some(existing) => {
                    return Err(EdgeTableError::FieldNameCollision {
                        type_name: self.type_name.clone(),
                        field_name: field.field_name().to_string(),
                        existing_origin: existing.origin().to_string(),
                        attempted_origin: field.origin().to_string(),
                    });
                }
                None => {
                    report.added.push(field.field_name().to_string());
                    pending.insert(field.field_name().to_string(), field);
                }
            }
        }

        self.fields.extend(pending);
        Ok(report)
    }
}
