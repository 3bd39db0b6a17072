//! Output type references.

use serde::Serialize;
use std::fmt;

/// A reference to an output type, with GraphQL wrapping rules
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "camelCase")]
pub enum TypeRef {
    Named(String),
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// `Name!`
    pub fn named_nn(name: impl Into<String>) -> Self {
        TypeRef::NonNull(Box::new(Self::named(name)))
    }

    /// `[Name!]!`
    pub fn named_nn_list_nn(name: impl Into<String>) -> Self {
        TypeRef::NonNull(Box::new(TypeRef::List(Box::new(Self::named_nn(name)))))
    }

    /// Innermost named type
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
        }
    }
}
