//! async-graphql bridge.
//!
//! Turns synthesized descriptors into `async_graphql::dynamic` fields. The
//! resolver is supplied by the caller; this crate never fetches data.

use crate::field::FieldDescriptor;
use crate::schema::TypeRef;
use async_graphql::dynamic::{self, Field, FieldFuture, ResolverContext};

impl From<&TypeRef> for dynamic::TypeRef {
    fn from(type_ref: &TypeRef) -> Self {
        match type_ref {
            TypeRef::Named(name) => dynamic::TypeRef::Named(name.clone().into()),
            TypeRef::NonNull(inner) => dynamic::TypeRef::NonNull(Box::new(inner.as_ref().into())),
            TypeRef::List(inner) => dynamic::TypeRef::List(Box::new(inner.as_ref().into())),
        }
    }
}

/// Build a dynamic field from a descriptor and a resolver
pub fn into_dynamic_field<F>(descriptor: &FieldDescriptor, resolver: F) -> Field
where
    F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
{
    let field = Field::new(
        descriptor.field_name().to_string(),
        dynamic::TypeRef::from(descriptor.type_ref()),
        resolver,
    );
    match descriptor.description() {
        Some(description) => field.description(description.to_string()),
        None => field,
    }
}
