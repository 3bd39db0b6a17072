//! Schema module: output type references and type projection lookup.

pub mod projection;
#[doc(inline)]
pub use projection::{resolve_projections, Projections, TypeCatalog, TypeProjections};

pub mod type_ref;
#[doc(inline)]
pub use type_ref::TypeRef;
