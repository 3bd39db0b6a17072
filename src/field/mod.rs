//! Field module: descriptors for synthesized fields and the parent type's field registry.

pub mod descriptor;
#[doc(inline)]
pub use descriptor::{synthesize, FieldDescriptor, FieldTags, RepresentationKind};

pub mod registry;
#[doc(inline)]
pub use registry::{MergeReport, ObjectFields};
