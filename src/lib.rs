//! # edgetable
//!
//! Many-to-many edge table fields for schema assembly.
//!
//! When a junction table may hold several rows for the same left/right pair,
//! the edge between the two records is not a single implicit link. This crate
//! decides, per edge type, whether to expose the junction records as a
//! paginated connection field, a plain list field, or both, and builds those
//! field descriptors exactly once.
//!
//! The pieces run in order during assembly:
//! - [`relation::check_eligibility`] gates non-unique joins
//! - [`schema::resolve_projections`] finds the junction's output types
//! - [`behavior::CapabilityTable`] evaluates merged behavior tokens
//! - [`field::ObjectFields::extend_with`] merges the synthesized fields
//!
//! [`plugin::EdgeTableFieldsPlugin`] wires them together.

pub mod behavior;
pub mod config;
pub mod entity;
pub mod error;
pub mod field;
#[cfg(feature = "graphql")]
pub mod graphql;
pub mod inflection;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod plugin;
pub mod relation;
pub mod schema;

pub use config::EdgeTableConfig;
pub use error::{BehaviorError, EdgeTableError, Result};
pub use plugin::{BuildContext, EdgeFieldOutcome, EdgeTableFieldsPlugin, ObjectScope, SkipReason};
