//! Error types for edge table field synthesis.
//!
//! Only two conditions abort a parent type's assembly pass: a junction entity
//! without a plain output type, and a field name that another contributor
//! already claimed. Malformed behavior tokens and configuration loading errors
//! surface through the same enum so callers handle a single error type.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EdgeTableError>;

/// Errors that abort the current assembly pass for a parent type
#[derive(Debug, Error)]
pub enum EdgeTableError {
    /// The junction entity has no plain output type registered
    #[error("Could not determine output type for {entity}")]
    MissingTypeProjection { entity: String },

    /// A synthesized field name is already taken on the parent type
    #[error(
        "Field '{field_name}' on type '{type_name}' already exists ({existing_origin}); \
         refusing to overwrite it with: {attempted_origin}"
    )]
    FieldNameCollision {
        type_name: String,
        field_name: String,
        existing_origin: String,
        attempted_origin: String,
    },

    /// A behavior source contained an unparseable token
    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Errors produced while tokenizing behavior strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BehaviorError {
    /// A token that is not `[+-]name`
    #[error("Invalid behavior token '{token}' in \"{source_text}\"")]
    InvalidToken { token: String, source_text: String },
}
