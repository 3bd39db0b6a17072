//! The edge table fields hook.
//!
//! Invoked once per output type during schema assembly. For many-to-many edge
//! types whose junction is not unique, it adds a connection field and/or a list
//! field through which every junction record linking the pair can be read.
//!
//! Per relationship the hook moves through
//! `NotEvaluated -> (Skip | Eligible) -> ConnectionDecided/ListDecided -> Done`
//! in a single synchronous pass. Failures abort the pass for the parent type
//! and leave its fields untouched.

use crate::behavior::{BehaviorLookup, CapabilityTable};
use crate::config::EdgeTableConfig;
use crate::error::Result;
use crate::field::{synthesize, MergeReport, ObjectFields, RepresentationKind};
use crate::inflection::Inflector;
use crate::relation::{check_eligibility, Eligibility, ManyToManyRelationship};
use crate::schema::{resolve_projections, TypeProjections};
use std::fmt;

/// Read-only lookup tables shared by every hook invocation
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    pub types: &'a dyn TypeProjections,
    pub inflector: &'a dyn Inflector,
    pub behaviors: &'a dyn BehaviorLookup,
    pub capabilities: &'a CapabilityTable,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        types: &'a dyn TypeProjections,
        inflector: &'a dyn Inflector,
        behaviors: &'a dyn BehaviorLookup,
        capabilities: &'a CapabilityTable,
    ) -> Self {
        Self {
            types,
            inflector,
            behaviors,
            capabilities,
        }
    }
}

/// What the assembly process knows about the type being built
#[derive(Debug, Clone, Default)]
pub struct ObjectScope {
    pub is_many_to_many_edge_type: bool,
    pub many_to_many_relationship: Option<ManyToManyRelationship>,
}

impl ObjectScope {
    /// Scope of a many-to-many edge type
    pub fn edge(relationship: ManyToManyRelationship) -> Self {
        Self {
            is_many_to_many_edge_type: true,
            many_to_many_relationship: Some(relationship),
        }
    }

    /// Scope of any other output type
    pub fn other() -> Self {
        Self::default()
    }
}

/// Why the hook left a type untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Disabled by configuration
    Disabled,
    /// Not a many-to-many edge type, or no relationship attached
    NotEdgeType,
    /// The junction is unique per pair
    SingleEdge,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::Disabled => "disabled",
            SkipReason::NotEdgeType => "not_edge_type",
            SkipReason::SingleEdge => "single_edge",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one hook invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeFieldOutcome {
    Skipped(SkipReason),
    /// Eligible and evaluated; `added` may be empty if no kind was wanted or available
    Applied(MergeReport),
}

impl EdgeFieldOutcome {
    pub fn added(&self) -> &[String] {
        match self {
            EdgeFieldOutcome::Applied(report) => &report.added,
            EdgeFieldOutcome::Skipped(_) => &[],
        }
    }
}

/// Adds edge table fields to many-to-many edge types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTableFieldsPlugin {
    enabled: bool,
}

impl Default for EdgeTableFieldsPlugin {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl EdgeTableFieldsPlugin {
    pub const NAME: &'static str = "EdgeTableFieldsPlugin";
    pub const DESCRIPTION: &'static str = "When a many-to-many relationship can be satisfied over \
        multiple junction records, adds fields to the edge through which all of the join records \
        can be traversed.";

    pub fn new(config: &EdgeTableConfig) -> Self {
        Self {
            enabled: config.enabled,
        }
    }

    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Run the hook for one parent type
    ///
    /// # Errors
    ///
    /// - [`crate::EdgeTableError::MissingTypeProjection`] if the junction entity
    ///   has no plain output type
    /// - [`crate::EdgeTableError::FieldNameCollision`] if a synthesized name is taken
    /// - [`crate::EdgeTableError::Behavior`] if a behavior source is malformed
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use edgetable::behavior::{CapabilityTable, ExtensionBehaviorLookup};
    /// use edgetable::entity::{Entity, Relation};
    /// use edgetable::field::ObjectFields;
    /// use edgetable::inflection::DefaultInflector;
    /// use edgetable::plugin::{BuildContext, EdgeTableFieldsPlugin, ObjectScope};
    /// use edgetable::relation::ManyToManyRelationship;
    /// use edgetable::schema::TypeCatalog;
    ///
    /// let post = Entity::new("post")
    ///     .with_relation("post_tags", Relation::new("post_tag", &["post_id"]))
    ///     .into_ref();
    /// let post_tag = Entity::new("post_tag")
    ///     .with_relation("tag", Relation::new("tag", &["tag_id"]).with_behavior("list"))
    ///     .into_ref();
    /// let rel = ManyToManyRelationship::new(
    ///     post, "post_tags", Entity::new("tag").into_ref(), "tag", post_tag.clone(), true,
    /// );
    ///
    /// let inflector = Arc::new(DefaultInflector::default());
    /// let mut types = TypeCatalog::new(inflector.clone());
    /// types.register_entity(&post_tag, true);
    /// let behaviors = ExtensionBehaviorLookup::default();
    /// let capabilities = CapabilityTable::default();
    /// let ctx = BuildContext::new(&types, inflector.as_ref(), &behaviors, &capabilities);
    ///
    /// let mut fields = ObjectFields::new("PostTagManyToManyEdge");
    /// let outcome = EdgeTableFieldsPlugin::default()
    ///     .apply(&ctx, &ObjectScope::edge(rel), &mut fields)
    ///     .unwrap();
    /// assert_eq!(outcome.added(), ["postTagsByPostIdList"]);
    /// ```
    pub fn apply(
        &self,
        ctx: &BuildContext<'_>,
        scope: &ObjectScope,
        fields: &mut ObjectFields,
    ) -> Result<EdgeFieldOutcome> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("edge_table_fields", type_name = %fields.type_name()).entered();

        if !self.enabled {
            return Ok(skipped(SkipReason::Disabled));
        }
        let relationship = match (&scope.many_to_many_relationship, scope.is_many_to_many_edge_type) {
            (Some(relationship), true) => relationship,
            _ => return Ok(skipped(SkipReason::NotEdgeType)),
        };
        if check_eligibility(relationship) == Eligibility::Skip {
            log::debug!(
                "{}: junction '{}' is unique per pair, no edge table fields",
                fields.type_name(),
                relationship.junction_entity().name
            );
            return Ok(skipped(SkipReason::SingleEdge));
        }

        let junction = relationship.junction_entity();
        let projections = resolve_projections(ctx.types, junction)?;
        let behavior = ctx.behaviors.effective_behavior(relationship)?;
        let details = relationship.left_relation_details();

        let mut wanted = Vec::with_capacity(RepresentationKind::ALL.len());
        for kind in RepresentationKind::ALL {
            let capability = kind.capability();
            let Some(pattern) = ctx.capabilities.matching_pattern(capability, &behavior) else {
                log::debug!(
                    "{}: '{}' not enabled by behavior \"{}\"",
                    fields.type_name(),
                    capability,
                    behavior
                );
                continue;
            };
            let field_name = match kind {
                RepresentationKind::Connection => ctx.inflector.many_relation_connection(&details),
                RepresentationKind::List => ctx.inflector.many_relation_list(&details),
            };
            match synthesize(kind, field_name, fields.type_name(), relationship, &projections) {
                Some(field) => {
                    log::debug!(
                        "{}: adding {} field '{}' (matched \"{}\")",
                        fields.type_name(),
                        kind,
                        field.field_name(),
                        pattern
                    );
                    wanted.push(field);
                }
                None => log::debug!(
                    "{}: {} field wanted but '{}' has no such projection",
                    fields.type_name(),
                    kind,
                    junction.name
                ),
            }
        }

        let report = fields.extend_with(wanted)?;
        #[cfg(feature = "metrics")]
        for name in &report.added {
            if let Some(kind) = fields.get(name).and_then(|f| f.kind()) {
                crate::metrics::METRICS.record_field(kind.capability());
            }
        }
        Ok(EdgeFieldOutcome::Applied(report))
    }
}

fn skipped(reason: SkipReason) -> EdgeFieldOutcome {
    #[cfg(feature = "metrics")]
    crate::metrics::METRICS.record_skip(reason.as_str());
    EdgeFieldOutcome::Skipped(reason)
}
