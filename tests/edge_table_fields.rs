//! Integration tests for the edge table fields hook
//!
//! These tests build a small schema by hand and run the hook the way schema
//! assembly would: once per output type, with shared read-only lookups.
//!
//! Test relationships:
//! - Post <-> Tag through post_tag (non-unique junction)
//! - Post <-> Category through post_category (unique junction)

use edgetable::behavior::{CapabilityTable, ExtensionBehaviorLookup};
use edgetable::entity::{Entity, EntityRef, Relation};
use edgetable::field::{FieldDescriptor, ObjectFields, RepresentationKind};
use edgetable::inflection::DefaultInflector;
use edgetable::relation::ManyToManyRelationship;
use edgetable::schema::{TypeCatalog, TypeRef};
use edgetable::{
    BuildContext, EdgeFieldOutcome, EdgeTableConfig, EdgeTableError, EdgeTableFieldsPlugin,
    ObjectScope, SkipReason,
};
use std::sync::Arc;

// ============================================================================
// Test Schema
// ============================================================================

const EDGE: &str = "PostTagsManyToManyEdge";

struct Schema {
    post_tag: EntityRef,
    post_category: EntityRef,
    post: EntityRef,
    tag: EntityRef,
    category: EntityRef,
}

fn schema(entity_behavior: &str, relation_behavior: &str) -> Schema {
    let post = Entity::new("post")
        .with_relation("post_tags", Relation::new("post_tag", &["post_id"]))
        .with_relation("post_categories", Relation::new("post_category", &["post_id"]))
        .into_ref();
    let post_tag = Entity::new("post_tag")
        .with_behavior(entity_behavior)
        .with_relation("post", Relation::new("post", &["post_id"]))
        .with_relation(
            "tag",
            Relation::new("tag", &["tag_id"]).with_behavior(relation_behavior),
        )
        .into_ref();
    let post_category = Entity::new("post_category")
        .with_behavior("connection list")
        .with_relation("category", Relation::new("category", &["category_id"]))
        .into_ref();
    Schema {
        post_tag,
        post_category,
        post,
        tag: Entity::new("tag").into_ref(),
        category: Entity::new("category").into_ref(),
    }
}

impl Schema {
    fn tags(&self) -> ManyToManyRelationship {
        ManyToManyRelationship::new(
            self.post.clone(),
            "post_tags",
            self.tag.clone(),
            "tag",
            self.post_tag.clone(),
            true,
        )
    }

    fn categories(&self) -> ManyToManyRelationship {
        ManyToManyRelationship::new(
            self.post.clone(),
            "post_categories",
            self.category.clone(),
            "category",
            self.post_category.clone(),
            false,
        )
    }
}

struct Lookups {
    inflector: Arc<DefaultInflector>,
    types: TypeCatalog,
    behaviors: ExtensionBehaviorLookup,
    capabilities: CapabilityTable,
}

fn lookups(schema: &Schema, config: &EdgeTableConfig, with_connection: bool) -> Lookups {
    let inflector = Arc::new(DefaultInflector::from_config(config));
    let mut types = TypeCatalog::new(inflector.clone());
    types
        .register_entity(&schema.post_tag, with_connection)
        .register_entity(&schema.post_category, with_connection);
    Lookups {
        inflector,
        types,
        behaviors: ExtensionBehaviorLookup::from_config(config),
        capabilities: CapabilityTable::default(),
    }
}

impl Lookups {
    fn ctx(&self) -> BuildContext<'_> {
        BuildContext::new(
            &self.types,
            self.inflector.as_ref(),
            &self.behaviors,
            &self.capabilities,
        )
    }
}

fn build(entity_behavior: &str, relation_behavior: &str) -> edgetable::Result<ObjectFields> {
    let schema = schema(entity_behavior, relation_behavior);
    let lookups = lookups(&schema, &EdgeTableConfig::default(), true);
    let mut fields = ObjectFields::new(EDGE);
    EdgeTableFieldsPlugin::default().apply(
        &lookups.ctx(),
        &ObjectScope::edge(schema.tags()),
        &mut fields,
    )?;
    Ok(fields)
}

// ============================================================================
// Field selection
// ============================================================================

#[test]
fn test_connection_behavior_adds_connection_field() {
    let fields = build("", "connection").unwrap();
    assert_eq!(fields.names(), vec!["postTagsByPostId"]);
    let field = fields.get("postTagsByPostId").unwrap();
    assert_eq!(field.kind(), Some(RepresentationKind::Connection));
    assert_eq!(field.type_ref(), &TypeRef::named_nn("PostTagsConnection"));
}

#[test]
fn test_list_behavior_adds_list_field() {
    let fields = build("", "list").unwrap();
    assert_eq!(fields.names(), vec!["postTagsByPostIdList"]);
    let field = fields.get("postTagsByPostIdList").unwrap();
    assert_eq!(field.kind(), Some(RepresentationKind::List));
    assert_eq!(field.type_ref(), &TypeRef::named_nn_list_nn("PostTag"));
}

#[test]
fn test_connection_minus_list_adds_only_connection() {
    let fields = build("", "connection -list").unwrap();
    assert_eq!(fields.names(), vec!["postTagsByPostId"]);
}

#[test]
fn test_both_kinds() {
    let fields = build("connection", "list").unwrap();
    assert_eq!(fields.names(), vec!["postTagsByPostId", "postTagsByPostIdList"]);
}

#[test]
fn test_relation_behavior_overrides_entity_behavior() {
    let fields = build("connection list", "-list").unwrap();
    assert_eq!(fields.names(), vec!["postTagsByPostId"]);

    let fields = build("-connection", "connection").unwrap();
    assert_eq!(fields.names(), vec!["postTagsByPostId"]);
}

#[test]
fn test_unique_junction_is_ignored() {
    let schema = schema("", "");
    let lookups = lookups(&schema, &EdgeTableConfig::default(), true);
    let mut fields = ObjectFields::new("PostCategoriesManyToManyEdge");
    let outcome = EdgeTableFieldsPlugin::default()
        .apply(&lookups.ctx(), &ObjectScope::edge(schema.categories()), &mut fields)
        .unwrap();
    assert_eq!(outcome, EdgeFieldOutcome::Skipped(SkipReason::SingleEdge));
    assert!(fields.is_empty());
}

// ============================================================================
// Projection availability
// ============================================================================

#[test]
fn test_missing_connection_type_still_adds_list() {
    let schema = schema("connection list", "");
    let lookups = lookups(&schema, &EdgeTableConfig::default(), false);
    let mut fields = ObjectFields::new(EDGE);
    let outcome = EdgeTableFieldsPlugin::default()
        .apply(&lookups.ctx(), &ObjectScope::edge(schema.tags()), &mut fields)
        .unwrap();
    assert_eq!(outcome.added(), ["postTagsByPostIdList"]);
    assert_eq!(fields.len(), 1);
}

#[test]
fn test_missing_connection_type_with_connection_only() {
    let schema = schema("connection", "");
    let lookups = lookups(&schema, &EdgeTableConfig::default(), false);
    let mut fields = ObjectFields::new(EDGE);
    let outcome = EdgeTableFieldsPlugin::default()
        .apply(&lookups.ctx(), &ObjectScope::edge(schema.tags()), &mut fields)
        .unwrap();
    assert!(outcome.added().is_empty());
    assert!(fields.is_empty());
}

#[test]
fn test_missing_plain_type_is_fatal() {
    let schema = schema("list", "");
    let inflector = Arc::new(DefaultInflector::default());
    let types = TypeCatalog::new(inflector.clone());
    let behaviors = ExtensionBehaviorLookup::default();
    let capabilities = CapabilityTable::default();
    let ctx = BuildContext::new(&types, inflector.as_ref(), &behaviors, &capabilities);

    let mut fields = ObjectFields::new(EDGE);
    let err = EdgeTableFieldsPlugin::default()
        .apply(&ctx, &ObjectScope::edge(schema.tags()), &mut fields)
        .unwrap_err();
    assert_eq!(err.to_string(), "Could not determine output type for post_tag");
    assert!(fields.is_empty());
}

// ============================================================================
// Registry invariants
// ============================================================================

#[test]
fn test_fresh_runs_are_identical() {
    let first = build("connection list", "").unwrap();
    let second = build("connection list", "").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_rerun_on_same_type_is_idempotent() {
    let schema = schema("connection list", "");
    let lookups = lookups(&schema, &EdgeTableConfig::default(), true);
    let plugin = EdgeTableFieldsPlugin::default();
    let scope = ObjectScope::edge(schema.tags());
    let mut fields = ObjectFields::new(EDGE);

    plugin.apply(&lookups.ctx(), &scope, &mut fields).unwrap();
    let after_first = fields.clone();
    let outcome = plugin.apply(&lookups.ctx(), &scope, &mut fields).unwrap();

    assert!(outcome.added().is_empty());
    match outcome {
        EdgeFieldOutcome::Applied(report) => assert_eq!(report.unchanged.len(), 2),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(fields, after_first);
}

#[test]
fn test_foreign_field_collision() {
    let schema = schema("connection list", "");
    let lookups = lookups(&schema, &EdgeTableConfig::default(), true);
    let mut fields = ObjectFields::new(EDGE);
    fields
        .insert(FieldDescriptor::new(
            "postTagsByPostId",
            TypeRef::named_nn("PostTagsConnection"),
            "hand-written connection field",
        ))
        .unwrap();

    let err = EdgeTableFieldsPlugin::default()
        .apply(&lookups.ctx(), &ObjectScope::edge(schema.tags()), &mut fields)
        .unwrap_err();
    match err {
        EdgeTableError::FieldNameCollision {
            type_name,
            field_name,
            existing_origin,
            ..
        } => {
            assert_eq!(type_name, EDGE);
            assert_eq!(field_name, "postTagsByPostId");
            assert_eq!(existing_origin, "hand-written connection field");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fields.len(), 1);
    assert!(!fields.contains("postTagsByPostIdList"));
}

#[test]
fn test_tags_identify_junction() {
    let fields = build("connection list", "").unwrap();
    for field in fields.iter() {
        assert!(field.is_edge_table_field());
        let junction = field.tags().junction_entity.as_ref().unwrap();
        assert_eq!(junction.name, "post_tag");
        assert!(field.description().unwrap().contains(EDGE));
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_default_behavior_from_config() {
    let schema = schema("", "");
    let config = EdgeTableConfig {
        default_behavior: "connection -list".to_string(),
        list_suffix: "Items".to_string(),
        ..EdgeTableConfig::default()
    };
    let lookups = lookups(&schema, &config, true);
    let mut fields = ObjectFields::new(EDGE);
    EdgeTableFieldsPlugin::new(&config)
        .apply(&lookups.ctx(), &ObjectScope::edge(schema.tags()), &mut fields)
        .unwrap();
    assert_eq!(fields.names(), vec!["postTagsByPostId"]);
}

#[test]
fn test_config_suffix_and_relation_override() {
    let schema = schema("", "list");
    let config = EdgeTableConfig {
        default_behavior: "connection -list".to_string(),
        list_suffix: "Items".to_string(),
        ..EdgeTableConfig::default()
    };
    let lookups = lookups(&schema, &config, true);
    let mut fields = ObjectFields::new(EDGE);
    EdgeTableFieldsPlugin::new(&config)
        .apply(&lookups.ctx(), &ObjectScope::edge(schema.tags()), &mut fields)
        .unwrap();
    assert_eq!(fields.names(), vec!["postTagsByPostId", "postTagsByPostIdItems"]);
}

#[test]
fn test_blank_suffix_does_not_collide_with_connection() {
    let schema = schema("connection list", "");
    let config = EdgeTableConfig {
        list_suffix: String::new(),
        ..EdgeTableConfig::default()
    };
    let lookups = lookups(&schema, &config, true);
    let mut fields = ObjectFields::new(EDGE);
    let outcome = EdgeTableFieldsPlugin::new(&config)
        .apply(&lookups.ctx(), &ObjectScope::edge(schema.tags()), &mut fields)
        .unwrap();
    assert_eq!(outcome.added().len(), 2);
    assert_eq!(fields.names(), vec!["postTagsByPostId", "postTagsByPostIdList"]);
}

#[test]
fn test_descriptor_json_dump() {
    let fields = build("", "list").unwrap();
    let json = serde_json::to_value(fields.get("postTagsByPostIdList").unwrap()).unwrap();
    assert_eq!(json["tags"]["isEdgeTableField"], true);
    assert_eq!(json["tags"]["junctionEntity"], "post_tag");
    assert_eq!(json["args"], serde_json::json!({}));
    assert_eq!(json["typeRef"]["kind"], "nonNull");
}
