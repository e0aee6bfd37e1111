use fluent_mapping_core::schema::{
    AssociationKind, AssociationMapping, ClassKind, ClassMetadata, EmbeddedMapping, Fetch,
    FieldMapping, IdGenerator, JoinColumn, TableIndex, TableMetadata, Type,
};
use fluent_mapping_core::Store;
use pretty_assertions::assert_eq;
use std_util::assert_err;

fn many_to_one(field: &str, target: &str, column: &str) -> AssociationMapping {
    AssociationMapping {
        field_name: field.to_string(),
        target_entity: target.to_string(),
        kind: AssociationKind::ManyToOne,
        owning_side: true,
        mapped_by: None,
        inversed_by: None,
        join_columns: vec![JoinColumn {
            name: column.to_string(),
            referenced_column_name: "id".to_string(),
            nullable: true,
            unique: false,
            on_delete: None,
        }],
        join_table: None,
        cascade: vec![],
        fetch: Fetch::Lazy,
        orphan_removal: false,
        order_by: vec![],
        index_by: None,
        id: false,
    }
}

#[test]
fn fields_keep_finalization_order() {
    let mut class = ClassMetadata::new("Post", ClassKind::Entity);
    class.map_field(FieldMapping::new("title", "title", Type::String)).unwrap();
    class.map_field(FieldMapping::new("body", "body", Type::Text)).unwrap();

    let names: Vec<_> = class.fields.keys().map(String::as_str).collect();
    assert_eq!(names, ["title", "body"]);
}

#[test]
fn duplicate_fields_and_columns_are_rejected() {
    let mut class = ClassMetadata::new("Post", ClassKind::Entity);
    class.map_field(FieldMapping::new("title", "title", Type::String)).unwrap();

    let err = assert_err!(
        class.map_field(FieldMapping::new("title", "other", Type::String)),
        is = is_invalid_schema
    );
    assert_eq!(err.to_string(), "invalid schema: duplicate field mapping `Post::title`");

    assert_err!(
        class.map_field(FieldMapping::new("heading", "title", Type::String)),
        is = is_invalid_schema
    );

    assert_err!(
        class.map_association(many_to_one("author", "User", "title")),
        is = is_invalid_schema
    );
}

#[test]
fn scale_must_not_exceed_precision() {
    let mut class = ClassMetadata::new("Product", ClassKind::Entity);
    let mut price = FieldMapping::new("price", "price", Type::Decimal);
    price.precision = Some(2);
    price.scale = Some(4);

    assert_err!(class.map_field(price), is = is_invalid_schema);
}

#[test]
fn version_fields_must_be_versionable_and_unique() {
    let mut class = ClassMetadata::new("Post", ClassKind::Entity);

    let mut name = FieldMapping::new("name", "name", Type::String);
    name.version = true;
    assert_err!(class.map_field(name), is = is_invalid_schema);

    let mut version = FieldMapping::new("version", "version", Type::Integer);
    version.version = true;
    class.map_field(version).unwrap();
    assert_eq!(class.version_field.as_deref(), Some("version"));

    let mut revised = FieldMapping::new("revised_at", "revised_at", Type::DateTime);
    revised.version = true;
    assert_err!(class.map_field(revised), is = is_invalid_schema);
}

#[test]
fn embeddables_reject_tables_ids_and_associations() {
    let mut class = ClassMetadata::new("Address", ClassKind::Embeddable);
    assert!(class.is_embedded_class());

    assert_err!(class.set_table(TableMetadata::new("addresses")), is = is_invalid_schema);

    let mut id = FieldMapping::new("id", "id", Type::Integer);
    id.id = true;
    assert_err!(class.map_field(id), is = is_invalid_schema);

    assert_err!(
        class.map_association(many_to_one("country", "Country", "country_id")),
        is = is_invalid_schema
    );
}

#[test]
fn composite_identifiers_follow_declaration_order() {
    let mut class = ClassMetadata::new("Membership", ClassKind::Entity);
    class.map_field(FieldMapping::new("group_id", "group_id", Type::Integer)).unwrap();
    class.map_association(many_to_one("user", "User", "user_id")).unwrap();

    class.add_identifier("user").unwrap();
    class.add_identifier("group_id").unwrap();
    class.add_identifier("user").unwrap();

    assert_eq!(class.identifier, ["user", "group_id"]);
    assert!(class.field("group_id").unwrap().id);
    assert!(class.association("user").unwrap().id);
    assert_eq!(class.single_identifier_column(), None);

    assert_err!(class.add_identifier("missing"), is = is_invalid_schema);
}

#[test]
fn generators_require_an_identifier_field() {
    let mut class = ClassMetadata::new("User", ClassKind::Entity);
    class.map_field(FieldMapping::new("email", "email", Type::String)).unwrap();

    assert_err!(
        class.set_id_generator("email", IdGenerator::default()),
        is = is_invalid_schema
    );

    let mut id = FieldMapping::new("id", "id", Type::Integer);
    id.id = true;
    class.map_field(id).unwrap();
    class.set_id_generator("id", IdGenerator::default()).unwrap();

    assert_eq!(class.single_identifier_column(), Some("id"));
    assert!(class.id_generator.as_ref().unwrap().is_post_insert());
}

#[test]
fn indexes_need_a_table() {
    let mut class = ClassMetadata::new("Post", ClassKind::Entity);
    let index = TableIndex {
        name: None,
        columns: vec!["title".to_string()],
        unique: true,
    };

    assert_err!(class.add_index(index.clone()), is = is_invalid_schema);

    class.set_table(TableMetadata::new("posts")).unwrap();
    class.add_index(index).unwrap();
    assert_eq!(class.table.as_ref().unwrap().unique_constraints().count(), 1);
}

#[test]
fn embedded_fields_share_the_field_namespace() {
    let mut class = ClassMetadata::new("User", ClassKind::Entity);
    class
        .map_embedded(EmbeddedMapping {
            field_name: "address".to_string(),
            class: "Address".to_string(),
            column_prefix: Some("address".to_string()),
        })
        .unwrap();

    assert!(class.has_field("address"));
    assert_err!(
        class.map_field(FieldMapping::new("address", "address", Type::String)),
        is = is_invalid_schema
    );
}

#[test]
fn store_rejects_duplicate_classes() {
    let mut store = Store::new();
    store.add_class("User", ClassKind::Entity).unwrap();

    assert_err!(store.add_class("User", ClassKind::Entity), is = is_invalid_schema);
    assert_err!(store.expect_class("Post"), is = is_invalid_schema);
    assert_eq!(store.len(), 1);
}
