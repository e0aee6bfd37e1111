use fluent_mapping::{Builder, ClassKind, Configure, Field, Store, Type, Value};
use fluent_mapping_core::schema::GeneratorStrategy;
use pretty_assertions::assert_eq;
use std_util::{assert_err, assert_ok};

fn entity() -> Builder {
    Builder::new("Product", ClassKind::Entity)
}

fn last_field(builder: &Builder) -> &Field {
    builder.queued().last().unwrap().as_field().unwrap()
}

#[test]
fn shorthands_map_to_their_types() {
    let cases: &[(&str, Type)] = &[
        ("string", Type::String),
        ("text", Type::Text),
        ("guid", Type::Guid),
        ("blob", Type::Blob),
        ("binary", Type::Binary),
        ("boolean", Type::Boolean),
        ("integer", Type::Integer),
        ("small_integer", Type::SmallInteger),
        ("big_integer", Type::BigInteger),
        ("unsigned_integer", Type::Integer),
        ("float", Type::Float),
        ("decimal", Type::Decimal),
        ("date", Type::Date),
        ("date_time", Type::DateTime),
        ("date_time_tz", Type::DateTimeTz),
        ("time_immutable", Type::TimeImmutable),
        ("date_interval", Type::DateInterval),
        ("json", Type::Json),
        ("simple_array", Type::SimpleArray),
        ("object", Type::Object),
    ];

    for (verb, ty) in cases {
        let mut builder = entity();
        assert_ok!(builder.call(verb, &["value".into()]));

        assert_eq!(builder.queued().len(), 1, "{verb}");
        assert_eq!(last_field(&builder).ty(), ty, "{verb}");
        assert_eq!(last_field(&builder).field_name(), "value");
    }
}

#[test]
fn each_declaration_is_queued_once_in_order() {
    let mut builder = entity();
    builder.string("name").nullable().unique();
    builder.integer("stock");
    builder.boolean("active");

    let names: Vec<_> = builder
        .queued()
        .iter()
        .map(|item| item.as_field().unwrap().field_name())
        .collect();
    assert_eq!(names, ["name", "stock", "active"]);
}

#[test]
fn chained_verbs_configure_the_same_field() {
    let mut store = Store::new();
    let mut builder = entity();
    builder
        .string("sku")
        .name("product_sku")
        .length(32)
        .unique()
        .comment("stock keeping unit")
        .set_default("none");
    assert_ok!(builder.commit(&mut store));

    let sku = store.class("Product").unwrap().field("sku").unwrap();
    assert_eq!(sku.column_name, "product_sku");
    assert_eq!(sku.length, Some(32));
    assert!(sku.unique);
    assert!(!sku.nullable);
    assert_eq!(sku.option("comment"), Some(&Value::from("stock keeping unit")));
    assert_eq!(sku.option("default"), Some(&Value::from("none")));
}

#[test]
fn increments_is_an_unsigned_generated_primary_key() {
    let mut builder = entity();
    let id = assert_ok!(builder.increments("id"));

    assert!(id.is_primary());
    assert!(id.is_unsigned());
    assert_eq!(id.generated().map(|g| g.strategy()), Some(GeneratorStrategy::Auto));
    assert_eq!(id.ty(), &Type::Integer);

    assert_eq!(assert_ok!(builder.big_increments("big")).ty(), &Type::BigInteger);
    assert_eq!(assert_ok!(builder.small_increments("small")).ty(), &Type::SmallInteger);
}

#[test]
fn increments_on_an_embeddable_is_rejected() {
    let mut builder = Builder::new("Money", ClassKind::Embeddable);

    let err = assert_err!(builder.increments("id"), is = is_invalid_state);
    assert_eq!(
        err.to_string(),
        "invalid state: `increments` cannot be used on embeddable `Money`"
    );
    assert_err!(builder.big_increments("id"), is = is_invalid_state);
    assert!(builder.queued().is_empty());
}

#[test]
fn float_and_decimal_default_to_8_2() {
    let mut store = Store::new();
    let mut builder = entity();
    builder.float("weight");
    builder.decimal("price");
    builder.decimal("cost").configure(|cost| {
        cost.precision(10).scale(4);
    });
    assert_ok!(builder.commit(&mut store));

    let class = store.class("Product").unwrap();
    for (field, precision, scale) in [("weight", 8, 2), ("price", 8, 2), ("cost", 10, 4)] {
        let mapping = class.field(field).unwrap();
        assert_eq!(mapping.precision, Some(precision), "{field}");
        assert_eq!(mapping.scale, Some(scale), "{field}");
    }
}

#[test]
fn binary_defaults_to_nullable() {
    let mut store = Store::new();
    let mut builder = entity();
    builder.binary("checksum");
    assert_ok!(builder.commit(&mut store));

    assert!(store.class("Product").unwrap().field("checksum").unwrap().nullable);
}

#[test]
fn field_resolves_type_tokens() {
    let mut builder = entity();
    assert_eq!(assert_ok!(builder.field("datetimetz", "at")).ty(), &Type::DateTimeTz);

    let err = assert_err!(builder.field("money", "price"), is = is_unknown_type);
    assert_eq!(err.to_string(), "unknown column type `money`");
    assert_eq!(builder.queued().len(), 1);
}

#[test]
fn convenience_verbs() {
    let mut store = Store::new();
    let mut builder = entity();
    builder.timestamps();
    builder.soft_deletes("deleted_at");
    builder.remember_token();
    assert_ok!(builder.commit(&mut store));

    let class = store.class("Product").unwrap();
    for field in ["created_at", "updated_at", "deleted_at"] {
        let mapping = class.field(field).unwrap();
        assert_eq!(mapping.ty, Type::DateTime);
        assert!(mapping.nullable);
    }

    let token = class.field("remember_token").unwrap();
    assert_eq!(token.length, Some(100));
    assert!(token.nullable);
}

#[test]
fn column_names_default_to_snake_case() {
    let mut store = Store::new();
    let mut builder = entity();
    builder.date_time("publishedAt");
    assert_ok!(builder.commit(&mut store));

    let field = store.class("Product").unwrap().field("publishedAt").unwrap();
    assert_eq!(field.column_name, "published_at");
}

#[test]
fn field_verbs_by_name() {
    let mut builder = entity();
    let field = builder.string("status");

    assert_ok!(field.call("default", &["draft".into()]));
    assert_ok!(field.call("length", &[Value::from(20)]));
    assert_ok!(field.call("nullable", &[]));
    assert_ok!(field.call("option", &["charset".into(), "utf8".into()]));

    let mapping = field.to_mapping(&fluent_mapping::DefaultNamingStrategy);
    assert_eq!(mapping.option("default"), Some(&Value::from("draft")));
    assert_eq!(mapping.option("charset"), Some(&Value::from("utf8")));
    assert_eq!(mapping.length, Some(20));
    assert!(mapping.nullable);

    let err = assert_err!(field.call("frobnicate", &[]), is = is_method_not_found);
    assert_eq!(err.to_string(), "method not found: field has no verb `frobnicate`");

    assert_err!(field.call("length", &["long".into()]), is = is_invalid_argument);
    assert_err!(field.call("length", &[]), is = is_invalid_argument);
}

#[test]
fn generated_values() {
    let mut store = Store::new();
    let mut builder = entity();
    builder.integer("id").primary().generated_value(|generated| {
        generated.sequence().initial_value(100);
    });
    assert_ok!(builder.commit(&mut store));

    let generator = store.class("Product").unwrap().id_generator.clone().unwrap();
    assert_eq!(generator.strategy, GeneratorStrategy::Sequence);

    let sequence = generator.sequence.unwrap();
    assert_eq!(sequence.name, "products_id_seq");
    assert_eq!(sequence.initial_value, 100);
}

#[test]
fn generated_value_requires_a_primary_key() {
    let mut store = Store::new();
    let mut builder = entity();
    builder.integer("counter").auto_increment();

    assert_err!(builder.commit(&mut store), is = is_invalid_schema);
}

#[test]
fn version_fields() {
    let mut store = Store::new();
    let mut builder = entity();
    builder.integer("version").use_for_versioning();
    assert_ok!(builder.commit(&mut store));
    assert_eq!(
        store.class("Product").unwrap().version_field.as_deref(),
        Some("version")
    );

    let mut builder = Builder::new("Order", ClassKind::Entity);
    builder.string("version").use_for_versioning();
    assert_err!(builder.commit(&mut store), is = is_invalid_schema);
}

#[test]
fn scale_larger_than_precision_fails_on_commit() {
    let mut store = Store::new();
    let mut builder = entity();
    builder.decimal("price").precision(2).scale(4);

    assert_err!(builder.commit(&mut store), is = is_invalid_schema);
}
