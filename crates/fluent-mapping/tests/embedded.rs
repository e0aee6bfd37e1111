use fluent_mapping::{Builder, ClassKind, ColumnPrefix, Store};
use pretty_assertions::assert_eq;
use std_util::{assert_err, assert_ok};

fn address(store: &mut Store) {
    let mut builder = Builder::new("Address", ClassKind::Embeddable);
    builder.string("street");
    builder.string("postalCode").length(10);
    assert_ok!(builder.commit(store));
}

#[test]
fn embedded_columns_are_prefixed() {
    let mut store = Store::new();
    address(&mut store);

    let mut builder = Builder::new("Customer", ClassKind::Entity);
    builder.increments("id").unwrap();
    builder.embed("homeAddress", "Address");
    builder.embed("billing", "Address").prefix("bill");
    builder.embed("shipping", "Address").no_prefix();
    assert_ok!(builder.commit(&mut store));

    let class = store.class("Customer").unwrap();
    let columns: Vec<_> = class.fields.values().map(|f| f.column_name.as_str()).collect();
    assert_eq!(
        columns,
        [
            "id",
            "home_address_street",
            "home_address_postal_code",
            "bill_street",
            "bill_postal_code",
            "street",
            "postal_code",
        ]
    );

    let postal_code = class.field("billing.postalCode").unwrap();
    assert_eq!(postal_code.length, Some(10));
    assert_eq!(
        postal_code.embedded_from,
        Some(("billing".to_string(), "postalCode".to_string()))
    );

    let home = class.embedded("homeAddress").unwrap();
    assert_eq!(home.class, "Address");
    assert_eq!(home.column_prefix.as_deref(), Some("home_address"));
    assert_eq!(class.embedded("shipping").unwrap().column_prefix, None);
}

#[test]
fn prefix_configuration() {
    let mut builder = Builder::new("Customer", ClassKind::Entity);

    assert_eq!(builder.embed("a", "Address").column_prefix(), &ColumnPrefix::Default);
    assert_eq!(
        builder.embed("b", "Address").prefix("x").column_prefix(),
        &ColumnPrefix::Custom("x".to_string())
    );
    assert_eq!(builder.embed("c", "Address").no_prefix().column_prefix(), &ColumnPrefix::None);
}

#[test]
fn embedding_requires_a_registered_embeddable() {
    let mut store = Store::new();

    let mut builder = Builder::new("Customer", ClassKind::Entity);
    builder.embed("address", "Address");
    let err = assert_err!(builder.commit(&mut store), is = is_invalid_schema);
    assert_eq!(
        err.to_string(),
        "invalid schema: embedded class `Address` of `Customer::address` is not registered"
    );

    let mut builder = Builder::new("Order", ClassKind::Entity);
    builder.increments("id").unwrap();
    assert_ok!(builder.commit(&mut store));

    let mut builder = Builder::new("Invoice", ClassKind::Entity);
    builder.embed("order", "Order");
    assert_err!(builder.commit(&mut store), is = is_invalid_schema);
}

#[test]
fn colliding_embedded_columns_are_rejected() {
    let mut store = Store::new();
    address(&mut store);

    let mut builder = Builder::new("Customer", ClassKind::Entity);
    builder.string("street");
    builder.embed("address", "Address").no_prefix();
    assert_err!(builder.commit(&mut store), is = is_invalid_schema);
}

#[test]
fn embeddables_cannot_declare_associations() {
    let mut store = Store::new();
    let mut builder = Builder::new("Address", ClassKind::Embeddable);
    builder.belongs_to("country", "Country");

    assert_err!(builder.commit(&mut store), is = is_invalid_schema);
}
