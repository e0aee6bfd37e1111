use fluent_mapping::{Arity, Builder, ClassKind, Value};
use pretty_assertions::assert_eq;
use std::{cell::RefCell, rc::Rc};
use std_util::{assert_err, assert_ok};

#[test]
fn macro_receives_builder_and_arguments() {
    let seen = Rc::new(RefCell::new(vec![]));

    let mut builder = Builder::new("Post", ClassKind::Entity);
    let recorded = seen.clone();
    assert_ok!(builder.register_macro("foo", Arity::Exact(2), move |builder, args| {
        recorded
            .borrow_mut()
            .push((builder.class_name().to_string(), args.to_vec()));
        Ok(())
    }));

    assert!(builder.has_macro("foo"));
    assert_ok!(builder.call("foo", &[Value::from(1), Value::from(2)]));

    assert_eq!(
        *seen.borrow(),
        [("Post".to_string(), vec![Value::I64(1), Value::I64(2)])]
    );
}

#[test]
fn macros_can_declare_fields() {
    let mut builder = Builder::new("Post", ClassKind::Entity);
    assert_ok!(builder.register_macro("audited", Arity::Exact(0), |builder, _| {
        builder.string("created_by");
        builder.string("updated_by").nullable();
        Ok(())
    }));

    assert_ok!(builder.call("audited", &[]));
    assert_eq!(builder.queued().len(), 2);
}

#[test]
fn unknown_verbs_are_not_found() {
    let mut builder = Builder::new("Post", ClassKind::Entity);

    let err = assert_err!(builder.call("bar", &[]), is = is_method_not_found);
    assert_eq!(err.to_string(), "method not found: builder has no verb `bar`");
}

#[test]
fn macro_arity_is_checked() {
    let mut builder = Builder::new("Post", ClassKind::Entity);
    assert_ok!(builder.register_macro("pair", Arity::Exact(2), |_, _| Ok(())));
    assert_ok!(builder.register_macro("some", Arity::AtLeast(1), |_, _| Ok(())));

    assert_err!(builder.call("pair", &[Value::from(1)]), is = is_invalid_argument);
    assert_err!(builder.call("some", &[]), is = is_invalid_argument);
    assert_ok!(builder.call("some", &["a".into(), "b".into(), "c".into()]));
}

#[test]
fn macro_names_are_validated() {
    let mut builder = Builder::new("Post", ClassKind::Entity);

    assert_err!(
        builder.register_macro("", Arity::Any, |_, _| Ok(())),
        is = is_invalid_argument
    );
    assert_err!(
        builder.register_macro("string", Arity::Any, |_, _| Ok(())),
        is = is_invalid_argument
    );
    assert!(!builder.has_macro("string"));
}

#[test]
fn macro_errors_propagate() {
    let mut builder = Builder::new("Money", ClassKind::Embeddable);
    assert_ok!(builder.register_macro("id", Arity::Exact(0), |builder, _| {
        builder.increments("id")?;
        Ok(())
    }));

    assert_err!(builder.call("id", &[]), is = is_invalid_state);
}

#[test]
fn builtin_verbs_by_name() {
    let mut builder = Builder::new("Post", ClassKind::Entity);

    assert_ok!(builder.call("increments", &["id".into()]));
    assert_ok!(builder.call("field", &["text".into(), "body".into()]));
    assert_ok!(builder.call("belongs_to", &["author".into(), "User".into()]));
    assert_ok!(builder.call("belongs_to_many", &["tags".into(), "Tag".into()]));
    assert_ok!(builder.call("timestamps", &[]));
    assert_ok!(builder.call("unique", &[vec!["body"].into()]));
    assert_ok!(builder.call("table", &["blog_posts".into()]));

    let described: Vec<_> = builder.queued().iter().map(|item| item.describe()).collect();
    assert_eq!(
        described,
        [
            "field `id`",
            "field `body`",
            "many-to-one `author`",
            "many-to-many `tags`",
            "field `created_at`",
            "field `updated_at`",
            "unique constraint",
        ]
    );
    assert_eq!(
        builder.table_descriptor().and_then(|table| table.table_name()),
        Some("blog_posts")
    );

    assert_err!(builder.call("field", &["text".into()]), is = is_invalid_argument);
    assert_err!(builder.call("string", &[Value::from(1)]), is = is_invalid_argument);
    assert_err!(builder.call("field", &["money".into(), "price".into()]), is = is_unknown_type);
}
