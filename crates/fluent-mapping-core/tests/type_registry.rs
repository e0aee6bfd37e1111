use fluent_mapping_core::schema::{Type, TypeRegistry};
use std_util::assert_err;

#[test]
fn every_builtin_token_resolves_to_itself() {
    let registry = TypeRegistry::new();

    for ty in Type::BUILTIN {
        assert_eq!(&registry.resolve(ty.name()).unwrap(), ty);
    }
}

#[test]
fn unknown_tokens_are_rejected() {
    let registry = TypeRegistry::new();
    let err = assert_err!(registry.resolve("money"), is = is_unknown_type);
    assert_eq!(err.to_string(), "unknown column type `money`");
}

#[test]
fn custom_types_can_be_registered_once() {
    let mut registry = TypeRegistry::new();
    registry.register("money").unwrap();

    assert_eq!(
        registry.resolve("money").unwrap(),
        Type::Custom("money".to_string())
    );

    assert_err!(registry.register("money"), is = is_invalid_argument);
    assert_err!(registry.register("string"), is = is_invalid_argument);
    assert_err!(registry.register(""), is = is_invalid_argument);
}
