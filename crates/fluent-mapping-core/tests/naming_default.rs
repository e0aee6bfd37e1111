use fluent_mapping_core::schema::{DefaultNamingStrategy, NamingStrategy};

#[test]
fn table_names_are_plural_snake_case() {
    let naming = DefaultNamingStrategy;
    assert_eq!(naming.class_to_table_name("User"), "users");
    assert_eq!(naming.class_to_table_name("BlogPost"), "blog_posts");
    assert_eq!(naming.class_to_table_name("app::models::Category"), "categories");
}

#[test]
fn columns_are_snake_case() {
    let naming = DefaultNamingStrategy;
    assert_eq!(naming.property_to_column_name("createdAt"), "created_at");
    assert_eq!(naming.property_to_column_name("title"), "title");
    assert_eq!(naming.embedded_field_to_column_name("address", "street"), "address_street");
}

#[test]
fn join_columns_end_in_reference_column() {
    let naming = DefaultNamingStrategy;
    assert_eq!(naming.reference_column_name(), "id");
    assert_eq!(naming.join_column_name("author"), "author_id");
    assert_eq!(naming.join_column_name("mainAuthor"), "main_author_id");
}

#[test]
fn join_table_names_put_the_declaring_class_first() {
    let naming = DefaultNamingStrategy;

    // Stable across calls
    for _ in 0..3 {
        assert_eq!(naming.join_table_name("Post", "Tag", "tags"), "post_tag");
    }

    // Order dependent
    assert_eq!(naming.join_table_name("Tag", "Post", "posts"), "tag_post");
    assert_eq!(naming.join_table_name("app::BlogPost", "Tag", "tags"), "blog_post_tag");
}

#[test]
fn join_key_columns_reference_the_entity_identifier() {
    let naming = DefaultNamingStrategy;
    assert_eq!(naming.join_key_column_name("Post", None), "post_id");
    assert_eq!(naming.join_key_column_name("Post", Some("uuid")), "post_uuid");
}
