use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

pub fn pluralize(src: &str) -> String {
    pluralizer::pluralize(src, 2, false)
}

/// Strips any module or namespace qualification from a type path, so
/// `app::models::Post` and `App\Models\Post` both yield `Post`.
pub fn short_type_name(src: &str) -> &str {
    src.rsplit(['\\', ':', '.'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(src)
}
