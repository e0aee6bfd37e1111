use std_util::str;

/// A class or property name split into its snake_case words.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    /// Builds a name from a (possibly path-qualified) class or property
    /// name. Qualification is dropped: `app::models::BlogPost` becomes
    /// `blog_post`.
    pub fn new(src: &str) -> Self {
        let snake = str::snake_case(str::short_type_name(src));
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn camel_case(&self) -> String {
        str::camel_case(&self.snake_case())
    }

    pub fn upper_camel_case(&self) -> String {
        str::upper_camel_case(&self.snake_case())
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// The snake_case name with its last word pluralized.
    pub fn plural_snake_case(&self) -> String {
        match self.parts.split_last() {
            Some((last, rest)) => {
                let mut parts = rest.to_vec();
                parts.push(str::pluralize(last));
                parts.join("_")
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_names_are_shortened() {
        let name = Name::new("app::models::BlogPost");
        assert_eq!(name.snake_case(), "blog_post");
        assert_eq!(name.upper_camel_case(), "BlogPost");
        assert_eq!(name.camel_case(), "blogPost");
    }

    #[test]
    fn plural_only_touches_last_word() {
        assert_eq!(Name::new("BlogCategory").plural_snake_case(), "blog_categories");
        assert_eq!(Name::new("User").plural_snake_case(), "users");
    }
}
