use super::Name;
use std::fmt;

/// Derives physical names the mapping did not spell out explicitly.
///
/// Class arguments may be path qualified; implementations decide how much of
/// the path is significant.
pub trait NamingStrategy: fmt::Debug {
    /// Table name for a class without an explicit table.
    fn class_to_table_name(&self, class: &str) -> String;

    /// Column name for a field without an explicit column.
    fn property_to_column_name(&self, property: &str) -> String;

    /// Column name of a field copied from an embeddable, given the column
    /// prefix in effect.
    fn embedded_field_to_column_name(&self, prefix: &str, column: &str) -> String;

    /// Name of the column a foreign key references when none is given.
    fn reference_column_name(&self) -> String;

    /// Foreign-key column name for a to-one association property.
    fn join_column_name(&self, property: &str) -> String;

    /// Join table name for a many-to-many association declared on `source`.
    fn join_table_name(&self, source: &str, target: &str, property: &str) -> String;

    /// Join-table column referencing `entity`.
    fn join_key_column_name(&self, entity: &str, referenced_column: Option<&str>) -> String;
}

/// snake_case naming.
///
/// Tables are pluralized (`BlogPost` → `blog_posts`), join tables are
/// `{source}_{target}` with the declaring class first, and foreign keys end
/// in `_id`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNamingStrategy;

impl NamingStrategy for DefaultNamingStrategy {
    fn class_to_table_name(&self, class: &str) -> String {
        Name::new(class).plural_snake_case()
    }

    fn property_to_column_name(&self, property: &str) -> String {
        Name::new(property).snake_case()
    }

    fn embedded_field_to_column_name(&self, prefix: &str, column: &str) -> String {
        format!("{prefix}_{column}")
    }

    fn reference_column_name(&self) -> String {
        "id".to_string()
    }

    fn join_column_name(&self, property: &str) -> String {
        format!(
            "{}_{}",
            Name::new(property).snake_case(),
            self.reference_column_name()
        )
    }

    fn join_table_name(&self, source: &str, target: &str, _property: &str) -> String {
        format!(
            "{}_{}",
            Name::new(source).snake_case(),
            Name::new(target).snake_case()
        )
    }

    fn join_key_column_name(&self, entity: &str, referenced_column: Option<&str>) -> String {
        let referenced = match referenced_column {
            Some(column) => column.to_string(),
            None => self.reference_column_name(),
        };
        format!("{}_{}", Name::new(entity).snake_case(), referenced)
    }
}
