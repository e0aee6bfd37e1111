use super::Type;
use crate::Value;
use indexmap::IndexMap;

/// A finalized column mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMapping {
    /// Property name on the mapped class.
    pub field_name: String,

    /// Physical column name.
    pub column_name: String,

    pub ty: Type,

    pub nullable: bool,

    pub unique: bool,

    /// Maximum length, meaningful for string and binary types.
    pub length: Option<u32>,

    /// Total digits, meaningful for numeric types.
    pub precision: Option<u32>,

    /// Digits after the decimal point, meaningful for numeric types.
    pub scale: Option<u32>,

    /// Raw DDL fragment that replaces the generated column definition.
    pub column_definition: Option<String>,

    /// Column options such as `unsigned`, `default`, `comment`, `collation`
    /// and `fixed`, plus any caller supplied ones.
    pub options: IndexMap<String, Value>,

    /// True if the field is part of the class identifier.
    pub id: bool,

    /// True if the field is the optimistic-locking version field.
    pub version: bool,

    /// For fields copied from an embeddable, the embedding field and the
    /// field's name on the embeddable.
    pub embedded_from: Option<(String, String)>,
}

impl FieldMapping {
    pub fn new(field_name: impl Into<String>, column_name: impl Into<String>, ty: Type) -> Self {
        Self {
            field_name: field_name.into(),
            column_name: column_name.into(),
            ty,
            nullable: false,
            unique: false,
            length: None,
            precision: None,
            scale: None,
            column_definition: None,
            options: IndexMap::new(),
            id: false,
            version: false,
            embedded_from: None,
        }
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self.option("unsigned"), Some(Value::Bool(true)))
    }
}
