/// A field holding an embeddable value object.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedMapping {
    pub field_name: String,

    /// The embeddable class.
    pub class: String,

    /// Prefix applied to the embeddable's columns; `None` copies them
    /// unprefixed.
    pub column_prefix: Option<String>,
}
