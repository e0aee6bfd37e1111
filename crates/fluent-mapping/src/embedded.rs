use crate::{Build, BuildContext, Configure, Error, Result};
use fluent_mapping_core::schema::{EmbeddedMapping, FieldMapping};

/// A pending embedded value object declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedded {
    field: String,

    /// The embeddable class
    class: String,

    prefix: ColumnPrefix,
}

/// How the embeddable's columns are named inside the embedding table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnPrefix {
    /// Prefix with the embedding field's column name.
    #[default]
    Default,

    Custom(String),

    /// Copy the embeddable's column names unchanged.
    None,
}

impl Embedded {
    pub fn new(field: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            class: class.into(),
            prefix: ColumnPrefix::Default,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn column_prefix(&self) -> &ColumnPrefix {
        &self.prefix
    }

    pub fn prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = ColumnPrefix::Custom(prefix.into());
        self
    }

    pub fn no_prefix(&mut self) -> &mut Self {
        self.prefix = ColumnPrefix::None;
        self
    }
}

impl Build for Embedded {
    /// Records the embedded value and copies the embeddable's columns into
    /// the embedding class.
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()> {
        let naming = cx.naming();

        let embeddable = cx.store().class(&self.class).ok_or_else(|| {
            Error::invalid_schema(format!(
                "embedded class `{}` of `{}::{}` is not registered",
                self.class,
                cx.class_name(),
                self.field
            ))
        })?;

        if !embeddable.is_embedded_class() {
            return Err(Error::invalid_schema(format!(
                "`{}` is embedded by `{}::{}` but is not an embeddable",
                self.class,
                cx.class_name(),
                self.field
            )));
        }

        let fields: Vec<FieldMapping> = embeddable.fields.values().cloned().collect();

        let column_prefix = match &self.prefix {
            ColumnPrefix::Default => Some(naming.property_to_column_name(&self.field)),
            ColumnPrefix::Custom(prefix) => Some(prefix.clone()),
            ColumnPrefix::None => None,
        };

        let class = cx.class_mut()?;
        class.map_embedded(EmbeddedMapping {
            field_name: self.field.clone(),
            class: self.class.clone(),
            column_prefix: column_prefix.clone(),
        })?;

        for field in fields {
            let column_name = match &column_prefix {
                Some(prefix) => naming.embedded_field_to_column_name(prefix, &field.column_name),
                None => field.column_name.clone(),
            };

            class.map_field(FieldMapping {
                field_name: format!("{}.{}", self.field, field.field_name),
                column_name,
                embedded_from: Some((self.field.clone(), field.field_name.clone())),
                ..field
            })?;
        }

        Ok(())
    }
}

impl Configure for Embedded {}
