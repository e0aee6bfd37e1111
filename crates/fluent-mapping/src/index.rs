use crate::{Build, BuildContext, Configure, Error, Result};
use fluent_mapping_core::schema::TableIndex;

/// A pending index or unique constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    columns: Vec<String>,

    unique: bool,

    name: Option<String>,
}

/// A pending composite identifier.
///
/// The fields must be finalized before the identifier is, so `primary` is
/// declared after the fields it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primary {
    fields: Vec<String>,
}

impl Index {
    pub fn new(columns: Vec<String>, unique: bool) -> Self {
        Self {
            columns,
            unique,
            name: None,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }
}

impl Build for Index {
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()> {
        let class = cx.class_mut()?;

        if self.columns.is_empty() {
            return Err(Error::invalid_schema(format!(
                "index on `{}` has no columns",
                class.name
            )));
        }

        for column in &self.columns {
            if !class.has_column(column) {
                return Err(Error::invalid_schema(format!(
                    "index on `{}` references unknown column `{column}`",
                    class.name
                )));
            }
        }

        class.add_index(TableIndex {
            name: self.name.clone(),
            columns: self.columns.clone(),
            unique: self.unique,
        })
    }
}

impl Primary {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Build for Primary {
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()> {
        let class = cx.class_mut()?;

        for field in &self.fields {
            class.add_identifier(field)?;
        }

        Ok(())
    }
}

impl Configure for Index {}
impl Configure for Primary {}
