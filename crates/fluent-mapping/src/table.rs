use crate::{Build, BuildContext, Configure, Result, Value};
use fluent_mapping_core::schema::TableMetadata;
use indexmap::IndexMap;

/// Physical table settings for an entity.
///
/// Unlike the queued declarations, a table is held by the builder and
/// applied before anything else when the class is committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Derived from the class name when unset
    name: Option<String>,

    schema: Option<String>,

    charset: Option<String>,

    collation: Option<String>,

    options: IndexMap<String, Value>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn schema(&mut self, schema: impl Into<String>) -> &mut Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn collation(&mut self, collation: impl Into<String>) -> &mut Self {
        self.collation = Some(collation.into());
        self
    }

    pub fn option(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

impl Build for Table {
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()> {
        let name = match &self.name {
            Some(name) => cx.table_name(name),
            None => cx.table_name(&cx.naming().class_to_table_name(cx.class_name())),
        };

        let table = TableMetadata {
            name,
            schema: self.schema.clone(),
            charset: self.charset.clone(),
            collation: self.collation.clone(),
            options: self.options.clone(),
            indexes: vec![],
        };

        cx.class_mut()?.set_table(table)
    }
}

impl Configure for Table {}
