use crate::Value;
use indexmap::IndexMap;

/// Physical table settings of a class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableMetadata {
    pub name: String,
    pub schema: Option<String>,
    pub charset: Option<String>,
    pub collation: Option<String>,
    pub options: IndexMap<String, Value>,
    pub indexes: Vec<TableIndex>,
}

/// An index or unique constraint over a set of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIndex {
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub unique: bool,
}

impl TableMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn unique_constraints(&self) -> impl Iterator<Item = &TableIndex> {
        self.indexes.iter().filter(|index| index.unique)
    }
}
