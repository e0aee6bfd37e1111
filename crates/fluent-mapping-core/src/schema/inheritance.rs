use super::Type;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InheritanceType {
    /// The whole hierarchy shares one table.
    SingleTable,
    /// Each class in the hierarchy gets its own table joined on the identifier.
    Joined,
}

/// Column holding the concrete class of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscriminatorColumn {
    pub name: String,
    pub ty: Type,
    pub length: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inheritance {
    pub ty: InheritanceType,
    pub column: DiscriminatorColumn,

    /// Discriminator value → class.
    pub map: IndexMap<String, String>,
}

impl Default for DiscriminatorColumn {
    fn default() -> Self {
        Self {
            name: "type".to_string(),
            ty: Type::String,
            length: Some(255),
        }
    }
}

impl Inheritance {
    pub fn new(ty: InheritanceType) -> Self {
        Self {
            ty,
            column: DiscriminatorColumn::default(),
            map: IndexMap::new(),
        }
    }
}
