use crate::{Build, BuildContext, Configure, Result};
use fluent_mapping_core::schema::{self, InheritanceType, Type};
use indexmap::IndexMap;

/// Class-level mapping settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    repository_class: Option<String>,

    read_only: bool,

    inheritance: Option<Inheritance>,
}

/// Inheritance mapping of an entity hierarchy root.
#[derive(Debug, Clone, PartialEq)]
pub struct Inheritance {
    ty: InheritanceType,

    column: Option<String>,

    column_type: Option<Type>,

    length: Option<u32>,

    /// Discriminator value → class
    map: IndexMap<String, String>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.repository_class = Some(class.into());
        self
    }

    pub fn read_only(&mut self) -> &mut Self {
        self.read_only = true;
        self
    }

    /// Declares the inheritance strategy and hands back its descriptor.
    pub fn inheritance(&mut self, ty: InheritanceType) -> &mut Inheritance {
        self.inheritance.insert(Inheritance {
            ty,
            column: None,
            column_type: None,
            length: None,
            map: IndexMap::new(),
        })
    }

    pub fn single_table_inheritance(&mut self) -> &mut Inheritance {
        self.inheritance(InheritanceType::SingleTable)
    }

    pub fn joined_table_inheritance(&mut self) -> &mut Inheritance {
        self.inheritance(InheritanceType::Joined)
    }
}

impl Inheritance {
    /// Names the discriminator column.
    pub fn column(&mut self, name: impl Into<String>) -> &mut Self {
        self.column = Some(name.into());
        self
    }

    pub fn column_type(&mut self, ty: Type) -> &mut Self {
        self.column_type = Some(ty);
        self
    }

    pub fn length(&mut self, length: u32) -> &mut Self {
        self.length = Some(length);
        self
    }

    /// Maps a discriminator value to a class.
    pub fn map(&mut self, discriminator: impl Into<String>, class: impl Into<String>) -> &mut Self {
        self.map.insert(discriminator.into(), class.into());
        self
    }

    fn to_schema(&self) -> schema::Inheritance {
        let mut inheritance = schema::Inheritance::new(self.ty);

        if let Some(column) = &self.column {
            inheritance.column.name = column.clone();
        }

        if let Some(ty) = &self.column_type {
            inheritance.column.ty = ty.clone();
            if !ty.is_string() {
                inheritance.column.length = None;
            }
        }

        if let Some(length) = self.length {
            inheritance.column.length = Some(length);
        }

        inheritance.map = self.map.clone();
        inheritance
    }
}

impl Build for Entity {
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()> {
        let class = cx.class_mut()?;

        if self.repository_class.is_some() {
            class.repository_class = self.repository_class.clone();
        }

        class.read_only |= self.read_only;

        if let Some(inheritance) = &self.inheritance {
            class.inheritance = Some(inheritance.to_schema());
        }

        Ok(())
    }
}

impl Configure for Entity {}
impl Configure for Inheritance {}
