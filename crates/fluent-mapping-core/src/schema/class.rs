use super::{
    AssociationMapping, EmbeddedMapping, FieldMapping, IdGenerator, Inheritance, LifecycleEvent,
    TableIndex, TableMetadata,
};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Distinguishes classes with tables from value objects embedded into them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassKind {
    /// A class mapped to its own table.
    #[default]
    Entity,

    /// A value object whose fields are flattened into the embedding class's
    /// table. Embeddables have no table, identifier or associations.
    Embeddable,

    /// A base class whose mapping is inherited by entities but which has no
    /// table of its own.
    MappedSuperclass,
}

/// Everything the store knows about one mapped class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMetadata {
    /// Class name as registered.
    pub name: String,

    pub kind: ClassKind,

    /// Set once the class's table has been declared or derived.
    pub table: Option<TableMetadata>,

    pub repository_class: Option<String>,

    pub read_only: bool,

    pub inheritance: Option<Inheritance>,

    /// Column mappings by field name, in finalization order.
    pub fields: IndexMap<String, FieldMapping>,

    /// Association mappings by field name, in finalization order.
    pub associations: IndexMap<String, AssociationMapping>,

    /// Embedded value objects by field name.
    pub embedded: IndexMap<String, EmbeddedMapping>,

    /// Field names composing the identifier, in declaration order.
    pub identifier: Vec<String>,

    pub id_generator: Option<IdGenerator>,

    pub version_field: Option<String>,

    /// Callback method names per lifecycle event.
    pub lifecycle_callbacks: IndexMap<LifecycleEvent, Vec<String>>,
}

impl ClassMetadata {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            table: None,
            repository_class: None,
            read_only: false,
            inheritance: None,
            fields: IndexMap::new(),
            associations: IndexMap::new(),
            embedded: IndexMap::new(),
            identifier: vec![],
            id_generator: None,
            version_field: None,
            lifecycle_callbacks: IndexMap::new(),
        }
    }

    pub fn is_embedded_class(&self) -> bool {
        matches!(self.kind, ClassKind::Embeddable)
    }

    pub fn is_mapped_superclass(&self) -> bool {
        matches!(self.kind, ClassKind::MappedSuperclass)
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table.as_ref().map(|table| table.name.as_str())
    }

    pub fn field(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.get(name)
    }

    pub fn association(&self, name: &str) -> Option<&AssociationMapping> {
        self.associations.get(name)
    }

    pub fn embedded(&self, name: &str) -> Option<&EmbeddedMapping> {
        self.embedded.get(name)
    }

    /// Returns `true` if `name` is mapped as a field, association or
    /// embedded value.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
            || self.associations.contains_key(name)
            || self.embedded.contains_key(name)
    }

    /// Every physical column of the class's table: field columns followed by
    /// to-one foreign keys.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .values()
            .map(|field| field.column_name.as_str())
            .chain(
                self.associations
                    .values()
                    .flat_map(AssociationMapping::join_column_names),
            )
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_names().any(|name| name == column)
    }

    /// The identifier column if the identifier is a single field.
    pub fn single_identifier_column(&self) -> Option<&str> {
        match &self.identifier[..] {
            [id] => self.fields.get(id).map(|field| field.column_name.as_str()),
            _ => None,
        }
    }

    pub fn set_table(&mut self, table: TableMetadata) -> Result<()> {
        if self.is_embedded_class() {
            return Err(Error::invalid_schema(format!(
                "embeddable `{}` cannot be mapped to a table",
                self.name
            )));
        }

        self.table = Some(table);
        Ok(())
    }

    pub fn map_field(&mut self, mapping: FieldMapping) -> Result<()> {
        self.assert_field_not_mapped(&mapping.field_name)?;

        if self.has_column(&mapping.column_name) {
            return Err(Error::invalid_schema(format!(
                "duplicate column `{}` on `{}`",
                mapping.column_name, self.name
            )));
        }

        if let (Some(precision), Some(scale)) = (mapping.precision, mapping.scale) {
            if scale > precision {
                return Err(Error::invalid_schema(format!(
                    "field `{}::{}` has scale {scale} larger than precision {precision}",
                    self.name, mapping.field_name
                )));
            }
        }

        if mapping.id && self.is_embedded_class() {
            return Err(Error::invalid_schema(format!(
                "embeddable `{}` cannot have identifier field `{}`",
                self.name, mapping.field_name
            )));
        }

        if mapping.version {
            if !mapping.ty.is_versionable() {
                return Err(Error::invalid_schema(format!(
                    "version field `{}::{}` must be an integer or datetime, not `{}`",
                    self.name, mapping.field_name, mapping.ty
                )));
            }

            if let Some(existing) = &self.version_field {
                return Err(Error::invalid_schema(format!(
                    "`{}` already uses `{existing}` as its version field",
                    self.name
                )));
            }

            self.version_field = Some(mapping.field_name.clone());
        }

        if mapping.id {
            self.identifier.push(mapping.field_name.clone());
        }

        self.fields.insert(mapping.field_name.clone(), mapping);
        Ok(())
    }

    pub fn map_association(&mut self, mapping: AssociationMapping) -> Result<()> {
        if self.is_embedded_class() {
            return Err(Error::invalid_schema(format!(
                "embeddable `{}` cannot declare association `{}`",
                self.name, mapping.field_name
            )));
        }

        self.assert_field_not_mapped(&mapping.field_name)?;

        for column in mapping.join_column_names() {
            if self.has_column(column) {
                return Err(Error::invalid_schema(format!(
                    "join column `{column}` of `{}::{}` collides with an existing column",
                    self.name, mapping.field_name
                )));
            }
        }

        if mapping.id {
            self.identifier.push(mapping.field_name.clone());
        }

        self.associations
            .insert(mapping.field_name.clone(), mapping);
        Ok(())
    }

    pub fn map_embedded(&mut self, mapping: EmbeddedMapping) -> Result<()> {
        self.assert_field_not_mapped(&mapping.field_name)?;
        self.embedded.insert(mapping.field_name.clone(), mapping);
        Ok(())
    }

    /// Adds an already mapped field or to-one association to the identifier.
    pub fn add_identifier(&mut self, field: &str) -> Result<()> {
        if self.is_embedded_class() {
            return Err(Error::invalid_schema(format!(
                "embeddable `{}` cannot have an identifier",
                self.name
            )));
        }

        if let Some(mapping) = self.fields.get_mut(field) {
            mapping.id = true;
        } else if let Some(mapping) = self.associations.get_mut(field) {
            if !mapping.kind.is_to_one() {
                return Err(Error::invalid_schema(format!(
                    "to-many association `{}::{field}` cannot be part of the identifier",
                    self.name
                )));
            }
            mapping.id = true;
        } else {
            return Err(Error::invalid_schema(format!(
                "identifier field `{}::{field}` is not mapped",
                self.name
            )));
        }

        if !self.identifier.iter().any(|id| id == field) {
            self.identifier.push(field.to_string());
        }

        Ok(())
    }

    /// Attaches an identifier generator; `field` must already be part of the
    /// identifier.
    pub fn set_id_generator(&mut self, field: &str, generator: IdGenerator) -> Result<()> {
        if !self.identifier.iter().any(|id| id == field) {
            return Err(Error::invalid_schema(format!(
                "generated value on `{}::{field}` requires the field to be a primary key",
                self.name
            )));
        }

        self.id_generator = Some(generator);
        Ok(())
    }

    pub fn add_index(&mut self, index: TableIndex) -> Result<()> {
        let name = &self.name;
        let table = self.table.as_mut().ok_or_else(|| {
            Error::invalid_schema(format!("`{name}` has no table to hold an index"))
        })?;

        table.indexes.push(index);
        Ok(())
    }

    pub fn add_lifecycle_callback(&mut self, event: LifecycleEvent, method: impl Into<String>) {
        self.lifecycle_callbacks
            .entry(event)
            .or_default()
            .push(method.into());
    }

    fn assert_field_not_mapped(&self, field: &str) -> Result<()> {
        if self.has_field(field) {
            return Err(Error::invalid_schema(format!(
                "duplicate field mapping `{}::{field}`",
                self.name
            )));
        }
        Ok(())
    }
}
