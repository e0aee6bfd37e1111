use crate::{Embedded, Field, Index, LifecycleEvents, Primary, Relation, Result, Store};
use fluent_mapping_core::schema::{ClassMetadata, NamingStrategy};
use std::{any::Any, fmt};

/// A declaration that can finalize itself against the metadata store.
pub trait Build: Any + fmt::Debug {
    /// Applies the declaration to the class the context points at.
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()>;
}

/// State handed to [`Build::build`].
pub struct BuildContext<'a> {
    store: &'a mut Store,

    /// Class being finalized
    class: &'a str,

    naming: &'a dyn NamingStrategy,

    /// If set, prefix all table names with this string
    table_name_prefix: Option<&'a str>,
}

/// One queued declaration.
///
/// The queue holds items in declaration order; finalizing them in that
/// order is what makes order-dependent declarations such as composite
/// primary keys work.
#[derive(Debug)]
pub enum Buildable {
    Field(Field),
    Relation(Relation),
    Embedded(Embedded),
    Index(Index),
    Primary(Primary),
    Events(LifecycleEvents),

    /// A caller supplied declaration, see [`Builder::add_relation`].
    ///
    /// [`Builder::add_relation`]: crate::Builder::add_relation
    Custom(Box<dyn Build>),
}

impl<'a> BuildContext<'a> {
    pub fn new(store: &'a mut Store, class: &'a str, naming: &'a dyn NamingStrategy) -> Self {
        Self {
            store,
            class,
            naming,
            table_name_prefix: None,
        }
    }

    pub fn table_name_prefix(mut self, prefix: Option<&'a str>) -> Self {
        self.table_name_prefix = prefix;
        self
    }

    pub fn class_name(&self) -> &'a str {
        self.class
    }

    pub fn class(&self) -> Result<&ClassMetadata> {
        self.store.expect_class(self.class)
    }

    pub fn class_mut(&mut self) -> Result<&mut ClassMetadata> {
        self.store.expect_class_mut(self.class)
    }

    pub fn store(&self) -> &Store {
        &*self.store
    }

    pub fn naming(&self) -> &'a dyn NamingStrategy {
        self.naming
    }

    /// Applies the configured prefix to a physical table name.
    pub fn table_name(&self, name: &str) -> String {
        match self.table_name_prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_string(),
        }
    }

    /// Table name of the class being finalized, derived from the naming
    /// strategy if no table has been set.
    pub fn class_table_name(&self) -> Result<String> {
        Ok(match self.class()?.table_name() {
            Some(name) => name.to_string(),
            None => self.table_name(&self.naming.class_to_table_name(self.class)),
        })
    }
}

impl Buildable {
    /// Short human readable description used in logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Field(field) => format!("field `{}`", field.field_name()),
            Self::Relation(relation) => {
                format!("{} `{}`", relation.kind(), relation.field_name())
            }
            Self::Embedded(embedded) => format!("embedded `{}`", embedded.field_name()),
            Self::Index(index) if index.is_unique() => "unique constraint".to_string(),
            Self::Index(_) => "index".to_string(),
            Self::Primary(_) => "primary key".to_string(),
            Self::Events(_) => "lifecycle events".to_string(),
            Self::Custom(custom) => format!("custom {custom:?}"),
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Self::Relation(relation) => Some(relation),
            _ => None,
        }
    }

    pub fn as_embedded(&self) -> Option<&Embedded> {
        match self {
            Self::Embedded(embedded) => Some(embedded),
            _ => None,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(..))
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation(..))
    }
}

impl Build for Buildable {
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()> {
        match self {
            Self::Field(field) => field.build(cx),
            Self::Relation(relation) => relation.build(cx),
            Self::Embedded(embedded) => embedded.build(cx),
            Self::Index(index) => index.build(cx),
            Self::Primary(primary) => primary.build(cx),
            Self::Events(events) => events.build(cx),
            Self::Custom(custom) => custom.build(cx),
        }
    }
}
