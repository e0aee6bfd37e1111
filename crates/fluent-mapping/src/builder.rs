//! The mapping builder.

mod dispatch;
pub(crate) use dispatch::is_builtin_verb;

mod fields;

mod relations;

use crate::{
    Buildable, Committer, Embedded, Entity, Field, Index, LifecycleEvents, Macro, Macros, Pending,
    Primary, Relation, Result, Table,
};
use crate::{Arity, Error, Store, Value};
use fluent_mapping_core::schema::{
    ClassKind, ClassMetadata, DefaultNamingStrategy, NamingStrategy, TypeRegistry,
};
use std::sync::Arc;

/// Declares the mapping of one class.
///
/// Verbs create a descriptor, queue it and return it for further
/// configuration. The queue is finalized in declaration order when the
/// builder is committed. The table and entity settings are structural and
/// are held outside the queue; they are applied before any queued item.
#[derive(Debug)]
pub struct Builder {
    /// Class being mapped
    class: String,

    kind: ClassKind,

    naming: Arc<dyn NamingStrategy>,

    /// Resolves type tokens passed to [`Builder::field`]
    types: Arc<TypeRegistry>,

    macros: Macros,

    table: Option<Table>,

    entity: Option<Entity>,

    queued: Vec<Buildable>,
}

impl Builder {
    pub fn new(class: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            class: class.into(),
            kind,
            naming: Arc::new(DefaultNamingStrategy),
            types: Arc::new(TypeRegistry::new()),
            macros: Macros::default(),
            table: None,
            entity: None,
            queued: vec![],
        }
    }

    /// Creates a builder for a class already registered in a store.
    pub fn for_class(class: &ClassMetadata) -> Self {
        Self::new(class.name.clone(), class.kind)
    }

    pub fn with_naming(mut self, naming: Arc<dyn NamingStrategy>) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_types(mut self, types: Arc<TypeRegistry>) -> Self {
        self.types = types;
        self
    }

    pub fn with_macros(mut self, macros: Macros) -> Self {
        self.macros = macros;
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Returns `true` if the class being mapped is an embeddable.
    pub fn is_embedded_class(&self) -> bool {
        matches!(self.kind, ClassKind::Embeddable)
    }

    pub fn naming(&self) -> &dyn NamingStrategy {
        &*self.naming
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Declares the class's physical table.
    pub fn table(&mut self, name: impl Into<String>) -> Result<&mut Table> {
        let table = self.table_slot("table")?;
        table.name(name);
        Ok(table)
    }

    /// Declares the class's table, configuring it with `f`. The name is
    /// derived from the class if `f` does not set one.
    pub fn table_with(&mut self, f: impl FnOnce(&mut Table)) -> Result<&mut Table> {
        let table = self.table_slot("table")?;
        f(table);
        Ok(table)
    }

    pub fn table_descriptor(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Declares class-level settings such as inheritance.
    pub fn entity(&mut self) -> Result<&mut Entity> {
        self.assert_not_embedded("entity")?;

        if self.entity.is_some() {
            return Err(self.declared_twice("entity"));
        }

        Ok(self.entity.insert(Entity::new()))
    }

    pub fn entity_descriptor(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    /// Declares that `field` holds a value of the embeddable `class`.
    pub fn embed(&mut self, field: impl Into<String>, class: impl Into<String>) -> &mut Embedded {
        match self.push(Buildable::Embedded(Embedded::new(field, class))) {
            Buildable::Embedded(embedded) => embedded,
            _ => unreachable!(),
        }
    }

    /// Declares an index over `columns`.
    pub fn index<I>(&mut self, columns: I) -> &mut Index
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        self.push_index(Index::new(columns, false))
    }

    /// Declares a unique constraint over `columns`.
    pub fn unique<I>(&mut self, columns: I) -> &mut Index
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        self.push_index(Index::new(columns, true))
    }

    /// Declares a composite identifier over already declared fields.
    pub fn primary<I>(&mut self, fields: I) -> &mut Primary
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let fields = fields.into_iter().map(Into::into).collect();
        match self.push(Buildable::Primary(Primary::new(fields))) {
            Buildable::Primary(primary) => primary,
            _ => unreachable!(),
        }
    }

    /// Declares lifecycle callbacks.
    pub fn events(&mut self) -> &mut LifecycleEvents {
        match self.push(Buildable::Events(LifecycleEvents::new())) {
            Buildable::Events(events) => events,
            _ => unreachable!(),
        }
    }

    /// The declarations queued so far, in declaration order.
    pub fn queued(&self) -> &[Buildable] {
        &self.queued
    }

    /// Discards every queued declaration without finalizing it.
    pub fn reset_queued(&mut self) {
        tracing::debug!(
            class = %self.class,
            discarded = self.queued.len(),
            "reset queued declarations"
        );
        self.queued.clear();
    }

    /// Registers a builder verb; see [`Builder::call`].
    pub fn register_macro(
        &mut self,
        name: impl Into<String>,
        arity: Arity,
        f: impl Fn(&mut Builder, &[Value]) -> Result<()> + 'static,
    ) -> Result<&mut Self> {
        self.macros.register(name, Macro::new(arity, f))?;
        Ok(self)
    }

    pub fn has_macro(&self, name: &str) -> bool {
        self.macros.contains(name)
    }

    pub fn macros(&self) -> &Macros {
        &self.macros
    }

    /// Splits the builder into what the committer applies.
    pub fn into_pending(self) -> Pending {
        Pending {
            class: self.class,
            kind: self.kind,
            table: self.table,
            entity: self.entity,
            queued: self.queued,
        }
    }

    /// Finalizes every declaration against `store`.
    ///
    /// The class is registered if the store does not know it yet. Errors are
    /// returned as raised; declarations finalized before the failing one
    /// remain in the store.
    pub fn commit(self, store: &mut Store) -> Result<()> {
        let naming = self.naming.clone();
        Committer::new(store, &*naming).commit(self.into_pending())
    }

    pub(crate) fn assert_not_embedded(&self, verb: &str) -> Result<()> {
        if self.is_embedded_class() {
            return Err(Error::invalid_state(format!(
                "`{verb}` cannot be used on embeddable `{}`",
                self.class
            )));
        }
        Ok(())
    }

    fn table_slot(&mut self, verb: &str) -> Result<&mut Table> {
        self.assert_not_embedded(verb)?;

        if self.table.is_some() {
            return Err(self.declared_twice(verb));
        }

        Ok(self.table.insert(Table::new()))
    }

    fn declared_twice(&self, verb: &str) -> Error {
        Error::invalid_state(format!(
            "`{verb}` has already been declared for `{}`",
            self.class
        ))
    }

    fn push(&mut self, item: Buildable) -> &mut Buildable {
        tracing::debug!(class = %self.class, item = %item.describe(), "queued declaration");

        let index = self.queued.len();
        self.queued.push(item);
        &mut self.queued[index]
    }

    fn push_field(&mut self, field: Field) -> &mut Field {
        match self.push(Buildable::Field(field)) {
            Buildable::Field(field) => field,
            _ => unreachable!(),
        }
    }

    fn push_relation(&mut self, relation: Relation) -> &mut Relation {
        match self.push(Buildable::Relation(relation)) {
            Buildable::Relation(relation) => relation,
            _ => unreachable!(),
        }
    }

    fn push_index(&mut self, index: Index) -> &mut Index {
        match self.push(Buildable::Index(index)) {
            Buildable::Index(index) => index,
            _ => unreachable!(),
        }
    }
}
