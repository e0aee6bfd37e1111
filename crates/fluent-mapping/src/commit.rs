use crate::{Build, BuildContext, Buildable, Entity, Relation, Result, Store, Table, Value};
use fluent_mapping_core::schema::{ClassKind, NamingStrategy};
use fluent_mapping_core::Error;
use indexmap::IndexMap;

/// What a builder hands to the committer: the structural slots and the
/// queue.
#[derive(Debug)]
pub struct Pending {
    pub class: String,
    pub kind: ClassKind,
    pub table: Option<Table>,
    pub entity: Option<Entity>,
    pub queued: Vec<Buildable>,
}

/// Drains pending declarations into a [`Store`].
///
/// Each queued item is finalized in queue order. A failure stops the commit
/// with the error as raised; items finalized before it stay in the store.
#[derive(Debug)]
pub struct Committer<'a> {
    store: &'a mut Store,

    naming: &'a dyn NamingStrategy,

    /// If set, prefix all table names with this string
    table_name_prefix: Option<&'a str>,

    /// Options added to each committed table that does not set them
    table_options: Option<&'a IndexMap<String, Value>>,

    /// When set, inverse sides are held back until [`Committer::finish`],
    /// after every class has been committed. Otherwise they are finalized at
    /// the end of their own class's commit.
    defer_inverse_sides: bool,

    deferred: Vec<(String, Relation)>,
}

impl<'a> Committer<'a> {
    pub fn new(store: &'a mut Store, naming: &'a dyn NamingStrategy) -> Self {
        Self {
            store,
            naming,
            table_name_prefix: None,
            table_options: None,
            defer_inverse_sides: false,
            deferred: vec![],
        }
    }

    pub fn table_name_prefix(mut self, prefix: Option<&'a str>) -> Self {
        self.table_name_prefix = prefix;
        self
    }

    pub fn table_options(mut self, options: &'a IndexMap<String, Value>) -> Self {
        self.table_options = Some(options);
        self
    }

    pub fn defer_inverse_sides(mut self) -> Self {
        self.defer_inverse_sides = true;
        self
    }

    /// Applies the table, then the entity settings, then every queued item.
    ///
    /// Entities without an explicit table get one named by the naming
    /// strategy. Inverse sides are finalized after the owning sides queued
    /// with them, so a class may declare both ends of a self-reference in
    /// any order.
    pub fn commit(&mut self, pending: Pending) -> Result<()> {
        match self.store.class(&pending.class) {
            None => {
                self.store.add_class(&pending.class, pending.kind)?;
            }
            Some(class) if class.kind != pending.kind => {
                return Err(Error::invalid_schema(format!(
                    "class `{}` is registered as {:?}, not {:?}",
                    pending.class, class.kind, pending.kind
                )));
            }
            Some(_) => {}
        }

        let mut cx = BuildContext::new(&mut *self.store, &pending.class, self.naming)
            .table_name_prefix(self.table_name_prefix);

        match &pending.table {
            Some(table) => table.build(&mut cx)?,
            None if pending.kind == ClassKind::Entity && cx.class()?.table.is_none() => {
                Table::new().build(&mut cx)?
            }
            None => {}
        }

        if let Some(options) = self.table_options {
            if let Some(table) = cx.class_mut()?.table.as_mut() {
                for (name, value) in options {
                    table
                        .options
                        .entry(name.clone())
                        .or_insert_with(|| value.clone());
                }
            }
        }

        if let Some(entity) = &pending.entity {
            entity.build(&mut cx)?;
        }

        let mut inverse_sides = vec![];

        for item in pending.queued {
            match item {
                Buildable::Relation(relation) if !relation.is_owning_side() => {
                    tracing::debug!(
                        class = %pending.class,
                        field = relation.field_name(),
                        "deferred inverse side"
                    );
                    inverse_sides.push(relation);
                }
                item => {
                    tracing::debug!(
                        class = %pending.class,
                        item = %item.describe(),
                        "finalizing declaration"
                    );
                    item.build(&mut cx)?;
                }
            }
        }

        if self.defer_inverse_sides {
            self.deferred.extend(
                inverse_sides
                    .into_iter()
                    .map(|relation| (pending.class.clone(), relation)),
            );
        } else {
            for relation in inverse_sides {
                relation.build(&mut cx)?;
            }
        }

        Ok(())
    }

    /// Finalizes the relations held back by [`Committer::defer_inverse_sides`].
    pub fn finish(&mut self) -> Result<()> {
        for (class, relation) in std::mem::take(&mut self.deferred) {
            tracing::debug!(
                class = %class,
                field = relation.field_name(),
                "finalizing deferred inverse side"
            );

            let mut cx = BuildContext::new(&mut *self.store, &class, self.naming)
                .table_name_prefix(self.table_name_prefix);
            relation.build(&mut cx)?;
        }

        Ok(())
    }
}
