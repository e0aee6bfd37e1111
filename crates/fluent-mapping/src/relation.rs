//! Association declarations.
//!
//! The four association kinds share one descriptor, [`Relation`]. The kind
//! decides which configuration is meaningful and how the association is
//! resolved when it is finalized; each kind's resolution lives in its own
//! module.

mod many_to_many;
mod many_to_one;
mod one_to_many;
mod one_to_one;

use crate::args::Args;
use crate::{Build, BuildContext, Configure, Error, Result, Value};
use fluent_mapping_core::schema::{
    AssociationKind, AssociationMapping, Cascade, Fetch, JoinColumn, NamingStrategy, OnDelete,
    OrderBy,
};
use std::sync::Arc;

/// A pending association declaration.
///
/// Declaration never fails. Contradictory configuration is reported when the
/// relation is finalized, at which point unset join columns and join tables
/// are derived from the naming strategy.
#[derive(Debug, Clone)]
pub struct Relation {
    kind: AssociationKind,

    naming: Arc<dyn NamingStrategy>,

    /// Property on the declaring class
    field: String,

    /// Class the association points at
    target: String,

    cascade: Vec<Cascade>,

    fetch: Fetch,

    /// Nullability of the owning side's foreign key
    nullable: bool,

    orphan_removal: bool,

    mapped_by: Option<String>,

    inversed_by: Option<String>,

    join_column: Option<String>,

    references: Option<String>,

    on_delete: Option<OnDelete>,

    join_table: Option<String>,

    inverse_join_column: Option<String>,

    inverse_references: Option<String>,

    order_by: Vec<OrderBy>,

    index_by: Option<String>,

    primary: bool,
}

impl Relation {
    pub fn new(
        kind: AssociationKind,
        naming: Arc<dyn NamingStrategy>,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            naming,
            field: field.into(),
            target: target.into(),
            cascade: vec![],
            fetch: Fetch::default(),
            nullable: true,
            orphan_removal: false,
            mapped_by: None,
            inversed_by: None,
            join_column: None,
            references: None,
            on_delete: None,
            join_table: None,
            inverse_join_column: None,
            inverse_references: None,
            order_by: vec![],
            index_by: None,
            primary: false,
        }
    }

    pub fn kind(&self) -> AssociationKind {
        self.kind
    }

    pub fn field_name(&self) -> &str {
        &self.field
    }

    pub fn target_entity(&self) -> &str {
        &self.target
    }

    pub fn mapped_by_field(&self) -> Option<&str> {
        self.mapped_by.as_deref()
    }

    /// Returns `true` if the declaring side will own the association.
    pub fn is_owning_side(&self) -> bool {
        match self.kind {
            AssociationKind::OneToMany => false,
            AssociationKind::ManyToOne => true,
            _ => self.mapped_by.is_none(),
        }
    }

    /// Adds cascaded operations.
    pub fn cascade(&mut self, operations: impl IntoIterator<Item = Cascade>) -> &mut Self {
        for operation in operations {
            if !self.cascade.contains(&operation) {
                self.cascade.push(operation);
            }
        }
        self
    }

    pub fn cascade_all(&mut self) -> &mut Self {
        self.cascade(Cascade::ALL)
    }

    pub fn cascade_persist(&mut self) -> &mut Self {
        self.cascade([Cascade::Persist])
    }

    pub fn cascade_remove(&mut self) -> &mut Self {
        self.cascade([Cascade::Remove])
    }

    pub fn fetch(&mut self, fetch: Fetch) -> &mut Self {
        self.fetch = fetch;
        self
    }

    pub fn fetch_eager(&mut self) -> &mut Self {
        self.fetch(Fetch::Eager)
    }

    pub fn fetch_lazy(&mut self) -> &mut Self {
        self.fetch(Fetch::Lazy)
    }

    pub fn fetch_extra_lazy(&mut self) -> &mut Self {
        self.fetch(Fetch::ExtraLazy)
    }

    pub fn nullable(&mut self) -> &mut Self {
        self.nullable = true;
        self
    }

    pub fn not_nullable(&mut self) -> &mut Self {
        self.nullable = false;
        self
    }

    pub fn orphan_removal(&mut self) -> &mut Self {
        self.orphan_removal = true;
        self
    }

    /// Makes this the inverse side of `field` on the target.
    pub fn mapped_by(&mut self, field: impl Into<String>) -> &mut Self {
        self.mapped_by = Some(field.into());
        self
    }

    /// Names the inverse side's field on the target.
    pub fn inversed_by(&mut self, field: impl Into<String>) -> &mut Self {
        self.inversed_by = Some(field.into());
        self
    }

    pub fn join_column(&mut self, column: impl Into<String>) -> &mut Self {
        self.join_column = Some(column.into());
        self
    }

    /// Sets the column the foreign key references.
    pub fn references(&mut self, column: impl Into<String>) -> &mut Self {
        self.references = Some(column.into());
        self
    }

    pub fn on_delete(&mut self, on_delete: OnDelete) -> &mut Self {
        self.on_delete = Some(on_delete);
        self
    }

    pub fn join_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.join_table = Some(table.into());
        self
    }

    /// Join-table column referencing the target.
    pub fn inverse_join_column(&mut self, column: impl Into<String>) -> &mut Self {
        self.inverse_join_column = Some(column.into());
        self
    }

    pub fn inverse_references(&mut self, column: impl Into<String>) -> &mut Self {
        self.inverse_references = Some(column.into());
        self
    }

    pub fn order_by(&mut self, field: impl Into<String>) -> &mut Self {
        self.order_by.push(OrderBy {
            field: field.into(),
            descending: false,
        });
        self
    }

    pub fn order_by_desc(&mut self, field: impl Into<String>) -> &mut Self {
        self.order_by.push(OrderBy {
            field: field.into(),
            descending: true,
        });
        self
    }

    pub fn index_by(&mut self, field: impl Into<String>) -> &mut Self {
        self.index_by = Some(field.into());
        self
    }

    /// Makes the association part of the declaring class's identifier.
    pub fn primary(&mut self) -> &mut Self {
        self.primary = true;
        self
    }

    /// Invokes a configuration verb by name.
    pub fn call(&mut self, verb: &str, args: &[Value]) -> Result<&mut Self> {
        let args = Args::new(verb, args);

        match verb {
            "cascade" => {
                args.expect_len(1, usize::MAX)?;
                let mut operations = vec![];
                for name in args.strings(0)? {
                    match name.as_str() {
                        "all" => operations.extend(Cascade::ALL),
                        _ => operations.push(Cascade::from_name(&name).ok_or_else(|| {
                            Error::invalid_argument(format!("unknown cascade operation `{name}`"))
                        })?),
                    }
                }
                self.cascade(operations);
            }
            "cascade_all" => {
                args.expect_len(0, 0)?;
                self.cascade_all();
            }
            "fetch" => {
                args.expect_len(1, 1)?;
                let name = args.str(0)?;
                let fetch = Fetch::from_name(name).ok_or_else(|| {
                    Error::invalid_argument(format!("unknown fetch mode `{name}`"))
                })?;
                self.fetch(fetch);
            }
            "nullable" => {
                args.expect_len(0, 1)?;
                self.nullable = args.flag(0)?;
            }
            "not_nullable" => {
                args.expect_len(0, 0)?;
                self.not_nullable();
            }
            "orphan_removal" => {
                args.expect_len(0, 1)?;
                self.orphan_removal = args.flag(0)?;
            }
            "mapped_by" => {
                args.expect_len(1, 1)?;
                self.mapped_by(args.str(0)?);
            }
            "inversed_by" => {
                args.expect_len(1, 1)?;
                self.inversed_by(args.str(0)?);
            }
            "join_column" => {
                args.expect_len(1, 2)?;
                self.join_column(args.str(0)?);
                if let Some(references) = args.opt_str(1)? {
                    self.references(references);
                }
            }
            "references" => {
                args.expect_len(1, 1)?;
                self.references(args.str(0)?);
            }
            "on_delete" => {
                args.expect_len(1, 1)?;
                let name = args.str(0)?;
                let on_delete = OnDelete::from_name(name).ok_or_else(|| {
                    Error::invalid_argument(format!("unknown on-delete action `{name}`"))
                })?;
                self.on_delete(on_delete);
            }
            "join_table" => {
                args.expect_len(1, 1)?;
                self.join_table(args.str(0)?);
            }
            "inverse_join_column" => {
                args.expect_len(1, 2)?;
                self.inverse_join_column(args.str(0)?);
                if let Some(references) = args.opt_str(1)? {
                    self.inverse_references(references);
                }
            }
            "inverse_references" => {
                args.expect_len(1, 1)?;
                self.inverse_references(args.str(0)?);
            }
            "order_by" => {
                args.expect_len(1, 2)?;
                let field = args.str(0)?;
                match args.opt_str(1)? {
                    None | Some("asc") => self.order_by(field),
                    Some("desc") => self.order_by_desc(field),
                    Some(other) => {
                        return Err(Error::invalid_argument(format!(
                            "unknown order direction `{other}`"
                        )))
                    }
                };
            }
            "index_by" => {
                args.expect_len(1, 1)?;
                self.index_by(args.str(0)?);
            }
            "primary" => {
                args.expect_len(0, 0)?;
                self.primary();
            }
            _ => return Err(Error::method_not_found("relation", verb)),
        }

        Ok(self)
    }

    /// Resolves the store representation of this relation.
    pub fn resolve(&self, cx: &BuildContext<'_>) -> Result<AssociationMapping> {
        self.verify(cx.class_name())?;

        let mapping = match self.kind {
            AssociationKind::OneToOne => one_to_one::resolve(self, cx)?,
            AssociationKind::ManyToOne => many_to_one::resolve(self, cx)?,
            AssociationKind::OneToMany => one_to_many::resolve(self, cx)?,
            AssociationKind::ManyToMany => many_to_many::resolve(self, cx)?,
        };

        self.verify_other_side(cx, &mapping)?;
        Ok(mapping)
    }

    /// Checks the resolved side against the other side of the association,
    /// when the target class is already in the store.
    ///
    /// An inverse side must name an owning association on the target that
    /// points back at the declaring class. An owning side must not meet
    /// another owning side claiming the same association.
    fn verify_other_side(
        &self,
        cx: &BuildContext<'_>,
        mapping: &AssociationMapping,
    ) -> Result<()> {
        let class = cx.class_name();
        let Some(target) = cx.store().class(&self.target) else {
            return Ok(());
        };

        if let Some(mapped_by) = &mapping.mapped_by {
            let Some(owning) = target.association(mapped_by) else {
                return Err(self.invalid(
                    class,
                    format!(
                        "`mapped_by` names `{}::{mapped_by}`, which is not an association",
                        self.target
                    ),
                ));
            };

            if !owning.owning_side
                || owning.kind != self.kind.inverse()
                || owning.target_entity != class
            {
                return Err(self.invalid(
                    class,
                    format!(
                        "`{}::{mapped_by}` is not an owning {} to `{class}`",
                        self.target,
                        self.kind.inverse()
                    ),
                ));
            }

            if let Some(inversed_by) = owning.inversed_by.as_deref() {
                if inversed_by != self.field {
                    return Err(self.invalid(
                        class,
                        format!("`{}::{mapped_by}` is inversed by `{inversed_by}`", self.target),
                    ));
                }
            }

            return Ok(());
        }

        if let Some(inversed_by) = &mapping.inversed_by {
            if let Some(inverse) = target.association(inversed_by) {
                if inverse.owning_side
                    || inverse.mapped_by.as_deref() != Some(self.field.as_str())
                {
                    return Err(self.invalid(
                        class,
                        format!(
                            "`{}::{inversed_by}` is not mapped by `{}`",
                            self.target, self.field
                        ),
                    ));
                }
            }
        }

        let claimed = target.associations.values().find(|other| {
            other.owning_side
                && other.target_entity == class
                && other.inversed_by.as_deref() == Some(self.field.as_str())
        });

        if let Some(other) = claimed {
            return Err(self.invalid(
                class,
                format!(
                    "`{}::{}` already owns this association; declare `mapped_by`",
                    self.target, other.field_name
                ),
            ));
        }

        Ok(())
    }

    /// Rejects configuration that contradicts itself or the relation kind.
    fn verify(&self, class: &str) -> Result<()> {
        let has_join_columns =
            self.join_column.is_some() || self.references.is_some() || self.on_delete.is_some();
        let has_join_table = self.join_table.is_some()
            || self.inverse_join_column.is_some()
            || self.inverse_references.is_some();

        if self.mapped_by.is_some() {
            if self.inversed_by.is_some() {
                return Err(self.invalid(class, "`mapped_by` and `inversed_by` are exclusive"));
            }

            if has_join_columns || has_join_table {
                return Err(self.invalid(
                    class,
                    "an inverse side declared with `mapped_by` cannot configure join columns",
                ));
            }
        }

        match self.kind {
            AssociationKind::ManyToOne if self.mapped_by.is_some() => {
                return Err(self.invalid(class, "a many-to-one is always the owning side"));
            }
            AssociationKind::OneToMany if has_join_columns => {
                return Err(self.invalid(class, "a one-to-many cannot declare join columns"));
            }
            _ => {}
        }

        if has_join_table && self.kind != AssociationKind::ManyToMany {
            return Err(self.invalid(class, "only a many-to-many can declare a join table"));
        }

        if self.orphan_removal
            && matches!(
                self.kind,
                AssociationKind::ManyToOne | AssociationKind::ManyToMany
            )
        {
            return Err(self.invalid(
                class,
                format!("orphan removal is not supported on a {}", self.kind),
            ));
        }

        if self.kind.is_to_one() && (!self.order_by.is_empty() || self.index_by.is_some()) {
            return Err(self.invalid(class, "`order_by` and `index_by` require a collection"));
        }

        if self.primary && (self.kind.is_to_many() || !self.is_owning_side()) {
            return Err(self.invalid(
                class,
                "only an owning to-one side can be part of the identifier",
            ));
        }

        Ok(())
    }

    fn invalid(&self, class: &str, message: impl Into<String>) -> Error {
        Error::invalid_relation(class, &self.field, message)
    }

    /// Mapping fields shared by every kind.
    fn mapping(&self, owning_side: bool) -> AssociationMapping {
        AssociationMapping {
            field_name: self.field.clone(),
            target_entity: self.target.clone(),
            kind: self.kind,
            owning_side,
            mapped_by: self.mapped_by.clone(),
            inversed_by: self.inversed_by.clone(),
            join_columns: vec![],
            join_table: None,
            cascade: self.cascade.clone(),
            fetch: self.fetch,
            orphan_removal: self.orphan_removal,
            order_by: self.order_by.clone(),
            index_by: self.index_by.clone(),
            id: self.primary,
        }
    }

    /// The identifier column of `class` if the store already knows it.
    fn identifier_column(&self, cx: &BuildContext<'_>, class: &str) -> String {
        cx.store()
            .class(class)
            .and_then(|class| class.single_identifier_column())
            .map(str::to_string)
            .unwrap_or_else(|| self.naming.reference_column_name())
    }

    /// Foreign key of a to-one owning side.
    fn to_one_join_column(&self, cx: &BuildContext<'_>, unique: bool) -> JoinColumn {
        let name = match &self.join_column {
            Some(name) => name.clone(),
            None => self.naming.join_column_name(&self.field),
        };

        let referenced_column_name = match &self.references {
            Some(column) => column.clone(),
            None => self.identifier_column(cx, &self.target),
        };

        tracing::trace!(
            class = cx.class_name(),
            field = %self.field,
            column = %name,
            references = %referenced_column_name,
            "resolved join column"
        );

        JoinColumn {
            name,
            referenced_column_name,
            nullable: self.nullable && !self.primary,
            unique,
            on_delete: self.on_delete,
        }
    }
}

impl Build for Relation {
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()> {
        let mapping = self.resolve(cx)?;
        cx.class_mut()?.map_association(mapping)
    }
}

impl Configure for Relation {}
