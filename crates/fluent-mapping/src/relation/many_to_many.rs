use super::Relation;
use crate::{BuildContext, Result};
use fluent_mapping_core::schema::{AssociationMapping, JoinColumn, JoinTable};

/// The owning side of a many-to-many holds a join table with one foreign
/// key per side.
pub(super) fn resolve(relation: &Relation, cx: &BuildContext<'_>) -> Result<AssociationMapping> {
    if relation.mapped_by.is_some() {
        return Ok(relation.mapping(false));
    }

    let class = cx.class_name();
    let naming = &relation.naming;

    let name = match &relation.join_table {
        Some(name) => cx.table_name(name),
        None => cx.table_name(&naming.join_table_name(class, &relation.target, &relation.field)),
    };

    let referenced = match &relation.references {
        Some(column) => column.clone(),
        None => relation.identifier_column(cx, class),
    };

    let inverse_referenced = match &relation.inverse_references {
        Some(column) => column.clone(),
        None => relation.identifier_column(cx, &relation.target),
    };

    let join_column = match &relation.join_column {
        Some(column) => column.clone(),
        None => naming.join_key_column_name(class, Some(&referenced)),
    };

    let inverse_join_column = match &relation.inverse_join_column {
        Some(column) => column.clone(),
        None => naming.join_key_column_name(&relation.target, Some(&inverse_referenced)),
    };

    if join_column == inverse_join_column {
        return Err(relation.invalid(
            class,
            format!(
                "join table `{name}` derives `{join_column}` for both sides; \
                 set `join_column` or `inverse_join_column`"
            ),
        ));
    }

    tracing::trace!(
        class,
        field = %relation.field,
        join_table = %name,
        "resolved join table"
    );

    let mut mapping = relation.mapping(true);
    mapping.join_table = Some(JoinTable {
        name,
        join_columns: vec![JoinColumn {
            name: join_column,
            referenced_column_name: referenced,
            nullable: false,
            unique: false,
            on_delete: relation.on_delete,
        }],
        inverse_join_columns: vec![JoinColumn {
            name: inverse_join_column,
            referenced_column_name: inverse_referenced,
            nullable: false,
            unique: false,
            on_delete: relation.on_delete,
        }],
    });
    Ok(mapping)
}
