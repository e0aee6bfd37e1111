use super::Relation;
use crate::{BuildContext, Result};
use fluent_mapping_core::schema::AssociationMapping;

/// An owning one-to-one holds a unique foreign key; the inverse side only
/// records `mapped_by`.
pub(super) fn resolve(relation: &Relation, cx: &BuildContext<'_>) -> Result<AssociationMapping> {
    if relation.mapped_by.is_some() {
        return Ok(relation.mapping(false));
    }

    let mut mapping = relation.mapping(true);
    mapping
        .join_columns
        .push(relation.to_one_join_column(cx, true));
    Ok(mapping)
}
