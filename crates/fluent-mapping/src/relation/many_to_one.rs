use super::Relation;
use crate::{BuildContext, Result};
use fluent_mapping_core::schema::AssociationMapping;

pub(super) fn resolve(relation: &Relation, cx: &BuildContext<'_>) -> Result<AssociationMapping> {
    let mut mapping = relation.mapping(true);
    mapping
        .join_columns
        .push(relation.to_one_join_column(cx, false));
    Ok(mapping)
}
