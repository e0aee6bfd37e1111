use super::Relation;
use crate::{BuildContext, Error, Result};
use fluent_mapping_core::schema::{AssociationKind, AssociationMapping};

/// A one-to-many is always the inverse of a many-to-one on the target.
///
/// Without an explicit `mapped_by`, the owning side is derived from the
/// target's metadata: it must already be in the store and point back at the
/// declaring class through exactly one many-to-one.
pub(super) fn resolve(relation: &Relation, cx: &BuildContext<'_>) -> Result<AssociationMapping> {
    let mut mapping = relation.mapping(false);

    if mapping.mapped_by.is_none() {
        let mapped_by = derive_mapped_by(relation, cx).ok_or_else(|| {
            Error::missing_inverse_side(cx.class_name(), &relation.field, &relation.target)
        })?;

        tracing::trace!(
            class = cx.class_name(),
            field = %relation.field,
            mapped_by = %mapped_by,
            "derived inverse side"
        );

        mapping.mapped_by = Some(mapped_by);
    }

    Ok(mapping)
}

fn derive_mapped_by(relation: &Relation, cx: &BuildContext<'_>) -> Option<String> {
    let target = cx.store().class(&relation.target)?;

    let mut candidates = target.associations.values().filter(|association| {
        association.kind == AssociationKind::ManyToOne
            && association.target_entity == cx.class_name()
            && association.field_name != relation.field
    });

    match (candidates.next(), candidates.next()) {
        (Some(owning), None) => Some(owning.field_name.clone()),
        _ => None,
    }
}
