use super::Error;

/// Error when an inverse-only association cannot find its owning side.
#[derive(Debug)]
pub(super) struct MissingInverseSide {
    entity: Box<str>,
    field: Box<str>,
    target: Box<str>,
}

impl std::error::Error for MissingInverseSide {}

impl core::fmt::Display for MissingInverseSide {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing inverse side: `{}::{}` needs `mapped_by` naming a many-to-one field on `{}`",
            self.entity, self.field, self.target
        )
    }
}

impl Error {
    /// Creates a missing inverse side error.
    pub fn missing_inverse_side(
        entity: impl Into<String>,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MissingInverseSide(MissingInverseSide {
            entity: entity.into().into(),
            field: field.into().into(),
            target: target.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing inverse side error.
    pub fn is_missing_inverse_side(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::MissingInverseSide(_))
    }
}
