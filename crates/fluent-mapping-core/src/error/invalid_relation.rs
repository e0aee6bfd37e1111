use super::Error;

/// Error when an association's configuration is contradictory.
///
/// Reported when the association is finalized, never when it is declared.
#[derive(Debug)]
pub(super) struct InvalidRelation {
    entity: Box<str>,
    field: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidRelation {}

impl core::fmt::Display for InvalidRelation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid relation `{}::{}`: {}",
            self.entity, self.field, self.message
        )
    }
}

impl Error {
    /// Creates an invalid relation configuration error.
    pub fn invalid_relation(
        entity: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidRelation(InvalidRelation {
            entity: entity.into().into(),
            field: field.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid relation configuration error.
    pub fn is_invalid_relation(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidRelation(_))
    }
}
