use super::Error;

/// Error when a builder verb is not allowed in the builder's current state.
///
/// This occurs when:
/// - `table`, `entity` or an identity shorthand is used while mapping an
///   embeddable class
/// - `table` or `entity` is declared a second time in one mapping session
#[derive(Debug)]
pub(super) struct InvalidState {
    message: Box<str>,
}

impl std::error::Error for InvalidState {}

impl core::fmt::Display for InvalidState {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid state: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidState(InvalidState {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid state error.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidState(_))
    }
}
