use super::Error;

/// Error when a verb dispatched by name is neither built in nor registered.
#[derive(Debug)]
pub(super) struct MethodNotFound {
    target: Box<str>,
    verb: Box<str>,
}

impl std::error::Error for MethodNotFound {}

impl core::fmt::Display for MethodNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "method not found: {} has no verb `{}`", self.target, self.verb)
    }
}

impl Error {
    /// Creates a method not found error. `target` names the receiver
    /// (`builder`, `field`, `relation`, ...) and `verb` the attempted verb.
    pub fn method_not_found(target: impl Into<String>, verb: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MethodNotFound(MethodNotFound {
            target: target.into().into(),
            verb: verb.into().into(),
        }))
    }

    /// Returns `true` if this error is a method not found error.
    pub fn is_method_not_found(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::MethodNotFound(_))
    }
}
