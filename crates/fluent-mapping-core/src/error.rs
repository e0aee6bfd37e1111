mod adhoc;
mod invalid_argument;
mod invalid_relation;
mod invalid_schema;
mod invalid_state;
mod method_not_found;
mod missing_inverse_side;
mod unknown_type;

use adhoc::AdhocError;
use invalid_argument::InvalidArgument;
use invalid_relation::InvalidRelation;
use invalid_schema::InvalidSchema;
use invalid_state::InvalidState;
use method_not_found::MethodNotFound;
use missing_inverse_side::MissingInverseSide;
use std::sync::Arc;
use unknown_type::UnknownType;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while declaring or finalizing a mapping.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        if let Some(inner) = err.inner.as_mut().and_then(Arc::get_mut) {
            if inner.cause.is_none() {
                inner.cause = Some(self);
                return err;
            }
        }

        // A shared consequent, or one with its own cause, is kept whole.
        Error {
            inner: Some(Arc::new(ErrorInner {
                kind: ErrorKind::Context(err),
                cause: Some(self),
            })),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Kind predicates look through added context at the root cause.
    fn root_kind(&self) -> &ErrorKind {
        self.root().kind()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Context(Error),
    InvalidArgument(InvalidArgument),
    InvalidRelation(InvalidRelation),
    InvalidSchema(InvalidSchema),
    InvalidState(InvalidState),
    MethodNotFound(MethodNotFound),
    MissingInverseSide(MissingInverseSide),
    UnknownType(UnknownType),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Context(err) => core::fmt::Display::fmt(err, f),
            InvalidArgument(err) => core::fmt::Display::fmt(err, f),
            InvalidRelation(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            InvalidState(err) => core::fmt::Display::fmt(err, f),
            MethodNotFound(err) => core::fmt::Display::fmt(err, f),
            MissingInverseSide(err) => core::fmt::Display::fmt(err, f),
            UnknownType(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown mapping error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn shared_and_chained_consequents_are_kept_whole() {
        let shared = Error::from_args(format_args!("loading blog"));
        let _clone = shared.clone();

        let err = Error::invalid_schema("duplicate class `Post`").context(shared);
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "loading blog: invalid schema: duplicate class `Post`"
        );

        let chained = Error::from_args(format_args!("inner"))
            .context(Error::from_args(format_args!("outer")));
        let err = Error::unknown_type("money").context(chained);
        assert!(err.is_unknown_type());
        assert_eq!(err.to_string(), "outer: inner: unknown column type `money`");
    }

    #[test]
    fn predicates_see_through_context() {
        let err = Error::missing_inverse_side("User", "posts", "Post").context("mapping `User`");
        assert!(err.is_missing_inverse_side());
        assert_eq!(
            err.to_string(),
            "mapping `User`: missing inverse side: `User::posts` needs `mapped_by` naming a \
             many-to-one field on `Post`"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn invalid_state_error() {
        let err = Error::invalid_state("embeddable `Address` cannot declare a table");
        assert!(err.is_invalid_state());
        assert!(!err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "invalid state: embeddable `Address` cannot declare a table"
        );
    }

    #[test]
    fn method_not_found_error() {
        let err = Error::method_not_found("builder", "bar");
        assert!(err.is_method_not_found());
        assert_eq!(err.to_string(), "method not found: builder has no verb `bar`");
    }

    #[test]
    fn invalid_relation_error() {
        let err = Error::invalid_relation("Post", "tags", "join table conflicts with `mapped_by`");
        assert!(err.is_invalid_relation());
        assert_eq!(
            err.to_string(),
            "invalid relation `Post::tags`: join table conflicts with `mapped_by`"
        );
    }

    #[test]
    fn unknown_type_error() {
        let err = Error::unknown_type("money");
        assert!(err.is_unknown_type());
        assert_eq!(err.to_string(), "unknown column type `money`");
    }

    #[test]
    fn invalid_schema_error() {
        let err = Error::invalid_schema("duplicate field mapping `Post::title`");
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "invalid schema: duplicate field mapping `Post::title`"
        );
    }
}
