use crate::{Builder, Error, Result, Value};
use indexmap::IndexMap;
use std::{fmt, sync::Arc};

type MacroFn = dyn Fn(&mut Builder, &[Value]) -> Result<()>;

/// A verb registered on the builder at runtime.
#[derive(Clone)]
pub struct Macro {
    arity: Arity,
    f: Arc<MacroFn>,
}

/// Number of arguments a macro accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Any,
}

/// Registered macros by verb name.
#[derive(Clone, Default)]
pub struct Macros {
    macros: IndexMap<String, Macro>,
}

impl Macro {
    pub fn new(
        arity: Arity,
        f: impl Fn(&mut Builder, &[Value]) -> Result<()> + 'static,
    ) -> Self {
        Self {
            arity,
            f: Arc::new(f),
        }
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Runs the macro against `builder`, checking the argument count first.
    pub fn call(&self, name: &str, builder: &mut Builder, args: &[Value]) -> Result<()> {
        if !self.arity.accepts(args.len()) {
            return Err(Error::invalid_argument(format!(
                "macro `{name}` expects {} argument(s), got {}",
                self.arity,
                args.len()
            )));
        }

        (self.f)(builder, args)
    }
}

impl fmt::Debug for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Macro").field("arity", &self.arity).finish()
    }
}

impl Arity {
    pub fn accepts(self, len: usize) -> bool {
        match self {
            Self::Exact(n) => len == n,
            Self::AtLeast(n) => len >= n,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::Any => f.write_str("any number of"),
        }
    }
}

impl Macros {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`, replacing any macro previously registered under it.
    ///
    /// The name must be a plain identifier that does not shadow a built-in
    /// builder verb.
    pub fn register(&mut self, name: impl Into<String>, makro: Macro) -> Result<()> {
        let name = name.into();

        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };

        if !valid {
            return Err(Error::invalid_argument(format!(
                "`{name}` is not a valid macro name"
            )));
        }

        if crate::builder::is_builtin_verb(&name) {
            return Err(Error::invalid_argument(format!(
                "macro `{name}` would shadow a built-in builder verb"
            )));
        }

        tracing::debug!(name = %name, arity = %makro.arity, "registered macro");
        self.macros.insert(name, makro);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Macro> {
        self.macros.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.macros.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }
}

impl fmt::Debug for Macros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.macros.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity() {
        assert!(Arity::Exact(2).accepts(2));
        assert!(!Arity::Exact(2).accepts(1));
        assert!(Arity::AtLeast(1).accepts(3));
        assert!(!Arity::AtLeast(1).accepts(0));
        assert!(Arity::Any.accepts(0));
    }

    #[test]
    fn invalid_names() {
        let mut macros = Macros::new();

        for name in ["", "1up", "has space", "string", "belongs_to"] {
            let err = macros
                .register(name, Macro::new(Arity::Any, |_, _| Ok(())))
                .unwrap_err();
            assert!(err.is_invalid_argument(), "{name}: {err}");
        }

        assert!(macros.is_empty());
    }
}
