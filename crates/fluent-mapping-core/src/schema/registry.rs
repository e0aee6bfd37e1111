use super::Type;
use crate::{Error, Result};
use indexmap::IndexMap;

/// Resolves logical type tokens (`"string"`, `"datetimetz"`, ...) into
/// [`Type`]s.
///
/// Unknown tokens are an error; they are never accepted silently.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: IndexMap<String, Type>,
}

impl TypeRegistry {
    /// Creates a registry holding every built-in type.
    pub fn new() -> Self {
        let types = Type::BUILTIN
            .iter()
            .map(|ty| (ty.name().to_string(), ty.clone()))
            .collect();
        Self { types }
    }

    /// Registers an extension type under `name`. Registering a name twice is
    /// an error, as is shadowing a built-in type.
    pub fn register(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::invalid_argument("type name must not be empty"));
        }

        if self.types.contains_key(&name) {
            return Err(Error::invalid_argument(format!(
                "type `{name}` is already registered"
            )));
        }

        tracing::debug!(ty = %name, "registered custom column type");
        self.types.insert(name.clone(), Type::Custom(name));
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Resolves a token into its type.
    pub fn resolve(&self, name: &str) -> Result<Type> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_type(name))
    }

    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.types.values()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
