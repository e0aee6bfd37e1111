use super::{ClassKind, ClassMetadata};
use crate::{Error, Result};
use indexmap::IndexMap;

/// Process-local, single-writer store of class metadata, keyed by class
/// name in registration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Store {
    classes: IndexMap<String, ClassMetadata>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new, empty class.
    pub fn add_class(&mut self, name: impl Into<String>, kind: ClassKind) -> Result<&mut ClassMetadata> {
        let name = name.into();

        if self.classes.contains_key(&name) {
            return Err(Error::invalid_schema(format!(
                "class `{name}` is already registered"
            )));
        }

        let class = ClassMetadata::new(name.clone(), kind);
        Ok(self.classes.entry(name).or_insert(class))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn class(&self, name: &str) -> Option<&ClassMetadata> {
        self.classes.get(name)
    }

    pub fn class_mut(&mut self, name: &str) -> Option<&mut ClassMetadata> {
        self.classes.get_mut(name)
    }

    /// Like [`Store::class`], but a missing class is an error.
    pub fn expect_class(&self, name: &str) -> Result<&ClassMetadata> {
        self.class(name)
            .ok_or_else(|| Error::invalid_schema(format!("class `{name}` is not registered")))
    }

    /// Like [`Store::class_mut`], but a missing class is an error.
    pub fn expect_class_mut(&mut self, name: &str) -> Result<&mut ClassMetadata> {
        self.classes
            .get_mut(name)
            .ok_or_else(|| Error::invalid_schema(format!("class `{name}` is not registered")))
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassMetadata> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
