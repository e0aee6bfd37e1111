use crate::{Arity, Builder, Committer, Config, Macro, Macros, Result, Store, Value};
use fluent_mapping_core::schema::{ClassKind, DefaultNamingStrategy, NamingStrategy, TypeRegistry};
use fluent_mapping_core::Error;
use std::{collections::HashSet, fmt, sync::Arc};

/// Declares the mapping of one class.
pub trait Mapper {
    /// Name of the mapped class.
    fn class(&self) -> &str;

    fn kind(&self) -> ClassKind {
        ClassKind::Entity
    }

    /// Declares the class's mapping on `builder`.
    fn map(&self, builder: &mut Builder) -> Result<()>;
}

/// Runs a set of mappers against a fresh store.
pub struct Driver {
    config: Config,

    naming: Arc<dyn NamingStrategy>,

    types: Arc<TypeRegistry>,

    /// Shared by every builder the driver creates
    macros: Macros,

    mappers: Vec<Box<dyn Mapper>>,
}

#[derive(Default)]
pub struct DriverBuilder {
    config: Config,

    naming: Option<Arc<dyn NamingStrategy>>,

    types: TypeRegistry,

    macros: Macros,

    mappers: Vec<Box<dyn Mapper>>,
}

impl Driver {
    pub fn builder() -> DriverBuilder {
        DriverBuilder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn naming(&self) -> &dyn NamingStrategy {
        &*self.naming
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn macros(&self) -> &Macros {
        &self.macros
    }

    /// Creates a builder carrying the driver's naming strategy, types and
    /// macros.
    pub fn builder_for(&self, class: impl Into<String>, kind: ClassKind) -> Builder {
        Builder::new(class, kind)
            .with_naming(self.naming.clone())
            .with_types(self.types.clone())
            .with_macros(self.macros.clone())
    }

    /// Maps every registered class and commits it into a new store.
    ///
    /// Embeddables are committed first, then mapped superclasses, then
    /// entities, each group in registration order. Inverse sides of
    /// associations are finalized last, once every owning side is in the
    /// store.
    pub fn load(&self) -> Result<Store> {
        let mut store = Store::new();

        let mut committer = Committer::new(&mut store, &*self.naming)
            .table_name_prefix(self.config.table_name_prefix.as_deref())
            .table_options(&self.config.table_options)
            .defer_inverse_sides();

        for kind in [
            ClassKind::Embeddable,
            ClassKind::MappedSuperclass,
            ClassKind::Entity,
        ] {
            for mapper in self.mappers.iter().filter(|mapper| mapper.kind() == kind) {
                let class = mapper.class();
                let mut builder = self.builder_for(class, kind);

                mapper
                    .map(&mut builder)
                    .and_then(|()| committer.commit(builder.into_pending()))
                    .map_err(|err| err.context(format!("mapping `{class}`")))?;
            }
        }

        committer.finish()?;

        tracing::info!(classes = store.len(), "loaded mapping metadata");
        Ok(store)
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("config", &self.config)
            .field("naming", &self.naming)
            .field("macros", &self.macros)
            .field(
                "mappers",
                &self.mappers.iter().map(|m| m.class()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl DriverBuilder {
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.config.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn naming_strategy(&mut self, naming: impl NamingStrategy + 'static) -> &mut Self {
        self.naming = Some(Arc::new(naming));
        self
    }

    pub fn types(&mut self, types: TypeRegistry) -> &mut Self {
        self.types = types;
        self
    }

    /// Registers a custom column type token.
    pub fn register_type(&mut self, name: &str) -> Result<&mut Self> {
        self.types.register(name)?;
        Ok(self)
    }

    pub fn register_macro(
        &mut self,
        name: impl Into<String>,
        arity: Arity,
        f: impl Fn(&mut Builder, &[Value]) -> Result<()> + 'static,
    ) -> Result<&mut Self> {
        self.macros.register(name, Macro::new(arity, f))?;
        Ok(self)
    }

    pub fn register(&mut self, mapper: impl Mapper + 'static) -> &mut Self {
        self.mappers.push(Box::new(mapper));
        self
    }

    pub fn build(&mut self) -> Result<Driver> {
        let mut classes = HashSet::new();

        for mapper in &self.mappers {
            if !classes.insert(mapper.class()) {
                return Err(Error::invalid_schema(format!(
                    "class `{}` has more than one mapper",
                    mapper.class()
                )));
            }
        }

        let naming: Arc<dyn NamingStrategy> = match &self.naming {
            Some(naming) => naming.clone(),
            None => Arc::new(DefaultNamingStrategy),
        };

        Ok(Driver {
            config: self.config.clone(),
            naming,
            types: Arc::new(self.types.clone()),
            macros: self.macros.clone(),
            mappers: std::mem::take(&mut self.mappers),
        })
    }
}
