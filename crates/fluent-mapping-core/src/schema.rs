//! The metadata store the fluent builder finalizes declarations into.

mod association;
pub use association::{
    AssociationKind, AssociationMapping, Cascade, Fetch, JoinColumn, JoinTable, OnDelete,
    OrderBy,
};

mod class;
pub use class::{ClassKind, ClassMetadata};

mod embedded;
pub use embedded::EmbeddedMapping;

mod field;
pub use field::FieldMapping;

mod generator;
pub use generator::{GeneratorStrategy, IdGenerator, SequenceGenerator};

mod inheritance;
pub use inheritance::{DiscriminatorColumn, Inheritance, InheritanceType};

mod lifecycle;
pub use lifecycle::LifecycleEvent;

mod name;
pub use name::Name;

mod naming;
pub use naming::{DefaultNamingStrategy, NamingStrategy};

mod registry;
pub use registry::TypeRegistry;

mod store;
pub use store::Store;

mod table;
pub use table::{TableIndex, TableMetadata};

mod ty;
pub use ty::Type;
