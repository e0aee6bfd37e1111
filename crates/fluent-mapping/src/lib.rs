//! Fluent, chainable declaration of object-relational mapping metadata.
//!
//! A [`Builder`] collects declarations for one class. Each verb creates a
//! descriptor, queues it and hands it back for further chaining:
//!
//! ```
//! use fluent_mapping::{Builder, ClassKind};
//!
//! let mut builder = Builder::new("Post", ClassKind::Entity);
//! builder.increments("id").unwrap();
//! builder.string("title").length(120).unique();
//! builder.belongs_to("author", "User").not_nullable();
//!
//! assert_eq!(builder.queued().len(), 3);
//! ```
//!
//! Nothing reaches the metadata [`Store`] until the queue is committed,
//! either directly through [`Builder::commit`] or by a [`Driver`] running a
//! set of [`Mapper`]s.

mod args;

mod build;
pub use build::{Build, BuildContext, Buildable};

pub mod builder;
pub use builder::Builder;

mod commit;
pub use commit::{Committer, Pending};

mod config;
pub use config::Config;

mod configure;
pub use configure::Configure;

mod driver;
pub use driver::{Driver, DriverBuilder, Mapper};

mod embedded;
pub use embedded::{ColumnPrefix, Embedded};

mod entity;
pub use entity::{Entity, Inheritance};

mod events;
pub use events::LifecycleEvents;

pub mod field;
pub use field::{Field, GeneratedValue};

mod index;
pub use index::{Index, Primary};

mod macros;
pub use macros::{Arity, Macro, Macros};

pub mod relation;
pub use relation::Relation;

mod table;
pub use table::Table;

pub use fluent_mapping_core::schema::{
    AssociationKind, Cascade, ClassKind, DefaultNamingStrategy, Fetch, GeneratorStrategy,
    InheritanceType, LifecycleEvent, NamingStrategy, OnDelete, Type, TypeRegistry,
};
pub use fluent_mapping_core::{schema, Error, Result, Store, Value};
