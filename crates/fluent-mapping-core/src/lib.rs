mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Store;

mod value;
pub use value::Value;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
