pub mod driver;
pub use driver::Session;

mod error;
pub use error::Error;

pub mod map;

pub mod schema;
pub use schema::{Record, RecordSchema};

pub mod stmt;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
