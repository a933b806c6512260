//! Maps tabular query results onto plain Rust structs.
//!
//! ```no_run
//! # async fn run() -> rowmap::Result<()> {
//! #[derive(Debug, rowmap::Record)]
//! struct User {
//!     id: i64,
//!     user_name: String,
//! }
//!
//! let client = rowmap::Client::connect("sqlite::memory:").await?;
//!
//! let mut users: Vec<User> = vec![];
//! client.query(&mut users, "SELECT id, user_name FROM users").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub use client::Client;

pub mod config;
pub use config::{Config, EnvConfig};

pub mod metrics;
pub use metrics::Metrics;

pub use rowmap_core::{
    driver::{self, Conditional, RowSet, Session},
    map::{self, Destination, IntoDestination, NoRowsPolicy},
    schema::{self, Record},
    stmt::{self, Statement, Value},
    async_trait, Error, Result,
};

pub use rowmap_macros::Record;

#[cfg(feature = "sqlite")]
pub use rowmap_driver_sqlite::Sqlite;

#[doc(hidden)]
pub mod codegen_support {
    pub use rowmap_core::{
        map::{commit, Destination, Element, IntoDestination, Scan, Shape},
        schema::{FieldDescriptor, Primitive, Record, RecordSchema},
    };
}
