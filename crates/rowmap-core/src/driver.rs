mod conditional;
pub use conditional::Conditional;

mod rows;
pub use rows::{RowSet, ValueRows};

use crate::{async_trait, stmt::Statement, Result};

use std::fmt::Debug;

/// Executes statements against a database.
///
/// Transport, pooling, authentication and retries all live behind this
/// trait. Implementations must be safe to share between tasks.
#[async_trait]
pub trait Session: Debug + Send + Sync + 'static {
    /// Executes a statement and returns its result rows.
    async fn execute(&self, stmt: &Statement) -> Result<Box<dyn RowSet>>;

    /// Executes a conditional (compare-and-set) write.
    ///
    /// The returned row reflects the state after the attempt, whether or not
    /// the write applied.
    async fn execute_conditional(&self, stmt: &Statement) -> Result<Conditional>;

    /// Executes a statement, discarding any rows it returns.
    async fn exec(&self, stmt: &Statement) -> Result<()> {
        self.execute(stmt).await.map(drop)
    }
}
