mod value;
use value::Value;

use indexmap::IndexMap;
use rowmap_core::{
    async_trait,
    driver::{Conditional, RowSet, Session, ValueRows},
    stmt::{self, Statement},
    Error, Result,
};
use rusqlite::Connection;
use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};
use url::Url;

/// A [`Session`] backed by a single SQLite connection.
///
/// Statements run on the caller's task; concurrent callers are serialized on
/// the connection.
#[derive(Debug)]
pub struct Sqlite {
    location: Location,
    connection: Mutex<Connection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Opens a database from a `sqlite:` URL: `sqlite::memory:` or
    /// `sqlite:/path/to/file`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_config(format!("invalid connection URL `{url_str}`: {err}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_config(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Opens a fresh in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver)?;
        Ok(Self::from_connection(Location::InMemory, connection))
    }

    /// Opens, or creates, the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection = Connection::open(&path).map_err(Error::driver)?;
        Ok(Self::from_connection(Location::File(path), connection))
    }

    fn from_connection(location: Location, connection: Connection) -> Self {
        tracing::debug!(location = ?location, "opened sqlite database");

        Self {
            location,
            connection: Mutex::new(connection),
        }
    }

    /// The URL this session was opened from.
    pub fn url(&self) -> String {
        match &self.location {
            Location::InMemory => "sqlite::memory:".to_string(),
            Location::File(path) => format!("sqlite:{}", path.display()),
        }
    }

    fn connection(&self) -> MutexGuard<'_, Connection> {
        self.connection.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `stmt` and buffers every returned row.
    fn query(&self, stmt: &Statement) -> Result<ValueRows> {
        let connection = self.connection();
        let mut prepared = connection.prepare_cached(stmt.sql()).map_err(Error::driver)?;

        let columns: Vec<String> = prepared
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let params: Vec<Value> = stmt.params().iter().cloned().map(Value::from).collect();

        if columns.is_empty() {
            let count = prepared
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver)?;

            tracing::trace!(sql = stmt.sql(), count, "statement executed");
            return Ok(ValueRows::empty(columns));
        }

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let mut buffered = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut values = Vec::with_capacity(columns.len());

            for index in 0..columns.len() {
                values.push(Value::from_sql(row, index)?.into_inner());
            }

            buffered.push(values);
        }

        Ok(ValueRows::new(columns, buffered))
    }
}

#[async_trait]
impl Session for Sqlite {
    async fn execute(&self, stmt: &Statement) -> Result<Box<dyn RowSet>> {
        Ok(Box::new(self.query(stmt)?))
    }

    /// Runs a write carrying a `RETURNING` clause; the write counts as applied
    /// when it returned a row.
    ///
    /// SQLite returns nothing for a write that matched no row. When the
    /// statement carries a [`Statement::current_row`] query it is run instead
    /// and its first row is reported; otherwise the row is empty.
    async fn execute_conditional(&self, stmt: &Statement) -> Result<Conditional> {
        if let Some(row) = first_row(self.query(stmt)?)? {
            return Ok(Conditional::new(true, row));
        }

        let row = match stmt.current_row_query() {
            Some(read) => first_row(self.query(read)?)?.unwrap_or_default(),
            None => IndexMap::new(),
        };

        tracing::trace!(sql = stmt.sql(), columns = row.len(), "conditional write not applied");
        Ok(Conditional::new(false, row))
    }
}

fn first_row(mut rows: ValueRows) -> Result<Option<IndexMap<String, stmt::Value>>> {
    let columns = rows.columns().to_vec();

    Ok(rows
        .next_row()?
        .map(|values| columns.into_iter().zip(values).collect()))
}
