use super::{Destination, Element, IntoDestination, RowBinder, Sequence, Shape};
use crate::{
    driver::{RowSet, Session},
    stmt::Statement,
    Error, Result,
};

/// What to do when a single-record destination receives no rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoRowsPolicy {
    /// Leave the destination unmodified and succeed
    #[default]
    Ignore,

    /// Fail with a `NoRows` error
    Error,
}

impl std::str::FromStr for NoRowsPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "error" => Ok(Self::Error),
            other => Err(Error::invalid_config(format!(
                "unknown no-rows policy `{other}`; expected `ignore` or `error`"
            ))),
        }
    }
}

/// Maps the rows of a query onto a record or a sequence.
#[derive(Debug, Clone, Default)]
pub struct ResultMapper {
    no_rows: NoRowsPolicy,
}

impl ResultMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_no_rows(mut self, policy: NoRowsPolicy) -> Self {
        self.no_rows = policy;
        self
    }

    pub fn no_rows(&self) -> NoRowsPolicy {
        self.no_rows
    }

    /// Executes `stmt` and maps its rows into `destination`.
    ///
    /// Shared and scalar destinations are rejected before the statement runs.
    pub async fn map<D>(
        &self,
        session: &dyn Session,
        destination: &mut D,
        stmt: &Statement,
    ) -> Result<()>
    where
        D: IntoDestination + ?Sized,
    {
        let destination = destination.as_destination();
        check_writable(&destination)?;

        tracing::debug!(sql = stmt.sql(), params = stmt.params().len(), "executing query");

        let mut rows = session.execute(stmt).await?;
        self.map_rows(destination, &mut *rows)
    }

    /// Maps an already executed result into `destination`.
    pub fn map_rows(&self, destination: Destination<'_>, rows: &mut dyn RowSet) -> Result<()> {
        check_writable(&destination)?;

        match destination {
            Destination::Record(record) => self.map_record(record, rows),
            Destination::Sequence(sequence) => self.map_sequence(sequence, rows),
            Destination::Scalar(_) | Destination::Shared(_) => Ok(()),
        }
    }

    fn map_record(&self, record: &mut dyn Element, rows: &mut dyn RowSet) -> Result<()> {
        let mut scratch = record.scratch();
        let binder = binder_for(&*scratch, rows.columns());

        let scanned = {
            let mut slots = binder.bind(&mut *scratch);
            rows.scan(&mut slots)?
        };

        if !scanned {
            return match self.no_rows {
                NoRowsPolicy::Ignore => {
                    tracing::debug!(record = record.type_name(), "no rows; destination unchanged");
                    Ok(())
                }
                NoRowsPolicy::Error => Err(Error::no_rows(format!(
                    "expected one `{}`",
                    record.type_name()
                ))),
            };
        }

        record.commit(scratch);
        Ok(())
    }

    fn map_sequence(&self, sequence: &mut dyn Sequence, rows: &mut dyn RowSet) -> Result<()> {
        if let Some(count) = rows.row_count() {
            sequence.reserve(count);
        }

        let mut element = sequence.scratch();
        let binder = binder_for(&*element, rows.columns());
        let mut appended = 0_usize;

        loop {
            let scanned = {
                let mut slots = binder.bind(&mut *element);
                rows.scan(&mut slots)?
            };

            if !scanned {
                break;
            }

            let next = sequence.scratch();
            sequence.push(std::mem::replace(&mut element, next));
            appended += 1;
        }

        tracing::debug!(
            sequence = sequence.type_name(),
            rows = appended,
            "mapped rows into sequence"
        );

        Ok(())
    }
}

fn check_writable(destination: &Destination<'_>) -> Result<()> {
    match destination {
        Destination::Shared(type_name) => Err(Error::destination_not_writable(*type_name)),
        Destination::Scalar(type_name) => Err(Error::unexpected_destination_kind(
            destination.kind(),
            *type_name,
        )),
        Destination::Record(_) | Destination::Sequence(_) => Ok(()),
    }
}

fn binder_for(element: &dyn Element, columns: &[String]) -> RowBinder {
    match element.shape() {
        Shape::Record(schema) => RowBinder::new(columns, schema.index()),
        Shape::Scalar(_) => RowBinder::scalar(columns.len()),
    }
}
