use crate::{ExecKind, ExecLog, Executed};

use rowmap_core::{
    async_trait,
    driver::{Conditional, RowSet, Session, ValueRows},
    err,
    stmt::{Statement, Value},
    Error, Result,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

#[derive(Debug)]
enum Scripted {
    Rows(ValueRows),
    Conditional(Conditional),
    Fail(Error),
}

/// A session that replays scripted results in order and logs every
/// statement it receives.
#[derive(Debug, Default)]
pub struct MockSession {
    script: Mutex<VecDeque<Scripted>>,
    log: Arc<Mutex<Vec<Executed>>>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a row result.
    pub fn rows(self, columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        self.push(Scripted::Rows(ValueRows::new(columns, rows)))
    }

    /// Queues a conditional write outcome.
    pub fn conditional<K, V>(self, applied: bool, row: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.push(Scripted::Conditional(Conditional::from_pairs(applied, row)))
    }

    /// Queues a failure.
    pub fn fail(self, err: Error) -> Self {
        self.push(Scripted::Fail(err))
    }

    pub fn exec_log(&self) -> ExecLog {
        ExecLog::new(self.log.clone())
    }

    fn push(self, scripted: Scripted) -> Self {
        self.script.lock().unwrap().push_back(scripted);
        self
    }

    fn next(&self, kind: ExecKind, stmt: &Statement) -> Result<Scripted> {
        self.log.lock().unwrap().push(Executed {
            kind,
            stmt: stmt.clone(),
        });

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Fail(err)) => Err(err),
            Some(scripted) => Ok(scripted),
            None => Err(err!("no scripted result for `{}`", stmt.sql())),
        }
    }
}

#[async_trait]
impl Session for MockSession {
    async fn execute(&self, stmt: &Statement) -> Result<Box<dyn RowSet>> {
        match self.next(ExecKind::Execute, stmt)? {
            Scripted::Rows(rows) => Ok(Box::new(rows)),
            other => Err(err!("expected rows for `{}`, scripted {other:?}", stmt.sql())),
        }
    }

    async fn execute_conditional(&self, stmt: &Statement) -> Result<Conditional> {
        match self.next(ExecKind::Conditional, stmt)? {
            Scripted::Conditional(outcome) => Ok(outcome),
            other => Err(err!(
                "expected a conditional outcome for `{}`, scripted {other:?}",
                stmt.sql()
            )),
        }
    }
}
