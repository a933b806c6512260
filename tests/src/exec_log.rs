use rowmap::Statement;
use std::sync::{Arc, Mutex};

/// How a statement reached the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecKind {
    Execute,
    Conditional,
}

#[derive(Debug, Clone)]
pub struct Executed {
    pub kind: ExecKind,
    pub stmt: Statement,
}

/// A handle on the statements a [`MockSession`](crate::MockSession) received.
#[derive(Debug, Clone)]
pub struct ExecLog {
    entries: Arc<Mutex<Vec<Executed>>>,
}

impl ExecLog {
    pub(crate) fn new(entries: Arc<Mutex<Vec<Executed>>>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Statement text in execution order
    pub fn statements(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.stmt.sql().to_string())
            .collect()
    }

    pub fn last(&self) -> Option<Executed> {
        self.entries.lock().unwrap().last().cloned()
    }

    pub fn count(&self, kind: ExecKind) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }
}
