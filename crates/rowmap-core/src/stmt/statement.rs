use super::Value;

/// Statement text plus its positional parameters.
///
/// The text is passed to the session untouched; rowmap neither parses nor
/// rewrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<Value>,

    /// Reads the current row back when a conditional write is not applied
    current_row: Option<Box<Statement>>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: vec![],
            current_row: None,
        }
    }

    /// Appends a positional parameter.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Attaches a query that reads the row a conditional write targeted.
    ///
    /// Sessions whose conditional writes do not return the conflicting row
    /// run it when the write is not applied, so the destination is still
    /// reconciled with the stored state.
    pub fn current_row(mut self, read: impl Into<Statement>) -> Self {
        self.current_row = Some(Box::new(read.into()));
        self
    }

    pub fn current_row_query(&self) -> Option<&Statement> {
        self.current_row.as_deref()
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl From<&str> for Statement {
    fn from(sql: &str) -> Self {
        Self::new(sql)
    }
}

impl From<String> for Statement {
    fn from(sql: String) -> Self {
        Self::new(sql)
    }
}
