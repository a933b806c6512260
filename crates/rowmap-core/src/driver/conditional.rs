use crate::stmt::Value;

use indexmap::IndexMap;

/// Outcome of a conditional write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditional {
    /// True if the write's precondition held and the write was applied
    pub applied: bool,

    /// The row as it exists after the attempt, keyed by column name
    pub row: IndexMap<String, Value>,
}

impl Conditional {
    pub fn new(applied: bool, row: IndexMap<String, Value>) -> Self {
        Self { applied, row }
    }

    /// Builds an outcome from `(column, value)` pairs.
    pub fn from_pairs<K, V>(applied: bool, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            applied,
            row: pairs
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}
