use super::FieldDescriptor;

use indexmap::IndexMap;

/// Maps resolved column names to field positions for one record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaIndex {
    columns: IndexMap<String, usize>,
}

impl SchemaIndex {
    /// Builds the index from field descriptors in declaration order.
    ///
    /// When two fields resolve to the same column the later field wins.
    pub fn build(fields: &[FieldDescriptor]) -> Self {
        let mut columns = IndexMap::with_capacity(fields.len());

        for (position, field) in fields.iter().enumerate() {
            let column = field.column_name().into_owned();

            if let Some(previous) = columns.insert(column, position) {
                tracing::debug!(
                    column = %field.column_name(),
                    previous = fields[previous].name,
                    field = field.name,
                    "column name collision; later field wins"
                );
            }
        }

        Self { columns }
    }

    /// Returns the position of the field bound to `column`.
    pub fn get(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates `(column, position)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.columns
            .iter()
            .map(|(column, position)| (column.as_str(), *position))
    }
}
