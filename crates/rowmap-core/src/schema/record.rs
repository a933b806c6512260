use super::{FieldDescriptor, SchemaIndex};
use crate::map::Scan;

/// A statically declared record type that result rows map onto.
///
/// Implemented by `#[derive(Record)]`; the derive also implements
/// [`Element`](crate::map::Element) and
/// [`IntoDestination`](crate::map::IntoDestination) for the type.
pub trait Record: Send + 'static {
    /// Field layout of the record type, built once per type.
    fn schema() -> &'static RecordSchema;

    /// Scan targets for every field, in declaration order.
    fn fields_mut(&mut self) -> Vec<&mut dyn Scan>;
}

/// Field layout and column index of one record type.
#[derive(Debug)]
pub struct RecordSchema {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
    index: SchemaIndex,
}

impl RecordSchema {
    /// Creates the schema, assigning field positions in the given order and
    /// building the column index.
    pub fn new(name: &'static str, mut fields: Vec<FieldDescriptor>) -> Self {
        for (position, field) in fields.iter_mut().enumerate() {
            field.position = position;
        }

        let index = SchemaIndex::build(&fields);

        Self {
            name,
            fields,
            index,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, position: usize) -> Option<&FieldDescriptor> {
        self.fields.get(position)
    }

    /// Resolves a column to its field.
    pub fn field_for_column(&self, column: &str) -> Option<&FieldDescriptor> {
        self.index.get(column).and_then(|position| self.field(position))
    }

    pub fn index(&self) -> &SchemaIndex {
        &self.index
    }
}
