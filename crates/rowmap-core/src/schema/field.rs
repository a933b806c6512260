use super::resolve_column_name;
use crate::stmt::{Type, Value};

use std::borrow::Cow;

/// Describes one field of a record type.
///
/// Descriptors are emitted by `#[derive(Record)]` in declaration order and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Index of the field in the containing record
    pub position: usize,

    /// Field name as declared in the source
    pub name: &'static str,

    /// Explicit column name from `#[column("...")]`
    pub column: Option<&'static str>,

    /// Declared type of the field
    pub ty: Type,

    /// True if the field accepts `Value::Null` (an `Option<T>` field)
    pub nullable: bool,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, ty: Type, nullable: bool) -> Self {
        Self {
            position: 0,
            name,
            column: None,
            ty,
            nullable,
        }
    }

    /// Overrides the column name this field binds to.
    pub fn column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    /// The column this field binds to.
    pub fn column_name(&self) -> Cow<'static, str> {
        resolve_column_name(self.name, self.column)
    }

    /// Returns `true` if `value` can be assigned to this field without any
    /// conversion: its runtime type equals the declared type, or it is null
    /// and the field is nullable.
    pub fn accepts(&self, value: &Value) -> bool {
        if value.is_null() {
            self.nullable
        } else {
            value.ty() == self.ty
        }
    }
}
