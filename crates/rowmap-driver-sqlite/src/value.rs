use rowmap_core::{stmt, Error, Result};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

/// A rowmap value crossing the rusqlite boundary.
#[derive(Debug)]
pub(crate) struct Value(stmt::Value);

impl From<stmt::Value> for Value {
    fn from(value: stmt::Value) -> Self {
        Self(value)
    }
}

impl Value {
    pub(crate) fn into_inner(self) -> stmt::Value {
        self.0
    }

    /// Reads the column at `index` by its SQLite storage class.
    pub(crate) fn from_sql(row: &Row<'_>, index: usize) -> Result<Self> {
        let value = match row.get_ref(index).map_err(Error::driver)? {
            ValueRef::Null => stmt::Value::Null,
            ValueRef::Integer(value) => stmt::Value::I64(value),
            ValueRef::Real(value) => stmt::Value::F64(value),
            ValueRef::Text(value) => match std::str::from_utf8(value) {
                Ok(value) => stmt::Value::String(value.to_string()),
                Err(err) => return Err(Error::driver(err)),
            },
            ValueRef::Blob(value) => stmt::Value::Bytes(value.to_vec()),
        };

        Ok(Value(value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(v) => integer(*v as i64),
            Value::I8(v) => integer(*v as i64),
            Value::I16(v) => integer(*v as i64),
            Value::I32(v) => integer(*v as i64),
            Value::I64(v) => integer(*v),
            Value::U8(v) => integer(*v as i64),
            Value::U16(v) => integer(*v as i64),
            Value::U32(v) => integer(*v as i64),
            Value::U64(v) => match i64::try_from(*v) {
                Ok(v) => integer(v),
                Err(err) => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(err))),
            },
            Value::F32(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v as f64))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Uuid(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}

fn integer(value: i64) -> rusqlite::Result<ToSqlOutput<'static>> {
    Ok(ToSqlOutput::Owned(SqlValue::Integer(value)))
}
