#![allow(dead_code)]

use rowmap_core::map::{commit, Destination, Element, IntoDestination, Scan, Shape};
use rowmap_core::schema::{FieldDescriptor, Primitive, Record, RecordSchema};
use rowmap_core::stmt::Value;

use std::any::Any;
use std::sync::OnceLock;

/// A record implemented by hand the way `#[derive(Record)]` expands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub email: Option<String>,
}

impl Record for User {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new(
                "User",
                vec![
                    FieldDescriptor::new("ID", <i64 as Primitive>::ty(), false),
                    FieldDescriptor::new("UserName", <String as Primitive>::ty(), false),
                    FieldDescriptor::new(
                        "email",
                        <Option<String> as Primitive>::ty(),
                        <Option<String> as Primitive>::NULLABLE,
                    )
                    .column("email_address"),
                ],
            )
        })
    }

    fn fields_mut(&mut self) -> Vec<&mut dyn Scan> {
        vec![
            &mut self.id as &mut dyn Scan,
            &mut self.user_name as &mut dyn Scan,
            &mut self.email as &mut dyn Scan,
        ]
    }
}

impl Element for User {
    fn shape(&self) -> Shape {
        Shape::Record(Self::schema())
    }

    fn scan_targets(&mut self) -> Vec<&mut dyn Scan> {
        self.fields_mut()
    }

    fn zeroed() -> Self {
        Self::default()
    }

    fn scratch(&self) -> Box<dyn Element> {
        Box::new(Self::zeroed())
    }

    fn commit(&mut self, scratch: Box<dyn Element>) {
        commit(self, scratch)
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl IntoDestination for User {
    fn as_destination(&mut self) -> Destination<'_> {
        Destination::Record(self)
    }
}

pub fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn alice() -> Vec<Value> {
    vec![Value::I64(42), Value::from("alice")]
}
