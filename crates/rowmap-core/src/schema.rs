mod field;
pub use field::FieldDescriptor;

mod index;
pub use index::SchemaIndex;

mod name;
pub use name::resolve_column_name;

mod primitive;
pub use primitive::Primitive;

mod record;
pub use record::{Record, RecordSchema};
