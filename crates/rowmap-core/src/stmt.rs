mod num;

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
