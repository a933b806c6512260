use crate::{
    stmt::{Type, Value},
    Result,
};

use uuid::Uuid;

/// A Rust type that can be stored in a record field.
///
/// `load` is lenient: it performs the range-checked numeric conversions and
/// string parsing implemented by `TryFrom<Value>`. The conditional write path
/// instead requires the value's type to equal [`Primitive::ty`] exactly.
pub trait Primitive: Sized + Default + Send + 'static {
    /// `true` if the type accepts `Value::Null`.
    const NULLABLE: bool = false;

    /// The declared type of a field holding `Self`.
    fn ty() -> Type;

    /// Loads an instance from a result value.
    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Uuid => Uuid,
}

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn ty() -> Type {
        T::ty()
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
