use super::Value;
use crate::Error;

macro_rules! impl_num {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                #[allow(unreachable_patterns)]
                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        Value::I8(v) => try_convert(v, value),
                        Value::I16(v) => try_convert(v, value),
                        Value::I32(v) => try_convert(v, value),
                        Value::I64(v) => try_convert(v, value),
                        Value::U8(v) => try_convert(v, value),
                        Value::U16(v) => try_convert(v, value),
                        Value::U32(v) => try_convert(v, value),
                        Value::U64(v) => try_convert(v, value),
                        Value::String(s) => s.parse::<$ty>().map_err(|_| {
                            Error::type_conversion(Value::String(s), stringify!($ty))
                        }),
                        _ => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
}

/// Range-checked conversion between integer widths; the original value is
/// kept for the error message.
fn try_convert<S, T>(src: S, value: Value) -> Result<T, Error>
where
    S: TryInto<T>,
{
    src.try_into()
        .map_err(|_| Error::type_conversion(value, core::any::type_name::<T>()))
}
