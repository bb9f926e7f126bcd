//! Conversions between [`Value`] and Rust scalar types.

use crate::{Error, Value};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Conversions for values that map to exactly one variant.
macro_rules! impl_exact_conversions {
    ($($ty:ty => $variant:ident, $lit:literal;)*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(value) => Ok(value),
                        value => Err(Error::type_conversion(value, $lit)),
                    }
                }
            }
        )*
    };
}

impl_exact_conversions! {
    bool => Bool, "bool";
    char => Char, "char";
    f32 => F32, "f32";
    Decimal => Decimal, "Decimal";
    NaiveDateTime => DateTime, "NaiveDateTime";
    NaiveDate => Date, "NaiveDate";
    DateTime<Utc> => Timestamp, "DateTime<Utc>";
    Uuid => Uuid, "Uuid";
    String => String, "String";
    Vec<u8> => Bytes, "Vec<u8>";
    Vec<char> => Chars, "Vec<char>";
}

/// Integer conversions accept any integer variant that fits the target width.
macro_rules! impl_integer_conversions {
    ($($ty:ty => $variant:ident, $lit:literal;)*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    if let Value::$variant(value) = value {
                        return Ok(value);
                    }

                    match value.to_i64().map(<$ty>::try_from) {
                        Some(Ok(value)) => Ok(value),
                        _ => Err(Error::type_conversion(value, $lit)),
                    }
                }
            }
        )*
    };
}

impl_integer_conversions! {
    u8 => U8, "u8";
    i16 => I16, "i16";
    i32 => I32, "i32";
    i64 => I64, "i64";
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(value) => Ok(value),
            Value::F32(value) => Ok(value.into()),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}
