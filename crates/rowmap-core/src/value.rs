use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A single column value read from a [`Record`](crate::Record).
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Unsigned 8-bit integer
    U8(u8),

    /// A single character
    Char(char),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// Fixed-precision decimal
    Decimal(Decimal),

    /// Date and time without a time zone
    DateTime(NaiveDateTime),

    /// Calendar date
    Date(NaiveDate),

    /// Instant in UTC
    Timestamp(DateTime<Utc>),

    /// 128-bit unique identifier
    Uuid(Uuid),

    /// UTF-8 string
    String(String),

    /// Binary blob
    Bytes(Vec<u8>),

    /// Character blob
    Chars(Vec<char>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::U8(_) => "U8",
            Self::Char(_) => "Char",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::Decimal(_) => "Decimal",
            Self::DateTime(_) => "DateTime",
            Self::Date(_) => "Date",
            Self::Timestamp(_) => "Timestamp",
            Self::Uuid(_) => "Uuid",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Chars(_) => "Chars",
        }
    }

    /// Widens any integer variant to `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        match *self {
            Self::U8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}
