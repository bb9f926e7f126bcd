use std::fmt;

/// The canonical type of a scalar column value.
///
/// Every [`Value`](crate::Value) variant other than `Null` has a matching
/// type. `Opaque` names a user-defined scalar that has no built-in getter; a
/// custom getter must be registered for it before an entity using it can be
/// materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Unsigned 8-bit integer
    U8,

    /// A single character
    Char,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// Fixed-precision decimal
    Decimal,

    /// Date and time without a time zone
    DateTime,

    /// Calendar date
    Date,

    /// Instant in UTC
    Timestamp,

    /// 128-bit unique identifier
    Uuid,

    /// UTF-8 string
    String,

    /// Binary blob
    Bytes,

    /// Character blob
    Chars,

    /// A user-defined scalar type, identified by name
    Opaque(&'static str),
}

impl Type {
    /// Returns `true` for types whose NULL maps to an empty value rather than
    /// a missing one: strings and binary or character blobs.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::String | Self::Bytes | Self::Chars)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opaque(name) => write!(f, "Opaque({name})"),
            ty => fmt::Debug::fmt(ty, f),
        }
    }
}
