use crate::Result;

use rowmap_core::{Record, Type, Value};

use std::{collections::HashMap, fmt, sync::Arc};

type ReadFn = dyn Fn(&dyn Record, usize) -> Result<Value> + Send + Sync;

/// Reads the value at an ordinal of a record.
#[derive(Clone)]
pub struct Getter {
    name: &'static str,
    returns: Type,
    read: Arc<ReadFn>,
}

/// Table from value type to the [`Getter`] that reads it.
///
/// The default table covers every built-in [`Type`]. Opaque types have no
/// entry until one is registered.
#[derive(Clone)]
pub struct Getters {
    getters: HashMap<Type, Getter>,
}

impl Getter {
    /// A getter named `name` producing values of type `returns`.
    pub fn new<F>(name: &'static str, returns: Type, read: F) -> Self
    where
        F: Fn(&dyn Record, usize) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name,
            returns,
            read: Arc::new(read),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn returns(&self) -> Type {
        self.returns
    }

    /// Reads the value at `ordinal`; the caller has already checked for NULL.
    pub fn read(&self, record: &dyn Record, ordinal: usize) -> Result<Value> {
        (self.read)(record, ordinal)
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Getter")
            .field("name", &self.name)
            .field("returns", &self.returns)
            .finish()
    }
}

macro_rules! scalar_getters {
    ($getters:ident, $($variant:ident => $method:ident,)*) => {
        $(
            $getters.insert(Getter::new(stringify!($method), Type::$variant, |record, ordinal| {
                Ok(Value::$variant(record.$method(ordinal)?))
            }));
        )*
    };
}

impl Getters {
    /// A table with no getters at all.
    pub fn empty() -> Self {
        Self {
            getters: HashMap::new(),
        }
    }

    pub fn get(&self, ty: Type) -> Option<&Getter> {
        self.getters.get(&ty)
    }

    /// Registers `getter` for the type it returns, replacing any existing
    /// entry.
    pub(crate) fn insert(&mut self, getter: Getter) {
        self.getters.insert(getter.returns, getter);
    }

    pub fn len(&self) -> usize {
        self.getters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.getters.is_empty()
    }
}

impl Default for Getters {
    fn default() -> Self {
        let mut getters = Self::empty();

        scalar_getters! {
            getters,
            Bool => get_bool,
            U8 => get_u8,
            Char => get_char,
            I16 => get_i16,
            I32 => get_i32,
            I64 => get_i64,
            F32 => get_f32,
            F64 => get_f64,
            Decimal => get_decimal,
            DateTime => get_datetime,
            Date => get_date,
            Timestamp => get_timestamp,
            Uuid => get_uuid,
            String => get_string,
        }

        getters.insert(Getter::new("get_bytes", Type::Bytes, |record, ordinal| {
            Ok(Value::Bytes(read_chunked(ordinal, 0, |offset, buffer| {
                record.get_bytes(ordinal, offset, buffer)
            })?))
        }));

        getters.insert(Getter::new("get_chars", Type::Chars, |record, ordinal| {
            Ok(Value::Chars(read_chunked(ordinal, '\0', |offset, buffer| {
                record.get_chars(ordinal, offset, buffer)
            })?))
        }));

        getters
    }
}

impl fmt::Debug for Getters {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.getters.values()).finish()
    }
}

/// Reads a blob by asking for its total length first, then filling a buffer
/// of that size. A record may hand out fewer elements per call than asked.
fn read_chunked<T: Copy>(
    ordinal: usize,
    zero: T,
    mut read: impl FnMut(usize, Option<&mut [T]>) -> Result<usize>,
) -> Result<Vec<T>> {
    let len = read(0, None)?;
    let mut buffer = vec![zero; len];
    let mut offset = 0;

    while offset < len {
        let n = read(offset, Some(&mut buffer[offset..]))?;

        if n == 0 {
            return Err(rowmap_core::Error::record(
                ordinal,
                format!("blob ended after {offset} of {len} elements"),
            ));
        }

        offset += n;
    }

    Ok(buffer)
}
