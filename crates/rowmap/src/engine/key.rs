use super::{Getter, Getters, Mapping};
use crate::{Model, Result};

use rowmap_core::{Error, Record, Value};

use std::hash::{Hash, Hasher};

/// Reads the identity key of an entity from a record.
///
/// The key is the mapped simple property with the smallest ordinal. This is
/// a positional rule: it assumes the first mapped column identifies the row.
#[derive(Debug, Clone)]
pub(crate) struct KeyExtractor {
    property: &'static str,
    ordinal: usize,
    getter: Getter,
}

/// A single-column identity key with structural equality.
///
/// Floating point values compare by bit pattern.
#[derive(Debug, Clone)]
pub(crate) struct IdentityKey(Value);

impl KeyExtractor {
    /// Returns `None` if the model has no mapped simple property.
    pub(crate) fn build<T>(
        model: &Model<T>,
        mapping: &Mapping,
        getters: &Getters,
    ) -> Result<Option<Self>> {
        let candidate = model
            .simple()
            .zip(mapping.simple())
            .filter_map(|(property, ordinal)| Some((property, (*ordinal)?)))
            .min_by_key(|(_, ordinal)| *ordinal);

        let Some((property, ordinal)) = candidate else {
            return Ok(None);
        };

        let Some(ty) = property.ty() else {
            return Ok(None);
        };

        let Some(getter) = getters.get(ty) else {
            return Err(Error::unsupported_type(
                ty,
                format!("{}.{}", model.name(), property.name()),
            ));
        };

        Ok(Some(Self {
            property: property.name(),
            ordinal,
            getter: getter.clone(),
        }))
    }

    pub(crate) fn property(&self) -> &'static str {
        self.property
    }

    pub(crate) fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Reads the key. A NULL key column yields no key.
    pub(crate) fn read(&self, record: &dyn Record) -> Result<Option<IdentityKey>> {
        if record.is_null(self.ordinal)? {
            return Ok(None);
        }

        Ok(Some(IdentityKey(self.getter.read(record, self.ordinal)?)))
    }
}

impl IdentityKey {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }
}

impl PartialEq for IdentityKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Value::F32(a), Value::F32(b)) => a.to_bits() == b.to_bits(),
            (Value::F64(a), Value::F64(b)) => a.to_bits() == b.to_bits(),
            (a, b) => a == b,
        }
    }
}

impl Eq for IdentityKey {}

impl Hash for IdentityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(&self.0).hash(state);

        match &self.0 {
            Value::Null => {}
            Value::Bool(v) => v.hash(state),
            Value::U8(v) => v.hash(state),
            Value::Char(v) => v.hash(state),
            Value::I16(v) => v.hash(state),
            Value::I32(v) => v.hash(state),
            Value::I64(v) => v.hash(state),
            Value::F32(v) => v.to_bits().hash(state),
            Value::F64(v) => v.to_bits().hash(state),
            Value::Decimal(v) => v.hash(state),
            Value::DateTime(v) => v.hash(state),
            Value::Date(v) => v.hash(state),
            Value::Timestamp(v) => v.hash(state),
            Value::Uuid(v) => v.hash(state),
            Value::String(v) => v.hash(state),
            Value::Bytes(v) => v.hash(state),
            Value::Chars(v) => v.hash(state),
        }
    }
}
