use crate::{
    relation::{BelongsTo, HasMany},
    schema::PropertyKind,
    Entity, Result,
};

use rowmap_core::{Type, Value};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A scalar type that can be loaded from a single column.
///
/// `Default` supplies the value used when a column is unmapped.
pub trait Primitive: Sized + Default + Send + Sync + 'static {
    const TYPE: Type;
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident;)*) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool;
    u8 => U8;
    char => Char;
    i16 => I16;
    i32 => I32;
    i64 => I64;
    f32 => F32;
    f64 => F64;
    Decimal => Decimal;
    NaiveDateTime => DateTime;
    NaiveDate => Date;
    DateTime<Utc> => Timestamp;
    Uuid => Uuid;
    String => String;
    Vec<u8> => Bytes;
    Vec<char> => Chars;
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}

/// Classifies a field of entity `M` by its Rust type.
///
/// Primitives are simple properties, [`BelongsTo`] is a complex
/// (many-to-one) property and [`HasMany`] is a collection (one-to-many)
/// property. Generated `Entity` impls call this for every field.
pub trait Field<M>: Sized + 'static {
    fn kind(get: fn(&M) -> &Self, get_mut: fn(&mut M) -> &mut Self) -> PropertyKind<M>;
}

impl<M: 'static, P: Primitive> Field<M> for P {
    fn kind(_get: fn(&M) -> &Self, get_mut: fn(&mut M) -> &mut Self) -> PropertyKind<M> {
        PropertyKind::simple::<P>(get_mut)
    }
}

impl<M: Entity, R: Entity> Field<M> for BelongsTo<R> {
    fn kind(get: fn(&M) -> &Self, _get_mut: fn(&mut M) -> &mut Self) -> PropertyKind<M> {
        PropertyKind::complex(get)
    }
}

impl<M: Entity, R: Entity> Field<M> for HasMany<R> {
    fn kind(get: fn(&M) -> &Self, _get_mut: fn(&mut M) -> &mut Self) -> PropertyKind<M> {
        PropertyKind::collection(get)
    }
}
