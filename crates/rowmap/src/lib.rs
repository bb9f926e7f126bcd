mod config;
pub use config::{AccessorStrategy, Config, ConstructorSelection, Membership};

mod engine;
pub use engine::{Getter, Getters, Materializer, ReaderExt};

mod entity;
pub use entity::Entity;

mod memo;

mod primitive;
pub use primitive::{Field, Primitive};

pub mod registry;
pub use registry::Registry;

pub mod relation;
pub use relation::{BelongsTo, HasMany};

pub mod schema;
pub use schema::Model;

pub use rowmap_core::{
    bail, err, Decimal, Error, IterReader, Reader, Record, Result, Row, Rows, Type, Uuid, Value,
};
pub use rowmap_macros::{Entity, Primitive};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        relation::{BelongsTo, HasMany},
        schema::{Args, Model, Param},
        AccessorStrategy, Entity, Error, Field, Primitive, Result,
    };
    pub use rowmap_core::{Type, Value};
    pub use std::default::Default;
}
