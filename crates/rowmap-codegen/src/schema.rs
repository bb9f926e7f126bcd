mod entity;
pub(crate) use entity::Entity;

pub(crate) mod entity_attr;
pub(crate) use entity_attr::EntityAttr;

mod enumeration;
pub(crate) use enumeration::Enum;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;
