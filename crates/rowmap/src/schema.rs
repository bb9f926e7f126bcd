//! Entity metadata: the properties of an entity type and how it is built.

mod builder;
pub use builder::Builder;

mod constructor;
pub(crate) use constructor::Arg;
pub use constructor::{Args, Constructor, Param};

mod model;
pub use model::Model;

mod property;
pub use property::{Property, PropertyKind};

mod selector;
pub use selector::Category;
