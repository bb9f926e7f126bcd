use crate::{schema::Model, Result};

/// A type that rows can be materialized into.
///
/// Usually implemented with `#[derive(Entity)]`. The returned [`Model`] lists
/// the type's properties and the ways it can be constructed; the registry
/// builds it once per process and caches the result, including a failure.
pub trait Entity: Sized + Send + Sync + 'static {
    fn model() -> Result<Model<Self>>;
}
