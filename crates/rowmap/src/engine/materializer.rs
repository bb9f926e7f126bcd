use super::Traversal;
use crate::{Entity, Registry, Result};

use rowmap_core::{err, Reader, Record};

use by_address::ByAddress;
use indexmap::IndexSet;
use std::{any, sync::Arc};
use tracing::trace;

/// Turns the records of a [`Reader`] into entity instances.
///
/// Each call is one traversal: it reads the reader to the end, builds at
/// most one instance per identity key and type, and wires relations as
/// child rows arrive. Metadata comes from the shared [`Registry`].
#[derive(Debug, Clone)]
pub struct Materializer {
    registry: Arc<Registry>,
}

impl Materializer {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// A materializer over [`Registry::shared`].
    pub fn shared() -> Self {
        Self::new(Registry::shared())
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Materializes every root `T` in `reader`, in first-seen order.
    pub fn materialize<T: Entity>(&self, reader: impl Reader) -> Result<Vec<Arc<T>>> {
        let mut ret = vec![];
        self.materialize_into(reader, &mut ret)?;
        Ok(ret)
    }

    /// Materializes the reader and returns the first root, if any.
    pub fn materialize_one<T: Entity>(&self, reader: impl Reader) -> Result<Option<Arc<T>>> {
        Ok(self.materialize(reader)?.into_iter().next())
    }

    /// Materializes a single record.
    pub fn materialize_record<T: Entity>(&self, record: &dyn Record) -> Result<Option<Arc<T>>> {
        Traversal::new(&self.registry)
            .root::<T>(record)
            .map_err(|error| error.context(materializing::<T>()))
    }

    /// Appends every root `T` in `reader` to `out`.
    ///
    /// If a row fails, the roots produced by earlier rows are still appended
    /// before the error is returned.
    pub fn materialize_into<T: Entity>(
        &self,
        mut reader: impl Reader,
        out: &mut Vec<Arc<T>>,
    ) -> Result<()> {
        let mut traversal = Traversal::new(&self.registry);
        let mut roots = IndexSet::new();

        trace!(model = any::type_name::<T>(), "traversal started");
        let result = Self::traverse(&mut traversal, &mut reader, &mut roots);
        trace!(
            model = any::type_name::<T>(),
            rows = traversal.rows(),
            roots = roots.len(),
            ok = result.is_ok(),
            "traversal finished"
        );

        out.extend(roots.into_iter().map(|ByAddress(root)| root));
        result.map_err(|error| error.context(materializing::<T>()))
    }

    fn traverse<T: Entity>(
        traversal: &mut Traversal<'_>,
        reader: &mut impl Reader,
        roots: &mut IndexSet<ByAddress<Arc<T>>>,
    ) -> Result<()> {
        while let Some(record) = reader.read()? {
            if let Some(root) = traversal.root::<T>(record)? {
                // Rows repeating a root map to the same instance
                roots.insert(ByAddress(root));
            }
        }

        Ok(())
    }
}

impl Default for Materializer {
    fn default() -> Self {
        Self::shared()
    }
}

fn materializing<T>() -> rowmap_core::Error {
    let name = any::type_name::<T>();
    err!("materializing {}", name.rsplit("::").next().unwrap_or(name))
}

/// Materialization entry points on any [`Reader`], using
/// [`Registry::shared`].
pub trait ReaderExt: Reader + Sized {
    fn materialize<T: Entity>(self) -> Result<Vec<Arc<T>>> {
        Materializer::shared().materialize(self)
    }

    fn materialize_one<T: Entity>(self) -> Result<Option<Arc<T>>> {
        Materializer::shared().materialize_one(self)
    }
}

impl<R: Reader> ReaderExt for R {}
