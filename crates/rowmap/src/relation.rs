mod belongs_to;
pub use belongs_to::BelongsTo;

mod has_many;
pub use has_many::HasMany;

use crate::{
    engine::{ColumnMap, Path, Traversal},
    Entity, Membership, Registry, Result,
};

use rowmap_core::Record;

use std::{
    any::{self, TypeId},
    sync::Arc,
};

/// Wiring for one complex or collection property of entity `M`.
///
/// The target entity type is erased so a model can hold relations to
/// different types side by side.
pub(crate) trait Relation<M>: Send + Sync {
    /// `TypeId` of the related entity.
    fn target(&self) -> TypeId;

    fn target_name(&self) -> &'static str;

    /// Returns `true` if the related entity has at least one mapped simple
    /// property in `columns`.
    fn is_mapped(&self, registry: &Registry, columns: &Arc<ColumnMap>) -> Result<bool>;

    /// Materializes the related entity for the current record and attaches
    /// it to `owner`.
    fn wire(
        &self,
        owner: &M,
        traversal: &mut Traversal<'_>,
        record: &dyn Record,
        path: &Path<'_>,
    ) -> Result<()>;
}

pub(crate) struct BelongsToRelation<M, R> {
    pub(crate) get: fn(&M) -> &BelongsTo<R>,
}

impl<M: Entity, R: Entity> Relation<M> for BelongsToRelation<M, R> {
    fn target(&self) -> TypeId {
        TypeId::of::<R>()
    }

    fn target_name(&self) -> &'static str {
        any::type_name::<R>()
    }

    fn is_mapped(&self, registry: &Registry, columns: &Arc<ColumnMap>) -> Result<bool> {
        Ok(registry.mapping::<R>(columns)?.is_mapped())
    }

    fn wire(
        &self,
        owner: &M,
        traversal: &mut Traversal<'_>,
        record: &dyn Record,
        path: &Path<'_>,
    ) -> Result<()> {
        // Assigned on every row, including when the target is absent.
        let target = traversal.materialize::<R>(record, Some(path))?;
        (self.get)(owner).set(target);
        Ok(())
    }
}

pub(crate) struct HasManyRelation<M, R> {
    pub(crate) get: fn(&M) -> &HasMany<R>,
}

impl<M: Entity, R: Entity> Relation<M> for HasManyRelation<M, R> {
    fn target(&self) -> TypeId {
        TypeId::of::<R>()
    }

    fn target_name(&self) -> &'static str {
        any::type_name::<R>()
    }

    fn is_mapped(&self, registry: &Registry, columns: &Arc<ColumnMap>) -> Result<bool> {
        Ok(registry.mapping::<R>(columns)?.is_mapped())
    }

    fn wire(
        &self,
        owner: &M,
        traversal: &mut Traversal<'_>,
        record: &dyn Record,
        path: &Path<'_>,
    ) -> Result<()> {
        let Some(item) = traversal.materialize::<R>(record, Some(path))? else {
            return Ok(());
        };

        let list = (self.get)(owner);
        match traversal.config().membership {
            Membership::Append => list.push(item),
            Membership::Distinct => {
                list.push_distinct(item);
            }
        }

        Ok(())
    }
}
