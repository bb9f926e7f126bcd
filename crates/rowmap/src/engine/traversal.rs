use super::{Accessor, ColumnMap, IdentityMaps, KeyExtractor, Mapping};
use crate::{Config, Entity, Model, Registry, Result};

use rowmap_core::{err, Record};

use std::{
    any::{self, Any, TypeId},
    collections::HashMap,
    sync::Arc,
};
use tracing::trace;

/// State for one pass over a reader.
///
/// Identity maps live exactly as long as the traversal. Per-type plans are
/// resolved against the current column map and dropped when the record shape
/// changes.
pub(crate) struct Traversal<'a> {
    registry: &'a Registry,

    /// Column map of the current record shape
    columns: Option<Arc<ColumnMap>>,

    /// `Plan<T>` by entity type, for the current shape
    plans: HashMap<TypeId, Box<dyn Any>>,

    identity: IdentityMaps,

    /// Number of records seen so far
    rows: usize,
}

/// Everything needed to materialize `T` from records of one shape.
struct Plan<T> {
    model: Arc<Model<T>>,
    mapping: Arc<Mapping>,
    key: Option<Arc<KeyExtractor>>,
    accessor: Arc<Accessor<T>>,

    /// Relation properties whose target is mapped in this shape
    relations: Arc<[usize]>,
}

/// The chain of entity types being materialized, root first.
pub(crate) struct Path<'a> {
    parent: Option<&'a Path<'a>>,
    ty: TypeId,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            columns: None,
            plans: HashMap::new(),
            identity: IdentityMaps::default(),
            rows: 0,
        }
    }

    pub(crate) fn config(&self) -> &Config {
        self.registry.config()
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    /// Materializes the root entity for `record` and wires its relations.
    ///
    /// Returns `None` when the row carries no key for `T`.
    pub(crate) fn root<T: Entity>(&mut self, record: &dyn Record) -> Result<Option<Arc<T>>> {
        self.advance(record);

        self.materialize::<T>(record, None)
            .map_err(|error| error.context(err!("row {}", self.rows)))
    }

    /// Moves to the next record, refreshing the column map if its shape
    /// differs from the previous record's.
    fn advance(&mut self, record: &dyn Record) {
        self.rows += 1;

        let changed = match &self.columns {
            Some(columns) => !columns.matches(record),
            None => true,
        };

        if changed {
            trace!(row = self.rows, fields = record.field_count(), "record shape changed");
            self.columns = Some(self.registry.columns(record));
            self.plans.clear();
        }
    }

    /// Gets or creates the instance of `T` for `record`, then wires its
    /// relations. Runs on every row, so children on later rows attach to an
    /// instance created earlier.
    pub(crate) fn materialize<T: Entity>(
        &mut self,
        record: &dyn Record,
        parent: Option<&Path<'_>>,
    ) -> Result<Option<Arc<T>>> {
        let plan = self.plan::<T>()?;

        let Some(extractor) = &plan.key else {
            return Ok(None);
        };

        let Some(key) = extractor.read(record)? else {
            return Ok(None);
        };

        let instance = self
            .identity
            .get::<T>()?
            .get_or_try_insert_with(key, || plan.accessor.read(record, &plan.mapping))?;

        let path = Path {
            parent,
            ty: TypeId::of::<T>(),
        };

        for &index in plan.relations.iter() {
            let property = &plan.model.properties[index];

            let Some(relation) = property.relation() else {
                continue;
            };

            if path.contains(relation.target()) {
                trace!(
                    model = plan.model.name(),
                    property = property.name(),
                    target = relation.target_name(),
                    "skipping relation to a type already being materialized"
                );
                continue;
            }

            relation.wire(&instance, self, record, &path)?;
        }

        Ok(Some(instance))
    }

    fn plan<T: Entity>(&mut self) -> Result<Arc<Plan<T>>> {
        if let Some(plan) = self.plans.get(&TypeId::of::<T>()) {
            if let Some(plan) = plan.downcast_ref::<Arc<Plan<T>>>() {
                return Ok(plan.clone());
            }
        }

        let Some(columns) = &self.columns else {
            return Err(err!(
                "no record read before materializing `{}`",
                any::type_name::<T>()
            ));
        };

        let registry = self.registry;
        let plan = Arc::new(Plan {
            model: registry.model::<T>()?,
            mapping: registry.mapping::<T>(columns)?,
            key: registry.key::<T>(columns)?,
            accessor: registry.accessor::<T>()?,
            relations: registry.relations::<T>(columns)?,
        });

        self.plans.insert(TypeId::of::<T>(), Box::new(plan.clone()));
        Ok(plan)
    }
}

impl Path<'_> {
    /// Returns `true` if `ty` is this type or one of its ancestors.
    pub(crate) fn contains(&self, ty: TypeId) -> bool {
        let mut path = Some(self);

        while let Some(current) = path {
            if current.ty == ty {
                return true;
            }
            path = current.parent;
        }

        false
    }
}
