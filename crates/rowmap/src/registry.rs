//! Process-wide metadata caches.

mod builder;
pub use builder::Builder;

use crate::{
    engine::{Accessor, ColumnMap, Getters, KeyExtractor, Mapping, Shape},
    memo::Memo,
    AccessorStrategy, Config, Entity, Model, Result,
};

use rowmap_core::{err, Record};

use by_address::ByAddress;
use std::{
    any::{self, Any, TypeId},
    fmt,
    sync::{Arc, OnceLock},
};
use tracing::debug;

type Erased = Arc<dyn Any + Send + Sync>;

/// Column maps are interned, so a shape is identified by the map's address.
type ShapeKey = ByAddress<Arc<ColumnMap>>;

/// Metadata shared by every materialization that uses it.
///
/// A registry caches entity models, compiled accessors and everything
/// resolved against a record shape. Entries are computed on first use and
/// never evicted; a failure is cached like any other result, so the same
/// error is returned every time.
///
/// Caches are safe to populate from several threads at once. Each entry is
/// computed without holding a lock and the first result published wins.
pub struct Registry {
    config: Config,
    getters: Getters,

    /// Interned column maps, by shape
    columns: Memo<Shape, Arc<ColumnMap>>,

    /// `Model<T>` by entity type
    models: Memo<TypeId, Result<Erased>>,

    /// `Accessor<T>` by entity type and strategy
    accessors: Memo<(TypeId, AccessorStrategy), Result<Erased>>,

    mappings: Memo<(TypeId, ShapeKey), Result<Arc<Mapping>>>,

    keys: Memo<(TypeId, ShapeKey), Result<Option<Arc<KeyExtractor>>>>,

    /// Relation properties whose target is mapped, by owner type and shape
    relations: Memo<(TypeId, ShapeKey), Result<Arc<[usize]>>>,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A registry with default getters and the given configuration.
    pub fn new(config: Config) -> Self {
        Self::from_parts(config, Getters::default())
    }

    /// The process-wide registry used by [`ReaderExt`](crate::ReaderExt).
    pub fn shared() -> Arc<Registry> {
        static SHARED: OnceLock<Arc<Registry>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Registry::default())).clone()
    }

    pub(crate) fn from_parts(config: Config, getters: Getters) -> Self {
        Self {
            config,
            getters,
            columns: Memo::new(),
            models: Memo::new(),
            accessors: Memo::new(),
            mappings: Memo::new(),
            keys: Memo::new(),
            relations: Memo::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn getters(&self) -> &Getters {
        &self.getters
    }

    /// The model of `T`, built on first use.
    pub fn model<T: Entity>(&self) -> Result<Arc<Model<T>>> {
        let erased = self.models.get_or_compute(TypeId::of::<T>(), || {
            let model = T::model()?;
            debug!(
                model = model.name(),
                properties = model.properties().len(),
                constructors = model.constructors().len(),
                "built entity model"
            );
            Ok(Arc::new(model) as Erased)
        })?;

        downcast(erased)
    }

    /// The column map for the shape of `record`.
    pub(crate) fn columns(&self, record: &dyn Record) -> Arc<ColumnMap> {
        let shape = Shape::of(record);

        self.columns.get_or_compute(shape.clone(), || {
            debug!(columns = ?shape.names(), "interned record shape");
            Arc::new(ColumnMap::new(shape))
        })
    }

    pub(crate) fn mapping<T: Entity>(&self, columns: &Arc<ColumnMap>) -> Result<Arc<Mapping>> {
        let key = (TypeId::of::<T>(), ByAddress(columns.clone()));

        self.mappings.get_or_compute(key, || {
            let model = self.model::<T>()?;
            let mapping = Mapping::resolve(&model, columns);
            debug!(
                model = model.name(),
                mapped = mapping.simple().iter().flatten().count(),
                "resolved column mapping"
            );
            Ok(Arc::new(mapping))
        })
    }

    pub(crate) fn key<T: Entity>(
        &self,
        columns: &Arc<ColumnMap>,
    ) -> Result<Option<Arc<KeyExtractor>>> {
        let key = (TypeId::of::<T>(), ByAddress(columns.clone()));

        self.keys.get_or_compute(key, || {
            let model = self.model::<T>()?;
            let mapping = self.mapping::<T>(columns)?;
            let extractor = KeyExtractor::build(&model, &mapping, &self.getters)?;

            match &extractor {
                Some(extractor) => debug!(
                    model = model.name(),
                    key = extractor.property(),
                    ordinal = extractor.ordinal(),
                    "selected identity key"
                ),
                None => debug!(model = model.name(), "no mapped key column"),
            }

            Ok(extractor.map(Arc::new))
        })
    }

    /// The compiled accessor of `T`, using the strategy configured for its
    /// model or, failing that, the model's own preference.
    pub(crate) fn accessor<T: Entity>(&self) -> Result<Arc<Accessor<T>>> {
        let model = self.model::<T>()?;
        let strategy = self
            .config
            .strategy_for(model.name())
            .unwrap_or_else(|| model.preferred_strategy());

        let erased = self
            .accessors
            .get_or_compute((TypeId::of::<T>(), strategy), || {
                let accessor = Accessor::build(
                    model.clone(),
                    strategy,
                    self.config.constructor,
                    &self.getters,
                )?;
                debug!(model = model.name(), strategy = ?accessor.strategy(), "compiled accessor");
                Ok(Arc::new(accessor) as Erased)
            })?;

        downcast(erased)
    }

    pub(crate) fn relations<T: Entity>(&self, columns: &Arc<ColumnMap>) -> Result<Arc<[usize]>> {
        let key = (TypeId::of::<T>(), ByAddress(columns.clone()));

        self.relations.get_or_compute(key, || {
            let model = self.model::<T>()?;
            let mut active = vec![];

            for index in model.relations() {
                let Some(relation) = model.properties()[index].relation() else {
                    continue;
                };

                if relation.is_mapped(self, columns)? {
                    active.push(index);
                }
            }

            Ok(active.into())
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Registry")
            .field("config", &self.config)
            .field("getters", &self.getters)
            .finish_non_exhaustive()
    }
}

fn downcast<T: Send + Sync + 'static>(erased: Erased) -> Result<Arc<T>> {
    erased
        .downcast::<T>()
        .map_err(|_| err!("registry entry is not a `{}`", any::type_name::<T>()))
}
