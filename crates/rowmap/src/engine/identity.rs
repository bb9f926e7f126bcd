use super::key::IdentityKey;
use crate::Result;

use rowmap_core::err;

use std::{
    any::{self, Any, TypeId},
    collections::{hash_map::Entry, HashMap},
    sync::Arc,
};

/// Instances of `T` created during one traversal, by identity key.
pub(crate) struct IdentityMap<T> {
    instances: HashMap<IdentityKey, Arc<T>>,
}

/// One [`IdentityMap`] per entity type, scoped to one traversal.
#[derive(Default)]
pub(crate) struct IdentityMaps {
    maps: HashMap<TypeId, Box<dyn Any>>,
}

impl<T> IdentityMap<T> {
    fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Returns the instance for `key`, building it with `create` on first
    /// sight. `create` runs at most once per key.
    pub(crate) fn get_or_try_insert_with(
        &mut self,
        key: IdentityKey,
        create: impl FnOnce() -> Result<T>,
    ) -> Result<Arc<T>> {
        match self.instances.entry(key) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => Ok(entry.insert(Arc::new(create()?)).clone()),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.instances.len()
    }
}

impl IdentityMaps {
    pub(crate) fn get<T: 'static>(&mut self) -> Result<&mut IdentityMap<T>> {
        self.maps
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(IdentityMap::<T>::new()))
            .downcast_mut()
            .ok_or_else(|| err!("identity map for `{}` has the wrong type", any::type_name::<T>()))
    }
}
