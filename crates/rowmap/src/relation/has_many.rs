use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard},
};

/// A one-to-many list of related entities.
///
/// Relation wiring appends to the list as child rows are read. Unless the
/// registry is configured with [`Membership::Distinct`](crate::Membership),
/// a child repeated by duplicate rows is appended once per row.
pub struct HasMany<T> {
    values: RwLock<Vec<Arc<T>>>,
}

impl<T> HasMany<T> {
    /// Returns a snapshot of the list.
    pub fn get(&self) -> Vec<Arc<T>> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn push(&self, value: Arc<T>) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }

    /// Appends `value` unless the same instance is already in the list.
    /// Returns `true` if it was appended.
    pub fn push_distinct(&self, value: Arc<T>) -> bool {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);

        if values.iter().any(|existing| Arc::ptr_eq(existing, &value)) {
            return false;
        }

        values.push(value);
        true
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<T>>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for HasMany<T> {
    fn default() -> Self {
        Self {
            values: RwLock::new(vec![]),
        }
    }
}

impl<T> From<Vec<Arc<T>>> for HasMany<T> {
    fn from(values: Vec<Arc<T>>) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for HasMany<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.read().iter()).finish()
    }
}
