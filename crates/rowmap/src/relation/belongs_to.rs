use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

/// A many-to-one reference to a single related entity.
///
/// The slot is written by relation wiring on every row that maps to the
/// owning instance; the last row read decides its value.
pub struct BelongsTo<T> {
    value: RwLock<Option<Arc<T>>>,
}

impl<T> BelongsTo<T> {
    /// Returns the related instance, or `None` if no row carried one.
    pub fn get(&self) -> Option<Arc<T>> {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_some(&self) -> bool {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn set(&self, value: Option<Arc<T>>) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

impl<T> Default for BelongsTo<T> {
    fn default() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }
}

impl<T> From<Arc<T>> for BelongsTo<T> {
    fn from(value: Arc<T>) -> Self {
        Self {
            value: RwLock::new(Some(value)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BelongsTo<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(t) => t.fmt(fmt),
            None => write!(fmt, "<none>"),
        }
    }
}
