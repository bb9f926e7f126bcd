use rowmap_core::Record;

use std::{
    collections::{hash_map::DefaultHasher, HashMap},
    hash::{Hash, Hasher},
};

/// The ordered column names of a record.
#[derive(Debug, Clone)]
pub(crate) struct Shape {
    names: Box<[String]>,
    hash: u64,
}

/// Case-insensitive column name to ordinal lookup for one [`Shape`].
///
/// The registry interns one map per distinct shape, so caches keyed by shape
/// compare maps by address.
#[derive(Debug)]
pub(crate) struct ColumnMap {
    shape: Shape,
    ordinals: HashMap<String, usize>,
}

impl Shape {
    pub(crate) fn of(record: &dyn Record) -> Self {
        let names: Box<[String]> = (0..record.field_count())
            .map(|ordinal| record.name(ordinal).to_string())
            .collect();

        let mut hasher = DefaultHasher::new();
        names.hash(&mut hasher);

        Self {
            names,
            hash: hasher.finish(),
        }
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if `record` has exactly these column names.
    pub(crate) fn matches(&self, record: &dyn Record) -> bool {
        record.field_count() == self.names.len()
            && self
                .names
                .iter()
                .enumerate()
                .all(|(ordinal, name)| record.name(ordinal) == name)
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.names == other.names
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl ColumnMap {
    pub(crate) fn new(shape: Shape) -> Self {
        let mut ordinals = HashMap::with_capacity(shape.names.len());

        for (ordinal, name) in shape.names.iter().enumerate() {
            // First occurrence wins
            ordinals.entry(name.to_lowercase()).or_insert(ordinal);
        }

        Self { shape, ordinals }
    }

    pub(crate) fn from_record(record: &dyn Record) -> Self {
        Self::new(Shape::of(record))
    }

    pub(crate) fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        self.ordinals.get(&name.to_lowercase()).copied()
    }

    pub(crate) fn matches(&self, record: &dyn Record) -> bool {
        self.shape.matches(record)
    }

    pub(crate) fn len(&self) -> usize {
        self.ordinals.len()
    }
}
