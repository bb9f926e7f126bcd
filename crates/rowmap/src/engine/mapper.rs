use super::ColumnMap;
use crate::Model;

/// Ordinals resolved for one model against one column map.
///
/// `None` marks a property or parameter with no matching column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Mapping {
    /// One entry per simple property, in selector order
    simple: Vec<Option<usize>>,

    /// One list per constructor, one entry per parameter
    params: Vec<Vec<Option<usize>>>,
}

impl Mapping {
    pub(crate) fn resolve<T>(model: &Model<T>, columns: &ColumnMap) -> Self {
        let simple = model
            .simple()
            .map(|property| resolve(columns, model.name(), property.column()))
            .collect();

        let params = model
            .constructors()
            .iter()
            .map(|constructor| {
                constructor
                    .params()
                    .iter()
                    .map(|param| resolve(columns, model.name(), param.column_name()))
                    .collect()
            })
            .collect();

        Self { simple, params }
    }

    pub(crate) fn simple(&self) -> &[Option<usize>] {
        &self.simple
    }

    pub(crate) fn params(&self, constructor: usize) -> &[Option<usize>] {
        self.params
            .get(constructor)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if at least one simple property has a column.
    pub(crate) fn is_mapped(&self) -> bool {
        self.simple.iter().any(Option::is_some)
    }
}

/// Matches `name` against a column named `name`, then `{model}_{name}`.
pub(crate) fn resolve(columns: &ColumnMap, model: &str, name: &str) -> Option<usize> {
    columns
        .get(name)
        .or_else(|| columns.get(&format!("{model}_{name}")))
}
