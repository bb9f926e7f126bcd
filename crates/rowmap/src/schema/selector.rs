use super::Property;

/// The category a property falls into.
///
/// Every property is in exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A scalar stored in a single column.
    Simple,

    /// A single related entity (many-to-one).
    Complex,

    /// A list of related entities (one-to-many).
    Collection,
}

/// Indices of the properties in `category`, in declaration order.
pub(crate) fn select<T>(properties: &[Property<T>], category: Category) -> Vec<usize> {
    properties
        .iter()
        .enumerate()
        .filter(|(_, property)| property.category() == category)
        .map(|(index, _)| index)
        .collect()
}
