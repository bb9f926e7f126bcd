use super::{Builder, Category, Constructor, Property};
use crate::{AccessorStrategy, ConstructorSelection};

use std::fmt;

/// Describes an entity type: its name, properties and constructors.
///
/// A model is built once per type by [`Entity::model`](crate::Entity::model)
/// and shared by every materialization afterwards.
pub struct Model<T> {
    /// Type name, used for the `Type_Property` column fallback
    pub(crate) name: &'static str,

    pub(crate) properties: Vec<Property<T>>,

    /// Indices into `properties`, per category
    pub(crate) simple: Vec<usize>,
    pub(crate) complex: Vec<usize>,
    pub(crate) collection: Vec<usize>,

    /// Parameterless construction for the property accessor
    pub(crate) instantiate: Option<fn() -> T>,

    pub(crate) constructors: Vec<Constructor<T>>,

    /// Accessor strategy requested by the model itself
    pub(crate) strategy: Option<AccessorStrategy>,
}

impl<T> Model<T> {
    pub fn builder(name: &'static str) -> Builder<T> {
        Builder::new(name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn properties(&self) -> &[Property<T>] {
        &self.properties
    }

    /// Find a property by name
    pub fn property(&self, name: &str) -> Option<&Property<T>> {
        self.properties
            .iter()
            .find(|property| property.name.eq_ignore_ascii_case(name))
    }

    /// Properties in `category`, in declaration order.
    pub fn select(&self, category: Category) -> impl Iterator<Item = &Property<T>> + '_ {
        let indices = match category {
            Category::Simple => &self.simple,
            Category::Complex => &self.complex,
            Category::Collection => &self.collection,
        };

        indices.iter().map(|&index| &self.properties[index])
    }

    pub fn simple(&self) -> impl Iterator<Item = &Property<T>> + '_ {
        self.select(Category::Simple)
    }

    /// Complex properties followed by collection properties.
    pub(crate) fn relations(&self) -> impl Iterator<Item = usize> + '_ {
        self.complex.iter().chain(&self.collection).copied()
    }

    pub fn constructors(&self) -> &[Constructor<T>] {
        &self.constructors
    }

    /// The strategy used when configuration does not override it.
    ///
    /// Models that can be instantiated without arguments use the property
    /// accessor unless they request otherwise.
    pub fn preferred_strategy(&self) -> AccessorStrategy {
        match self.strategy {
            Some(strategy) => strategy,
            None if self.instantiate.is_some() => AccessorStrategy::Property,
            None => AccessorStrategy::Constructor,
        }
    }

    /// Index of the constructor picked by `selection`.
    pub(crate) fn select_constructor(&self, selection: ConstructorSelection) -> Option<usize> {
        if self.constructors.is_empty() {
            return None;
        }

        Some(match selection {
            ConstructorSelection::First => 0,
            ConstructorSelection::MostParameters => {
                let mut best = 0;

                // Ties keep the earliest declaration
                for (index, constructor) in self.constructors.iter().enumerate() {
                    if constructor.params.len() > self.constructors[best].params.len() {
                        best = index;
                    }
                }

                best
            }
        })
    }
}

impl<T> fmt::Debug for Model<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Model")
            .field("name", &self.name)
            .field("properties", &self.properties)
            .field("constructors", &self.constructors)
            .field("instantiate", &self.instantiate.is_some())
            .field("strategy", &self.strategy)
            .finish()
    }
}
