use super::{selector, Args, Category, Constructor, Model, Param, Property};
use crate::{AccessorStrategy, Field, Result};

use rowmap_core::Error;

use std::collections::HashSet;

/// Builds a [`Model`].
///
/// Problems found while describing the model are collected and reported by
/// [`build`](Builder::build).
pub struct Builder<T> {
    name: &'static str,
    properties: Vec<Property<T>>,
    instantiate: Option<fn() -> T>,
    constructors: Vec<Constructor<T>>,
    strategy: Option<AccessorStrategy>,
    errors: Vec<String>,
}

impl<T> Builder<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            properties: vec![],
            instantiate: None,
            constructors: vec![],
            strategy: None,
            errors: vec![],
        }
    }

    /// Adds a property. Its category follows from the field type `F`.
    pub fn field<F: Field<T>>(
        mut self,
        name: &'static str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self {
        self.properties.push(Property {
            name,
            column: None,
            kind: F::kind(get, get_mut),
        });
        self
    }

    /// Overrides the column name of the most recently added property.
    pub fn column(mut self, column: &'static str) -> Self {
        match self.properties.last_mut() {
            Some(property) => property.column = Some(column),
            None => self
                .errors
                .push(format!("column `{column}` set before any property")),
        }
        self
    }

    /// Sets the parameterless instantiation used by the property accessor.
    pub fn instantiate(mut self, instantiate: fn() -> T) -> Self {
        self.instantiate = Some(instantiate);
        self
    }

    /// Adds a constructor taking `params` in order.
    pub fn constructor<F>(mut self, params: impl IntoIterator<Item = Param>, construct: F) -> Self
    where
        F: Fn(Args) -> Result<T> + Send + Sync + 'static,
    {
        self.constructors.push(Constructor {
            params: params.into_iter().collect(),
            construct: Box::new(construct),
        });
        self
    }

    /// Requests an accessor strategy for this model.
    pub fn accessor(mut self, strategy: AccessorStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(mut self) -> Result<Model<T>> {
        let mut seen = HashSet::new();
        for property in &self.properties {
            if !seen.insert(property.name.to_ascii_lowercase()) {
                self.errors
                    .push(format!("duplicate property `{}`", property.name));
            }
        }

        if self.instantiate.is_none() && self.constructors.is_empty() {
            self.errors
                .push("no parameterless instantiation and no constructor".to_string());
        }

        match self.strategy {
            Some(AccessorStrategy::Property) if self.instantiate.is_none() => self
                .errors
                .push("property accessor requested without an instantiation".to_string()),
            Some(AccessorStrategy::Constructor) if self.constructors.is_empty() => self
                .errors
                .push("constructor accessor requested without a constructor".to_string()),
            _ => {}
        }

        if !self.errors.is_empty() {
            return Err(Error::invalid_schema(format!(
                "model `{}`: {}",
                self.name,
                self.errors.join("; ")
            )));
        }

        Ok(Model {
            name: self.name,
            simple: selector::select(&self.properties, Category::Simple),
            complex: selector::select(&self.properties, Category::Complex),
            collection: selector::select(&self.properties, Category::Collection),
            properties: self.properties,
            instantiate: self.instantiate,
            constructors: self.constructors,
            strategy: self.strategy,
        })
    }
}
