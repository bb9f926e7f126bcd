use serde::Deserialize;

use std::collections::HashMap;

/// Registry-wide materialization settings.
///
/// `Config` deserializes from any serde format so it can be embedded in an
/// application's own configuration file:
///
/// ```
/// # use rowmap::{AccessorStrategy, Config, Membership};
/// let config: Config = serde_json::from_str(r#"{
///     "membership": "distinct",
///     "accessors": { "Money": "constructor" }
/// }"#).unwrap();
///
/// assert_eq!(config.membership, Membership::Distinct);
/// assert_eq!(config.strategy_for("Money"), Some(AccessorStrategy::Constructor));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Accessor strategy for every model, overriding each model's preference
    pub accessor: Option<AccessorStrategy>,

    /// Accessor strategy per model name, overriding `accessor`
    pub accessors: HashMap<String, AccessorStrategy>,

    /// How a constructor is picked when a model declares several
    pub constructor: ConstructorSelection,

    /// How children are added to one-to-many lists
    pub membership: Membership,
}

/// How an entity instance is built from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorStrategy {
    /// Instantiate without arguments, then assign simple properties.
    Property,

    /// Call a constructor with positional arguments.
    Constructor,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorSelection {
    /// The constructor with the most parameters; ties go to the first
    /// declared.
    #[default]
    MostParameters,

    /// The first declared constructor.
    First,
}

/// Membership policy for one-to-many lists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    /// Append the child for every row that produces it. Duplicate
    /// parent/child rows append the same instance more than once.
    #[default]
    Append,

    /// Skip a child that is already in the list.
    Distinct,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accessor(mut self, strategy: AccessorStrategy) -> Self {
        self.accessor = Some(strategy);
        self
    }

    pub fn accessor_for(mut self, model: impl Into<String>, strategy: AccessorStrategy) -> Self {
        self.accessors.insert(model.into(), strategy);
        self
    }

    pub fn constructor(mut self, selection: ConstructorSelection) -> Self {
        self.constructor = selection;
        self
    }

    pub fn membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }

    /// The configured strategy for `model`, if any.
    pub fn strategy_for(&self, model: &str) -> Option<AccessorStrategy> {
        self.accessors.get(model).copied().or(self.accessor)
    }
}
