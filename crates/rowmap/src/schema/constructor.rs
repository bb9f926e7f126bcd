use crate::{Primitive, Result};

use rowmap_core::{err, Type, Value};

use std::fmt;

/// A positional constructor of entity `T`.
pub struct Constructor<T> {
    pub(crate) params: Vec<Param>,
    pub(crate) construct: Box<dyn Fn(Args) -> Result<T> + Send + Sync>,
}

/// One constructor parameter.
///
/// Parameters are matched against columns by name, the same way simple
/// properties are.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: &'static str,
    column: Option<&'static str>,
    ty: Type,
    nullable: bool,
}

/// Arguments assembled for one constructor call.
#[derive(Debug)]
pub struct Args {
    values: Vec<Arg>,
}

#[derive(Debug)]
pub(crate) enum Arg {
    /// The parameter type's default value.
    Default,
    Value(Value),
}

impl<T> Constructor<T> {
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub(crate) fn call(&self, args: Args) -> Result<T> {
        (self.construct)(args)
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Constructor")
            .field("params", &self.params)
            .finish()
    }
}

impl Param {
    /// A parameter of primitive type `V`.
    pub fn of<V: Primitive>(name: &'static str) -> Self {
        Self {
            name,
            column: None,
            ty: V::TYPE,
            nullable: V::NULLABLE,
        }
    }

    /// Matches the parameter against `column` instead of its name.
    pub fn column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn column_name(&self) -> &'static str {
        self.column.unwrap_or(self.name)
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl Args {
    pub(crate) fn new(values: Vec<Arg>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Takes the argument at `index`, loading it as `V`.
    ///
    /// A defaulted argument yields `V::default()`.
    pub fn get<V: Primitive>(&mut self, index: usize) -> Result<V> {
        let len = self.values.len();
        let Some(arg) = self.values.get_mut(index) else {
            return Err(err!(
                "constructor argument {index} out of range ({len} arguments)"
            ));
        };

        match std::mem::replace(arg, Arg::Default) {
            Arg::Default => Ok(V::default()),
            Arg::Value(value) => V::load(value),
        }
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values.into_iter().map(Arg::Value).collect())
    }
}
