use super::{Getter, Getters, Mapping};
use crate::{
    schema::{Arg, Args},
    AccessorStrategy, ConstructorSelection, Model, Result,
};

use rowmap_core::{Error, Record, Type, Value};

use std::sync::Arc;

/// A compiled routine that builds an instance of `T` from a record and the
/// ordinals of a [`Mapping`].
///
/// Getters are resolved when the accessor is built, so a slot with an
/// unsupported type fails here rather than on the first row that reaches it.
pub(crate) struct Accessor<T> {
    model: Arc<Model<T>>,
    kind: Kind<T>,
}

enum Kind<T> {
    Property {
        instantiate: fn() -> T,
        /// One slot per simple property
        slots: Vec<Slot>,
    },
    Constructor {
        index: usize,
        /// One slot per constructor parameter
        slots: Vec<Slot>,
    },
}

struct Slot {
    /// Index of the property, or of the parameter
    index: usize,
    name: &'static str,
    ty: Type,
    nullable: bool,
    getter: Getter,
}

impl<T> Accessor<T> {
    pub(crate) fn build(
        model: Arc<Model<T>>,
        strategy: AccessorStrategy,
        selection: ConstructorSelection,
        getters: &Getters,
    ) -> Result<Self> {
        let kind = match strategy {
            AccessorStrategy::Property => {
                let Some(instantiate) = model.instantiate else {
                    return Err(Error::invalid_schema(format!(
                        "model `{}` has no parameterless instantiation for the property accessor",
                        model.name
                    )));
                };

                let slots = model
                    .simple
                    .iter()
                    .filter_map(|&index| {
                        let property = &model.properties[index];
                        let ty = property.ty()?;
                        Some(Slot::new(
                            &model,
                            index,
                            property.name,
                            ty,
                            property.is_nullable(),
                            getters,
                        ))
                    })
                    .collect::<Result<_>>()?;

                Kind::Property { instantiate, slots }
            }
            AccessorStrategy::Constructor => {
                let Some(index) = model.select_constructor(selection) else {
                    return Err(Error::invalid_schema(format!(
                        "model `{}` has no constructor for the constructor accessor",
                        model.name
                    )));
                };

                let slots = model.constructors[index]
                    .params()
                    .iter()
                    .enumerate()
                    .map(|(i, param)| {
                        Slot::new(&model, i, param.name(), param.ty(), param.is_nullable(), getters)
                    })
                    .collect::<Result<_>>()?;

                Kind::Constructor { index, slots }
            }
        };

        Ok(Self { model, kind })
    }

    pub(crate) fn strategy(&self) -> AccessorStrategy {
        match self.kind {
            Kind::Property { .. } => AccessorStrategy::Property,
            Kind::Constructor { .. } => AccessorStrategy::Constructor,
        }
    }

    pub(crate) fn read(&self, record: &dyn Record, mapping: &Mapping) -> Result<T> {
        match &self.kind {
            Kind::Property { instantiate, slots } => {
                let mut instance = instantiate();

                for (slot, ordinal) in slots.iter().zip(mapping.simple()) {
                    // Unmapped and NULL columns leave the property at its default
                    let Some(ordinal) = *ordinal else { continue };

                    if record.is_null(ordinal)? {
                        continue;
                    }

                    let value = slot.getter.read(record, ordinal)?;
                    self.model.properties[slot.index].assign(&mut instance, value)?;
                }

                Ok(instance)
            }
            Kind::Constructor { index, slots } => {
                let mut args = Vec::with_capacity(slots.len());

                for (slot, ordinal) in slots.iter().zip(mapping.params(*index)) {
                    args.push(self.arg(slot, record, *ordinal)?);
                }

                self.model.constructors[*index].call(Args::new(args))
            }
        }
    }

    fn arg(&self, slot: &Slot, record: &dyn Record, ordinal: Option<usize>) -> Result<Arg> {
        let Some(ordinal) = ordinal else {
            return Ok(Arg::Default);
        };

        if !record.is_null(ordinal)? {
            return Ok(Arg::Value(slot.getter.read(record, ordinal)?));
        }

        if slot.nullable {
            Ok(Arg::Value(Value::Null))
        } else if slot.ty.is_reference() {
            Ok(Arg::Default)
        } else {
            Err(Error::missing_required_value(self.model.name, slot.name))
        }
    }
}

impl Slot {
    fn new<T>(
        model: &Model<T>,
        index: usize,
        name: &'static str,
        ty: Type,
        nullable: bool,
        getters: &Getters,
    ) -> Result<Self> {
        let Some(getter) = getters.get(ty) else {
            return Err(Error::unsupported_type(ty, format!("{}.{}", model.name, name)));
        };

        Ok(Self {
            index,
            name,
            ty,
            nullable,
            getter: getter.clone(),
        })
    }
}
