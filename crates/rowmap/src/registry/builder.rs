use super::Registry;
use crate::{Config, Getter, Getters, Primitive, Result};

use rowmap_core::{Error, Type};

use tracing::debug;

/// Builds a [`Registry`].
#[derive(Debug, Default, Clone)]
pub struct Builder {
    config: Config,
    getters: Getters,
}

impl Builder {
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Registers `getter` for slots of type `ty`, replacing the default.
    ///
    /// The getter must return `ty`; otherwise it is rejected here, before any
    /// record is read.
    pub fn getter(&mut self, ty: Type, getter: Getter) -> Result<&mut Self> {
        if getter.returns() != ty {
            return Err(Error::invalid_accessor_signature(
                getter.name(),
                ty,
                getter.returns(),
            ));
        }

        debug!(getter = getter.name(), %ty, "registered getter");
        self.getters.insert(getter);
        Ok(self)
    }

    /// Registers `getter` for the primitive type `P`.
    pub fn getter_for<P: Primitive>(&mut self, getter: Getter) -> Result<&mut Self> {
        self.getter(P::TYPE, getter)
    }

    pub fn build(&self) -> Registry {
        Registry::from_parts(self.config.clone(), self.getters.clone())
    }
}
