use super::Error;
use crate::Type;

/// Error when a simple property or constructor parameter has a type with no
/// entry in the value getter table.
///
/// Raised when the accessor for the owning entity is first built. The
/// registry caches it, so every later attempt fails the same way.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    ty: Type,
    slot: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported type: no getter registered for {} (used by {})",
            self.ty, self.slot
        )
    }
}

impl Error {
    /// Creates an unsupported type error for the given slot (`Model.field`).
    pub fn unsupported_type(ty: Type, slot: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            ty,
            slot: slot.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedType(_)))
    }
}
