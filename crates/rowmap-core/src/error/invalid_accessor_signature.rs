use super::Error;
use crate::Type;

/// Error when a custom getter is registered for a type it does not return.
#[derive(Debug)]
pub(super) struct InvalidAccessorSignature {
    getter: Box<str>,
    expected: Type,
    actual: Type,
}

impl std::error::Error for InvalidAccessorSignature {}

impl core::fmt::Display for InvalidAccessorSignature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid accessor signature: getter `{}` returns {} but was registered for {}",
            self.getter, self.actual, self.expected
        )
    }
}

impl Error {
    /// Creates an invalid accessor signature error.
    pub fn invalid_accessor_signature(getter: &str, expected: Type, actual: Type) -> Error {
        Error::from(super::ErrorKind::InvalidAccessorSignature(
            InvalidAccessorSignature {
                getter: getter.into(),
                expected,
                actual,
            },
        ))
    }

    /// Returns `true` if this error is an invalid accessor signature error.
    pub fn is_invalid_accessor_signature(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidAccessorSignature(_)))
    }
}
