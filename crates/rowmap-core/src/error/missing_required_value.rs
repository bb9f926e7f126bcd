use super::Error;

/// Error when a constructor parameter of a non-nullable value type reads NULL.
#[derive(Debug)]
pub(super) struct MissingRequiredValue {
    model: Box<str>,
    param: Box<str>,
}

impl std::error::Error for MissingRequiredValue {}

impl core::fmt::Display for MissingRequiredValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing required value for {}.{}",
            self.model, self.param
        )
    }
}

impl Error {
    /// Creates a missing required value error.
    pub fn missing_required_value(model: &str, param: &str) -> Error {
        Error::from(super::ErrorKind::MissingRequiredValue(MissingRequiredValue {
            model: model.into(),
            param: param.into(),
        }))
    }

    /// Returns `true` if this error is a missing required value error.
    pub fn is_missing_required_value(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingRequiredValue(_)))
    }
}
