use super::Error;

/// Error raised by a [`Record`](crate::Record) implementation while reading a
/// field.
#[derive(Debug)]
pub(super) struct RecordError {
    ordinal: usize,
    message: Box<str>,
}

impl std::error::Error for RecordError {}

impl core::fmt::Display for RecordError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "record access failed at ordinal {}: {}",
            self.ordinal, self.message
        )
    }
}

impl Error {
    /// Creates a record access error for the field at `ordinal`.
    pub fn record(ordinal: usize, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Record(RecordError {
            ordinal,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a record access error.
    pub fn is_record(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Record(_)))
    }
}
