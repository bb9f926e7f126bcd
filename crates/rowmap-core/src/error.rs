mod adhoc;
mod invalid_accessor_signature;
mod invalid_schema;
mod missing_required_value;
mod record;
mod type_conversion;
mod unsupported_type;

use adhoc::AdhocError;
use invalid_accessor_signature::InvalidAccessorSignature;
use invalid_schema::InvalidSchema;
use missing_required_value::MissingRequiredValue;
use record::RecordError;
use type_conversion::TypeConversionError;
use unsupported_type::UnsupportedType;

use std::{fmt, sync::Arc};

/// An error raised while reading records or building entity metadata.
///
/// `Error` is one pointer wide and cheap to clone. The registry caches a
/// failed build as an `Error` and returns it again on every later attempt.
///
/// Errors nest: [`context`](Error::context) wraps an error in a description
/// of what was being done, and displaying the error prints the outermost
/// context first, down to the root cause.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,

    /// The error this one wraps
    source: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Anyhow(anyhow::Error),
    InvalidAccessorSignature(InvalidAccessorSignature),
    InvalidSchema(InvalidSchema),
    MissingRequiredValue(MissingRequiredValue),
    Record(RecordError),
    TypeConversion(TypeConversionError),
    UnsupportedType(UnsupportedType),
}

/// An error followed by each error it wraps.
struct Chain<'a> {
    next: Option<&'a Error>,
}

impl Error {
    /// Wraps this error in `context`.
    ///
    /// `context` should be a fresh error with no source of its own. A context
    /// error that is shared or already wraps another is flattened into its
    /// message.
    pub fn context(self, context: Error) -> Error {
        let kind = match Arc::try_unwrap(context.inner) {
            Ok(ErrorInner { kind, source: None }) => kind,
            Ok(inner) => Self::flatten(Arc::new(inner)),
            Err(shared) => Self::flatten(shared),
        };

        Error {
            inner: Arc::new(ErrorInner {
                kind,
                source: Some(self),
            }),
        }
    }

    /// Returns `true` if both handles point to the same error.
    pub fn ptr_eq(this: &Error, other: &Error) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    fn flatten(inner: Arc<ErrorInner>) -> ErrorKind {
        ErrorKind::Adhoc(AdhocError::new(Error { inner }.to_string()))
    }

    fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Returns `true` if this error or any error it wraps matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(&err.inner.kind))
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<&'a Error> {
        let current = self.next?;
        self.next = current.inner.source.as_ref();
        Some(current)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match (&self.inner.kind, &self.inner.source) {
            (ErrorKind::Anyhow(err), _) => Some(err.as_ref()),
            (_, Some(source)) => Some(source),
            (_, None) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, err) in self.chain().enumerate() {
            if depth > 0 {
                f.write_str(": ")?;
            }
            fmt::Display::fmt(&err.inner.kind, f)?;
        }
        Ok(())
    }
}

/// `{:?}` prints the same message as `Display`; `{:#?}` lists every kind in
/// the chain.
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_list()
                .entries(self.chain().map(|err| &err.inner.kind))
                .finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let err: &dyn fmt::Display = match self {
            Self::Adhoc(err) => err,
            Self::Anyhow(err) => err,
            Self::InvalidAccessorSignature(err) => err,
            Self::InvalidSchema(err) => err,
            Self::MissingRequiredValue(err) => err,
            Self::Record(err) => err,
            Self::TypeConversion(err) => err,
            Self::UnsupportedType(err) => err,
        };
        err.fmt(f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, source: None }),
        }
    }
}

/// Transports that report failures through `anyhow` convert with `?`.
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        anyhow::Error::from(err).into()
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        anyhow::Error::from(err).into()
    }
}
