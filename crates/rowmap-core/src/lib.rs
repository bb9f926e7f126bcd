#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod record;
pub use record::{IterReader, Reader, Record, Row, Rows};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_conv;

/// A Result type alias that uses Rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use rust_decimal::Decimal;
pub use uuid::Uuid;
