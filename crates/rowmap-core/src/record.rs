mod iter;
pub use iter::IterReader;

mod rows;
pub use rows::{Row, Rows};

use crate::{Decimal, Result, Uuid};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// One row of a query result, addressable by field ordinal.
///
/// A record is immutable for as long as it is borrowed from its
/// [`Reader`]. Ordinals are zero-based and must be less than
/// [`field_count`](Record::field_count); getters report out-of-range ordinals
/// and mismatched column types as errors. [`name`](Record::name) is the one
/// exception and expects an ordinal in range.
pub trait Record {
    /// Number of fields in the record.
    fn field_count(&self) -> usize;

    /// Name of the field at `ordinal`.
    ///
    /// Unlike the getters, this does not check its argument: `ordinal` must
    /// be less than `field_count()`, and implementations may panic otherwise.
    fn name(&self, ordinal: usize) -> &str;

    /// Returns `true` if the field at `ordinal` is NULL.
    fn is_null(&self, ordinal: usize) -> Result<bool>;

    fn get_bool(&self, ordinal: usize) -> Result<bool>;

    fn get_u8(&self, ordinal: usize) -> Result<u8>;

    fn get_char(&self, ordinal: usize) -> Result<char>;

    fn get_i16(&self, ordinal: usize) -> Result<i16>;

    fn get_i32(&self, ordinal: usize) -> Result<i32>;

    fn get_i64(&self, ordinal: usize) -> Result<i64>;

    fn get_f32(&self, ordinal: usize) -> Result<f32>;

    fn get_f64(&self, ordinal: usize) -> Result<f64>;

    fn get_decimal(&self, ordinal: usize) -> Result<Decimal>;

    fn get_datetime(&self, ordinal: usize) -> Result<NaiveDateTime>;

    fn get_date(&self, ordinal: usize) -> Result<NaiveDate>;

    fn get_timestamp(&self, ordinal: usize) -> Result<DateTime<Utc>>;

    fn get_uuid(&self, ordinal: usize) -> Result<Uuid>;

    fn get_string(&self, ordinal: usize) -> Result<String>;

    /// Copies bytes of the field at `ordinal`, starting at `offset`, into
    /// `buffer` and returns the number copied.
    ///
    /// With `buffer` set to `None` nothing is copied and the total length of
    /// the field is returned.
    fn get_bytes(&self, ordinal: usize, offset: usize, buffer: Option<&mut [u8]>) -> Result<usize>;

    /// Character counterpart of [`get_bytes`](Record::get_bytes).
    fn get_chars(&self, ordinal: usize, offset: usize, buffer: Option<&mut [char]>)
        -> Result<usize>;
}

/// A forward-only, single-pass sequence of records.
///
/// Each call to [`read`](Reader::read) advances the cursor; the returned
/// record is only valid until the next call. Implementations never rewind.
pub trait Reader {
    /// Advances to the next record, returning `None` once exhausted.
    fn read(&mut self) -> Result<Option<&dyn Record>>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    fn read(&mut self) -> Result<Option<&dyn Record>> {
        (**self).read()
    }
}

impl<R: Reader + ?Sized> Reader for Box<R> {
    fn read(&mut self) -> Result<Option<&dyn Record>> {
        (**self).read()
    }
}
