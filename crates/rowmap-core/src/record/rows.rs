use crate::{Decimal, Error, Reader, Record, Result, Uuid, Value};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::{collections::VecDeque, sync::Arc};

/// An in-memory result set: a list of column names and rows of [`Value`]s.
///
/// `Rows` is the reference [`Reader`] implementation. Rows are handed out in
/// insertion order and dropped as the cursor moves past them.
#[derive(Debug, Clone)]
pub struct Rows {
    columns: Arc<[String]>,
    pending: VecDeque<Vec<Value>>,
    current: Option<Row>,
}

/// A single row of [`Rows`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Rows {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            pending: VecDeque::new(),
            current: None,
        }
    }

    pub fn from_vec<I, S>(columns: I, rows: Vec<Vec<Value>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ret = Self::new(columns);
        for row in rows {
            ret.push(row);
        }
        ret
    }

    /// Appends a row. Short rows are padded with NULL; extra values are
    /// dropped.
    pub fn push(&mut self, mut values: Vec<Value>) -> &mut Self {
        values.resize(self.columns.len(), Value::Null);
        self.pending.push_back(values);
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows not yet read.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Reader for Rows {
    fn read(&mut self) -> Result<Option<&dyn Record>> {
        self.current = self.pending.pop_front().map(|values| Row {
            columns: self.columns.clone(),
            values,
        });
        Ok(self.current.as_ref().map(|row| row as &dyn Record))
    }
}

impl Row {
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    fn value(&self, ordinal: usize) -> Result<&Value> {
        self.values.get(ordinal).ok_or_else(|| {
            Error::record(
                ordinal,
                format!("ordinal out of range (field count {})", self.values.len()),
            )
        })
    }

    fn get<T>(&self, ordinal: usize) -> Result<T>
    where
        T: TryFrom<Value, Error = Error>,
    {
        T::try_from(self.value(ordinal)?.clone())
    }

    fn copy_from<T: Copy>(src: &[T], offset: usize, buffer: Option<&mut [T]>) -> usize {
        let Some(buffer) = buffer else {
            return src.len();
        };

        let src = src.get(offset..).unwrap_or_default();
        let len = src.len().min(buffer.len());
        buffer[..len].copy_from_slice(&src[..len]);
        len
    }
}

impl Record for Row {
    fn field_count(&self) -> usize {
        self.columns.len()
    }

    /// Panics if `ordinal` is out of range.
    fn name(&self, ordinal: usize) -> &str {
        &self.columns[ordinal]
    }

    fn is_null(&self, ordinal: usize) -> Result<bool> {
        Ok(self.value(ordinal)?.is_null())
    }

    fn get_bool(&self, ordinal: usize) -> Result<bool> {
        self.get(ordinal)
    }

    fn get_u8(&self, ordinal: usize) -> Result<u8> {
        self.get(ordinal)
    }

    fn get_char(&self, ordinal: usize) -> Result<char> {
        self.get(ordinal)
    }

    fn get_i16(&self, ordinal: usize) -> Result<i16> {
        self.get(ordinal)
    }

    fn get_i32(&self, ordinal: usize) -> Result<i32> {
        self.get(ordinal)
    }

    fn get_i64(&self, ordinal: usize) -> Result<i64> {
        self.get(ordinal)
    }

    fn get_f32(&self, ordinal: usize) -> Result<f32> {
        self.get(ordinal)
    }

    fn get_f64(&self, ordinal: usize) -> Result<f64> {
        self.get(ordinal)
    }

    fn get_decimal(&self, ordinal: usize) -> Result<Decimal> {
        self.get(ordinal)
    }

    fn get_datetime(&self, ordinal: usize) -> Result<NaiveDateTime> {
        self.get(ordinal)
    }

    fn get_date(&self, ordinal: usize) -> Result<NaiveDate> {
        self.get(ordinal)
    }

    fn get_timestamp(&self, ordinal: usize) -> Result<DateTime<Utc>> {
        self.get(ordinal)
    }

    fn get_uuid(&self, ordinal: usize) -> Result<Uuid> {
        self.get(ordinal)
    }

    fn get_string(&self, ordinal: usize) -> Result<String> {
        self.get(ordinal)
    }

    fn get_bytes(&self, ordinal: usize, offset: usize, buffer: Option<&mut [u8]>) -> Result<usize> {
        match self.value(ordinal)? {
            Value::Bytes(src) => Ok(Self::copy_from(src, offset, buffer)),
            value => Err(Error::type_conversion(value.clone(), "bytes")),
        }
    }

    fn get_chars(
        &self,
        ordinal: usize,
        offset: usize,
        buffer: Option<&mut [char]>,
    ) -> Result<usize> {
        match self.value(ordinal)? {
            Value::Chars(src) => Ok(Self::copy_from(src, offset, buffer)),
            Value::String(src) => {
                let src: Vec<char> = src.chars().collect();
                Ok(Self::copy_from(&src, offset, buffer))
            }
            value => Err(Error::type_conversion(value.clone(), "chars")),
        }
    }
}
