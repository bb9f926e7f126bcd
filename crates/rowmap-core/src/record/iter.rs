use crate::{Reader, Record, Result};

/// Adapts an iterator of records into a [`Reader`].
///
/// This is the glue for transports that already expose rows as an iterator:
/// the current record is held by the adapter and lent out by `read`.
#[derive(Debug)]
pub struct IterReader<I, R> {
    iter: I,
    current: Option<R>,
}

impl<I, R> IterReader<I, R>
where
    I: Iterator<Item = Result<R>>,
    R: Record,
{
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            current: None,
        }
    }
}

impl<I, R> Reader for IterReader<I, R>
where
    I: Iterator<Item = Result<R>>,
    R: Record,
{
    fn read(&mut self) -> Result<Option<&dyn Record>> {
        self.current = self.iter.next().transpose()?;
        Ok(self.current.as_ref().map(|record| record as &dyn Record))
    }
}
