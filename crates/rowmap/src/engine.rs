mod accessor;
pub(crate) use accessor::Accessor;

mod columns;
pub(crate) use columns::{ColumnMap, Shape};

mod identity;
use identity::IdentityMaps;

mod key;
pub(crate) use key::KeyExtractor;

mod mapper;
pub(crate) use mapper::Mapping;

mod materializer;
pub use materializer::{Materializer, ReaderExt};

mod readers;
pub use readers::{Getter, Getters};

mod traversal;
pub(crate) use traversal::{Path, Traversal};
