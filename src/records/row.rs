//! # Row - Ordered Named Columns
//!
//! A `Row` is the unit the codec encodes and decodes: an ordered list of
//! `(name, value)` columns. Order is significant and survives a round trip.
//! Names are expected to be unique within a row, but the codec does not
//! enforce it; `get` returns the first match.
//!
//! Columns are kept in a `SmallVec` so rows of typical width never allocate
//! for the column array itself.
//!
//! ```
//! use rowcodec::{Row, Value};
//!
//! let row = Row::new()
//!     .with("UserId", 42)
//!     .with("Name", "John Doe")
//!     .with("Active", true);
//!
//! assert_eq!(row.len(), 3);
//! assert_eq!(row.get("UserId"), Some(&Value::Int32(42)));
//! ```

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::config::{LENGTH_PREFIX_LEN, MARKER_LEN};
use crate::types::Value;

/// Columns stored inline before the row spills to the heap.
pub const INLINE_COLUMNS: usize = 8;

#[derive(Debug, Clone)]
pub struct Column<'a> {
    pub name: Cow<'a, str>,
    pub value: Value<'a>,
}

impl<'a> Column<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bytes this column occupies in an encoded row.
    pub fn encoded_len(&self) -> usize {
        LENGTH_PREFIX_LEN + self.name.len() + MARKER_LEN + self.value.payload_len()
    }

    pub fn into_owned(self) -> Column<'static> {
        Column {
            name: Cow::Owned(self.name.into_owned()),
            value: self.value.into_owned(),
        }
    }
}

impl<'a, 'b> PartialEq<Column<'b>> for Column<'a> {
    fn eq(&self, other: &Column<'b>) -> bool {
        self.name.as_ref() == other.name.as_ref() && self.value == other.value
    }
}

impl Eq for Column<'_> {}

#[derive(Debug, Clone, Default)]
pub struct Row<'a> {
    columns: SmallVec<[Column<'a>; INLINE_COLUMNS]>,
}

impl<'a> Row<'a> {
    pub fn new() -> Self {
        Self {
            columns: SmallVec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: SmallVec::with_capacity(capacity),
        }
    }

    /// Appends a column, keeping insertion order.
    pub fn push(&mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) {
        self.columns.push(Column::new(name, value));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push_column(&mut self, column: Column<'a>) {
        self.columns.push(column);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.columns.reserve(additional);
    }

    /// Returns the value of the first column with this name.
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.columns
            .iter()
            .find(|c| c.name.as_ref() == name)
            .map(|c| &c.value)
    }

    pub fn column(&self, index: usize) -> Option<&Column<'a>> {
        self.columns.get(index)
    }

    pub fn columns(&self) -> &[Column<'a>] {
        &self.columns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column<'a>> {
        self.columns.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_ref())
    }

    pub fn into_owned(self) -> Row<'static> {
        Row {
            columns: self.columns.into_iter().map(Column::into_owned).collect(),
        }
    }
}

impl<'a, 'b> PartialEq<Row<'b>> for Row<'a> {
    fn eq(&self, other: &Row<'b>) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(other.columns.iter())
                .all(|(a, b)| a == b)
    }
}

impl Eq for Row<'_> {}

impl<'a, N, V> FromIterator<(N, V)> for Row<'a>
where
    N: Into<Cow<'a, str>>,
    V: Into<Value<'a>>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Row {
            columns: iter
                .into_iter()
                .map(|(name, value)| Column::new(name, value))
                .collect(),
        }
    }
}

impl<'a> Extend<Column<'a>> for Row<'a> {
    fn extend<I: IntoIterator<Item = Column<'a>>>(&mut self, iter: I) {
        self.columns.extend(iter);
    }
}

impl<'r, 'a> IntoIterator for &'r Row<'a> {
    type Item = &'r Column<'a>;
    type IntoIter = std::slice::Iter<'r, Column<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

impl<'a> IntoIterator for Row<'a> {
    type Item = Column<'a>;
    type IntoIter = smallvec::IntoIter<[Column<'a>; INLINE_COLUMNS]>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}
