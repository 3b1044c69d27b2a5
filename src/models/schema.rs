//! Schema descriptors and typed field values.

use serde::Serialize;

use super::DatasetKind;
use crate::{Error, Result};

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Non-empty text.
    Text,
    /// Non-negative integer.
    Count,
}

impl FieldType {
    /// Returns a human-readable name used in parse errors.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Text => "non-empty text",
            Self::Count => "non-negative integer",
        }
    }
}

/// A single column of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Header text expected in the file.
    pub header: &'static str,
    /// Field name on the record (and key in exported JSON).
    pub field: &'static str,
    /// Declared type.
    pub field_type: FieldType,
}

impl Column {
    /// Creates a column descriptor.
    #[must_use]
    pub const fn new(header: &'static str, field: &'static str, field_type: FieldType) -> Self {
        Self {
            header,
            field,
            field_type,
        }
    }
}

/// Ordered set of columns a dataset file must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Dataset this schema describes.
    pub kind: DatasetKind,
    /// Columns in file order.
    pub columns: &'static [Column],
}

impl Schema {
    /// Returns the number of columns every row must have.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the expected header names in order.
    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.header)
    }

    /// Checks whether a header line matches this schema exactly, in order.
    ///
    /// Surrounding whitespace on each header cell is ignored.
    pub fn matches_header<'a, I>(&self, header: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut actual = header.into_iter();
        for expected in self.headers() {
            match actual.next() {
                Some(cell) if cell.trim() == expected => {},
                _ => return false,
            }
        }
        actual.next().is_none()
    }

    /// Renders the expected header line, for error messages.
    #[must_use]
    pub fn header_line(&self) -> String {
        self.headers().collect::<Vec<_>>().join(",")
    }

    /// Coerces one raw cell to the type declared for `column`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnableToParse`] if the cell is empty or, for count
    /// columns, not a non-negative integer.
    pub fn coerce(column: &Column, raw: &str, line: u64) -> Result<FieldValue> {
        let raw = raw.trim();
        let invalid = || {
            Error::UnableToParse(format!(
                "line {line}, column '{}': expected {}, found '{raw}'",
                column.header,
                column.field_type.describe()
            ))
        };

        if raw.is_empty() {
            return Err(invalid());
        }

        match column.field_type {
            FieldType::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldType::Count => raw
                .parse::<u64>()
                .map(FieldValue::Count)
                .map_err(|_| invalid()),
        }
    }
}

/// A coerced cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text value.
    Text(String),
    /// Integer value.
    Count(u64),
}

/// Typed values of one validated row, consumed in column order.
#[derive(Debug)]
pub struct RowValues {
    values: std::vec::IntoIter<FieldValue>,
    line: u64,
}

impl RowValues {
    /// Wraps the values produced for the row at `line`.
    #[must_use]
    pub fn new(values: Vec<FieldValue>, line: u64) -> Self {
        Self {
            values: values.into_iter(),
            line,
        }
    }

    /// Takes the next value as text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnableToParse`] if the next value is missing or not text.
    pub fn text(&mut self, field: &str) -> Result<String> {
        match self.values.next() {
            Some(FieldValue::Text(value)) => Ok(value),
            _ => Err(self.mismatch(field, FieldType::Text)),
        }
    }

    /// Takes the next value as a count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnableToParse`] if the next value is missing or not a count.
    pub fn count(&mut self, field: &str) -> Result<u64> {
        match self.values.next() {
            Some(FieldValue::Count(value)) => Ok(value),
            _ => Err(self.mismatch(field, FieldType::Count)),
        }
    }

    fn mismatch(&self, field: &str, expected: FieldType) -> Error {
        Error::UnableToParse(format!(
            "line {}, field '{field}': expected {}",
            self.line,
            expected.describe()
        ))
    }
}

/// A fixed-shape record loadable from a delimited file.
pub trait Record: Sized + Serialize {
    /// Schema rows must match.
    const SCHEMA: &'static Schema;

    /// Builds a record from the typed values of one row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnableToParse`] if the values do not line up with the schema.
    fn from_values(values: RowValues) -> Result<Self>;

    /// Key that must be unique within a loaded collection, if any.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    /// Describes a violation of the optional strict format rules.
    fn strict_violation(&self) -> Option<String> {
        None
    }
}
