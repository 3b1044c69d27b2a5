//! Schema-driven delimited text reader.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::models::{DatasetKind, Record, RowValues, Schema};
use crate::{Error, Result};

const BOM: char = '\u{feff}';

/// Options controlling how files are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Reject records that fail their strict format rules (two-letter
    /// uppercase state codes).
    pub strict_state_codes: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            strict_state_codes: false,
        }
    }
}

impl ReaderOptions {
    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables strict state code checks.
    #[must_use]
    pub const fn with_strict_state_codes(mut self, strict: bool) -> Self {
        self.strict_state_codes = strict;
        self
    }
}

/// Reads delimited text into validated records.
///
/// The first line must be the schema's header, exactly and in order. Every
/// following non-blank line must have exactly as many columns as the schema,
/// and every cell must coerce to its declared type. Records keep file order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedReader {
    options: ReaderOptions,
}

impl DelimitedReader {
    /// Creates a reader with the given options.
    #[must_use]
    pub const fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Loads all records of type `T` from a file.
    ///
    /// The file handle lives only for the duration of this call.
    ///
    /// # Errors
    ///
    /// - [`Error::CensusFileProblem`] if the path is not a readable file
    /// - [`Error::UnableToParse`] if a cell fails coercion
    /// - the schema's structural error if the header or a row has the wrong shape
    pub fn load<T: Record>(&self, path: &Path) -> Result<Vec<T>> {
        let file = open(path)?;
        let records = self.read(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            dataset = %T::SCHEMA.kind,
            records = records.len(),
            "Parsed delimited file"
        );
        Ok(records)
    }

    /// Reads all records of type `T` from any byte source.
    ///
    /// # Errors
    ///
    /// Same classification as [`Self::load`], with read failures reported as
    /// [`Error::CensusFileProblem`].
    pub fn read<T: Record, R: Read>(&self, source: R) -> Result<Vec<T>> {
        let schema = T::SCHEMA;
        let mut reader = self.csv_reader(source);
        let mut row = csv::StringRecord::new();

        if !reader
            .read_record(&mut row)
            .map_err(|e| classify(e, schema.kind))?
        {
            return Err(schema.kind.structural_error(format!(
                "file is empty, expected header '{}'",
                schema.header_line()
            )));
        }
        check_header(schema, &row)?;

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        while reader
            .read_record(&mut row)
            .map_err(|e| classify(e, schema.kind))?
        {
            let line = row.position().map_or(0, csv::Position::line);
            let record: T = parse_row(schema, &row, line)?;

            if let Some(key) = record.unique_key() {
                if !seen.insert(key.to_string()) {
                    return Err(Error::UnableToParse(format!(
                        "line {line}: duplicate entry '{key}'"
                    )));
                }
            }
            if self.options.strict_state_codes {
                if let Some(violation) = record.strict_violation() {
                    return Err(Error::UnableToParse(format!("line {line}: {violation}")));
                }
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Reads only the header of a file and reports which dataset it holds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CensusFileProblem`] if the file cannot be read, or
    /// [`Error::FileError`] if the header matches no known schema.
    pub fn detect(&self, path: &Path) -> Result<DatasetKind> {
        let file = open(path)?;
        let mut reader = self.csv_reader(BufReader::new(file));
        let mut row = csv::StringRecord::new();
        let has_header = reader
            .read_record(&mut row)
            .map_err(|e| classify(e, DatasetKind::Census))?;

        let cells = header_cells(&row);
        let detected = if has_header {
            DatasetKind::detect(cells.iter().copied())
        } else {
            None
        };

        detected.ok_or_else(|| {
            Error::FileError(format!(
                "{}: header '{}' matches no known dataset",
                path.display(),
                cells.join(",")
            ))
        })
    }

    fn csv_reader<R: Read>(&self, source: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.options.delimiter)
            .flexible(true) // Column count is checked per row below
            .trim(csv::Trim::All)
            .from_reader(source)
    }
}

/// Opens a path for reading, rejecting anything that is not a regular file.
fn open(path: &Path) -> Result<File> {
    let problem = |cause: String| Error::CensusFileProblem(format!("{}: {cause}", path.display()));

    let metadata = std::fs::metadata(path).map_err(|e| problem(e.to_string()))?;
    if !metadata.is_file() {
        return Err(problem("not a regular file".to_string()));
    }
    File::open(path).map_err(|e| problem(e.to_string()))
}

fn header_cells(row: &csv::StringRecord) -> Vec<&str> {
    row.iter()
        .enumerate()
        .map(|(i, cell)| if i == 0 { cell.trim_start_matches(BOM) } else { cell })
        .collect()
}

fn check_header(schema: &Schema, row: &csv::StringRecord) -> Result<()> {
    let cells = header_cells(row);
    if schema.matches_header(cells.iter().copied()) {
        return Ok(());
    }
    Err(schema.kind.structural_error(format!(
        "header mismatch: expected '{}', found '{}'",
        schema.header_line(),
        cells.join(",")
    )))
}

fn parse_row<T: Record>(schema: &Schema, row: &csv::StringRecord, line: u64) -> Result<T> {
    if row.len() != schema.width() {
        return Err(schema.kind.structural_error(format!(
            "line {line}: expected {} columns, found {}",
            schema.width(),
            row.len()
        )));
    }

    let values = schema
        .columns
        .iter()
        .zip(row.iter())
        .map(|(column, raw)| Schema::coerce(column, raw, line))
        .collect::<Result<Vec<_>>>()?;

    T::from_values(RowValues::new(values, line))
}

/// Maps a low-level CSV failure onto the error taxonomy.
fn classify(err: csv::Error, kind: DatasetKind) -> Error {
    let message = err.to_string();
    match err.kind() {
        csv::ErrorKind::Io(_) => Error::CensusFileProblem(message),
        csv::ErrorKind::UnequalLengths { .. } => kind.structural_error(message),
        _ => Error::UnableToParse(message),
    }
}
