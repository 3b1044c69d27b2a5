//! In-memory holder for the loaded datasets.

use std::path::Path;

use crate::io::DelimitedReader;
use crate::models::{CensusRecord, DatasetKind, Record, StateCodeRecord};
use crate::{Error, Result};

/// Owns the most recent collection of each dataset kind.
///
/// A load replaces the collection of its kind only once the whole file has
/// been validated; a failed load leaves the previous collection in place.
#[derive(Debug, Default)]
pub struct DatasetStore {
    reader: DelimitedReader,
    census: Option<Vec<CensusRecord>>,
    state_codes: Option<Vec<StateCodeRecord>>,
}

impl DatasetStore {
    /// Creates an empty store that loads files with `reader`.
    #[must_use]
    pub const fn new(reader: DelimitedReader) -> Self {
        Self {
            reader,
            census: None,
            state_codes: None,
        }
    }

    /// Returns the reader used for loads.
    #[must_use]
    pub const fn reader(&self) -> &DelimitedReader {
        &self.reader
    }

    /// Loads census records from `path`, returning how many were stored.
    ///
    /// # Errors
    ///
    /// Propagates the reader's classified error.
    pub fn load_census(&mut self, path: &Path) -> Result<usize> {
        let records = self.reader.load::<CensusRecord>(path)?;
        Ok(self.replace_census(records))
    }

    /// Loads state code records from `path`, returning how many were stored.
    ///
    /// # Errors
    ///
    /// Propagates the reader's classified error.
    pub fn load_state_codes(&mut self, path: &Path) -> Result<usize> {
        let records = self.reader.load::<StateCodeRecord>(path)?;
        Ok(self.replace_state_codes(records))
    }

    /// Loads `path` as the given dataset kind.
    ///
    /// # Errors
    ///
    /// Propagates the reader's classified error.
    pub fn load(&mut self, kind: DatasetKind, path: &Path) -> Result<usize> {
        match kind {
            DatasetKind::Census => self.load_census(path),
            DatasetKind::StateCode => self.load_state_codes(path),
        }
    }

    /// Replaces the census collection with already validated records.
    pub fn replace_census(&mut self, records: Vec<CensusRecord>) -> usize {
        let count = records.len();
        self.census = Some(records);
        count
    }

    /// Replaces the state code collection with already validated records.
    pub fn replace_state_codes(&mut self, records: Vec<StateCodeRecord>) -> usize {
        let count = records.len();
        self.state_codes = Some(records);
        count
    }

    /// Returns the loaded census records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`] if nothing (or an empty file) was loaded.
    pub fn census(&self) -> Result<&[CensusRecord]> {
        require(self.census.as_deref(), DatasetKind::Census)
    }

    /// Returns the loaded census records for reordering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`] if nothing (or an empty file) was loaded.
    pub fn census_mut(&mut self) -> Result<&mut [CensusRecord]> {
        require_mut(self.census.as_deref_mut(), DatasetKind::Census)
    }

    /// Returns the loaded state code records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`] if nothing (or an empty file) was loaded.
    pub fn state_codes(&self) -> Result<&[StateCodeRecord]> {
        require(self.state_codes.as_deref(), DatasetKind::StateCode)
    }

    /// Returns the loaded state code records for reordering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`] if nothing (or an empty file) was loaded.
    pub fn state_codes_mut(&mut self) -> Result<&mut [StateCodeRecord]> {
        require_mut(self.state_codes.as_deref_mut(), DatasetKind::StateCode)
    }

    /// Number of census records held (0 when none are loaded).
    #[must_use]
    pub fn census_count(&self) -> usize {
        self.census.as_ref().map_or(0, Vec::len)
    }

    /// Number of state code records held (0 when none are loaded).
    #[must_use]
    pub fn state_code_count(&self) -> usize {
        self.state_codes.as_ref().map_or(0, Vec::len)
    }

    /// Number of records held for `kind`.
    #[must_use]
    pub fn count(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Census => self.census_count(),
            DatasetKind::StateCode => self.state_code_count(),
        }
    }

    /// Whether a load of `kind` has succeeded, even if it stored no records.
    #[must_use]
    pub const fn is_loaded(&self, kind: DatasetKind) -> bool {
        match kind {
            DatasetKind::Census => self.census.is_some(),
            DatasetKind::StateCode => self.state_codes.is_some(),
        }
    }
}

fn no_data(records: Option<usize>, kind: DatasetKind) -> Error {
    match records {
        None => Error::NoData(format!("no {kind} data loaded")),
        Some(_) => Error::NoData(format!("{kind} data is empty")),
    }
}

fn require<T: Record>(records: Option<&[T]>, kind: DatasetKind) -> Result<&[T]> {
    match records {
        Some(records) if !records.is_empty() => Ok(records),
        other => Err(no_data(other.map(<[T]>::len), kind)),
    }
}

fn require_mut<T: Record>(records: Option<&mut [T]>, kind: DatasetKind) -> Result<&mut [T]> {
    match records {
        Some(records) if !records.is_empty() => Ok(records),
        other => Err(no_data(other.map(|r| r.len()), kind)),
    }
}
