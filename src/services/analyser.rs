//! Session facade over the load, sort and export pipeline.

use std::path::{Path, PathBuf};

use tracing::instrument;

use super::sort::{CensusField, SortDirection, SortField, StateCodeField, sort_records};
use super::store::DatasetStore;
use crate::config::AnalyserConfig;
use crate::io::{self, DelimitedReader, JsonStyle};
use crate::models::DatasetKind;
use crate::Result;

/// One analysis session: a dataset store plus export settings.
///
/// # Example
///
/// ```rust,ignore
/// let mut analyser = CensusAnalyser::new(&AnalyserConfig::default());
/// analyser.load_census("IndiaStateCensusData.csv")?;
/// let json = analyser.population_wise_sorted_census()?;
/// ```
#[derive(Debug)]
pub struct CensusAnalyser {
    store: DatasetStore,
    json_style: JsonStyle,
    output_dir: Option<PathBuf>,
}

impl Default for CensusAnalyser {
    fn default() -> Self {
        Self::new(&AnalyserConfig::default())
    }
}

impl CensusAnalyser {
    /// Creates an empty session configured from `config`.
    #[must_use]
    pub fn new(config: &AnalyserConfig) -> Self {
        Self {
            store: DatasetStore::new(DelimitedReader::new(config.reader_options())),
            json_style: config.json_style,
            output_dir: config.output_dir.clone(),
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Loads the census file at `path` and returns the record count.
    ///
    /// # Errors
    ///
    /// Returns the classified load error; the previous census collection is kept.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_census(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.load(DatasetKind::Census, path.as_ref())
    }

    /// Loads the state code file at `path` and returns the record count.
    ///
    /// # Errors
    ///
    /// Returns the classified load error; the previous state code collection is kept.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_state_codes(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.load(DatasetKind::StateCode, path.as_ref())
    }

    /// Loads a file of either kind, picking the schema from its header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CensusFileProblem`](crate::Error::CensusFileProblem)
    /// for unreadable paths and [`Error::FileError`](crate::Error::FileError)
    /// when the header matches neither schema.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_any(&mut self, path: impl AsRef<Path>) -> Result<(DatasetKind, usize)> {
        let path = path.as_ref();
        let kind = self
            .store
            .reader()
            .detect(path)
            .inspect_err(|e| tracing::warn!(kind = %e.kind(), error = %e, "Dataset detection failed"))?;
        let count = self.load(kind, path)?;
        Ok((kind, count))
    }

    /// Loads `path` as the given dataset kind.
    ///
    /// # Errors
    ///
    /// Returns the classified load error.
    pub fn load(&mut self, kind: DatasetKind, path: &Path) -> Result<usize> {
        let count = self.store.load(kind, path).inspect_err(|e| {
            tracing::warn!(dataset = %kind, kind = %e.kind(), error = %e, "Load failed");
        })?;
        tracing::info!(dataset = %kind, path = %path.display(), records = count, "Loaded dataset");
        Ok(count)
    }

    /// Reorders the collection `field` belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`](crate::Error::NoData) if that collection is
    /// not loaded or empty.
    pub fn sort(&mut self, field: SortField, direction: SortDirection) -> Result<()> {
        let rows = match field {
            SortField::Census(key) => {
                let records = self.store.census_mut()?;
                sort_records(records, &key, direction);
                records.len()
            },
            SortField::StateCode(key) => {
                let records = self.store.state_codes_mut()?;
                sort_records(records, &key, direction);
                records.len()
            },
        };
        tracing::debug!(%field, %direction, rows, "Sorted dataset");
        Ok(())
    }

    /// Renders the current order of a collection, optionally writing it to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`](crate::Error::NoData) for an unloaded or
    /// empty collection and [`Error::FileError`](crate::Error::FileError) if
    /// the sink cannot be written.
    pub fn export(&self, kind: DatasetKind, sink: Option<&Path>) -> Result<String> {
        match (kind, sink) {
            (DatasetKind::Census, None) => io::to_json(self.store.census()?, self.json_style),
            (DatasetKind::Census, Some(sink)) => {
                io::to_json_file(self.store.census()?, sink, self.json_style)
            },
            (DatasetKind::StateCode, None) => {
                io::to_json(self.store.state_codes()?, self.json_style)
            },
            (DatasetKind::StateCode, Some(sink)) => {
                io::to_json_file(self.store.state_codes()?, sink, self.json_style)
            },
        }
    }

    /// Sorts the collection `field` belongs to and renders it as JSON.
    ///
    /// # Errors
    ///
    /// See [`Self::sort`] and [`Self::export`].
    #[instrument(skip(self, sink))]
    pub fn sort_and_export(
        &mut self,
        field: SortField,
        direction: SortDirection,
        sink: Option<&Path>,
    ) -> Result<String> {
        self.sort(field, direction)
            .and_then(|()| self.export(field.kind(), sink))
            .inspect_err(|e| tracing::warn!(kind = %e.kind(), error = %e, "Export failed"))
    }

    /// Census records by state name, ascending.
    ///
    /// # Errors
    ///
    /// See [`Self::sort_and_export`].
    pub fn state_wise_sorted_census(&mut self) -> Result<String> {
        self.projection(SortField::Census(CensusField::State))
    }

    /// Census records by population, largest first. Also written to
    /// `census_by_population.json` in the output directory, when configured.
    ///
    /// # Errors
    ///
    /// See [`Self::sort_and_export`].
    pub fn population_wise_sorted_census(&mut self) -> Result<String> {
        self.projection(SortField::Census(CensusField::Population))
    }

    /// Census records by density, largest first. Also written to
    /// `census_by_density.json` in the output directory, when configured.
    ///
    /// # Errors
    ///
    /// See [`Self::sort_and_export`].
    pub fn density_wise_sorted_census(&mut self) -> Result<String> {
        self.projection(SortField::Census(CensusField::Density))
    }

    /// Census records by area, largest first. Also written to
    /// `census_by_area.json` in the output directory, when configured.
    ///
    /// # Errors
    ///
    /// See [`Self::sort_and_export`].
    pub fn area_wise_sorted_census(&mut self) -> Result<String> {
        self.projection(SortField::Census(CensusField::Area))
    }

    /// State code records by code, ascending.
    ///
    /// # Errors
    ///
    /// See [`Self::sort_and_export`].
    pub fn state_code_wise_sorted(&mut self) -> Result<String> {
        self.projection(SortField::StateCode(StateCodeField::StateCode))
    }

    fn projection(&mut self, field: SortField) -> Result<String> {
        let sink = field
            .default_sink_name()
            .zip(self.output_dir.as_deref())
            .map(|(name, dir)| dir.join(name));
        self.sort_and_export(field, field.natural_direction(), sink.as_deref())
    }
}
