//! # Census Analyser
//!
//! Loads per-state census statistics and per-state code lookups from delimited
//! text files, validates them against fixed schemas, and renders sorted JSON
//! projections of either dataset.
//!
//! ## Pipeline
//!
//! - [`io::DelimitedReader`] validates the header, column count and field types
//!   of a file against a [`models::Schema`]
//! - [`services::DatasetStore`] owns the most recently loaded collection of each kind
//! - [`services::sort_records`] orders a collection in place by a caller-selected field
//! - [`io::export`] renders the ordered collection as a JSON array, optionally
//!   persisting it to a sink file
//!
//! ## Example
//!
//! ```rust,ignore
//! use census_analyser::{CensusAnalyser, CensusField, SortDirection, SortField};
//!
//! let mut analyser = CensusAnalyser::default();
//! analyser.load_census("IndiaStateCensusData.csv")?;
//! let json = analyser.sort_and_export(
//!     SortField::Census(CensusField::Population),
//!     SortDirection::Descending,
//!     None,
//! )?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod config;
pub mod io;
pub mod models;
pub mod observability;
pub mod services;

pub use config::AnalyserConfig;
pub use io::{DelimitedReader, JsonStyle, ReaderOptions};
pub use models::{CensusRecord, DatasetKind, Record, Schema, StateCodeRecord};
pub use services::{
    CensusAnalyser, CensusField, DatasetStore, SortDirection, SortField, StateCodeField,
    sort_records,
};

/// Error type for census analyser operations.
///
/// Every failure raised by the load, sort and export pipeline is classified
/// into exactly one of the first five variants. The remaining two only come
/// from the outer surfaces (configuration, CLI argument parsing, logging).
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `CensusFileProblem` | Path missing, not a file, or unreadable |
/// | `UnableToParse` | A field fails type coercion (non-numeric count, empty text) |
/// | `FileError` | Census file has the wrong header, delimiter or column count |
/// | `FileErrorInStateCode` | Same as `FileError`, for the state code schema |
/// | `NoData` | Sort or export requested before a successful non-empty load |
/// | `InvalidInput` | Unknown field, direction or dataset names |
/// | `OperationFailed` | Configuration or logging setup fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("census file problem: {0}")]
    CensusFileProblem(String),

    /// A field could not be coerced to its declared type.
    #[error("unable to parse: {0}")]
    UnableToParse(String),

    /// The file does not have the structural shape of the census schema.
    #[error("file error: {0}")]
    FileError(String),

    /// The file does not have the structural shape of the state code schema.
    #[error("file error in state code: {0}")]
    FileErrorInStateCode(String),

    /// No records are loaded for the requested dataset.
    #[error("no data: {0}")]
    NoData(String),

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation outside the core pipeline failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Classification tag of an [`Error`], for callers that branch on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::CensusFileProblem`].
    CensusFileProblem,
    /// See [`Error::UnableToParse`].
    UnableToParse,
    /// See [`Error::FileError`].
    FileError,
    /// See [`Error::FileErrorInStateCode`].
    FileErrorInStateCode,
    /// See [`Error::NoData`].
    NoData,
    /// See [`Error::InvalidInput`].
    InvalidInput,
    /// See [`Error::OperationFailed`].
    OperationFailed,
}

impl ErrorKind {
    /// Returns the stable upper-case tag for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CensusFileProblem => "CENSUS_FILE_PROBLEM",
            Self::UnableToParse => "UNABLE_TO_PARSE",
            Self::FileError => "FILE_ERROR",
            Self::FileErrorInStateCode => "FILE_ERROR_IN_STATE_CODE",
            Self::NoData => "NO_DATA",
            Self::InvalidInput => "INVALID_INPUT",
            Self::OperationFailed => "OPERATION_FAILED",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CensusFileProblem(_) => ErrorKind::CensusFileProblem,
            Self::UnableToParse(_) => ErrorKind::UnableToParse,
            Self::FileError(_) => ErrorKind::FileError,
            Self::FileErrorInStateCode(_) => ErrorKind::FileErrorInStateCode,
            Self::NoData(_) => ErrorKind::NoData,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::OperationFailed { .. } => ErrorKind::OperationFailed,
        }
    }
}

/// Result type alias for census analyser operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CensusFileProblem("missing.csv: not found".to_string());
        assert_eq!(err.to_string(), "census file problem: missing.csv: not found");

        let err = Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'read_config_file' failed: denied");

        let err = Error::NoData("census".to_string());
        assert_eq!(err.to_string(), "no data: census");
    }

    #[test]
    fn test_error_kind_tags() {
        assert_eq!(
            Error::FileErrorInStateCode(String::new()).kind().as_str(),
            "FILE_ERROR_IN_STATE_CODE"
        );
        assert_eq!(Error::UnableToParse(String::new()).kind(), ErrorKind::UnableToParse);
        assert_eq!(ErrorKind::NoData.to_string(), "NO_DATA");
    }
}
