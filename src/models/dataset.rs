//! Dataset kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CensusRecord, Record, Schema, StateCodeRecord};
use crate::{Error, Result};

/// The two datasets the analyser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    /// Per-state census statistics.
    Census,
    /// Per-state code lookup.
    StateCode,
}

impl DatasetKind {
    /// Returns both dataset kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Census, Self::StateCode]
    }

    /// Returns the schema files of this kind must match.
    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        match self {
            Self::Census => CensusRecord::SCHEMA,
            Self::StateCode => StateCodeRecord::SCHEMA,
        }
    }

    /// Returns the kind as a lowercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Census => "census",
            Self::StateCode => "state-codes",
        }
    }

    /// Wraps a message in the structural error for this kind.
    ///
    /// A shape mismatch on the state code schema is reported separately from
    /// one on the census schema.
    #[must_use]
    pub fn structural_error(&self, message: impl Into<String>) -> Error {
        match self {
            Self::Census => Error::FileError(message.into()),
            Self::StateCode => Error::FileErrorInStateCode(message.into()),
        }
    }

    /// Picks the dataset whose schema matches a header line.
    #[must_use]
    pub fn detect<'a, I>(header: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let header = header.into_iter();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.schema().matches_header(header.clone()))
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "census" => Ok(Self::Census),
            "state-codes" | "state-code" | "state_codes" | "state_code" | "codes" => {
                Ok(Self::StateCode)
            },
            _ => Err(Error::InvalidInput(format!("Unknown dataset: {s}"))),
        }
    }
}
