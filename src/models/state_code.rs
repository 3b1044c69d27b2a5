//! State code lookup record.

use serde::{Deserialize, Serialize};

use super::{Column, DatasetKind, FieldType, Record, RowValues, Schema};
use crate::Result;

static STATE_CODE_COLUMNS: [Column; 2] = [
    Column::new("StateName", "stateName", FieldType::Text),
    Column::new("StateCode", "stateCode", FieldType::Text),
];

static STATE_CODE_SCHEMA: Schema = Schema {
    kind: DatasetKind::StateCode,
    columns: &STATE_CODE_COLUMNS,
};

/// Maps a state name to its short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateCodeRecord {
    /// State name.
    pub state_name: String,
    /// Two-letter state code, e.g. `KA`.
    pub state_code: String,
}

impl StateCodeRecord {
    /// Creates a state code record.
    #[must_use]
    pub fn new(state_name: impl Into<String>, state_code: impl Into<String>) -> Self {
        Self {
            state_name: state_name.into(),
            state_code: state_code.into(),
        }
    }

    /// Returns true if the code is exactly two ASCII uppercase letters.
    #[must_use]
    pub fn has_well_formed_code(&self) -> bool {
        self.state_code.len() == 2 && self.state_code.bytes().all(|b| b.is_ascii_uppercase())
    }
}

impl Record for StateCodeRecord {
    const SCHEMA: &'static Schema = &STATE_CODE_SCHEMA;

    fn from_values(mut values: RowValues) -> Result<Self> {
        Ok(Self {
            state_name: values.text("stateName")?,
            state_code: values.text("stateCode")?,
        })
    }

    fn strict_violation(&self) -> Option<String> {
        if self.has_well_formed_code() {
            None
        } else {
            Some(format!(
                "state code '{}' for '{}' is not two uppercase letters",
                self.state_code, self.state_name
            ))
        }
    }
}
