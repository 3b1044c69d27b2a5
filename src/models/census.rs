//! Census statistics record.

use serde::{Deserialize, Serialize};

use super::{Column, DatasetKind, FieldType, Record, RowValues, Schema};
use crate::Result;

static CENSUS_COLUMNS: [Column; 4] = [
    Column::new("State", "state", FieldType::Text),
    Column::new("Population", "population", FieldType::Count),
    Column::new("DensityPerSqKm", "densityPerSqKm", FieldType::Count),
    Column::new("AreaInSqKm", "areaInSqKm", FieldType::Count),
];

static CENSUS_SCHEMA: Schema = Schema {
    kind: DatasetKind::Census,
    columns: &CENSUS_COLUMNS,
};

/// Census statistics for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CensusRecord {
    /// State name, unique within a loaded collection.
    pub state: String,
    /// Total population.
    pub population: u64,
    /// Inhabitants per square kilometre.
    pub density_per_sq_km: u64,
    /// Area in square kilometres.
    pub area_in_sq_km: u64,
}

impl CensusRecord {
    /// Creates a census record.
    #[must_use]
    pub fn new(
        state: impl Into<String>,
        population: u64,
        density_per_sq_km: u64,
        area_in_sq_km: u64,
    ) -> Self {
        Self {
            state: state.into(),
            population,
            density_per_sq_km,
            area_in_sq_km,
        }
    }
}

impl Record for CensusRecord {
    const SCHEMA: &'static Schema = &CENSUS_SCHEMA;

    fn from_values(mut values: RowValues) -> Result<Self> {
        Ok(Self {
            state: values.text("state")?,
            population: values.count("population")?,
            density_per_sq_km: values.count("densityPerSqKm")?,
            area_in_sq_km: values.count("areaInSqKm")?,
        })
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.state)
    }
}
