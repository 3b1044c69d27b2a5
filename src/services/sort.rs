//! Comparator-driven ordering of record collections.
//!
//! Sorting is stable in both directions: records with equal keys keep their
//! relative order, so ascending and descending orders are exact reverses of
//! each other whenever keys are unique.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{CensusRecord, DatasetKind, StateCodeRecord};
use crate::{Error, Result};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest (or lexicographically first) key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(Error::InvalidInput(format!("Unknown sort direction: {s}"))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// A field records of type `T` can be ordered by.
pub trait SortKey<T> {
    /// Compares two records by this field in ascending order.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Sortable census fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CensusField {
    /// State name, lexicographic.
    State,
    /// Population.
    Population,
    /// Density per square kilometre.
    Density,
    /// Area in square kilometres.
    Area,
}

impl CensusField {
    /// Returns all census sort fields.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::State, Self::Population, Self::Density, Self::Area]
    }

    /// Returns the CLI name of the field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Population => "population",
            Self::Density => "density",
            Self::Area => "area",
        }
    }
}

impl SortKey<CensusRecord> for CensusField {
    fn compare(&self, a: &CensusRecord, b: &CensusRecord) -> Ordering {
        match self {
            Self::State => a.state.cmp(&b.state),
            Self::Population => a.population.cmp(&b.population),
            Self::Density => a.density_per_sq_km.cmp(&b.density_per_sq_km),
            Self::Area => a.area_in_sq_km.cmp(&b.area_in_sq_km),
        }
    }
}

/// Sortable state code fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateCodeField {
    /// Two-letter code, lexicographic.
    StateCode,
    /// State name, lexicographic.
    StateName,
}

impl StateCodeField {
    /// Returns all state code sort fields.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::StateCode, Self::StateName]
    }

    /// Returns the CLI name of the field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StateCode => "code",
            Self::StateName => "name",
        }
    }
}

impl SortKey<StateCodeRecord> for StateCodeField {
    fn compare(&self, a: &StateCodeRecord, b: &StateCodeRecord) -> Ordering {
        match self {
            Self::StateCode => a.state_code.cmp(&b.state_code),
            Self::StateName => a.state_name.cmp(&b.state_name),
        }
    }
}

/// A sort field of either dataset. The dataset is implied by the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Sort the census collection.
    Census(CensusField),
    /// Sort the state code collection.
    StateCode(StateCodeField),
}

impl SortField {
    /// Returns the dataset this field belongs to.
    #[must_use]
    pub const fn kind(&self) -> DatasetKind {
        match self {
            Self::Census(_) => DatasetKind::Census,
            Self::StateCode(_) => DatasetKind::StateCode,
        }
    }

    /// Returns the CLI name of the field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Census(field) => field.as_str(),
            Self::StateCode(field) => field.as_str(),
        }
    }

    /// Direction of the named projections: names and codes ascending,
    /// measurements largest first.
    #[must_use]
    pub const fn natural_direction(&self) -> SortDirection {
        match self {
            Self::Census(CensusField::State) | Self::StateCode(_) => SortDirection::Ascending,
            Self::Census(_) => SortDirection::Descending,
        }
    }

    /// File name the named projection persists to, if it persists at all.
    #[must_use]
    pub const fn default_sink_name(&self) -> Option<&'static str> {
        match self {
            Self::Census(CensusField::Population) => Some("census_by_population.json"),
            Self::Census(CensusField::Density) => Some("census_by_density.json"),
            Self::Census(CensusField::Area) => Some("census_by_area.json"),
            Self::Census(CensusField::State) | Self::StateCode(_) => None,
        }
    }

    /// Parses a field name for the given dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the dataset has no such field.
    pub fn parse(kind: DatasetKind, name: &str) -> Result<Self> {
        let name = name.to_lowercase();
        let field = match kind {
            DatasetKind::Census => CensusField::all()
                .iter()
                .find(|f| f.as_str() == name || (name == "name" && **f == CensusField::State))
                .copied()
                .map(Self::Census),
            DatasetKind::StateCode => StateCodeField::all()
                .iter()
                .find(|f| f.as_str() == name || (name == "state" && **f == StateCodeField::StateName))
                .copied()
                .map(Self::StateCode),
        };

        field.ok_or_else(|| Error::InvalidInput(format!("Unknown {kind} field: {name}")))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind(), self.as_str())
    }
}

/// Sorts records in place by `key` in the given direction.
///
/// Empty and single-element slices are left untouched.
pub fn sort_records<T, K: SortKey<T>>(records: &mut [T], key: &K, direction: SortDirection) {
    records.sort_by(|a, b| direction.apply(key.compare(a, b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn census() -> Vec<CensusRecord> {
        vec![
            CensusRecord::new("Karnataka", 61_095_297, 319, 191_791),
            CensusRecord::new("Bihar", 104_099_452, 1_102, 94_163),
            CensusRecord::new("Andhra Pradesh", 49_386_799, 303, 162_968),
        ]
    }

    fn states(records: &[CensusRecord]) -> Vec<&str> {
        records.iter().map(|r| r.state.as_str()).collect()
    }

    #[test_case(CensusField::State, SortDirection::Ascending, ["Andhra Pradesh", "Bihar", "Karnataka"] ; "state asc")]
    #[test_case(CensusField::State, SortDirection::Descending, ["Karnataka", "Bihar", "Andhra Pradesh"] ; "state desc")]
    #[test_case(CensusField::Population, SortDirection::Descending, ["Bihar", "Karnataka", "Andhra Pradesh"] ; "population desc")]
    #[test_case(CensusField::Density, SortDirection::Ascending, ["Andhra Pradesh", "Karnataka", "Bihar"] ; "density asc")]
    #[test_case(CensusField::Area, SortDirection::Descending, ["Karnataka", "Andhra Pradesh", "Bihar"] ; "area desc")]
    fn test_census_orderings(field: CensusField, direction: SortDirection, expected: [&str; 3]) {
        let mut records = census();
        sort_records(&mut records, &field, direction);
        assert_eq!(states(&records), expected);
    }

    #[test]
    fn test_state_codes_by_code() {
        let mut records = vec![
            StateCodeRecord::new("Andhra Pradesh", "AP"),
            StateCodeRecord::new("Andhra Pradesh New", "AD"),
            StateCodeRecord::new("Assam", "AS"),
        ];
        sort_records(&mut records, &StateCodeField::StateCode, SortDirection::Ascending);
        let codes: Vec<_> = records.iter().map(|r| r.state_code.as_str()).collect();
        assert_eq!(codes, ["AD", "AP", "AS"]);
    }

    #[test]
    fn test_ties_keep_load_order_in_both_directions() {
        let base = vec![
            CensusRecord::new("A", 10, 1, 1),
            CensusRecord::new("B", 20, 1, 1),
            CensusRecord::new("C", 10, 1, 1),
        ];

        let mut asc = base.clone();
        sort_records(&mut asc, &CensusField::Population, SortDirection::Ascending);
        assert_eq!(states(&asc), ["A", "C", "B"]);

        let mut desc = base;
        sort_records(&mut desc, &CensusField::Population, SortDirection::Descending);
        assert_eq!(states(&desc), ["B", "A", "C"]);
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: Vec<CensusRecord> = Vec::new();
        sort_records(&mut empty, &CensusField::Area, SortDirection::Descending);
        assert!(empty.is_empty());

        let mut single = vec![CensusRecord::new("Goa", 1, 2, 3)];
        sort_records(&mut single, &CensusField::Area, SortDirection::Descending);
        assert_eq!(single[0].state, "Goa");
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            SortField::parse(DatasetKind::Census, "Population").unwrap(),
            SortField::Census(CensusField::Population)
        );
        assert_eq!(
            SortField::parse(DatasetKind::StateCode, "code").unwrap(),
            SortField::StateCode(StateCodeField::StateCode)
        );
        assert!(SortField::parse(DatasetKind::StateCode, "population").is_err());
        assert!(SortField::parse(DatasetKind::Census, "code").is_err());
    }

    #[test]
    fn test_natural_direction_and_sinks() {
        let population = SortField::Census(CensusField::Population);
        assert_eq!(population.natural_direction(), SortDirection::Descending);
        assert_eq!(population.default_sink_name(), Some("census_by_population.json"));

        let state = SortField::Census(CensusField::State);
        assert_eq!(state.natural_direction(), SortDirection::Ascending);
        assert!(state.default_sink_name().is_none());
        assert_eq!(state.to_string(), "census.state");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert_eq!("ascending".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.reverse(), SortDirection::Descending);
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
