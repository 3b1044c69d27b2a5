//! End-to-end tests over the bundled India census fixtures.
//!
//! Covers load counts, error classification for each malformed fixture, the
//! named projections, and sink persistence.

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use census_analyser::config::AnalyserConfig;
use census_analyser::{
    CensusAnalyser, CensusField, CensusRecord, DatasetKind, ErrorKind, SortDirection, SortField,
    StateCodeField, StateCodeRecord,
};
use test_case::test_case;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

const CENSUS: &str = "IndiaStateCensusData.csv";
const STATE_CODES: &str = "IndiaStateCode.csv";
const MISSING: &str = "NoSuchFile.csv";

fn census(json: &str) -> Vec<CensusRecord> {
    serde_json::from_str(json).unwrap()
}

fn codes(json: &str) -> Vec<StateCodeRecord> {
    serde_json::from_str(json).unwrap()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_census_file_returns_correct_record_count() {
    let mut analyser = CensusAnalyser::default();
    assert_eq!(analyser.load_census(fixture(CENSUS)).unwrap(), 29);
    assert_eq!(analyser.store().census_count(), 29);
}

#[test]
fn test_state_code_file_returns_correct_record_count() {
    let mut analyser = CensusAnalyser::default();
    assert_eq!(analyser.load_state_codes(fixture(STATE_CODES)).unwrap(), 37);
}

#[test]
fn test_load_any_returns_count_for_either_file() {
    let mut analyser = CensusAnalyser::default();
    assert_eq!(
        analyser.load_any(fixture(CENSUS)).unwrap(),
        (DatasetKind::Census, 29)
    );
    assert_eq!(
        analyser.load_any(fixture(STATE_CODES)).unwrap(),
        (DatasetKind::StateCode, 37)
    );
}

#[test_case(DatasetKind::Census, MISSING, ErrorKind::CensusFileProblem ; "census missing file")]
#[test_case(DatasetKind::Census, STATE_CODES, ErrorKind::FileError ; "census given state code file")]
#[test_case(DatasetKind::Census, "IndiaStateCensusDataWrongDelimiter.csv", ErrorKind::FileError ; "census wrong delimiter")]
#[test_case(DatasetKind::Census, "IndiaStateCensusDataWrongHeader.csv", ErrorKind::FileError ; "census wrong header")]
#[test_case(DatasetKind::Census, "IndiaStateCensusDataBadPopulation.csv", ErrorKind::UnableToParse ; "census bad population")]
#[test_case(DatasetKind::StateCode, MISSING, ErrorKind::CensusFileProblem ; "codes missing file")]
#[test_case(DatasetKind::StateCode, CENSUS, ErrorKind::FileErrorInStateCode ; "codes given census file")]
#[test_case(DatasetKind::StateCode, "IndiaStateCodeWrongDelimiter.csv", ErrorKind::FileErrorInStateCode ; "codes wrong delimiter")]
#[test_case(DatasetKind::StateCode, "IndiaStateCodeWrongHeader.csv", ErrorKind::FileErrorInStateCode ; "codes wrong header")]
fn test_load_error_classification(kind: DatasetKind, file: &str, expected: ErrorKind) {
    let mut analyser = CensusAnalyser::default();
    let err = analyser.load(kind, &fixture(file)).unwrap_err();
    assert_eq!(err.kind(), expected, "{err}");
}

#[test]
fn test_load_any_unknown_header_is_file_error() {
    let mut analyser = CensusAnalyser::default();
    let err = analyser
        .load_any(fixture("IndiaStateCodeWrongHeader.csv"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileError);
}

// ============================================================================
// Named projections
// ============================================================================

#[test]
fn test_census_sorted_on_state() {
    let mut analyser = CensusAnalyser::default();
    analyser.load_census(fixture(CENSUS)).unwrap();
    let records = census(&analyser.state_wise_sorted_census().unwrap());
    assert_eq!(records[0].state, "Andhra Pradesh");
    assert_eq!(records[28].state, "West Bengal");
}

#[test]
fn test_census_sorted_on_population() {
    let mut analyser = CensusAnalyser::default();
    analyser.load_census(fixture(CENSUS)).unwrap();
    let records = census(&analyser.population_wise_sorted_census().unwrap());
    assert_eq!(records[0].population, 199_812_341);
    assert_eq!(records[28].state, "Sikkim");
}

#[test]
fn test_census_sorted_on_density() {
    let mut analyser = CensusAnalyser::default();
    analyser.load_census(fixture(CENSUS)).unwrap();
    let records = census(&analyser.density_wise_sorted_census().unwrap());
    assert_eq!(records[0].density_per_sq_km, 1_102);
}

#[test]
fn test_census_sorted_on_area() {
    let mut analyser = CensusAnalyser::default();
    analyser.load_census(fixture(CENSUS)).unwrap();
    let records = census(&analyser.area_wise_sorted_census().unwrap());
    assert_eq!(records[0].area_in_sq_km, 342_239);
}

#[test]
fn test_state_codes_sorted_on_code() {
    let mut analyser = CensusAnalyser::default();
    analyser.load_state_codes(fixture(STATE_CODES)).unwrap();
    let records = codes(&analyser.state_code_wise_sorted().unwrap());
    assert_eq!(records[0].state_code, "AD");
    assert_eq!(records[36].state_code, "WB");
}

#[test]
fn test_projection_before_load_is_no_data() {
    let mut analyser = CensusAnalyser::default();
    assert_eq!(
        analyser.state_wise_sorted_census().unwrap_err().kind(),
        ErrorKind::NoData
    );
    assert_eq!(
        analyser.state_code_wise_sorted().unwrap_err().kind(),
        ErrorKind::NoData
    );
}

#[test]
fn test_loading_state_codes_does_not_satisfy_census_sort() {
    let mut analyser = CensusAnalyser::default();
    analyser.load_state_codes(fixture(STATE_CODES)).unwrap();
    let err = analyser
        .sort_and_export(
            SortField::Census(CensusField::Population),
            SortDirection::Descending,
            None,
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoData);
}

// ============================================================================
// Sort and export
// ============================================================================

#[test]
fn test_ascending_and_descending_are_reverses() {
    let mut analyser = CensusAnalyser::default();
    analyser.load_census(fixture(CENSUS)).unwrap();
    let field = SortField::Census(CensusField::Population);

    let asc = census(&analyser.sort_and_export(field, SortDirection::Ascending, None).unwrap());
    let mut desc =
        census(&analyser.sort_and_export(field, SortDirection::Descending, None).unwrap());
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_repeated_sort_is_idempotent() {
    let mut analyser = CensusAnalyser::default();
    analyser.load_state_codes(fixture(STATE_CODES)).unwrap();
    let field = SortField::StateCode(StateCodeField::StateName);

    let first = analyser.sort_and_export(field, SortDirection::Descending, None).unwrap();
    let second = analyser.sort_and_export(field, SortDirection::Descending, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sink_receives_identical_json() {
    let dir = tempfile::tempdir().unwrap();
    let sink = dir.path().join("by_area.json");

    let mut analyser = CensusAnalyser::default();
    analyser.load_census(fixture(CENSUS)).unwrap();
    let json = analyser
        .sort_and_export(
            SortField::Census(CensusField::Area),
            SortDirection::Ascending,
            Some(&sink),
        )
        .unwrap();

    assert_eq!(std::fs::read_to_string(&sink).unwrap(), json);
    assert_eq!(census(&json)[0].state, "Goa");
}

#[test]
fn test_named_projections_persist_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnalyserConfig::default().with_output_dir(dir.path());

    let mut analyser = CensusAnalyser::new(&config);
    analyser.load_census(fixture(CENSUS)).unwrap();
    let population = analyser.population_wise_sorted_census().unwrap();
    let density = analyser.density_wise_sorted_census().unwrap();
    let area = analyser.area_wise_sorted_census().unwrap();
    analyser.state_wise_sorted_census().unwrap();

    let read = |name: &str| std::fs::read_to_string(dir.path().join(name)).unwrap();
    assert_eq!(read("census_by_population.json"), population);
    assert_eq!(read("census_by_density.json"), density);
    assert_eq!(read("census_by_area.json"), area);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn test_two_row_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("census.csv");
    std::fs::write(
        &path,
        "State,Population,DensityPerSqKm,AreaInSqKm\n\
         Andhra Pradesh,49386799,303,162968\n\
         Karnataka,61095297,319,191791\n",
    )
    .unwrap();

    let mut analyser = CensusAnalyser::default();
    analyser.load_census(&path).unwrap();

    let by_state = analyser
        .sort_and_export(
            SortField::Census(CensusField::State),
            SortDirection::Ascending,
            None,
        )
        .unwrap();
    assert_eq!(
        by_state,
        r#"[{"state":"Andhra Pradesh","population":49386799,"densityPerSqKm":303,"areaInSqKm":162968},{"state":"Karnataka","population":61095297,"densityPerSqKm":319,"areaInSqKm":191791}]"#
    );

    let by_population = census(
        &analyser
            .sort_and_export(
                SortField::Census(CensusField::Population),
                SortDirection::Descending,
                None,
            )
            .unwrap(),
    );
    assert_eq!(by_population[0].state, "Karnataka");
}
