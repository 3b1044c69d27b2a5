//! JSON export of ordered record collections.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Layout of the rendered JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    /// Single line, no whitespace.
    #[default]
    Compact,
    /// Indented, one field per line.
    Pretty,
}

impl FromStr for JsonStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::InvalidInput(format!("Unknown JSON style: {s}"))),
        }
    }
}

impl fmt::Display for JsonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

/// Renders records as a JSON array, one object per record, in slice order.
///
/// Object keys follow the record's declared field order.
///
/// # Errors
///
/// Returns [`Error::NoData`] if `records` is empty.
pub fn to_json<T: Serialize>(records: &[T], style: JsonStyle) -> Result<String> {
    if records.is_empty() {
        return Err(Error::NoData("nothing to export".to_string()));
    }

    let rendered = match style {
        JsonStyle::Compact => serde_json::to_string(records),
        JsonStyle::Pretty => serde_json::to_string_pretty(records),
    };
    rendered.map_err(|e| Error::FileError(format!("failed to serialize records: {e}")))
}

/// Renders records as [`to_json`] does and writes the same text to `sink`.
///
/// Any existing content of `sink` is replaced.
///
/// # Errors
///
/// Returns [`Error::NoData`] if `records` is empty, or [`Error::FileError`]
/// if the sink cannot be created or written.
pub fn to_json_file<T: Serialize>(records: &[T], sink: &Path, style: JsonStyle) -> Result<String> {
    let json = to_json(records, style)?;
    let sink_error = |e: std::io::Error| Error::FileError(format!("{}: {e}", sink.display()));

    let file = File::create(sink).map_err(sink_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes()).map_err(sink_error)?;
    writer.flush().map_err(sink_error)?;

    tracing::debug!(sink = %sink.display(), bytes = json.len(), "Wrote JSON export");
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::models::{CensusRecord, StateCodeRecord};

    fn sample() -> Vec<CensusRecord> {
        vec![
            CensusRecord::new("Andhra Pradesh", 49_386_799, 303, 162_968),
            CensusRecord::new("Karnataka", 61_095_297, 319, 191_791),
        ]
    }

    #[test]
    fn test_to_json_array_in_order() {
        let json = to_json(&sample(), JsonStyle::Compact).unwrap();
        assert!(json.starts_with(r#"[{"state":"Andhra Pradesh","population":49386799"#));
        let parsed: Vec<CensusRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_pretty_renders_same_value() {
        let compact: serde_json::Value =
            serde_json::from_str(&to_json(&sample(), JsonStyle::Compact).unwrap()).unwrap();
        let pretty_text = to_json(&sample(), JsonStyle::Pretty).unwrap();
        assert!(pretty_text.contains('\n'));
        let pretty: serde_json::Value = serde_json::from_str(&pretty_text).unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_empty_collection_is_no_data() {
        let err = to_json::<StateCodeRecord>(&[], JsonStyle::Compact).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoData);
    }

    #[test]
    fn test_to_json_file_overwrites_sink() {
        let dir = tempfile::tempdir().unwrap();
        let sink = dir.path().join("out.json");
        std::fs::write(&sink, "stale content that is longer than the export ".repeat(50)).unwrap();

        let records = vec![StateCodeRecord::new("Goa", "GA")];
        let json = to_json_file(&records, &sink, JsonStyle::Compact).unwrap();

        assert_eq!(std::fs::read_to_string(&sink).unwrap(), json);
        assert_eq!(json, r#"[{"stateName":"Goa","stateCode":"GA"}]"#);
    }

    #[test]
    fn test_unwritable_sink_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = dir.path().join("missing-dir").join("out.json");
        let err = to_json_file(&sample(), &sink, JsonStyle::Compact).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileError);
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("Pretty".parse::<JsonStyle>().unwrap(), JsonStyle::Pretty);
        assert!("yaml".parse::<JsonStyle>().is_err());
    }
}
