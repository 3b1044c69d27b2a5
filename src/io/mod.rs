//! Delimited-text input and JSON output.
//!
//! # Architecture
//!
//! - [`DelimitedReader`] turns a file into validated records for any
//!   [`Record`](crate::models::Record) type, driven by that type's schema
//! - [`export`] renders an ordered slice of records as a JSON array and can
//!   persist the same text to a sink file
//!
//! # Error classification
//!
//! | Failure | Kind |
//! |---------|------|
//! | Missing or unreadable input | `CENSUS_FILE_PROBLEM` |
//! | Cell fails type coercion | `UNABLE_TO_PARSE` |
//! | Wrong header, delimiter or column count | `FILE_ERROR` / `FILE_ERROR_IN_STATE_CODE` |
//! | Sink cannot be created or written | `FILE_ERROR` |

pub mod export;
pub mod reader;

pub use export::{JsonStyle, to_json, to_json_file};
pub use reader::{DelimitedReader, ReaderOptions};
