//! Record schemas for the two datasets.
//!
//! Each record type declares a static [`Schema`] that the reader validates
//! rows against, and builds itself from the typed values the reader produces.

mod census;
mod dataset;
mod schema;
mod state_code;

pub use census::CensusRecord;
pub use dataset::DatasetKind;
pub use schema::{Column, FieldType, FieldValue, Record, RowValues, Schema};
pub use state_code::StateCodeRecord;
