//! Dataset store, sort engine and the session facade tying them together.
//!
//! # Control flow
//!
//! 1. A load call validates a file through the reader and replaces the
//!    matching collection in the [`DatasetStore`]
//! 2. [`sort_records`] reorders that collection in place
//! 3. The collection is rendered as a JSON array, optionally written to a sink
//!
//! [`CensusAnalyser`] exposes the whole flow as single calls.

mod analyser;
mod sort;
mod store;

pub use analyser::CensusAnalyser;
pub use sort::{CensusField, SortDirection, SortField, SortKey, StateCodeField, sort_records};
pub use store::DatasetStore;
