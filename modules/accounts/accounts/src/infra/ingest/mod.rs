//! One-shot loader: JSONL file -> `accounts` table.
//!
//! [`load`] parses and normalizes every line up front; [`create_store`] then
//! writes the whole set in a single transaction. Either step fails as a whole.

mod error;
mod record;
mod store;

pub use error::IngestError;
pub use record::{load, parse_line, parse_records};
pub use store::{LoadReport, create_store, ingest_file};
