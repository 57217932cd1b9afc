//! Storage layer for reimburse-cli
//!
//! JSON file storage with atomic writes for the transaction cache.

pub mod cache;
pub mod file_io;

pub use cache::{CacheData, TransactionCache};
pub use file_io::{read_json_required, write_json_atomic};
