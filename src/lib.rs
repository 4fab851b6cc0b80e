//! roundcube-vcards library
//!
//! Reads Roundcube address books from SQLite and appends each contact's
//! vCard to `<user email>_<user id>[_deleted].vcf` in an output directory.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod output;
pub mod writer;

pub use commands::export::{run, ExportReport};
pub use config::RunOptions;
pub use error::{ExportError, ExportResult};
