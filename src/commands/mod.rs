//! Command implementations.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

pub mod export;
