//! Database module for read-only SQLite access to the Roundcube database.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

pub mod connection;
pub mod helpers;
pub mod queries;

pub use connection::{close_db, open_db};
pub use helpers::{list_contacts, list_users, Contact, User};

/// Row ordering for the export queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowOrder {
    /// Whatever order SQLite returns. Not guaranteed to be stable.
    #[default]
    Database,
    /// Users by `user_id`, contacts by insertion `rowid`.
    ById,
}
