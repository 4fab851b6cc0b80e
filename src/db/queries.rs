//! SQL queries for the Roundcube database.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

use super::RowOrder;

/// All users, in database order.
pub const LIST_USERS: &str = "SELECT user_id, username FROM users";

/// All users, ordered by id.
pub const LIST_USERS_BY_ID: &str = "SELECT user_id, username FROM users ORDER BY user_id";

/// Contacts owned by one user, in database order.
pub const CONTACTS_BY_USER: &str =
    "SELECT email, vcard, words, del FROM contacts WHERE user_id = ?1";

/// Contacts owned by one user, in insertion order.
pub const CONTACTS_BY_USER_BY_ID: &str =
    "SELECT email, vcard, words, del FROM contacts WHERE user_id = ?1 ORDER BY rowid";

pub fn users_query(order: RowOrder) -> &'static str {
    match order {
        RowOrder::Database => LIST_USERS,
        RowOrder::ById => LIST_USERS_BY_ID,
    }
}

pub fn contacts_query(order: RowOrder) -> &'static str {
    match order {
        RowOrder::Database => CONTACTS_BY_USER,
        RowOrder::ById => CONTACTS_BY_USER_BY_ID,
    }
}
