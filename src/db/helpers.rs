//! Record reader - the two export queries and their row types.
//!
//! Rows are turned into named records right after each query; positional
//! tuples never leave this module.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};
use serde::Serialize;

use super::{queries, RowOrder};
use crate::error::ExportResult;

// ============================================================================
// Data Structures
// ============================================================================

/// A Roundcube account (`users` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    /// Stored as `username` in the source schema.
    pub email: String,
}

/// An address book entry (`contacts` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: String,
    pub vcard: String,
    pub words: Option<String>,
    pub deleted: bool,
}

impl User {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            email: row.get(1)?,
        })
    }
}

impl Contact {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            email: row.get(0)?,
            vcard: row.get(1)?,
            words: row.get(2)?,
            deleted: is_truthy(row.get_ref(3)?),
        })
    }
}

/// `del` is a 0/1 integer in Roundcube, but any stored type is accepted.
fn is_truthy(value: ValueRef<'_>) -> bool {
    match value {
        ValueRef::Null => false,
        ValueRef::Integer(i) => i != 0,
        ValueRef::Real(f) => f != 0.0,
        ValueRef::Text(t) => !t.is_empty(),
        ValueRef::Blob(b) => !b.is_empty(),
    }
}

// ============================================================================
// Query Helpers
// ============================================================================

/// Get every user id and username.
pub fn list_users(conn: &Connection, order: RowOrder) -> ExportResult<Vec<User>> {
    let mut stmt = conn.prepare(queries::users_query(order))?;
    let users = stmt
        .query_map([], User::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(users)
}

/// Get the contacts owned by `user`.
pub fn list_contacts(
    conn: &Connection,
    user: &User,
    order: RowOrder,
) -> ExportResult<Vec<Contact>> {
    let mut stmt = conn.prepare(queries::contacts_query(order))?;
    let contacts = stmt
        .query_map([user.id], Contact::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;

    fn fixture() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE users (user_id INTEGER PRIMARY KEY, username TEXT NOT NULL);
             CREATE TABLE contacts (
                 contact_id INTEGER PRIMARY KEY,
                 user_id INTEGER NOT NULL,
                 email TEXT,
                 vcard TEXT,
                 words TEXT,
                 del INTEGER NOT NULL DEFAULT 0
             );
             INSERT INTO users VALUES (7, 'alice@example.com');
             INSERT INTO users VALUES (3, 'bob@example.com');
             INSERT INTO contacts (user_id, email, vcard, words, del)
                 VALUES (7, 'carol@example.com', 'BEGIN:VCARD\nFN:Carol\nEND:VCARD', 'carol', 0);
             INSERT INTO contacts (user_id, email, vcard, words, del)
                 VALUES (7, 'dave@example.com', 'BEGIN:VCARD\nFN:Dave\nEND:VCARD', NULL, 1);
             INSERT INTO contacts (user_id, email, vcard, words, del)
                 VALUES (3, 'erin@example.com', 'BEGIN:VCARD\nFN:Erin\nEND:VCARD', 'erin', 0);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_list_users_by_id() {
        let conn = fixture();
        let users = list_users(&conn, RowOrder::ById).unwrap();
        assert_eq!(
            users,
            vec![
                User {
                    id: 3,
                    email: "bob@example.com".into(),
                },
                User {
                    id: 7,
                    email: "alice@example.com".into(),
                },
            ]
        );
    }

    #[test]
    fn test_list_contacts_filters_by_user() {
        let conn = fixture();
        let alice = User {
            id: 7,
            email: "alice@example.com".into(),
        };

        let contacts = list_contacts(&conn, &alice, RowOrder::ById).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].email, "carol@example.com");
        assert_eq!(contacts[0].words.as_deref(), Some("carol"));
        assert!(!contacts[0].deleted);
        assert_eq!(contacts[1].words, None);
        assert!(contacts[1].deleted);
    }

    #[test]
    fn test_list_contacts_for_unknown_user_is_empty() {
        let conn = fixture();
        let ghost = User {
            id: 99,
            email: "ghost@example.com".into(),
        };
        assert!(list_contacts(&conn, &ghost, RowOrder::Database)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_missing_table_is_database_error() {
        let conn = Connection::open_in_memory().unwrap();
        let err = list_users(&conn, RowOrder::Database).unwrap_err();
        assert!(matches!(err, ExportError::Database(_)));
    }

    #[test]
    fn test_null_vcard_is_database_error() {
        let conn = fixture();
        conn.execute(
            "INSERT INTO contacts (user_id, email, vcard, del) VALUES (3, 'x@y.z', NULL, 0)",
            [],
        )
        .unwrap();
        let bob = User {
            id: 3,
            email: "bob@example.com".into(),
        };
        assert!(matches!(
            list_contacts(&conn, &bob, RowOrder::ById),
            Err(ExportError::Database(_))
        ));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(ValueRef::Null));
        assert!(!is_truthy(ValueRef::Integer(0)));
        assert!(is_truthy(ValueRef::Integer(1)));
        assert!(is_truthy(ValueRef::Text(b"0")));
        assert!(!is_truthy(ValueRef::Text(b"")));
        assert!(!is_truthy(ValueRef::Real(0.0)));
    }
}
