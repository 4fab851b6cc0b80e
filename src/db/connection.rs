//! SQLite connection management for the Roundcube database.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Instant;

use crate::config::SqliteParams;
use crate::error::ExportResult;

/// Open flags for the source database: the export never writes to it.
fn open_flags(params: &SqliteParams) -> OpenFlags {
    let mut flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    if params.uri {
        flags |= OpenFlags::SQLITE_OPEN_URI;
    }
    flags
}

/// Open a read-only connection using the config's connection parameters.
///
/// The connection closes itself when dropped, so an early return from the
/// export loop still releases it.
pub fn open_db(params: &SqliteParams) -> ExportResult<Connection> {
    let started_at = Instant::now();
    let path = Path::new(&params.database);

    let conn = Connection::open_with_flags(path, open_flags(params)).map_err(|err| {
        tracing::error!(
            database = %params.database,
            duration_ms = started_at.elapsed().as_millis() as u64,
            error = %err,
            "failed to open database"
        );
        err
    })?;
    conn.busy_timeout(params.busy_timeout())?;

    tracing::info!(
        database = %params.database,
        duration_ms = started_at.elapsed().as_millis() as u64,
        "opened database"
    );
    Ok(conn)
}

/// Close the connection, surfacing any error SQLite reports on close.
pub fn close_db(conn: Connection) -> ExportResult<()> {
    conn.close().map_err(|(_conn, err)| err)?;
    tracing::debug!("closed database");
    Ok(())
}
