//! vCard file writer.
//!
//! Files are only ever appended to. Two contacts that map to the same
//! filename end up concatenated in read order, and running the export twice
//! doubles every file.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::db::{Contact, User};
use crate::error::{ExportError, ExportResult};

/// Suffix added to files holding contacts flagged as deleted.
pub const DELETED_SUFFIX: &str = "_deleted";

/// Extension of every exported file.
pub const VCARD_EXTENSION: &str = "vcf";

/// Whether a write started a new file or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Created,
    Appended,
}

/// File name for one contact: `<email>_<id>[_deleted].vcf`.
///
/// The user's email is used verbatim.
pub fn vcard_filename(user: &User, contact: &Contact) -> String {
    let suffix = if contact.deleted { DELETED_SUFFIX } else { "" };
    format!("{}_{}{}.{}", user.email, user.id, suffix, VCARD_EXTENSION)
}

/// Append `vcard` and a trailing newline to the file at `path`.
pub fn save_vcard(path: &Path, vcard: &str) -> ExportResult<SaveOutcome> {
    let outcome = if path.exists() {
        SaveOutcome::Appended
    } else {
        SaveOutcome::Created
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ExportError::filesystem(path, e))?;

    file.write_all(vcard.as_bytes())
        .and_then(|_| file.write_all(b"\n"))
        .map_err(|e| ExportError::filesystem(path, e))?;

    tracing::debug!(path = %path.display(), ?outcome, bytes = vcard.len() + 1, "wrote vcard");
    Ok(outcome)
}
