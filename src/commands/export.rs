//! Export command: dump every user's contacts into vCard files.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{load_config, RunOptions};
use crate::db::{self, RowOrder};
use crate::error::{ExportError, ExportResult};
use crate::output::OutputControls;
use crate::writer::{save_vcard, vcard_filename, SaveOutcome};

/// Summary of a finished run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ExportReport {
    pub config: PathBuf,
    pub out_dir: PathBuf,
    pub users: usize,
    pub contacts: usize,
    pub files_created: usize,
    pub appends: usize,
    pub started_at: String,
    pub finished_at: String,
}

impl ExportReport {
    fn record(&mut self, outcome: SaveOutcome) {
        self.contacts += 1;
        match outcome {
            SaveOutcome::Created => self.files_created += 1,
            SaveOutcome::Appended => self.appends += 1,
        }
    }
}

/// Create the output directory if it is missing. Parents are not created.
pub fn ensure_out_dir(out_dir: &Path) -> ExportResult<()> {
    if out_dir.exists() {
        return Ok(());
    }
    std::fs::create_dir(out_dir).map_err(|e| ExportError::filesystem(out_dir, e))?;
    tracing::info!(out_dir = %out_dir.display(), "created output directory");
    Ok(())
}

/// Run the export described by `options`.
///
/// Any error stops the run; files already written stay on disk.
pub fn run(options: &RunOptions, output: &OutputControls) -> ExportResult<ExportReport> {
    let config = load_config(&options.config_path)?;

    ensure_out_dir(&options.out_dir)?;

    let mut report = ExportReport {
        config: options.config_path.clone(),
        out_dir: options.out_dir.clone(),
        started_at: chrono::Utc::now().to_rfc3339(),
        ..Default::default()
    };
    tracing::info!(
        config = %options.config_path.display(),
        out_dir = %options.out_dir.display(),
        database = %config.sqlite.database,
        "starting export"
    );

    let conn = db::open_db(&config.sqlite)?;
    export_all(&conn, &options.out_dir, options.order, output, &mut report)?;
    db::close_db(conn)?;

    report.finished_at = chrono::Utc::now().to_rfc3339();
    tracing::info!(
        users = report.users,
        contacts = report.contacts,
        files_created = report.files_created,
        "export finished"
    );
    Ok(report)
}

/// Walk users and their contacts, appending each vCard to its file.
fn export_all(
    conn: &rusqlite::Connection,
    out_dir: &Path,
    order: RowOrder,
    output: &OutputControls,
    report: &mut ExportReport,
) -> ExportResult<()> {
    for user in db::list_users(conn, order)? {
        report.users += 1;
        let contacts = db::list_contacts(conn, &user, order)?;
        tracing::debug!(user_id = user.id, contacts = contacts.len(), "exporting user");

        for contact in &contacts {
            let path = out_dir.join(vcard_filename(&user, contact));
            let outcome = save_vcard(&path, &contact.vcard)?;
            output.progress(&path, outcome);
            report.record(outcome);
        }
    }
    Ok(())
}
