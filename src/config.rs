//! Config loading - JSON file describing how to reach the Roundcube database.
//!
//! Expected shape:
//! ```json
//! {"sqlite": {"database": "roundcube.db", "timeout": 5.0, "uri": false}}
//! ```
//!
//! CHANGELOG:
//! - 10/16/2026 - Saturate oversized busy timeouts
//! - 10/16/2026 - Initial implementation

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::db::RowOrder;
use crate::error::{ExportError, ExportResult};

/// Default config path.
pub const DEFAULT_CONFIG: &str = "./config.json";

/// Default output directory.
pub const DEFAULT_OUT: &str = "./out";

/// Busy timeout applied when the config does not set one.
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Longest busy timeout SQLite accepts (`c_int` milliseconds).
pub const MAX_BUSY_TIMEOUT: Duration = Duration::from_millis(i32::MAX as u64);

/// Top-level config document.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sqlite: SqliteParams,
}

/// Connection parameters for the source database.
#[derive(Debug, Clone, Deserialize)]
pub struct SqliteParams {
    /// Database file path, or a `file:` URI when `uri` is set.
    pub database: String,

    /// Seconds to wait on a locked database.
    #[serde(default)]
    pub timeout: Option<f64>,

    /// Interpret `database` as a URI filename.
    #[serde(default)]
    pub uri: bool,

    /// Keys we accept but do not act on.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SqliteParams {
    pub fn busy_timeout(&self) -> Duration {
        let secs = self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(secs)
            .unwrap_or(MAX_BUSY_TIMEOUT)
            .min(MAX_BUSY_TIMEOUT)
    }
}

/// Load the config file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> ExportResult<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ExportError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config =
        serde_json::from_str(&content).map_err(|source| ExportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    for key in config.sqlite.extra.keys() {
        tracing::warn!(key = %key, "ignoring unsupported sqlite connection parameter");
    }

    Ok(config)
}

/// Settings for one export run, built once from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_path: PathBuf,
    pub out_dir: PathBuf,
    pub order: RowOrder,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG),
            out_dir: PathBuf::from(DEFAULT_OUT),
            order: RowOrder::Database,
        }
    }
}
