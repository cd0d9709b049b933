use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, Error as SqliteError, ffi::ErrorCode};

use crate::{ClientError, ClientResult};

const DB_FILE_NAME: &str = "ledger.db";
const BUSY_TIMEOUT: Duration = Duration::from_millis(250);

/// Resolved ledger home directory. All storage lives under this root,
/// which doubles as the ownership boundary: one home, one ledger.
#[derive(Debug, Clone)]
pub struct LedgerHome {
    root: PathBuf,
}

impl LedgerHome {
    /// Resolves the ledger home without touching the filesystem.
    ///
    /// Precedence: explicit override, then `MONEYMATE_HOME`, then
    /// `~/.moneymate`. Relative candidates are anchored to the current
    /// working directory.
    pub fn resolve(home_override: Option<&Path>) -> ClientResult<Self> {
        let candidate = match home_override {
            Some(path) => path.to_path_buf(),
            None => {
                if let Some(override_path) = std::env::var_os("MONEYMATE_HOME") {
                    PathBuf::from(override_path)
                } else if let Some(home_path) = home::home_dir() {
                    home_path.join(".moneymate")
                } else {
                    return Err(ClientError::ledger_init_failed(
                        Path::new("."),
                        "Could not resolve a home directory for ledger initialization.",
                    ));
                }
            }
        };

        let root = if candidate.is_absolute() {
            candidate
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&candidate))
                .map_err(|error| ClientError::ledger_init_failed(&candidate, &error.to_string()))?
        };

        Ok(Self { root })
    }

    pub fn ensure_directory(&self) -> ClientResult<()> {
        fs::create_dir_all(&self.root).map_err(|error| map_io_error(&self.root, &error))?;
        set_private_permissions_best_effort(&self.root);
        Ok(())
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join(DB_FILE_NAME)
    }
}

pub fn open_connection(db_path: &Path) -> ClientResult<Connection> {
    let connection =
        Connection::open(db_path).map_err(|error| map_sqlite_error(db_path, &error))?;
    connection
        .busy_timeout(BUSY_TIMEOUT)
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    Ok(connection)
}

pub fn map_io_error(path: &Path, error: &std::io::Error) -> ClientError {
    if error.kind() == std::io::ErrorKind::PermissionDenied {
        return ClientError::ledger_init_permission_denied(path, &error.to_string());
    }

    ClientError::ledger_init_failed(path, &error.to_string())
}

pub fn map_sqlite_error(path: &Path, error: &SqliteError) -> ClientError {
    match error.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => {
            ClientError::ledger_locked(path)
        }
        Some(ErrorCode::NotADatabase) => ClientError::ledger_corrupt(path),
        Some(ErrorCode::CannotOpen | ErrorCode::ReadOnly) => {
            ClientError::ledger_init_permission_denied(path, &error.to_string())
        }
        _ => ClientError::ledger_init_failed(path, &error.to_string()),
    }
}

#[cfg(unix)]
fn set_private_permissions_best_effort(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o700));
}

#[cfg(not(unix))]
fn set_private_permissions_best_effort(_path: &Path) {}
