//! Database connection provider
//!
//! One SQLite file per resource. Every repository operation opens its own
//! connection through [`Database::acquire`] and owns it for the duration of
//! that call; dropping the connection closes it, so an early `?` return
//! never leaks one. There is no pool.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;

/// How long a statement waits on a locked database file before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to a single SQLite database file.
///
/// Cheap to clone: it only carries connect options.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Database {
    /// Prepare a handle for the database at `path`.
    ///
    /// Creates missing parent directories. The file itself is created by the
    /// first [`acquire`](Self::acquire).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let db = Database::open("events.db").await?;
    /// let mut conn = db.acquire().await?;
    /// ```
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, sqlx::Error> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);

        Ok(Self { path, options })
    }

    /// Open a fresh connection.
    pub async fn acquire(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
