/*!
 * Key-value persistence for the translation pipeline.
 *
 * The pipeline never reads ambient global state; everything it persists goes
 * through the `KeyValueStore` trait, which the host environment implements or
 * satisfies with one of the two stores shipped here: an in-memory map for
 * deterministic tests and embedding, and a SQLite-backed options table for
 * hosts that want translations to survive restarts.
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::{debug, info};
use parking_lot::RwLock;
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::StoreError;

/// Default database filename
const DEFAULT_DB_FILENAME: &str = "weblingo.db";

/// Default database directory name under the user's data directory
const DEFAULT_DB_DIRNAME: &str = "weblingo";

/// Abstract key-value store the pipeline persists through
///
/// Keys are opaque strings; the cache namespaces its own keys by prefix so
/// `delete_by_prefix` can purge cache rows without touching anything else
/// the host keeps in the same store. Each delete is independent and
/// idempotent, so a failure mid-purge leaves remaining entries intact.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove every key starting with `prefix`, returning how many were removed
    fn delete_by_prefix(&self, prefix: &str) -> Result<usize, StoreError>;
}

/// In-memory store backed by a `HashMap`
///
/// Used by the test suite and by hosts that treat the cache as per-process.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_by_prefix(&self, prefix: &str) -> Result<usize, StoreError> {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        Ok(before - entries.len())
    }
}

/// SQLite-backed store using a single options table
///
/// Thread-safe via `Arc<Mutex<Connection>>`; suitable for hosts that want
/// the translation cache to persist across process restarts.
#[derive(Clone)]
pub struct SqliteStore {
    /// Path to the database file
    db_path: PathBuf,
    /// Thread-safe connection wrapped in Arc<Mutex>
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) a store at the default location
    pub fn new_default() -> Result<Self, StoreError> {
        let db_path = Self::default_database_path()?;
        Self::new(&db_path)
    }

    /// Open (or create) a store at the specified path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening options store at: {:?}", db_path);

        let conn = Connection::open(&db_path)?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory store (for testing)
    pub fn new_in_memory() -> Result<Self, StoreError> {
        debug!("Creating in-memory options store");

        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the default database path
    pub fn default_database_path() -> Result<PathBuf, StoreError> {
        let base_dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| {
                StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "could not determine data directory",
                ))
            })?;

        Ok(base_dir.join(DEFAULT_DB_DIRNAME).join(DEFAULT_DB_FILENAME))
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS options (
                name  TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn with_connection<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, rusqlite::Error>,
    {
        let conn = self
            .connection
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&conn).map_err(StoreError::from)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.with_connection(|conn| {
            conn.query_row(
                "SELECT value FROM options WHERE name = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO options (name, value) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map(|_| ())
        })
    }

    fn delete_by_prefix(&self, prefix: &str) -> Result<usize, StoreError> {
        // LIKE treats % and _ as wildcards; escape them so the prefix is literal
        let escaped = prefix
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("{}%", escaped);

        self.with_connection(|conn| {
            conn.execute(
                "DELETE FROM options WHERE name LIKE ?1 ESCAPE '\\'",
                params![pattern],
            )
        })
    }
}
