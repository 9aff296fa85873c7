//! Key-value backends for the persisted session state.

use crate::db::{kv, pool::DbPool};
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::collections::HashMap;
use std::sync::Mutex;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;

    /// Record an audit line. Backends without an audit table ignore it.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) {}
}

/// SQLite-backed store (the `kv` table of the local database).
pub struct SqliteStore {
    pool: Mutex<DbPool>,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: Mutex::new(DbPool::new(path)?),
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: Mutex::new(DbPool::in_memory()?),
        })
    }

    /// Run `func` with the underlying connection.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let pool = self
            .pool
            .lock()
            .map_err(|_| AppError::Other("session store lock poisoned".into()))?;
        func(&pool.conn)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.with_conn(|c| kv::get(c, key))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.with_conn(|c| kv::set(c, key, value))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.with_conn(|c| kv::remove(c, key))
    }

    fn clear(&self) -> AppResult<()> {
        self.with_conn(kv::clear)
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        let res = self.with_conn(|c| {
            crate::db::log::ttlog_quiet(c, operation, target, message);
            Ok(())
        });
        if let Err(e) = res {
            tracing::warn!(operation, error = %e, "audit skipped");
        }
    }
}

/// Process-local store.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.map
            .lock()
            .map_err(|_| AppError::Other("memory store lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.lock()?.clear();
        Ok(())
    }
}
