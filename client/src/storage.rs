//! Durable session storage capability.
//!
//! DESIGN
//! ======
//! The session store and the route guard both touch persisted session keys,
//! so the storage surface is a small shared trait instead of ambient global
//! access. `MemoryStorage` backs tests and sessions that should not outlive
//! the process; `FileStorage` persists a single JSON object write-through so
//! a session survives restarts.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized identity record.
pub const USER_KEY: &str = "user";
/// Storage key holding the plain role string.
pub const ROLE_KEY: &str = "role";

/// String-keyed key/value store for session state.
///
/// The session store is the only writer of the session keys; the route guard
/// and the HTTP transport only read them.
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Delete the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// In-memory storage, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// File-backed storage: one JSON object, written through on every mutation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open storage at `path`, loading any existing entries.
    ///
    /// A missing file starts empty. An unreadable or unparseable file also
    /// starts empty with a logged warning; a corrupt session file must not
    /// keep the client from starting.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "session file is not valid JSON, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        match serde_json::to_string_pretty(entries) {
            Ok(rendered) => {
                if let Err(error) = std::fs::write(&self.path, rendered) {
                    tracing::warn!(
                        path = %self.path.display(),
                        %error,
                        "failed to write session file"
                    );
                }
            }
            Err(error) => {
                tracing::warn!(%error, "failed to serialize session entries");
            }
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
            self.persist(&entries);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.remove(key).is_some() {
                self.persist(&entries);
            }
        }
    }
}
