//! Ephemeral session storage for the last recommendation.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::debug;

use crate::error::ClientError;

/// Session-scoped key/value store.
pub trait SessionStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove_item(&self, key: &str) -> Result<(), ClientError>;
    /// Ends the session, dropping every key.
    fn clear(&self) -> Result<(), ClientError>;
}

/// Store that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, ClientError> {
        self.items
            .lock()
            .map_err(|_| ClientError::Storage("session store lock poisoned".into()))
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ClientError> {
        self.items()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        self.items()?.clear();
        Ok(())
    }
}

/// Store keeping one file per key under a session directory.
///
/// Lets separate processes share a session; removing the directory ends it.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn item_path(&self, key: &str) -> Result<PathBuf, ClientError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ClientError::Storage(format!("invalid session key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn storage_error(action: &str, path: &Path, err: io::Error) -> ClientError {
    ClientError::Storage(format!("failed to {action} '{}': {err}", path.display()))
}

impl SessionStore for FileSessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError> {
        let path = self.item_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error("read", &path, err)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let path = self.item_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|err| storage_error("create", &self.dir, err))?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|err| storage_error("write", &staging, err))?;
        fs::rename(&staging, &path).map_err(|err| storage_error("replace", &path, err))?;
        debug!(path = %path.display(), "session: item written");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), ClientError> {
        let path = self.item_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error("remove", &path, err)),
        }
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error("remove", &self.dir, err)),
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
