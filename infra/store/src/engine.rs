//! Core store implementation: key validation, the two backends, and the
//! atomic write path for the file-backed backend.

use crate::builder::StoreBuilder;
use crate::error::StoreError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

const ENTRY_SUFFIX: &str = "json";

/// Storage backend selected at construction time.
#[derive(Debug)]
pub(crate) enum Backend {
    /// Ephemeral map, used by tests and runs without a data directory.
    Memory(RwLock<FxHashMap<String, String>>),
    /// One JSON document per key under a canonicalized root directory.
    Disk { root: PathBuf, tmp_counter: AtomicU64 },
}

/// The internal shared state of a [`Store`] instance.
#[derive(Debug)]
pub(crate) struct StoreInner {
    pub(crate) backend: Backend,
}

/// A thread-safe handle to the key-value store.
///
/// The handle is internally reference-counted and can be cheaply cloned into
/// every subsystem that needs persistence. The public surface never returns
/// an error: reads resolve to a default on any failure and writes log and
/// swallow, which is the contract the registry and settings stores rely on.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) inner: Arc<StoreInner>,
}

impl Store {
    #[must_use = "The store is not usable until you call .open()"]
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Creates an ephemeral in-memory store. Nothing survives the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                backend: Backend::Memory(RwLock::new(FxHashMap::default())),
            }),
        }
    }

    /// Reads and decodes the value stored under `key`, or returns `default`.
    ///
    /// Absence, an invalid key, an I/O failure, and a decode failure all
    /// resolve to `default`; failures are logged, never propagated.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get_opt(key).unwrap_or(default)
    }

    /// Existence-aware read: `None` when the key has never been persisted
    /// (or its stored document cannot be decoded as `T`).
    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.try_read(key) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(key, error = %err, "Store read failed, treating key as absent");
                return None;
            },
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "Stored document is not decodable, treating key as absent");
                None
            },
        }
    }

    /// Encodes `value` as JSON and stores it under `key`.
    ///
    /// Failures (invalid key, encode error, disk error) are logged and
    /// swallowed; the caller may assume this never fails.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_set(key, value) {
            warn!(key, error = %err, "Store write failed, value not persisted");
        }
    }

    /// Deletes the entry stored under `key`. Idempotent; failures are
    /// logged and swallowed.
    pub fn remove(&self, key: &str) {
        if let Err(err) = self.try_remove(key) {
            warn!(key, error = %err, "Store delete failed");
        }
    }

    /// Returns true when a document exists under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.try_read(key).is_ok_and(|raw| raw.is_some())
    }

    fn try_set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        validate_key(key)?;
        let raw = serde_json::to_string(value)
            .map_err(|source| StoreError::Encode { source, key: key.to_owned() })?;
        self.try_write(key, &raw)
    }

    fn try_read(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        match &self.inner.backend {
            Backend::Memory(map) => Ok(map.read().get(key).cloned()),
            Backend::Disk { root, .. } => {
                let path = entry_path(root, key);
                match fs::read_to_string(&path) {
                    Ok(raw) => Ok(Some(raw)),
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
                    Err(err) => Err(StoreError::io(err, path.display().to_string())),
                }
            },
        }
    }

    fn try_write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        match &self.inner.backend {
            Backend::Memory(map) => {
                map.write().insert(key.to_owned(), raw.to_owned());
                Ok(())
            },
            Backend::Disk { root, tmp_counter } => {
                let path = entry_path(root, key);
                write_atomic(&path, raw.as_bytes(), tmp_counter)?;
                debug!(key, path = %path.display(), "Entry saved atomically");
                Ok(())
            },
        }
    }

    fn try_remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        match &self.inner.backend {
            Backend::Memory(map) => {
                map.write().remove(key);
                Ok(())
            },
            Backend::Disk { root, .. } => {
                let path = entry_path(root, key);
                match fs::remove_file(&path) {
                    Ok(()) => {
                        debug!(key, "Entry deleted");
                        Ok(())
                    },
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                    Err(err) => Err(StoreError::io(err, path.display().to_string())),
                }
            },
        }
    }
}

/// Keys double as file names, so the accepted alphabet is restricted to
/// characters that are safe on every filesystem and cannot traverse paths.
fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey { key: key.to_owned(), reason: "key is empty" });
    }
    if key.starts_with('.') {
        return Err(StoreError::InvalidKey {
            key: key.to_owned(),
            reason: "key must not start with a dot",
        });
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')) {
        return Err(StoreError::InvalidKey {
            key: key.to_owned(),
            reason: "key must match [A-Za-z0-9._-]",
        });
    }
    Ok(())
}

fn entry_path(root: &Path, key: &str) -> PathBuf {
    root.join(format!("{key}.{ENTRY_SUFFIX}"))
}

/// Atomic swap: write to a unique temp sibling, sync to hardware, rename
/// over the target. The target is never observed in a partial state.
fn write_atomic(target: &Path, data: &[u8], counter: &AtomicU64) -> Result<(), StoreError> {
    let temp = unique_tmp_path(target, counter);

    {
        let mut file = fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&temp)
            .map_err(|err| StoreError::io(err, temp.display().to_string()))?;
        file.write_all(data).map_err(|err| StoreError::io(err, temp.display().to_string()))?;
        file.sync_all().map_err(|err| StoreError::io(err, temp.display().to_string()))?;
    }

    if let Err(err) = fs::rename(&temp, target) {
        if err.kind() == std::io::ErrorKind::AlreadyExists {
            fs::remove_file(target)
                .map_err(|err| StoreError::io(err, target.display().to_string()))?;
            fs::rename(&temp, target)
                .map_err(|err| StoreError::io(err, target.display().to_string()))?;
        } else {
            return Err(StoreError::io(err, target.display().to_string()));
        }
    }

    Ok(())
}

fn unique_tmp_path(target: &Path, counter: &AtomicU64) -> PathBuf {
    let counter = counter.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("entry");
    target.with_file_name(format!("{file_name}.cdtmp.{counter}"))
}
