use thiserror::Error;

/// A specialized [`StoreError`] enum of this crate.
///
/// These errors surface only through the builder and the crate-internal
/// `try_*` operations; the public `get`/`set`/`remove` surface logs and
/// swallows them by contract.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("I/O failure at {path}: {source}")]
    Io { source: std::io::Error, path: String },

    #[error("encode failure for key {key:?}: {source}")]
    Encode { source: serde_json::Error, key: String },

    #[error("decode failure for key {key:?}: {source}")]
    Decode { source: serde_json::Error, key: String },
}

impl StoreError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<String>) -> Self {
        Self::Io { source, path: path.into() }
    }
}
