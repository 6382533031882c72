//! A small, crash-safe key-value store with JSON semantics.
//!
//! This crate is the persistence capability consumed by the feature
//! enablement and settings subsystems. It deliberately exposes an
//! infallible surface: reads fall back to a caller-supplied default and
//! writes log-and-swallow failures, so callers never have to thread
//! persistence errors through UI-facing code paths.
//!
//! # Core Features
//!
//! - **JSON values**: every entry is one JSON document, (de)serialized via `serde`.
//! - **Atomic Writes**: unique temp file + `fsync` + `rename`, so an entry is
//!   never observed half-written even across a crash.
//! - **Self-Healing**: orphaned temp files from earlier crashes are removed
//!   when a file-backed store is opened.
//! - **Two Backends**: a file-backed store (one document per key under a root
//!   directory) and an in-memory store for tests and ephemeral runs.
//!
//! # Examples
//!
//! ```rust
//! use crewdeck_store::Store;
//!
//! # fn main() -> Result<(), crewdeck_store::StoreError> {
//! # let tmp = tempfile::tempdir().unwrap();
//! # let root = tmp.path().join("data");
//! let store = Store::builder().root(&root).create(true).open()?;
//!
//! store.set("crewdeck.settings", &serde_json::json!({ "theme": "dark" }));
//!
//! let value: serde_json::Value = store.get("crewdeck.settings", serde_json::Value::Null);
//! assert_eq!(value["theme"], "dark");
//!
//! // Absent keys resolve to the supplied default instead of an error.
//! let missing: Vec<String> = store.get("crewdeck.enabled-features", Vec::new());
//! assert!(missing.is_empty());
//! # Ok(())
//! # }
//! ```

mod builder;
mod engine;
mod error;
mod maintenance;

pub use builder::StoreBuilder;
pub use engine::Store;
pub use error::StoreError;
