use crate::engine::{Backend, Store, StoreInner};
use crate::error::StoreError;
use crate::maintenance;
use private::Sealed;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tracing::info;

#[derive(Debug, Clone)]
struct StoreConfig {
    create: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { create: true }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

/// Fluent builder for a file-backed [`Store`].
///
/// The typestate guarantees at compile time that [`StoreBuilder::open`] is
/// only reachable once a root directory has been provided; ephemeral stores
/// are created directly via [`Store::in_memory`].
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct StoreBuilder<S: Sealed = NoRoot> {
    state: S,
    config: StoreConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> StoreBuilder<S> {
    #[must_use = "Sets whether the root directory should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> StoreBuilder<N> {
        StoreBuilder { state, config: self.config }
    }
}

impl StoreBuilder<NoRoot> {
    #[must_use = "Creates a new store builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory for persisted entries"]
    pub fn root(self, path: impl Into<PathBuf>) -> StoreBuilder<WithRoot> {
        self.transition(WithRoot(path.into()))
    }
}

impl StoreBuilder<WithRoot> {
    /// Consumes the configuration and opens the store.
    ///
    /// Boot sequence:
    /// 1. Creates the root directory when `create(true)` was set.
    /// 2. Canonicalizes the root so all entry paths are physical paths.
    /// 3. Removes orphaned temp files left behind by earlier crashes
    ///    (non-critical; failures only log).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the root does not exist and `create` is
    /// false, or if the process lacks permission to create or resolve it.
    pub fn open(self) -> Result<Store, StoreError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .map_err(|err| StoreError::io(err, root.display().to_string()))?;
            info!(path = %root.display(), "Bootstrapped store root directory");
        }

        let canonical = fs::canonicalize(root)
            .map_err(|err| StoreError::io(err, root.display().to_string()))?;

        maintenance::purge_tmp(&canonical);

        Ok(Store {
            inner: Arc::new(StoreInner {
                backend: Backend::Disk { root: canonical, tmp_counter: AtomicU64::new(1) },
            }),
        })
    }
}
