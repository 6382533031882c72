//! Persisted feature enablement state.
//!
//! The enablement store owns which features are on. On first run it seeds
//! itself from the registered descriptors' default flags and persists that
//! seed immediately; on every later run it adopts the persisted list
//! verbatim, including ids that no longer correspond to a registered
//! feature. Stale ids are deliberately never pruned: a feature module that
//! comes back in a later build finds its previous state intact.
//!
//! Every mutation is write-through (the full id list is re-persisted) and
//! re-mirrors the state onto the registry's descriptor flags.

use crate::registry::FeatureRegistry;
use crewdeck_domain::constants::ENABLED_FEATURES_KEY;
use crewdeck_store::Store;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// A thread-safe handle to the persisted enabled-feature id list.
///
/// The list keeps insertion order, which is also its persisted order.
#[derive(Debug, Clone)]
pub struct EnablementStore {
    ids: Arc<RwLock<Vec<String>>>,
    registry: FeatureRegistry,
    store: Store,
}

impl EnablementStore {
    /// Loads enablement state for `registry` out of `store`.
    ///
    /// When the store holds a decodable id list it is adopted verbatim.
    /// Otherwise (first run, or an undecodable document) the state is seeded
    /// from the default flags of the currently registered descriptors and
    /// persisted on the spot. Either way the registry mirror is synced
    /// before the handle is returned.
    #[must_use]
    pub fn load(registry: &FeatureRegistry, store: &Store) -> Self {
        let ids = store.get_opt::<Vec<String>>(ENABLED_FEATURES_KEY).map_or_else(
            || {
                let seeded: Vec<String> = registry
                    .get_all()
                    .into_iter()
                    .filter(|d| d.enabled)
                    .map(|d| d.id)
                    .collect();
                store.set(ENABLED_FEATURES_KEY, &seeded);
                info!(count = seeded.len(), "Enablement state seeded from feature defaults");
                seeded
            },
            |persisted| {
                debug!(count = persisted.len(), "Enablement state loaded");
                persisted
            },
        );

        registry.sync_enabled(ids.iter().map(String::as_str));

        Self {
            ids: Arc::new(RwLock::new(ids)),
            registry: registry.clone(),
            store: store.clone(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self, id: &str) -> bool {
        self.ids.read().iter().any(|i| i == id)
    }

    /// The current enabled id list, in persisted order.
    #[must_use]
    pub fn enabled_ids(&self) -> Vec<String> {
        self.ids.read().clone()
    }

    /// Marks `id` enabled. Idempotent; persists and re-mirrors either way.
    pub fn enable(&self, id: &str) {
        self.mutate(|ids| {
            if !ids.iter().any(|i| i == id) {
                ids.push(id.to_owned());
            }
        });
        debug!(feature = id, "Feature enabled");
    }

    /// Marks `id` disabled. Idempotent; persists and re-mirrors either way.
    pub fn disable(&self, id: &str) {
        self.mutate(|ids| ids.retain(|i| i != id));
        debug!(feature = id, "Feature disabled");
    }

    /// Flips the enablement of `id`.
    pub fn toggle(&self, id: &str) {
        self.mutate(|ids| {
            if ids.iter().any(|i| i == id) {
                ids.retain(|i| i != id);
            } else {
                ids.push(id.to_owned());
            }
        });
        debug!(feature = id, "Feature toggled");
    }

    /// Applies `f` under the write lock, then persists the full list and
    /// mirrors it onto the registry outside the lock.
    fn mutate(&self, f: impl FnOnce(&mut Vec<String>)) {
        let snapshot = {
            let mut ids = self.ids.write();
            f(&mut ids);
            ids.clone()
        };
        self.store.set(ENABLED_FEATURES_KEY, &snapshot);
        self.registry.sync_enabled(snapshot.iter().map(String::as_str));
    }
}
