//! The in-memory feature registry.
//!
//! Registration is forgiving by contract: a structurally invalid descriptor
//! is rejected with error logs, a duplicate id keeps the first registration,
//! and an order collision is accepted with a warning. None of these abort
//! the caller, so one misbehaving feature module never takes the shell down.

use crewdeck_domain::feature::{DescriptorIssue, FeatureDescriptor};
use fxhash::FxHashSet;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// A thread-safe handle to the set of registered feature descriptors.
///
/// Entries keep their insertion order internally; [`Self::get_all`] sorts
/// stably by `order`, so equal orders resolve to registration order.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    inner: Arc<RwLock<Vec<FeatureDescriptor>>>,
}

impl FeatureRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `descriptor`, subject to structural validation.
    ///
    /// Invalid descriptors are dropped with one error log per offending
    /// field. A second registration under an already-taken id is ignored
    /// (first wins). An order collision with an existing entry is logged
    /// and the descriptor is registered anyway.
    pub fn register(&self, descriptor: FeatureDescriptor) {
        let issues = descriptor.issues();
        if !issues.is_empty() {
            for issue in &issues {
                error!(
                    feature = %descriptor.id,
                    field = issue.field(),
                    %issue,
                    "Feature registration rejected"
                );
            }
            return;
        }

        let mut entries = self.inner.write();
        if entries.iter().any(|e| e.id == descriptor.id) {
            warn!(
                feature = %descriptor.id,
                "Feature id already registered, keeping the existing entry"
            );
            return;
        }
        if let Some(holder) = entries.iter().find(|e| e.order == descriptor.order) {
            warn!(
                feature = %descriptor.id,
                held_by = %holder.id,
                order = descriptor.order,
                "Navigation order collision, ties resolve by registration order"
            );
        }

        debug!(feature = %descriptor.id, order = descriptor.order, "Feature registered");
        entries.push(descriptor);
    }

    /// Removes the descriptor registered under `id`. Idempotent.
    pub fn unregister(&self, id: &str) {
        let mut entries = self.inner.write();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() < before {
            debug!(feature = id, "Feature unregistered");
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<FeatureDescriptor> {
        self.inner.read().iter().find(|e| e.id == id).cloned()
    }

    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.inner.read().iter().any(|e| e.id == id)
    }

    /// All registered descriptors, sorted ascending by `order`.
    ///
    /// The sort is stable: entries sharing an order keep the order in which
    /// they were registered, matching the collision warning's promise.
    #[must_use]
    pub fn get_all(&self) -> Vec<FeatureDescriptor> {
        let mut entries = self.inner.read().clone();
        entries.sort_by_key(|e| e.order);
        entries
    }

    /// The enabled subset of [`Self::get_all`], same ordering guarantees.
    #[must_use]
    pub fn get_enabled(&self) -> Vec<FeatureDescriptor> {
        let mut entries: Vec<_> =
            self.inner.read().iter().filter(|e| e.enabled).cloned().collect();
        entries.sort_by_key(|e| e.order);
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Drops every registration. Descriptor defaults are not touched
    /// elsewhere, so a subsequent re-registration starts clean.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Overwrites the `enabled` flag of every registered descriptor so it
    /// mirrors the given enabled-id set. Ids that are not registered are
    /// ignored here; the enablement store keeps them regardless.
    pub fn sync_enabled<'a>(&self, enabled_ids: impl IntoIterator<Item = &'a str>) {
        let enabled: FxHashSet<&str> = enabled_ids.into_iter().collect();
        let mut entries = self.inner.write();
        for entry in entries.iter_mut() {
            entry.enabled = enabled.contains(entry.id.as_str());
        }
    }
}
