//! Facade crate for Crewdeck features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature registration.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Build a [`Hub`] with [`Hub::bootstrap`] during startup, then
//!   [`Hub::install`] it so the rest of the app reaches it via
//!   [`Hub::current`]; extend [`init`] as new slices appear.

use crewdeck_kernel::{EnablementStore, FeatureRegistry};
use crewdeck_settings::SettingsStore;
use crewdeck_store::Store;
use std::sync::OnceLock;

pub use crewdeck_domain as domain;
pub use crewdeck_kernel as kernel;
pub use crewdeck_settings as settings;
pub use crewdeck_store as store;

/// Feature slices shipped with the workspace.
pub mod features {
    pub use crewdeck_agents as agents;
    pub use crewdeck_tasks as tasks;
    pub use crewdeck_templates as templates;
    pub use crewdeck_workflows as workflows;

    use crewdeck_domain::constants::{AGENTS, TASKS, TEMPLATES, WORKFLOWS};

    /// Ids of the built-in feature slices, in navigation order.
    pub const BUILT_IN: &[&str] = &[TASKS, WORKFLOWS, AGENTS, TEMPLATES];

    #[must_use]
    pub fn is_built_in(id: &str) -> bool {
        BUILT_IN.contains(&id)
    }
}

/// Registers every built-in feature slice with `registry`.
pub fn init(registry: &FeatureRegistry) {
    features::tasks::register(registry);
    features::workflows::register(registry);
    features::agents::register(registry);
    features::templates::register(registry);
}

static HUB: OnceLock<Hub> = OnceLock::new();

/// The composed application services: one store, one registry, the
/// enablement state over both, and the settings store.
///
/// All fields are cheaply cloneable handles; accessors hand out clones.
#[derive(Debug, Clone)]
pub struct Hub {
    store: Store,
    registry: FeatureRegistry,
    enablement: EnablementStore,
    settings: SettingsStore,
}

impl Hub {
    /// Composes a hub over `store`: registers the built-in slices, loads
    /// (or seeds) the enablement state, and loads the settings.
    #[must_use]
    pub fn bootstrap(store: Store) -> Self {
        let registry = FeatureRegistry::new();
        init(&registry);

        let enablement = EnablementStore::load(&registry, &store);
        let settings = SettingsStore::load(&store);
        tracing::info!(features = registry.len(), "Hub bootstrapped");

        Self { store, registry, enablement, settings }
    }

    /// Publishes this hub as the process-wide instance. Later calls are
    /// ignored; the first installed hub wins.
    pub fn install(self) {
        let _ = HUB.set(self);
    }

    /// The process-wide hub.
    ///
    /// # Panics
    /// Panics when no hub has been installed. Accessing application
    /// services outside a bootstrapped process is a programming error, not
    /// a recoverable condition.
    #[must_use]
    pub fn current() -> &'static Self {
        HUB.get().expect("Hub::current() called before Hub::install(); bootstrap the hub first")
    }

    #[must_use]
    pub fn store(&self) -> Store {
        self.store.clone()
    }

    #[must_use]
    pub fn registry(&self) -> FeatureRegistry {
        self.registry.clone()
    }

    #[must_use]
    pub fn enablement(&self) -> EnablementStore {
        self.enablement.clone()
    }

    #[must_use]
    pub fn settings(&self) -> SettingsStore {
        self.settings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_registers_built_ins_and_seeds_enablement() {
        let hub = Hub::bootstrap(Store::in_memory());

        let ids: Vec<_> =
            hub.registry().get_all().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, features::BUILT_IN);

        // Templates ships disabled; the seed respects descriptor defaults.
        assert!(hub.enablement().is_enabled("tasks"));
        assert!(!hub.enablement().is_enabled("templates"));
    }

    #[test]
    fn built_in_lookup() {
        assert!(features::is_built_in("workflows"));
        assert!(!features::is_built_in("billing"));
    }
}
