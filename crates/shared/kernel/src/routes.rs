//! Route resolution: a route segment is a feature id, and only registered
//! *and* enabled features resolve to a renderable target.

use crate::registry::FeatureRegistry;
use crewdeck_domain::feature::FeatureDescriptor;
use tracing::debug;

/// The result of resolving a route segment against the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// The segment names a registered, enabled feature.
    Feature(FeatureDescriptor),
    /// Unknown id, or a known feature that is currently disabled. Both
    /// render the same not-found surface; disabled features are not
    /// distinguishable from absent ones at the route level.
    NotFound,
}

impl RouteOutcome {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    #[must_use]
    pub fn into_feature(self) -> Option<FeatureDescriptor> {
        match self {
            Self::Feature(descriptor) => Some(descriptor),
            Self::NotFound => None,
        }
    }
}

/// Resolves `id` against `registry`.
///
/// The descriptor's `enabled` flag is the registry mirror maintained by the
/// enablement store, so a disabled feature resolves to
/// [`RouteOutcome::NotFound`] even though it stays registered.
#[must_use]
pub fn resolve_route(registry: &FeatureRegistry, id: &str) -> RouteOutcome {
    match registry.get(id) {
        Some(descriptor) if descriptor.enabled => RouteOutcome::Feature(descriptor),
        Some(_) => {
            debug!(feature = id, "Route target is registered but disabled");
            RouteOutcome::NotFound
        },
        None => {
            debug!(feature = id, "Route target is not registered");
            RouteOutcome::NotFound
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_disabled_ids_resolve_to_not_found() {
        let registry = FeatureRegistry::new();
        registry.register(
            FeatureDescriptor::builder()
                .id("tasks")
                .name("Tasks")
                .icon("icon.tasks")
                .component("view.tasks")
                .enabled(false)
                .build(),
        );

        assert!(resolve_route(&registry, "nope").is_not_found());
        assert!(resolve_route(&registry, "tasks").is_not_found());
    }

    #[test]
    fn enabled_feature_resolves_to_its_descriptor() {
        let registry = FeatureRegistry::new();
        registry.register(
            FeatureDescriptor::builder()
                .id("tasks")
                .name("Tasks")
                .icon("icon.tasks")
                .component("view.tasks")
                .build(),
        );

        let outcome = resolve_route(&registry, "tasks");
        assert_eq!(outcome.into_feature().unwrap().id, "tasks");
    }
}
