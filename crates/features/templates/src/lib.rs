//! Templates feature slice.
//!
//! Ships disabled by default while the template editor is in beta; users
//! opt in through the feature toggles.

use crewdeck_kernel::FeatureRegistry;
use crewdeck_kernel::domain::constants::TEMPLATES;
use crewdeck_kernel::domain::feature::FeatureDescriptor;

/// The templates navigation and route descriptor.
#[must_use]
pub fn descriptor() -> FeatureDescriptor {
    FeatureDescriptor::builder()
        .id(TEMPLATES)
        .name("Templates")
        .description("Reusable starting points for tasks and workflows")
        .icon("icon.templates")
        .component("view.templates")
        .order(4)
        .enabled(false)
        .build()
}

/// Registers the templates slice.
pub fn register(registry: &FeatureRegistry) {
    registry.register(descriptor());
    tracing::info!("Templates slice registered");
}
