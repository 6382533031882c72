//! Workflows feature slice.

use crewdeck_kernel::FeatureRegistry;
use crewdeck_kernel::domain::constants::WORKFLOWS;
use crewdeck_kernel::domain::feature::FeatureDescriptor;

/// The workflows navigation and route descriptor.
#[must_use]
pub fn descriptor() -> FeatureDescriptor {
    FeatureDescriptor::builder()
        .id(WORKFLOWS)
        .name("Workflows")
        .description("Design multi-step automation pipelines")
        .icon("icon.workflows")
        .component("view.workflows")
        .order(2)
        .build()
}

/// Registers the workflows slice.
pub fn register(registry: &FeatureRegistry) {
    registry.register(descriptor());
    tracing::info!("Workflows slice registered");
}
