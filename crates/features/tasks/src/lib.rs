//! Tasks feature slice.

use crewdeck_kernel::FeatureRegistry;
use crewdeck_kernel::domain::constants::TASKS;
use crewdeck_kernel::domain::feature::FeatureDescriptor;

/// The tasks navigation and route descriptor.
#[must_use]
pub fn descriptor() -> FeatureDescriptor {
    FeatureDescriptor::builder()
        .id(TASKS)
        .name("Tasks")
        .description("Track and triage the crew's work items")
        .icon("icon.tasks")
        .component("view.tasks")
        .order(1)
        .build()
}

/// Registers the tasks slice.
pub fn register(registry: &FeatureRegistry) {
    registry.register(descriptor());
    tracing::info!("Tasks slice registered");
}
