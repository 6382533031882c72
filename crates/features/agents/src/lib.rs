//! Agents feature slice.

use crewdeck_kernel::FeatureRegistry;
use crewdeck_kernel::domain::constants::AGENTS;
use crewdeck_kernel::domain::feature::FeatureDescriptor;

/// The agents navigation and route descriptor.
#[must_use]
pub fn descriptor() -> FeatureDescriptor {
    FeatureDescriptor::builder()
        .id(AGENTS)
        .name("Agents")
        .description("Operate and monitor autonomous agents")
        .icon("icon.agents")
        .component("view.agents")
        .order(3)
        .build()
}

/// Registers the agents slice.
pub fn register(registry: &FeatureRegistry) {
    registry.register(descriptor());
    tracing::info!("Agents slice registered");
}
