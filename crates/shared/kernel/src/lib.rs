//! Kernel of the modular shell: the feature registry, the persisted
//! enablement state that overlays it, and route resolution on top of both.
//!
//! Everything here is synchronous and handle-based. [`FeatureRegistry`] and
//! [`EnablementStore`] are cheaply cloneable `Arc` handles meant to be passed
//! into every subsystem that needs them.
//!
//! ```rust
//! use crewdeck_domain::feature::FeatureDescriptor;
//! use crewdeck_kernel::FeatureRegistry;
//!
//! let registry = FeatureRegistry::new();
//! registry.register(
//!     FeatureDescriptor::builder()
//!         .id("tasks")
//!         .name("Tasks")
//!         .icon("icon.tasks")
//!         .component("view.tasks")
//!         .order(1)
//!         .build(),
//! );
//! assert!(registry.has("tasks"));
//! ```

pub mod config;
pub mod enablement;
pub mod registry;
pub mod routes;

pub use enablement::EnablementStore;
pub use registry::FeatureRegistry;
pub use routes::{RouteOutcome, resolve_route};

pub use crewdeck_domain as domain;
