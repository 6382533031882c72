//! Well-known identifiers shared across the workspace.

/// Built-in feature module ids.
pub const TASKS: &str = "tasks";
pub const WORKFLOWS: &str = "workflows";
pub const AGENTS: &str = "agents";
pub const TEMPLATES: &str = "templates";

/// Store key holding the persisted enabled-feature-id list.
pub const ENABLED_FEATURES_KEY: &str = "crewdeck.enabled-features";

/// Store key holding the persisted settings record.
pub const SETTINGS_KEY: &str = "crewdeck.settings";
