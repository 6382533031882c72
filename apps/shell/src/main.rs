//! Crewdeck shell: bootstraps the hub and reports the navigation and the
//! projected presentation state over structured logs. The actual UI layer
//! subscribes to the same handles this binary wires up.

use anyhow::Context;
use crewdeck::Hub;
use crewdeck::kernel::config::load_config;
use crewdeck::kernel::resolve_route;
use crewdeck::settings::{SIDEBAR_ATTRIBUTE, project};
use crewdeck::store::Store;
use crewdeck_logger::{LevelFilter, Logger};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "shell.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShellConfig {
    /// Root directory for persisted state. When unset the shell runs on an
    /// in-memory store and nothing survives the process.
    data_dir: Option<PathBuf>,
    log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct LogConfig {
    level: String,
    dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), dir: None }
    }
}

fn main() -> anyhow::Result<()> {
    let config_path = Path::new(CONFIG_FILE).exists().then_some(CONFIG_FILE);
    let cfg: ShellConfig =
        load_config(config_path).context("Critical: Configuration is malformed")?;

    let level = LevelFilter::from_str(&cfg.log.level)
        .with_context(|| format!("Invalid log level {:?}", cfg.log.level))?;
    let mut logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    if let Some(dir) = &cfg.log.dir {
        logger = logger.path(dir.clone());
    }
    let _log = logger.init()?;

    let store = match &cfg.data_dir {
        Some(dir) => Store::builder()
            .create(true)
            .root(dir.clone())
            .open()
            .with_context(|| format!("Failed to open data directory {}", dir.display()))?,
        None => {
            tracing::warn!("No data_dir configured, state will not persist");
            Store::in_memory()
        },
    };

    Hub::bootstrap(store).install();
    let hub = Hub::current();

    // Push every applied settings record into the presentation layer.
    hub.settings().on_applied(|applied| {
        let projection = project(applied);
        tracing::info!(
            css = %projection.to_css(),
            attribute = SIDEBAR_ATTRIBUTE,
            position = projection.sidebar_position,
            "Presentation state projected"
        );
    });

    let registry = hub.registry();
    for descriptor in registry.get_enabled() {
        tracing::info!(
            feature = %descriptor.id,
            name = %descriptor.name,
            order = descriptor.order,
            "Navigation entry"
        );
    }

    for id in crewdeck::features::BUILT_IN {
        if resolve_route(&registry, id).is_not_found() {
            tracing::info!(feature = id, "Route hidden");
        }
    }

    Ok(())
}
