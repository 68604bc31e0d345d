// SPDX-License-Identifier: MIT OR Apache-2.0
//! `Pingraph` Editor - headless node graph editor
//!
//! Loads the configured graph asset, replays an optional input script
//! through the editor controller, and saves the result.
//!
//! ```text
//! pingraph_editor [config.ron] [script.ron]
//! ```
//!
//! ## Architecture
//!
//! The graph model lives in `pingraph_graph`. This binary supplies what a
//! host window would: input events, the function palette, asset
//! persistence and logging.

use pingraph_editor::config::{ConfigError, EditorConfig, CONFIG_FILE_NAME};
use pingraph_editor::controller::GraphController;
use pingraph_editor::input::GraphInputHandler;
use pingraph_editor::{asset, script};
use pingraph_graph::library::default_registry;
use pingraph_graph::Graph;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Fatal editor errors
#[derive(Debug, Error)]
enum EditorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] asset::AssetError),

    #[error(transparent)]
    Script(#[from] script::ScriptError),
}

fn main() {
    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), PathBuf::from);
    let script_path = args.next().map(PathBuf::from);

    let config = EditorConfig::load_or_default(&config_path);
    let filter = config
        .as_ref()
        .map_or_else(|_| EditorConfig::default().log_filter, |c| c.log_filter.clone());
    init_logging(&filter);

    tracing::info!("Starting Pingraph Editor v{}", env!("CARGO_PKG_VERSION"));

    let result = config
        .map_err(EditorError::from)
        .and_then(|config| run(config, script_path.as_deref()));
    if let Err(e) = result {
        tracing::error!("Editor failed: {e}");
        std::process::exit(1);
    }
}

fn init_logging(filter: &str) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in filter.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        match directive.parse() {
            Ok(directive) => env_filter = env_filter.add_directive(directive),
            Err(e) => eprintln!("Ignoring log directive '{directive}': {e}"),
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run(config: EditorConfig, script_path: Option<&Path>) -> Result<(), EditorError> {
    let mut registry = default_registry();
    registry.extend(config.functions.iter().cloned());
    tracing::info!(
        "Registered {} functions in {} libraries",
        registry.len(),
        registry.libraries().len()
    );

    let graph_path = config.graph_path.clone();
    let graph = if graph_path.exists() {
        asset::load_graph(&graph_path)?
    } else {
        let name = graph_path
            .file_stem()
            .map_or_else(|| "Untitled".to_string(), |s| s.to_string_lossy().into_owned());
        tracing::info!("Creating new graph '{}' at {}", name, graph_path.display());
        Graph::new(name)
    };

    let mut controller =
        GraphController::new(Graph::default(), registry, config).with_asset_path(&graph_path);
    controller.on_graph_loaded(graph);

    if let Some(path) = script_path {
        let steps = script::load(path)?;
        let report = script::replay(&mut controller, &steps);
        tracing::info!(
            "Replayed {} steps over {} frames ({} events, {} autosaves, {} failed spawns)",
            report.steps,
            report.frames,
            report.events,
            report.saves,
            report.failed_spawns
        );
    }

    if controller.is_dirty() || !graph_path.exists() {
        let graph = controller.graph();
        asset::save_graph(graph, &graph_path)?;
    }

    let graph = controller.into_graph();
    tracing::info!(
        "Graph '{}': {} nodes, {} links",
        graph.name,
        graph.node_count(),
        graph.link_count()
    );
    Ok(())
}
