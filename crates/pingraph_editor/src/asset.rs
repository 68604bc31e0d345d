// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph assets: the persisted form of a graph.
//!
//! An asset stores the node list, link list, ID counter and viewport offset.
//! Selection and cached geometry are not persisted. Files ending in `.json`
//! are written as JSON, everything else as RON.

use pingraph_graph::{Graph, GraphError, Link, Node};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Current graph asset format version
pub const ASSET_FORMAT_VERSION: u32 = 1;

/// Asset errors
#[derive(Debug, Error)]
pub enum AssetError {
    /// File could not be read or written
    #[error("Asset I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// RON serialization failed
    #[error("RON serialization error: {0}")]
    RonSerialize(#[from] ron::Error),

    /// RON parsing failed
    #[error("RON parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Asset content violates graph invariants
    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),

    /// Written by a newer editor
    #[error("Asset version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },
}

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;

/// On-disk encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
    /// Rusty Object Notation
    Ron,
    /// JSON
    Json,
}

impl AssetFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Ron,
        }
    }
}

/// Serializable snapshot of a graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphAsset {
    /// Format version
    pub version: u32,
    /// Graph name
    pub name: String,
    /// Nodes in insertion order
    pub nodes: Vec<Node>,
    /// Links in insertion order
    pub links: Vec<Link>,
    /// Last issued node ID
    pub uid_counter: i32,
    /// Canvas scroll offset
    #[serde(default)]
    pub viewport_offset: [f32; 2],
}

impl GraphAsset {
    /// Snapshot a graph
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            version: ASSET_FORMAT_VERSION,
            name: graph.name.clone(),
            nodes: graph.nodes().cloned().collect(),
            links: graph.links().to_vec(),
            uid_counter: graph.uid_counter(),
            viewport_offset: graph.viewport_offset(),
        }
    }

    /// Rebuild the graph, checking its invariants
    pub fn into_graph(self) -> Result<Graph> {
        if self.version > ASSET_FORMAT_VERSION {
            return Err(AssetError::UnsupportedVersion {
                found: self.version,
                supported: ASSET_FORMAT_VERSION,
            });
        }
        let graph = Graph::from_parts(
            self.name,
            self.nodes,
            self.links,
            self.uid_counter,
            self.viewport_offset,
        )?;
        Ok(graph)
    }

    /// Serialize to RON format
    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Deserialize from RON format
    pub fn from_ron(s: &str) -> Result<Self> {
        Ok(ron::from_str(s)?)
    }

    /// Serialize to JSON format
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON format
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Save to a file, creating missing parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match AssetFormat::from_path(path) {
            AssetFormat::Ron => self.to_ron()?,
            AssetFormat::Json => self.to_json()?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match AssetFormat::from_path(path) {
            AssetFormat::Ron => Self::from_ron(&content),
            AssetFormat::Json => Self::from_json(&content),
        }
    }
}

/// Save a graph to `path`
pub fn save_graph(graph: &Graph, path: &Path) -> Result<()> {
    GraphAsset::from_graph(graph).save(path)?;
    tracing::debug!("Saved graph '{}' to {}", graph.name, path.display());
    Ok(())
}

/// Load a graph from `path`
pub fn load_graph(path: &Path) -> Result<Graph> {
    let graph = GraphAsset::load(path)?.into_graph()?;
    tracing::info!(
        "Loaded graph '{}' ({} nodes, {} links) from {}",
        graph.name,
        graph.node_count(),
        graph.link_count(),
        path.display()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pingraph_graph::library::default_registry;
    use pingraph_graph::{NodeId, NodeOptions, PinIdentifier, Selection};

    fn sample_graph() -> Graph {
        let registry = default_registry();
        let mut graph = Graph::new("Sample");
        let sin = registry
            .create_node("Math.Sin", &mut graph, NodeOptions::default())
            .unwrap()
            .with_position(10.0, 20.0);
        let add = registry
            .create_node("Math.Add", &mut graph, NodeOptions::with_flow())
            .unwrap()
            .with_position(200.0, 40.0);
        let sin = graph.add_node(sin).unwrap();
        let add = graph.add_node(add).unwrap();
        graph
            .link_pins(PinIdentifier::new(sin, 0usize), PinIdentifier::new(add, 3usize))
            .unwrap();
        graph.set_viewport_offset([5.0, -5.0]);
        graph.select_node(sin);
        graph
    }

    fn assert_same(original: &Graph, loaded: &Graph) {
        assert_eq!(loaded.name, original.name);
        assert_eq!(loaded.uid_counter(), original.uid_counter());
        assert_eq!(loaded.viewport_offset(), original.viewport_offset());
        assert_eq!(loaded.links(), original.links());
        assert_eq!(
            loaded.node_ids().collect::<Vec<_>>(),
            original.node_ids().collect::<Vec<_>>()
        );
        for (a, b) in loaded.nodes().zip(original.nodes()) {
            assert_eq!(a.name(), b.name());
            assert_eq!(a.pins(), b.pins());
            assert_eq!(a.bounding_rect(), b.bounding_rect());
        }
        assert_eq!(loaded.selection(), Selection::None);
    }

    #[test]
    fn test_ron_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graphs").join("Sample.ron");
        let graph = sample_graph();

        save_graph(&graph, &path).unwrap();
        let loaded = load_graph(&path).unwrap();
        assert_same(&graph, &loaded);
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Sample.json");
        let graph = sample_graph();

        save_graph(&graph, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.trim_start().starts_with('{'));
        assert_same(&graph, &load_graph(&path).unwrap());
    }

    #[test]
    fn test_loaded_counter_continues() {
        let mut loaded = GraphAsset::from_graph(&sample_graph()).into_graph().unwrap();
        assert_eq!(loaded.generate_unique_node_id(), NodeId(2));
    }

    #[test]
    fn test_dangling_link_rejected() {
        let mut asset = GraphAsset::from_graph(&sample_graph());
        asset.nodes.remove(1);
        assert!(matches!(
            asset.into_graph(),
            Err(AssetError::Graph(GraphError::DanglingLink(_)))
        ));
    }

    #[test]
    fn test_newer_version_rejected() {
        let mut asset = GraphAsset::from_graph(&sample_graph());
        asset.version = ASSET_FORMAT_VERSION + 1;
        assert!(matches!(
            asset.into_graph(),
            Err(AssetError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(AssetFormat::from_path(Path::new("a/b.json")), AssetFormat::Json);
        assert_eq!(AssetFormat::from_path(Path::new("a/b.JSON")), AssetFormat::Json);
        assert_eq!(AssetFormat::from_path(Path::new("a/b.ron")), AssetFormat::Ron);
        assert_eq!(AssetFormat::from_path(Path::new("graph")), AssetFormat::Ron);
    }
}
