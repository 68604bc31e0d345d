// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor configuration.
//!
//! Settings are stored as RON. Every field has a default, so a partial file
//! (or no file at all) is valid.

use crate::input::PointerButton;
use pingraph_graph::{FunctionDescriptor, NodeOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "pingraph.ron";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid RON
    #[error("Config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Config could not be serialized
    #[error("Config serialization error: {0}")]
    Serialize(#[from] ron::Error),

    /// Written by a newer editor
    #[error("Config version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },
}

/// Editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Format version
    pub version: u32,
    /// Graph asset edited by default
    pub graph_path: PathBuf,
    /// Save the asset after every structural change
    pub autosave: bool,
    /// Log filter directives, e.g. `pingraph_editor=debug`
    pub log_filter: String,
    /// Area in which palette nodes without an explicit position are placed
    pub spawn_area: [f32; 2],
    /// Give spawned nodes untyped flow pins
    pub flow_pins: bool,
    /// Button that pans the canvas
    pub pan_button: PointerButton,
    /// Functions registered on top of the built-in libraries
    pub functions: Vec<FunctionDescriptor>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            graph_path: PathBuf::from("graphs/NewGraph.ron"),
            autosave: true,
            log_filter: "pingraph_editor=info,pingraph_graph=info".to_string(),
            spawn_area: [200.0, 200.0],
            flow_pins: false,
            pan_button: PointerButton::Middle,
            functions: Vec::new(),
        }
    }
}

impl EditorConfig {
    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: EditorConfig = ron::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_FORMAT_VERSION,
            });
        }

        Ok(config)
    }

    /// Load settings, falling back to defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        let content = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Pin options for nodes spawned from the palette
    pub fn node_options(&self) -> NodeOptions {
        if self.flow_pins {
            NodeOptions::with_flow()
        } else {
            NodeOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert!(config.autosave);
        assert_eq!(config.pan_button, PointerButton::Middle);
        assert_eq!(config.node_options(), NodeOptions::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: EditorConfig = ron::from_str("(autosave: false, flow_pins: true)").unwrap();
        assert!(!config.autosave);
        assert_eq!(config.node_options(), NodeOptions::with_flow());
        assert_eq!(config.spawn_area, [200.0, 200.0]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = EditorConfig::default();
        config.graph_path = PathBuf::from("graphs/Other.json");
        config
            .functions
            .push(FunctionDescriptor::new("Logic", "Not").param("X", "bool").returns("bool"));
        config.save(&path).unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_or_default(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_newer_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "(version: 99)").unwrap();
        assert!(matches!(
            EditorConfig::load(&path),
            Err(ConfigError::UnsupportedVersion { found: 99, .. })
        ));
    }
}
