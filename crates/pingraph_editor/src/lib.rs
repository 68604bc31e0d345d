// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor layer for `Pingraph` graphs.
//!
//! Everything around the graph model that a host window would otherwise
//! provide:
//! - Input events and the traits that consume them
//! - The editor controller (picking, dragging, linking, deleting)
//! - Graph asset persistence (RON / JSON)
//! - Editor configuration
//! - Replayable input scripts

pub mod asset;
pub mod config;
pub mod controller;
pub mod input;
pub mod script;

pub use asset::{AssetError, GraphAsset};
pub use config::{ConfigError, EditorConfig};
pub use controller::{FrameSummary, GraphController, Interaction};
pub use input::{GraphInputHandler, GraphInputListener, InputEvent, Key, PointerButton};
