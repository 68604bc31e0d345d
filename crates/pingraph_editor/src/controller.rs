// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor controller: turns input events into graph edits.
//!
//! Features:
//! - Pin and node picking
//! - Drag-to-link between pins
//! - Node dragging
//! - Canvas panning
//! - Delete / escape keys
//! - Save-on-change at the end of each frame

use crate::asset;
use crate::config::EditorConfig;
use crate::input::{GraphInputHandler, GraphInputListener, Key, PointerButton};
use egui::{pos2, Pos2, Vec2};
use pingraph_graph::{
    FunctionRegistry, Graph, GraphEvent, HitTarget, NodeId, PinIdentifier, Selection,
};
use std::path::PathBuf;

/// Offset between successive palette spawns
const SPAWN_STEP: f32 = 37.0;

/// What the pointer is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// No button held
    #[default]
    Idle,
    /// Dragging a node body
    DraggingNode {
        /// Node being dragged
        node: NodeId,
        /// Whether the pointer moved since the press
        moved: bool,
    },
    /// Dragging a link out of a pin
    DraggingLink {
        /// Pin the drag started on
        from: PinIdentifier,
    },
    /// Scrolling the canvas
    Panning,
}

/// Outcome of [`GraphController::end_frame`]
#[derive(Debug, Clone, Default)]
pub struct FrameSummary {
    /// Events flushed this frame
    pub events: Vec<GraphEvent>,
    /// Whether the asset was written
    pub saved: bool,
}

/// Owns the edited graph and applies input to it
pub struct GraphController {
    graph: Graph,
    registry: FunctionRegistry,
    config: EditorConfig,
    /// Where the graph is saved, if anywhere
    asset_path: Option<PathBuf>,
    interaction: Interaction,
    /// Last pointer position (screen space)
    last_pointer: Pos2,
    /// Unsaved structural changes
    dirty: bool,
    spawn_count: u32,
}

impl GraphController {
    /// Create a controller for `graph`
    pub fn new(graph: Graph, registry: FunctionRegistry, config: EditorConfig) -> Self {
        Self {
            graph,
            registry,
            config,
            asset_path: None,
            interaction: Interaction::Idle,
            last_pointer: Pos2::ZERO,
            dirty: false,
            spawn_count: 0,
        }
    }

    /// Save to `path` when changes are flushed
    pub fn with_asset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.asset_path = Some(path.into());
        self
    }

    /// The edited graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The function palette
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Current pointer interaction
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Whether there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Link being dragged: the source pin and the pointer in canvas space
    pub fn pending_link(&self) -> Option<(PinIdentifier, Pos2)> {
        match self.interaction {
            Interaction::DraggingLink { from } => Some((from, self.to_canvas(self.last_pointer))),
            _ => None,
        }
    }

    /// Convert a screen position to canvas space
    pub fn to_canvas(&self, screen: Pos2) -> Pos2 {
        let [x, y] = self.graph.viewport_offset();
        screen - Vec2::new(x, y)
    }

    /// Add a node for a registered function.
    ///
    /// Without an explicit position, nodes are placed on a diagonal cascade
    /// that wraps inside the configured spawn area.
    pub fn spawn(&mut self, function_id: &str, position: Option<Pos2>) -> Option<NodeId> {
        let options = self.config.node_options();
        let node = self
            .registry
            .create_node(function_id, &mut self.graph, options)?;

        let position = position.unwrap_or_else(|| self.next_spawn_position());
        let node = node.with_position(position.x, position.y);
        match self.graph.add_node(node) {
            Ok(id) => {
                tracing::info!("Spawned '{}' as node {}", function_id, id);
                Some(id)
            }
            Err(e) => {
                tracing::error!("Failed to add node for '{}': {}", function_id, e);
                None
            }
        }
    }

    fn next_spawn_position(&mut self) -> Pos2 {
        let step = self.spawn_count as f32 * SPAWN_STEP;
        self.spawn_count += 1;
        let [width, height] = self.config.spawn_area;
        pos2(step % width.max(1.0), step % height.max(1.0))
    }

    /// Remove the selected node, if a node is selected
    pub fn delete_selected(&mut self) -> bool {
        let Selection::Node(node) = self.graph.selection() else {
            return false;
        };
        self.graph.remove_node(node).is_some()
    }

    /// Flush graph events and save if anything structural changed.
    ///
    /// Saving waits until no node drag is in progress.
    pub fn end_frame(&mut self) -> FrameSummary {
        let events = self.graph.flush_events();
        if events.iter().any(GraphEvent::is_structural) {
            self.dirty = true;
        }

        let dragging = matches!(self.interaction, Interaction::DraggingNode { .. });
        let saved = self.dirty && self.config.autosave && !dragging && self.save_now();

        FrameSummary { events, saved }
    }

    /// Save to the asset path, logging failures
    pub fn save_now(&mut self) -> bool {
        let Some(path) = &self.asset_path else {
            return false;
        };
        match asset::save_graph(&self.graph, path) {
            Ok(()) => {
                self.dirty = false;
                true
            }
            Err(e) => {
                tracing::error!("Failed to save graph to {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Give up the graph
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl GraphInputListener for GraphController {
    fn on_pointer_down(&mut self, button: PointerButton, position: Pos2) {
        self.last_pointer = position;

        if button == self.config.pan_button {
            self.interaction = Interaction::Panning;
            return;
        }
        if button != PointerButton::Primary {
            return;
        }

        self.interaction = match self.graph.hit_test(self.to_canvas(position)) {
            Some(HitTarget::Pin(pin)) => {
                self.graph.select_pin(pin);
                Interaction::DraggingLink { from: pin }
            }
            Some(HitTarget::Node(node)) => {
                tracing::debug!("Picked node {}", node);
                self.graph.select_node(node);
                Interaction::DraggingNode { node, moved: false }
            }
            None => {
                self.graph.deselect();
                Interaction::Idle
            }
        };
    }

    fn on_pointer_up(&mut self, button: PointerButton, position: Pos2) {
        self.on_pointer_move(position);

        match self.interaction {
            Interaction::DraggingLink { from } if button == PointerButton::Primary => {
                if let Some(target) = self.graph.pin_at(self.to_canvas(position)) {
                    if target != from {
                        self.link_pins(from, target);
                    }
                }
            }
            Interaction::DraggingNode { node, moved } if button == PointerButton::Primary => {
                if moved {
                    tracing::debug!("Dropped node {}", node);
                }
            }
            Interaction::Panning if button == self.config.pan_button => {}
            _ => return,
        }
        self.interaction = Interaction::Idle;
    }

    fn on_pointer_move(&mut self, position: Pos2) {
        let delta = position - self.last_pointer;
        self.last_pointer = position;
        if delta == Vec2::ZERO {
            return;
        }

        match &mut self.interaction {
            Interaction::DraggingNode { node, moved } => {
                if let Some(n) = self.graph.node_mut(*node) {
                    n.translate([delta.x, delta.y]);
                    *moved = true;
                }
            }
            Interaction::Panning => {
                let [x, y] = self.graph.viewport_offset();
                self.graph.set_viewport_offset([x + delta.x, y + delta.y]);
            }
            Interaction::Idle | Interaction::DraggingLink { .. } => {}
        }
    }

    fn on_key_up(&mut self, key: &Key) {
        match key {
            Key::Delete | Key::Backspace => {
                self.interaction = Interaction::Idle;
                self.delete_selected();
            }
            Key::Escape => {
                self.interaction = Interaction::Idle;
                self.graph.deselect();
            }
            Key::Other(_) => {}
        }
    }
}

impl GraphInputHandler for GraphController {
    fn on_graph_loaded(&mut self, graph: Graph) {
        tracing::info!("Editing graph '{}'", graph.name);
        self.graph = graph;
        self.graph.deselect();
        self.graph.drain_events();
        self.interaction = Interaction::Idle;
        self.dirty = false;
    }

    fn move_node(&mut self, node: NodeId, position: Pos2) -> bool {
        self.graph.move_node(node, [position.x, position.y])
    }

    fn link_pins(&mut self, a: PinIdentifier, b: PinIdentifier) -> bool {
        match self.graph.link_pins(a, b) {
            Ok(link) => {
                tracing::info!("Linked {}", link);
                true
            }
            Err(e) => {
                tracing::info!("Link refused: {}", e);
                false
            }
        }
    }
}
