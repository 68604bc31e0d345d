// SPDX-License-Identifier: MIT OR Apache-2.0
//! Input events delivered by the host and the traits that consume them.

use egui::{pos2, Pos2};
use pingraph_graph::{Graph, NodeId, PinIdentifier};
use serde::{Deserialize, Serialize};

/// Pointer button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerButton {
    /// Left button
    #[default]
    Primary,
    /// Right button
    Secondary,
    /// Wheel button
    Middle,
}

/// Keys the editor reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Delete the selection
    Delete,
    /// Delete the selection
    Backspace,
    /// Cancel the current interaction and deselect
    Escape,
    /// Any other key, by name
    Other(String),
}

/// A discrete event from the host window
///
/// Positions are in screen space, i.e. before the viewport offset is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Button pressed
    PointerDown {
        /// Button
        button: PointerButton,
        /// Pointer position
        position: [f32; 2],
    },
    /// Button released
    PointerUp {
        /// Button
        button: PointerButton,
        /// Pointer position
        position: [f32; 2],
    },
    /// Pointer moved (with or without a button held)
    PointerMove {
        /// Pointer position
        position: [f32; 2],
    },
    /// Key released
    KeyUp {
        /// Key
        key: Key,
    },
}

/// Receives raw pointer and key input
pub trait GraphInputListener {
    /// Button pressed at `position`
    fn on_pointer_down(&mut self, button: PointerButton, position: Pos2);
    /// Button released at `position`
    fn on_pointer_up(&mut self, button: PointerButton, position: Pos2);
    /// Pointer moved to `position`
    fn on_pointer_move(&mut self, position: Pos2);
    /// Key released
    fn on_key_up(&mut self, key: &Key);

    /// Dispatch an event to the matching callback
    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { button, position } => {
                self.on_pointer_down(*button, pos2(position[0], position[1]));
            }
            InputEvent::PointerUp { button, position } => {
                self.on_pointer_up(*button, pos2(position[0], position[1]));
            }
            InputEvent::PointerMove { position } => {
                self.on_pointer_move(pos2(position[0], position[1]));
            }
            InputEvent::KeyUp { key } => self.on_key_up(key),
        }
    }
}

/// Graph-level editing actions triggered by input
pub trait GraphInputHandler {
    /// Replace the edited graph
    fn on_graph_loaded(&mut self, graph: Graph);
    /// Move a node to a canvas position
    fn move_node(&mut self, node: NodeId, position: Pos2) -> bool;
    /// Link two pins if the protocol allows it
    fn link_pins(&mut self, a: PinIdentifier, b: PinIdentifier) -> bool;
}
