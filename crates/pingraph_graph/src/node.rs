// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the graph.

use crate::layout::NodeGeometry;
use crate::pin::{Pin, PinDirection, PinId, PinIdentifier, PinType};
use egui::Rect;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::fmt;

/// Unique identifier for a node within a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub i32);

impl NodeId {
    /// Sentinel meaning "no node"
    pub const NONE: Self = Self(-1);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node instance in the graph
///
/// Nodes are created through [`Graph::new_node`](crate::Graph::new_node) or a
/// [`FunctionDescriptor`](crate::registry::FunctionDescriptor), which source
/// their ID from the graph's counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    name: String,
    position: [f32; 2],
    /// Display order, and `pins[i].id() == i`
    pins: Vec<Pin>,
    #[serde(skip)]
    geometry: OnceCell<NodeGeometry>,
    #[serde(skip)]
    changed: bool,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: [0.0, 0.0],
            pins: Vec::new(),
            geometry: OnceCell::new(),
            changed: false,
        }
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.set_position([x, y]);
        self
    }

    /// Node ID
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the node
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.changed = true;
    }

    /// Top-left corner in canvas space
    pub fn position(&self) -> [f32; 2] {
        self.position
    }

    /// Move the node
    pub fn set_position(&mut self, position: [f32; 2]) {
        self.position = position;
        self.refresh_geometry();
        self.changed = true;
    }

    /// Move the node by a delta
    pub fn translate(&mut self, delta: [f32; 2]) {
        self.set_position([self.position[0] + delta[0], self.position[1] + delta[1]]);
    }

    /// Append a pin and return its ID
    pub fn add_pin(
        &mut self,
        direction: PinDirection,
        pin_type: PinType,
        name: impl Into<String>,
    ) -> PinId {
        let pin_id = PinId::from(self.pins.len());
        tracing::debug!("Adding pin to node with ID {}, pin ID = {}", self.id, pin_id);
        self.pins.push(Pin::new(self.id, pin_id, name, pin_type, direction));
        self.refresh_geometry();
        self.changed = true;
        pin_id
    }

    /// Get a pin by index
    pub fn pin(&self, pin_id: PinId) -> Option<&Pin> {
        let pin = pin_id.index().and_then(|index| self.pins.get(index));
        if pin.is_none() {
            tracing::warn!(
                "Attempted to get pin of invalid index {} on node {} (count = {})",
                pin_id,
                self.id,
                self.pins.len()
            );
        }
        pin
    }

    /// All pins in display order
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Number of pins
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    /// Number of pins with the given direction
    pub fn pin_count_in(&self, direction: PinDirection) -> usize {
        self.pins.iter().filter(|p| p.direction() == direction).count()
    }

    /// Identifier of one of this node's pins
    pub fn pin_identifier(&self, pin_id: PinId) -> PinIdentifier {
        PinIdentifier::new(self.id, pin_id)
    }

    /// Node body rectangle
    pub fn bounding_rect(&self) -> Rect {
        self.geometry().rect
    }

    /// Title strip rectangle
    pub fn header_rect(&self) -> Rect {
        self.geometry().header_rect()
    }

    /// Hit rectangle of a pin
    pub fn pin_rect(&self, pin_id: PinId) -> Option<Rect> {
        let index = pin_id.index()?;
        self.geometry().pin_rects.get(index).copied()
    }

    /// Label rectangle of a pin
    pub fn pin_label_rect(&self, pin_id: PinId) -> Option<Rect> {
        let index = pin_id.index()?;
        self.geometry().label_rects.get(index).copied()
    }

    /// Cached geometry, recomputed after any change that affects layout
    pub fn geometry(&self) -> &NodeGeometry {
        self.geometry
            .get_or_init(|| NodeGeometry::compute(self.position, &self.pins))
    }

    fn refresh_geometry(&mut self) {
        self.geometry.take();
    }

    /// Whether every pin is owned by this node and indexed by its position
    pub(crate) fn pins_consistent(&self) -> bool {
        self.pins
            .iter()
            .enumerate()
            .all(|(i, p)| p.owner() == self.id && p.id() == PinId::from(i))
    }

    /// Read and clear the change flag
    pub(crate) fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
