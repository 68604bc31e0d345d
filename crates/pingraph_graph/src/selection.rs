// SPDX-License-Identifier: MIT OR Apache-2.0
//! Single-element selection cursor.

use crate::node::NodeId;
use crate::pin::{PinId, PinIdentifier};
use serde::{Deserialize, Serialize};

/// What is currently selected in a graph
///
/// Node and pin selection are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing selected
    #[default]
    None,
    /// A whole node
    Node(NodeId),
    /// A single pin
    Pin(PinIdentifier),
}

impl Selection {
    /// Whether a node is selected
    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Whether a pin is selected
    pub fn is_pin(&self) -> bool {
        matches!(self, Self::Pin(_))
    }

    /// The node that owns the selected element
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Self::None => None,
            Self::Node(id) => Some(*id),
            Self::Pin(pin) => Some(pin.node),
        }
    }

    /// Selected element as a pin identifier.
    ///
    /// A node selection is reported as `(node, -1)` and no selection as
    /// [`PinIdentifier::NONE`].
    pub fn element_id(&self) -> PinIdentifier {
        match self {
            Self::None => PinIdentifier::NONE,
            Self::Node(id) => PinIdentifier {
                node: *id,
                pin: PinId::NONE,
            },
            Self::Pin(pin) => *pin,
        }
    }

    /// Whether the selected element belongs to `node`
    pub fn touches_node(&self, node: NodeId) -> bool {
        self.node_id() == Some(node)
    }
}
