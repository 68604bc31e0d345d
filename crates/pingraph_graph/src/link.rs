// SPDX-License-Identifier: MIT OR Apache-2.0
//! Link (edge) definitions for the graph.

use crate::node::NodeId;
use crate::pin::PinIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed link from an output pin to an input pin
///
/// A link has no identity beyond its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Output side
    pub from: PinIdentifier,
    /// Input side
    pub to: PinIdentifier,
}

impl Link {
    /// Create a new link
    pub fn new(from: PinIdentifier, to: PinIdentifier) -> Self {
        Self { from, to }
    }

    /// Check if this link involves a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.from.node == node_id || self.to.node == node_id
    }

    /// Check if this link involves a specific pin
    pub fn involves_pin(&self, pin: PinIdentifier) -> bool {
        self.from == pin || self.to == pin
    }

    /// The endpoint opposite to `pin`, if `pin` is one of the endpoints
    pub fn other_end(&self, pin: PinIdentifier) -> Option<PinIdentifier> {
        if self.from == pin {
            Some(self.to)
        } else if self.to == pin {
            Some(self.from)
        } else {
            None
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}
