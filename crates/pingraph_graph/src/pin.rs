// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pin definitions and the linking compatibility protocol.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a pin within its owning node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PinId(pub i32);

impl PinId {
    /// Sentinel meaning "no pin"
    pub const NONE: Self = Self(-1);

    /// Position in the owner's pin list, if this is not the sentinel
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl From<usize> for PinId {
    fn from(index: usize) -> Self {
        Self(i32::try_from(index).unwrap_or(i32::MAX))
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address of a pin: the owning node plus the pin index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinIdentifier {
    /// Owning node
    pub node: NodeId,
    /// Pin index within the node
    pub pin: PinId,
}

impl PinIdentifier {
    /// The `(-1, -1)` identifier that addresses nothing
    pub const NONE: Self = Self {
        node: NodeId::NONE,
        pin: PinId::NONE,
    };

    /// Create a new identifier
    pub fn new(node: NodeId, pin: impl Into<PinId>) -> Self {
        Self {
            node,
            pin: pin.into(),
        }
    }

    /// Whether this is the "no pin" sentinel
    pub fn is_none(&self) -> bool {
        self.pin == PinId::NONE
    }
}

impl Default for PinIdentifier {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for PinIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.node, self.pin)
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinDirection {
    /// Receives a value
    Input,
    /// Produces a value
    Output,
}

impl PinDirection {
    /// The other direction
    pub fn opposite(self) -> Self {
        match self {
            Self::Input => Self::Output,
            Self::Output => Self::Input,
        }
    }
}

/// Type token carried by a pin
///
/// Typed pins only connect to pins with the exact same token. Untyped pins
/// express sequencing ("flow") and only connect to other untyped pins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PinType {
    /// Flow pin without a data type
    #[default]
    Untyped,
    /// Data pin with a case-sensitive type token such as `"float"`
    Typed(String),
}

impl PinType {
    /// Create a typed pin type
    pub fn typed(token: impl Into<String>) -> Self {
        Self::Typed(token.into())
    }

    /// The type token, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Untyped => None,
            Self::Typed(token) => Some(token),
        }
    }

    /// Check if this type can connect to another type
    pub fn can_connect_to(&self, other: &PinType) -> bool {
        // No coercion: untyped matches untyped, tokens must be byte-equal
        self == other
    }
}

impl fmt::Display for PinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untyped => f.write_str("untyped"),
            Self::Typed(token) => f.write_str(token),
        }
    }
}

/// Why two pins cannot be linked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkRejection {
    /// Both pins belong to the same node
    SameNode,
    /// Both pins are inputs or both are outputs
    SameDirection,
    /// The type tokens differ
    TypeMismatch,
}

impl fmt::Display for LinkRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameNode => f.write_str("pins belong to the same node"),
            Self::SameDirection => f.write_str("pins have the same direction"),
            Self::TypeMismatch => f.write_str("pin types differ"),
        }
    }
}

/// A pin on a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Owning node
    owner: NodeId,
    /// Index within the owner's pin list
    id: PinId,
    /// Display name
    pub name: String,
    /// Type token
    pin_type: PinType,
    /// Direction
    direction: PinDirection,
}

impl Pin {
    /// Create a new pin. Only nodes construct pins, so this stays crate-private.
    pub(crate) fn new(
        owner: NodeId,
        id: PinId,
        name: impl Into<String>,
        pin_type: PinType,
        direction: PinDirection,
    ) -> Self {
        Self {
            owner,
            id,
            name: name.into(),
            pin_type,
            direction,
        }
    }

    /// Owning node ID
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// Pin index within the owner
    pub fn id(&self) -> PinId {
        self.id
    }

    /// Full address of this pin
    pub fn identifier(&self) -> PinIdentifier {
        PinIdentifier::new(self.owner, self.id)
    }

    /// Type token
    pub fn pin_type(&self) -> &PinType {
        &self.pin_type
    }

    /// Direction
    pub fn direction(&self) -> PinDirection {
        self.direction
    }

    /// Whether this is a flow pin
    pub fn is_untyped(&self) -> bool {
        self.pin_type == PinType::Untyped
    }

    /// Reason a link between this pin and `other` is illegal, if any
    pub fn link_rejection(&self, other: &Pin) -> Option<LinkRejection> {
        if self.owner == other.owner {
            return Some(LinkRejection::SameNode);
        }
        if self.direction == other.direction {
            return Some(LinkRejection::SameDirection);
        }
        if !self.pin_type.can_connect_to(&other.pin_type) {
            return Some(LinkRejection::TypeMismatch);
        }
        None
    }

    /// Check if a link between this pin and `candidate` is legal.
    ///
    /// The check is symmetric: the caller may hold either end.
    pub fn can_link_to(&self, candidate: &Pin) -> bool {
        self.link_rejection(candidate).is_none()
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pin_type, self.name)
    }
}

/// Symmetric link compatibility check
pub fn can_link(a: &Pin, b: &Pin) -> bool {
    a.can_link_to(b)
}
