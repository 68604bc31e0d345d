// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node graph model for the `Pingraph` editor.
//!
//! This crate holds everything an editor needs to know about a graph of
//! function-call nodes, independent of windowing and drawing:
//! - Nodes with ordered, typed input/output pins
//! - Links validated by the pin compatibility protocol
//! - Cascade removal of links when a node goes away
//! - A single selection cursor
//! - Deterministic node layout and hit-testing
//! - Queued change events for renderers and persistence
//!
//! ## Architecture
//!
//! A [`Graph`] owns its nodes, links and ID counter. Nodes are created
//! through the graph (directly or from a [`FunctionDescriptor`]) so every
//! ID comes from that graph's counter and is never reused.

pub mod pin;
pub mod node;
pub mod link;
pub mod layout;
pub mod selection;
pub mod events;
pub mod graph;
pub mod registry;
pub mod library;

pub use egui::{Pos2, Rect};
pub use events::{GraphEvent, GraphObserver, ObserverId};
pub use graph::{Graph, GraphError};
pub use hit_test::HitTarget;
pub use link::Link;
pub use node::{Node, NodeId};
pub use pin::{can_link, LinkRejection, Pin, PinDirection, PinId, PinIdentifier, PinType};
pub use registry::{FunctionDescriptor, FunctionRegistry, NodeOptions, ParamDescriptor};
pub use selection::Selection;
