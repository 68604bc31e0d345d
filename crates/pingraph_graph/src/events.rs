// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph change events and observers.
//!
//! Mutations never call back into user code. The graph queues a
//! [`GraphEvent`] for each change; the owner either drains the queue once
//! per frame with [`Graph::drain_events`](crate::Graph::drain_events) or
//! delivers it to subscribed [`GraphObserver`]s with
//! [`Graph::flush_events`](crate::Graph::flush_events).

use crate::graph::Graph;
use crate::link::Link;
use crate::node::NodeId;
use crate::selection::Selection;

/// A change to a graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphEvent {
    /// A node was added
    NodeAdded(NodeId),
    /// A node and its links were removed
    NodeRemoved(NodeId),
    /// A tracked node was renamed, moved or gained a pin
    NodeChanged(NodeId),
    /// A link was created
    LinkAdded(Link),
    /// A link was removed on its own
    LinkRemoved(Link),
    /// The selection cursor moved
    SelectionChanged(Selection),
}

impl GraphEvent {
    /// Whether the event changes persisted state
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::SelectionChanged(_))
    }
}

/// Handle returned by [`Graph::subscribe`](crate::Graph::subscribe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// Receives graph events when the owner flushes them
pub trait GraphObserver {
    /// Called once per event, after the mutation has been applied
    fn on_graph_event(&mut self, event: &GraphEvent, graph: &Graph);
}

impl<F> GraphObserver for F
where
    F: FnMut(&GraphEvent, &Graph),
{
    fn on_graph_event(&mut self, event: &GraphEvent, graph: &Graph) {
        self(event, graph);
    }
}
