// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes, links and the selection cursor.

use crate::events::{GraphEvent, GraphObserver, ObserverId};
use crate::link::Link;
use crate::node::{Node, NodeId};
use crate::pin::{LinkRejection, Pin, PinDirection, PinIdentifier};
use crate::selection::Selection;
use indexmap::IndexMap;
use std::fmt;

/// A node graph
pub struct Graph {
    /// Graph name
    pub name: String,
    /// Nodes in insertion order
    nodes: IndexMap<NodeId, Node>,
    /// Links in insertion order
    links: Vec<Link>,
    /// Last issued node ID
    uid_counter: i32,
    selection: Selection,
    /// Canvas scroll offset
    viewport_offset: [f32; 2],
    events: Vec<GraphEvent>,
    observers: Vec<(ObserverId, Box<dyn GraphObserver>)>,
    next_observer: u64,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
            links: Vec::new(),
            uid_counter: -1,
            selection: Selection::None,
            viewport_offset: [0.0, 0.0],
            events: Vec::new(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Rebuild a graph from persisted parts.
    ///
    /// Node IDs must be unique, pins must be indexed by position, and every
    /// link must connect two existing, compatible pins. The selection starts
    /// empty and no events are queued.
    pub fn from_parts(
        name: impl Into<String>,
        nodes: Vec<Node>,
        links: Vec<Link>,
        uid_counter: i32,
        viewport_offset: [f32; 2],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(name);
        graph.uid_counter = uid_counter;
        graph.viewport_offset = viewport_offset;

        for mut node in nodes {
            let id = node.id();
            if !node.pins_consistent() {
                return Err(GraphError::InconsistentPins(id));
            }
            if graph.nodes.contains_key(&id) {
                return Err(GraphError::DuplicateNodeId(id));
            }
            graph.uid_counter = graph.uid_counter.max(id.0);
            node.take_changed();
            graph.nodes.insert(id, node);
        }

        for link in links {
            let checked = graph.check_link(link.from, link.to).map_err(|e| match e {
                GraphError::NodeNotFound(_) | GraphError::PinOutOfRange { .. } => {
                    GraphError::DanglingLink(link)
                }
                other => other,
            })?;
            graph.links.push(checked);
        }

        Ok(graph)
    }

    /// Issue a node ID that this graph has never issued before
    pub fn generate_unique_node_id(&mut self) -> NodeId {
        self.uid_counter += 1;
        NodeId(self.uid_counter)
    }

    /// Last issued node ID (`-1` before the first)
    pub fn uid_counter(&self) -> i32 {
        self.uid_counter
    }

    /// Create an empty node with a fresh ID. The node is not added yet.
    pub fn new_node(&mut self, name: impl Into<String>) -> Node {
        let id = self.generate_unique_node_id();
        Node::new(id, name)
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, mut node: Node) -> Result<NodeId, GraphError> {
        let id = node.id();
        if !node.pins_consistent() {
            tracing::error!("Node {} has pins it does not own", id);
            return Err(GraphError::InconsistentPins(id));
        }
        if self.nodes.contains_key(&id) {
            tracing::error!("Node ID {} is already in use", id);
            return Err(GraphError::DuplicateNodeId(id));
        }
        // Keep the counter ahead of IDs that were not issued here
        self.uid_counter = self.uid_counter.max(id.0);
        node.take_changed();
        self.nodes.insert(id, node);
        tracing::debug!("Added node {}", id);
        self.events.push(GraphEvent::NodeAdded(id));
        Ok(id)
    }

    /// Remove a node and every link attached to it
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        let node = self.nodes.shift_remove(&node_id)?;

        self.links.retain(|link| !link.involves_node(node_id));

        if self.selection.touches_node(node_id) {
            self.set_selection(Selection::None);
        }

        tracing::debug!("Removed node {}", node_id);
        self.events.push(GraphEvent::NodeRemoved(node_id));
        Some(node)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        let node = self.nodes.get(&node_id);
        if node.is_none() {
            tracing::error!("Trying to get node with invalid ID {}", node_id);
        }
        node
    }

    /// Get a mutable node by ID.
    ///
    /// Renames, moves and added pins are reported as
    /// [`GraphEvent::NodeChanged`] on the next drain.
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        let node = self.nodes.get_mut(&node_id);
        if node.is_none() {
            tracing::error!("Trying to get node with invalid ID {}", node_id);
        }
        node
    }

    /// Check whether a node exists, without logging
    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Move a node, returning false if it does not exist
    pub fn move_node(&mut self, node_id: NodeId, position: [f32; 2]) -> bool {
        match self.node_mut(node_id) {
            Some(node) => {
                node.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Get a pin by identifier
    pub fn pin(&self, pin: PinIdentifier) -> Option<&Pin> {
        self.node(pin.node)?.pin(pin.pin)
    }

    /// Get all nodes in insertion order
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether two pins may be linked and return the link they would form,
    /// oriented from the output pin to the input pin
    pub fn check_link(&self, a: PinIdentifier, b: PinIdentifier) -> Result<Link, GraphError> {
        let pin_a = self.resolve_pin(a)?;
        let pin_b = self.resolve_pin(b)?;

        if let Some(reason) = pin_a.link_rejection(pin_b) {
            return Err(GraphError::IncompatibleLink { from: a, to: b, reason });
        }

        let link = match pin_a.direction() {
            PinDirection::Output => Link::new(a, b),
            PinDirection::Input => Link::new(b, a),
        };

        if self.links.contains(&link) {
            return Err(GraphError::DuplicateLink(link));
        }

        Ok(link)
    }

    /// Link two pins.
    ///
    /// The pins may be given in either order. Illegal or duplicate links are
    /// rejected and leave the graph untouched.
    pub fn link_pins(&mut self, a: PinIdentifier, b: PinIdentifier) -> Result<Link, GraphError> {
        let link = self.check_link(a, b).inspect_err(|e| {
            tracing::debug!("Refused to link {} and {}: {}", a, b, e);
        })?;
        self.links.push(link);
        tracing::debug!("Linked {}", link);
        self.events.push(GraphEvent::LinkAdded(link));
        Ok(link)
    }

    /// Remove a single link
    pub fn unlink(&mut self, link: Link) -> bool {
        let Some(index) = self.links.iter().position(|l| *l == link) else {
            return false;
        };
        self.links.remove(index);
        self.events.push(GraphEvent::LinkRemoved(link));
        true
    }

    /// Get all links
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Get links attached to a node
    pub fn links_for_node(&self, node_id: NodeId) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.involves_node(node_id))
    }

    /// Get links attached to a pin
    pub fn links_for_pin(&self, pin: PinIdentifier) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |l| l.involves_pin(pin))
    }

    /// Canvas scroll offset
    pub fn viewport_offset(&self) -> [f32; 2] {
        self.viewport_offset
    }

    /// Set the canvas scroll offset. Presentation state only, no event.
    pub fn set_viewport_offset(&mut self, offset: [f32; 2]) {
        self.viewport_offset = offset;
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Select a node, clearing any pin selection
    pub fn select_node(&mut self, node_id: NodeId) {
        if !self.contains_node(node_id) {
            tracing::warn!("Cannot select unknown node {}", node_id);
            return;
        }
        self.set_selection(Selection::Node(node_id));
    }

    /// Select a pin, clearing any node selection
    pub fn select_pin(&mut self, pin: PinIdentifier) {
        if self.resolve_pin(pin).is_err() {
            tracing::warn!("Cannot select unknown pin {}", pin);
            return;
        }
        self.set_selection(Selection::Pin(pin));
    }

    /// Clear the selection
    pub fn deselect(&mut self) {
        self.set_selection(Selection::None);
    }

    /// Whether a node (not a pin) is selected
    pub fn is_node_selected(&self) -> bool {
        self.selection.is_node()
    }

    /// Whether a pin is selected
    pub fn is_pin_selected(&self) -> bool {
        self.selection.is_pin()
    }

    /// Selected element as a pin identifier, see [`Selection::element_id`]
    pub fn selected_element_id(&self) -> PinIdentifier {
        self.selection.element_id()
    }

    /// The selected node, or the owner of the selected pin
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.node_id().and_then(|id| self.nodes.get(&id))
    }

    fn set_selection(&mut self, selection: Selection) {
        if self.selection != selection {
            self.selection = selection;
            self.events.push(GraphEvent::SelectionChanged(selection));
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GraphEvent> {
        for (id, node) in self.nodes.iter_mut() {
            if node.take_changed() {
                self.events.push(GraphEvent::NodeChanged(*id));
            }
        }
        std::mem::take(&mut self.events)
    }

    /// Register an observer for [`flush_events`](Self::flush_events)
    pub fn subscribe(&mut self, observer: Box<dyn GraphObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Drain pending events and deliver each one to every observer
    pub fn flush_events(&mut self) -> Vec<GraphEvent> {
        let events = self.drain_events();
        if events.is_empty() {
            return events;
        }

        // Observers only get shared access, so they cannot mutate mid-delivery
        let mut observers = std::mem::take(&mut self.observers);
        for event in &events {
            for (_, observer) in observers.iter_mut() {
                observer.on_graph_event(event, self);
            }
        }
        self.observers = observers;

        events
    }

    fn resolve_pin(&self, pin: PinIdentifier) -> Result<&Pin, GraphError> {
        let node = self
            .nodes
            .get(&pin.node)
            .ok_or(GraphError::NodeNotFound(pin.node))?;
        pin.pin
            .index()
            .and_then(|index| node.pins().get(index))
            .ok_or(GraphError::PinOutOfRange {
                pin,
                count: node.pin_count(),
            })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("name", &self.name)
            .field("nodes", &self.nodes)
            .field("links", &self.links)
            .field("uid_counter", &self.uid_counter)
            .field("selection", &self.selection)
            .field("viewport_offset", &self.viewport_offset)
            .field("pending_events", &self.events.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Error from a graph operation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Node not found
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Pin index outside the node's pin list
    #[error("Pin {pin} out of range (node has {count} pins)")]
    PinOutOfRange {
        /// Requested pin
        pin: PinIdentifier,
        /// Pin count of the node
        count: usize,
    },

    /// The pins cannot be linked
    #[error("Cannot link {from} and {to}: {reason}")]
    IncompatibleLink {
        /// First pin given
        from: PinIdentifier,
        /// Second pin given
        to: PinIdentifier,
        /// Why the link is illegal
        reason: LinkRejection,
    },

    /// The same link already exists
    #[error("Link already exists: {0}")]
    DuplicateLink(Link),

    /// Node ID already in use
    #[error("Node ID already in use: {0}")]
    DuplicateNodeId(NodeId),

    /// Persisted link refers to a missing node or pin
    #[error("Link refers to a missing pin: {0}")]
    DanglingLink(Link),

    /// Persisted node whose pins are not indexed by position
    #[error("Node {0} has inconsistent pin IDs")]
    InconsistentPins(NodeId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::{PinId, PinType};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn float_source(graph: &mut Graph) -> NodeId {
        let mut node = graph.new_node("A");
        node.add_pin(PinDirection::Output, PinType::typed("float"), "Output");
        graph.add_node(node).unwrap()
    }

    fn float_sink(graph: &mut Graph) -> NodeId {
        let mut node = graph.new_node("B");
        node.add_pin(PinDirection::Input, PinType::typed("float"), "Value");
        graph.add_node(node).unwrap()
    }

    fn pin(node: NodeId, index: usize) -> PinIdentifier {
        PinIdentifier::new(node, index)
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut graph = Graph::new("ids");
        let a = float_source(&mut graph);
        let b = float_source(&mut graph);
        graph.remove_node(b);
        let c = float_source(&mut graph);
        assert_eq!(a, NodeId(0));
        assert_ne!(c, b);
        assert_eq!(c, NodeId(2));
        assert_eq!(graph.uid_counter(), 2);
    }

    #[test]
    fn test_duplicate_node_id_rejected() {
        let mut graph = Graph::default();
        let id = float_source(&mut graph);
        let clone = graph.node(id).unwrap().clone();
        assert_eq!(graph.add_node(clone), Err(GraphError::DuplicateNodeId(id)));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_foreign_pins_rejected() {
        let mut node = Node::new(NodeId(5), "Loop");
        node.add_pin(PinDirection::Output, PinType::Untyped, "Out");
        node.add_pin(PinDirection::Input, PinType::Untyped, "In");
        let serialized = ron::to_string(&node).unwrap();
        let tampered = serialized
            .replacen("owner:(5)", "owner:(100)", 1)
            .replacen("owner:(5)", "owner:(101)", 1);
        assert_ne!(tampered, serialized);
        let foreign: Node = ron::from_str(&tampered).unwrap();

        let mut graph = Graph::default();
        assert_eq!(graph.add_node(foreign), Err(GraphError::InconsistentPins(NodeId(5))));
        assert_eq!(graph.node_count(), 0);
        assert!(graph.drain_events().is_empty());
        assert!(graph.link_pins(pin(NodeId(5), 0), pin(NodeId(5), 1)).is_err());
    }

    #[test]
    fn test_link_scenario() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let b = float_sink(&mut graph);
        graph.drain_events();

        assert!(graph.pin(pin(b, 0)).unwrap().can_link_to(graph.pin(pin(a, 0)).unwrap()));
        let link = graph.link_pins(pin(a, 0), pin(b, 0)).unwrap();

        assert_eq!(link, Link::new(pin(a, 0), pin(b, 0)));
        assert_eq!(graph.links(), &[link]);
        assert_eq!(graph.drain_events(), vec![GraphEvent::LinkAdded(link)]);
    }

    #[test]
    fn test_link_is_oriented_from_output() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let b = float_sink(&mut graph);
        let link = graph.link_pins(pin(b, 0), pin(a, 0)).unwrap();
        assert_eq!(link.from, pin(a, 0));
        assert_eq!(link.to, pin(b, 0));
    }

    #[test]
    fn test_illegal_links_rejected() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let mut node = graph.new_node("C");
        node.add_pin(PinDirection::Output, PinType::typed("int"), "Output");
        node.add_pin(PinDirection::Input, PinType::typed("int"), "Value");
        let c = graph.add_node(node).unwrap();
        graph.drain_events();

        let err = graph.link_pins(pin(a, 0), pin(c, 0)).unwrap_err();
        assert!(matches!(
            err,
            GraphError::IncompatibleLink { reason: LinkRejection::SameDirection, .. }
        ));
        let err = graph.link_pins(pin(a, 0), pin(c, 1)).unwrap_err();
        assert!(matches!(
            err,
            GraphError::IncompatibleLink { reason: LinkRejection::TypeMismatch, .. }
        ));
        let err = graph.link_pins(pin(c, 0), pin(c, 1)).unwrap_err();
        assert!(matches!(
            err,
            GraphError::IncompatibleLink { reason: LinkRejection::SameNode, .. }
        ));
        assert_eq!(
            graph.link_pins(pin(a, 0), pin(NodeId(42), 0)),
            Err(GraphError::NodeNotFound(NodeId(42)))
        );
        assert!(matches!(
            graph.link_pins(pin(a, 5), pin(c, 1)),
            Err(GraphError::PinOutOfRange { count: 1, .. })
        ));

        assert_eq!(graph.link_count(), 0);
        assert!(graph.drain_events().is_empty());
    }

    #[test]
    fn test_duplicate_link_rejected() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let b = float_sink(&mut graph);
        let link = graph.link_pins(pin(a, 0), pin(b, 0)).unwrap();
        assert_eq!(
            graph.link_pins(pin(b, 0), pin(a, 0)),
            Err(GraphError::DuplicateLink(link))
        );
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_remove_node_cascades_links() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let b = float_sink(&mut graph);
        let c = float_sink(&mut graph);
        graph.link_pins(pin(a, 0), pin(b, 0)).unwrap();
        graph.link_pins(pin(a, 0), pin(c, 0)).unwrap();
        graph.drain_events();

        let removed = graph.remove_node(a).unwrap();
        assert_eq!(removed.id(), a);
        assert!(graph.links().is_empty());
        assert_eq!(graph.links_for_node(a).count(), 0);
        assert_eq!(graph.drain_events(), vec![GraphEvent::NodeRemoved(a)]);
    }

    #[test]
    fn test_remove_missing_node_has_no_side_effects() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let b = float_sink(&mut graph);
        graph.link_pins(pin(a, 0), pin(b, 0)).unwrap();
        graph.drain_events();

        assert!(graph.remove_node(NodeId(99)).is_none());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.link_count(), 1);
        assert!(graph.drain_events().is_empty());
    }

    #[test]
    fn test_remove_keeps_node_order() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let b = float_source(&mut graph);
        let c = float_source(&mut graph);
        graph.remove_node(b);
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn test_lookup_failures_return_none() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        assert!(graph.node(NodeId(5)).is_none());
        assert!(graph.pin(pin(NodeId(5), 0)).is_none());
        assert!(graph.pin(pin(a, 1)).is_none());
        assert!(graph.pin(PinIdentifier::NONE).is_none());
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let b = float_sink(&mut graph);

        assert_eq!(graph.selection(), Selection::None);
        graph.select_node(a);
        assert!(graph.is_node_selected() && !graph.is_pin_selected());
        graph.select_pin(pin(b, 0));
        assert!(graph.is_pin_selected() && !graph.is_node_selected());
        assert_eq!(graph.selected_element_id(), pin(b, 0));
        assert_eq!(graph.selected_node().map(Node::id), Some(b));
        graph.select_node(b);
        assert!(graph.is_node_selected() && !graph.is_pin_selected());
        assert_eq!(graph.selected_element_id().pin, PinId::NONE);
        graph.deselect();
        assert!(!graph.is_node_selected() && !graph.is_pin_selected());
        assert_eq!(graph.selected_element_id(), PinIdentifier::NONE);
    }

    #[test]
    fn test_select_unknown_is_ignored() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        graph.select_node(a);
        graph.select_node(NodeId(77));
        graph.select_pin(pin(a, 9));
        assert_eq!(graph.selection(), Selection::Node(a));
    }

    #[test]
    fn test_removing_selected_node_clears_selection() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let b = float_sink(&mut graph);
        graph.select_pin(pin(a, 0));
        graph.remove_node(b);
        assert_eq!(graph.selection(), Selection::Pin(pin(a, 0)));
        graph.remove_node(a);
        assert_eq!(graph.selection(), Selection::None);
    }

    #[test]
    fn test_node_changes_propagate() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        assert_eq!(graph.drain_events(), vec![GraphEvent::NodeAdded(a)]);

        graph.node_mut(a).unwrap().set_name("Renamed");
        assert!(graph.move_node(a, [10.0, 20.0]));
        assert_eq!(graph.drain_events(), vec![GraphEvent::NodeChanged(a)]);

        let mut detached = graph.remove_node(a).unwrap();
        graph.drain_events();
        detached.set_name("Detached");
        assert!(graph.drain_events().is_empty());
    }

    #[test]
    fn test_observers() {
        let mut graph = Graph::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = graph.subscribe(Box::new(move |event: &GraphEvent, graph: &Graph| {
            sink.borrow_mut().push((*event, graph.node_count()));
        }));

        let a = float_source(&mut graph);
        let delivered = graph.flush_events();
        assert_eq!(delivered, vec![GraphEvent::NodeAdded(a)]);
        assert_eq!(*seen.borrow(), vec![(GraphEvent::NodeAdded(a), 1)]);

        assert!(graph.unsubscribe(id));
        assert!(!graph.unsubscribe(id));
        float_source(&mut graph);
        graph.flush_events();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_from_parts() {
        let mut graph = Graph::default();
        let a = float_source(&mut graph);
        let b = float_sink(&mut graph);
        graph.link_pins(pin(a, 0), pin(b, 0)).unwrap();
        graph.select_node(a);

        let nodes: Vec<Node> = graph.nodes().cloned().collect();
        let links = graph.links().to_vec();
        let restored = Graph::from_parts("copy", nodes.clone(), links.clone(), 1, [3.0, 4.0]).unwrap();
        assert_eq!(restored.node_count(), 2);
        assert_eq!(restored.links(), links.as_slice());
        assert_eq!(restored.selection(), Selection::None);
        assert_eq!(restored.viewport_offset(), [3.0, 4.0]);

        // A stale counter is bumped past the highest ID
        let mut restored = Graph::from_parts("copy", nodes.clone(), Vec::new(), -1, [0.0, 0.0]).unwrap();
        assert_eq!(restored.generate_unique_node_id(), NodeId(2));

        let dangling = Link::new(pin(a, 0), pin(NodeId(9), 0));
        assert_eq!(
            Graph::from_parts("bad", nodes.clone(), vec![dangling], 1, [0.0, 0.0]).unwrap_err(),
            GraphError::DanglingLink(dangling)
        );

        let mut twice = nodes.clone();
        twice.push(nodes[0].clone());
        assert_eq!(
            Graph::from_parts("bad", twice, Vec::new(), 1, [0.0, 0.0]).unwrap_err(),
            GraphError::DuplicateNodeId(a)
        );
    }
}
