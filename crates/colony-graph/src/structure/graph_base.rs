//! Shared graph storage for pin graphs.
//!
//! Both the link graph and the route graph are petgraph graphs whose nodes
//! are [`PinNode`]s, addressed by [`PinId`] through a side map. This module
//! provides that storage once, generic over the edge payload and over
//! directedness.
//!
//! Capabilities:
//! - Node storage in insertion order with lookup by pin id
//! - Parallel edges and self-loops, never deduplicated
//! - Endpoint checking on insertion, reported as [`IntegrityError`]

use std::collections::HashMap;

use petgraph::{
    EdgeType,
    graph::{EdgeIndex, Graph, NodeIndex},
    visit::EdgeRef,
};

use colony_graph_core::identifier::PinId;

use crate::{
    error::{EdgeKind, IntegrityError},
    structure::node::PinNode,
};

/// A graph of pins with edge payload `E`.
///
/// `Ty` is [`petgraph::Directed`] or [`petgraph::Undirected`].
#[derive(Debug, Clone)]
pub struct PinGraph<E, Ty>
where
    Ty: EdgeType,
{
    graph: Graph<PinNode, E, Ty>,
    node_map: HashMap<PinId, NodeIndex>,
}

impl<E, Ty> PinGraph<E, Ty>
where
    Ty: EdgeType,
{
    /// Creates a graph holding a copy of every node and no edges.
    ///
    /// Pin ids are expected to be unique; the builder rejects repeats before
    /// any graph is made.
    pub(crate) fn from_nodes(nodes: &[PinNode]) -> Self {
        let mut graph = Graph::with_capacity(nodes.len(), 0);
        let mut node_map: HashMap<PinId, NodeIndex> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let idx = graph.add_node(node.clone());
            node_map.insert(node.pin_id(), idx);
        }

        Self { graph, node_map }
    }

    /// Returns the node for the given pin, if it exists.
    pub fn node(&self, pin_id: PinId) -> Option<&PinNode> {
        self.node_map.get(&pin_id).map(|&idx| &self.graph[idx])
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &PinNode> {
        self.graph.node_weights()
    }

    /// Returns the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Checks if a node for the given pin exists.
    pub fn contains_node(&self, pin_id: PinId) -> bool {
        self.node_map.contains_key(&pin_id)
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns an iterator over `(source, target, payload)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (PinId, PinId, &E)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].pin_id(),
                self.graph[edge.target()].pin_id(),
                edge.weight(),
            )
        })
    }

    /// Adds an edge between two pins.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrityError`] naming the first endpoint that is not a
    /// node of this graph. The graph is left unchanged in that case.
    pub(crate) fn add_edge(
        &mut self,
        kind: EdgeKind,
        source: PinId,
        target: PinId,
        edge: E,
    ) -> Result<EdgeIndex, IntegrityError> {
        let lookup = |missing: PinId| {
            self.node_map.get(&missing).copied().ok_or(IntegrityError {
                kind,
                source_pin: source,
                destination_pin: target,
                missing,
            })
        };

        let source_idx = lookup(source)?;
        let target_idx = lookup(target)?;
        Ok(self.graph.add_edge(source_idx, target_idx, edge))
    }
}
