//! The directed cargo route graph.
//!
//! Besides one colored edge per route, the route graph carries the layout
//! decorations added by [`grouping`](super::grouping): rank groups and the
//! invisible alignment edges that hold them together.

use log::trace;
use petgraph::Directed;

use colony_graph_core::{
    catalog::Catalog,
    color::Color,
    identifier::{PinId, SchematicId, TypeId},
    semantic::Route,
};

use crate::{
    config::GraphStyle,
    error::{ColonyError, EdgeKind},
    structure::{graph_base::PinGraph, legend::ColorCache, node::PinNode},
};

/// A visible edge carrying one commodity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowEdge {
    content_type_id: TypeId,
    color: Color,
    pen_width: f32,
}

impl FlowEdge {
    pub fn content_type_id(&self) -> TypeId {
        self.content_type_id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pen_width(&self) -> f32 {
        self.pen_width
    }
}

/// An invisible, zero-length edge that pulls its endpoints together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentEdge {
    weight: u32,
}

impl AlignmentEdge {
    pub(crate) fn new(weight: u32) -> Self {
        Self { weight }
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Preferred edge length; alignment edges want none.
    pub fn length(&self) -> f32 {
        0.0
    }
}

/// An edge of the route graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteEdge {
    /// A logistics route.
    Flow(FlowEdge),
    /// A layout-only edge between members of rank groups.
    Alignment(AlignmentEdge),
}

impl RouteEdge {
    /// Returns whether a renderer should draw this edge.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Flow(_))
    }

    /// Returns the stroke color of visible edges.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Flow(flow) => Some(flow.color),
            Self::Alignment(_) => None,
        }
    }

    /// Returns the layout weight. Routes use the renderer default of 1.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Flow(_) => 1,
            Self::Alignment(alignment) => alignment.weight,
        }
    }

    pub fn as_flow(&self) -> Option<&FlowEdge> {
        match self {
            Self::Flow(flow) => Some(flow),
            Self::Alignment(_) => None,
        }
    }
}

/// Rank constraint of a rank group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// All members share one row.
    Same,
}

/// Pins running the same schematic, to be drawn on one rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    schematic_id: SchematicId,
    rank: Rank,
    members: Vec<PinId>,
}

impl RankGroup {
    pub(crate) fn new(schematic_id: SchematicId, members: Vec<PinId>) -> Self {
        Self {
            schematic_id,
            rank: Rank::Same,
            members,
        }
    }

    pub fn schematic_id(&self) -> SchematicId {
        self.schematic_id
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the members in ascending pin id order.
    pub fn members(&self) -> &[PinId] {
        &self.members
    }

    /// Returns the member other groups align against.
    pub fn representative(&self) -> Option<PinId> {
        self.members.first().copied()
    }
}

/// Directed graph of pins joined by cargo routes.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    graph: PinGraph<RouteEdge, Directed>,
    rank_groups: Vec<RankGroup>,
}

impl RouteGraph {
    fn from_nodes(nodes: &[PinNode]) -> Self {
        Self {
            graph: PinGraph::from_nodes(nodes),
            rank_groups: Vec::new(),
        }
    }

    /// Returns the underlying pin graph.
    pub fn pins(&self) -> &PinGraph<RouteEdge, Directed> {
        &self.graph
    }

    pub fn node(&self, pin_id: PinId) -> Option<&PinNode> {
        self.graph.node(pin_id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PinNode> {
        self.graph.nodes()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns every edge, routes and alignment edges alike, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (PinId, PinId, &RouteEdge)> {
        self.graph.edges()
    }

    /// Returns the route edges.
    pub fn flow_edges(&self) -> impl Iterator<Item = (PinId, PinId, &FlowEdge)> {
        self.edges()
            .filter_map(|(source, target, edge)| edge.as_flow().map(|flow| (source, target, flow)))
    }

    /// Returns the invisible alignment edges.
    pub fn alignment_edges(&self) -> impl Iterator<Item = (PinId, PinId, &AlignmentEdge)> {
        self.edges().filter_map(|(source, target, edge)| match edge {
            RouteEdge::Alignment(alignment) => Some((source, target, alignment)),
            RouteEdge::Flow(_) => None,
        })
    }

    /// Returns the rank groups in creation order.
    pub fn rank_groups(&self) -> &[RankGroup] {
        &self.rank_groups
    }

    pub(crate) fn add_rank_group(&mut self, group: RankGroup) {
        self.rank_groups.push(group);
    }

    pub(crate) fn add_alignment(
        &mut self,
        source: PinId,
        target: PinId,
        edge: AlignmentEdge,
    ) -> Result<(), ColonyError> {
        self.graph
            .add_edge(EdgeKind::Route, source, target, RouteEdge::Alignment(edge))?;
        Ok(())
    }
}

/// Builds the route graph from the base nodes, one colored edge per route.
///
/// Colors come from `colors`, which records every commodity it resolves.
pub(crate) fn build_route_graph(
    nodes: &[PinNode],
    routes: &[Route],
    catalog: &impl Catalog,
    colors: &mut ColorCache,
    style: &GraphStyle,
) -> Result<RouteGraph, ColonyError> {
    let mut graph = RouteGraph::from_nodes(nodes);

    for route in routes {
        let color = colors.color_for(route.content_type_id, catalog, style.font_name())?;
        let edge = RouteEdge::Flow(FlowEdge {
            content_type_id: route.content_type_id,
            color,
            pen_width: style.pen_width(),
        });
        graph
            .graph
            .add_edge(EdgeKind::Route, route.source, route.destination, edge)?;
    }

    trace!(graph:?; "Built route graph");
    Ok(graph)
}
