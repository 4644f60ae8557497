//! The undirected physical link graph.

use log::trace;
use petgraph::Undirected;

use colony_graph_core::{color::Color, semantic::Link};

use crate::{
    config::GraphStyle,
    error::{EdgeKind, IntegrityError},
    structure::{graph_base::PinGraph, node::PinNode},
};

/// Attributes of a physical link edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkEdge {
    level: u8,
    pen_width: f32,
    color: Color,
}

impl LinkEdge {
    /// Returns the link upgrade level, used as the edge weight.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn pen_width(&self) -> f32 {
        self.pen_width
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Undirected graph of pins joined by physical links.
///
/// Parallel links between the same pair of pins are kept as separate edges.
pub type LinkGraph = PinGraph<LinkEdge, Undirected>;

/// Builds the link graph from the base nodes, one edge per link.
pub(crate) fn build_link_graph(
    nodes: &[PinNode],
    links: &[Link],
    style: &GraphStyle,
) -> Result<LinkGraph, IntegrityError> {
    let mut graph = LinkGraph::from_nodes(nodes);

    for link in links {
        let edge = LinkEdge {
            level: link.level,
            pen_width: style.pen_width(),
            color: style.link_color(),
        };
        graph.add_edge(EdgeKind::Link, link.source, link.destination, edge)?;
    }

    trace!(graph:?; "Built link graph");
    Ok(graph)
}
