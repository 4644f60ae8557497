//! Graph construction for a resolved colony.
//!
//! Every pin becomes a [`PinNode`]. The link graph and the route graph each
//! receive their own copy of those nodes, so layout decorations added to the
//! route graph never show up in the link graph. Construction runs in this
//! order:
//!
//! 1. Check that pin ids are unique and that every link and route endpoint
//!    is a pin of the colony.
//! 2. Build the base nodes.
//! 3. Build the link graph.
//! 4. Build the route graph, assigning commodity colors as routes go in.
//! 5. Add rank groups and alignment edges to the route graph.
//! 6. Turn the collected commodity colors into the legend.

mod graph_base;
mod grouping;
mod legend;
mod link;
mod node;
mod route;

pub use graph_base::PinGraph;
pub use legend::{LEGEND_SHAPE, LegendGraph, LegendNode};
pub use link::{LinkEdge, LinkGraph};
pub use node::{NodeStyle, PinNode, PinShape};
pub use route::{AlignmentEdge, FlowEdge, Rank, RankGroup, RouteEdge, RouteGraph};

use std::collections::HashSet;

use log::{debug, info};

use colony_graph_core::{catalog::Catalog, identifier::PinId, semantic::ColonyModel};
use colony_graph_loader::ValidationError;

use crate::{
    config::{GraphStyle, LayoutConfig},
    error::{ColonyError, EdgeKind, IntegrityError},
};

/// The three graphs derived from one colony.
#[derive(Debug, Clone)]
pub(crate) struct ColonyGraphs {
    pub(crate) link_graph: LinkGraph,
    pub(crate) route_graph: RouteGraph,
    pub(crate) legend_graph: LegendGraph,
}

/// Builds the link, route, and legend graphs of a colony.
pub(crate) fn build_graphs(
    model: &ColonyModel,
    catalog: &impl Catalog,
    layout: &LayoutConfig,
    style: &GraphStyle,
) -> Result<ColonyGraphs, ColonyError> {
    check_pins(model)?;

    let nodes: Vec<PinNode> = model
        .pins
        .iter()
        .map(|pin| PinNode::from_pin(pin, layout.position_scale(), style))
        .collect();

    let link_graph = link::build_link_graph(&nodes, &model.links, style)?;

    let mut colors = legend::ColorCache::default();
    let mut route_graph =
        route::build_route_graph(&nodes, &model.routes, catalog, &mut colors, style)?;

    grouping::align_rank_groups(&mut route_graph, layout.alignment_weight())?;
    debug!(
        rank_groups = route_graph.rank_groups().len(),
        alignment_edges = route_graph.alignment_edges().count();
        "Route graph aligned"
    );

    let legend_graph = colors.into_legend();

    info!(
        nodes = nodes.len(),
        links = link_graph.edge_count(),
        routes = model.routes.len(),
        commodities = legend_graph.node_count();
        "Colony graphs built"
    );

    Ok(ColonyGraphs {
        link_graph,
        route_graph,
        legend_graph,
    })
}

/// Fails on a repeated pin id, then on the first link or route whose
/// endpoint is not a pin.
///
/// Links are checked before routes, each in input order.
fn check_pins(model: &ColonyModel) -> Result<(), ColonyError> {
    let mut pins: HashSet<PinId> = HashSet::with_capacity(model.pins.len());
    for pin in &model.pins {
        if !pins.insert(pin.id) {
            return Err(ValidationError::DuplicatePin(pin.id).into());
        }
    }

    let links = model
        .links
        .iter()
        .map(|link| (EdgeKind::Link, link.source, link.destination));
    let routes = model
        .routes
        .iter()
        .map(|route| (EdgeKind::Route, route.source, route.destination));

    for (kind, source, destination) in links.chain(routes) {
        if let Some(missing) = [source, destination]
            .into_iter()
            .find(|pin| !pins.contains(pin))
        {
            return Err(IntegrityError {
                kind,
                source_pin: source,
                destination_pin: destination,
                missing,
            }
            .into());
        }
    }

    Ok(())
}
