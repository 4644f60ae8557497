//! The colony aggregate and its derived graphs.

use colony_graph_core::semantic::{ColonyInfo, ColonyModel, Link, Pin, Route};

use crate::{
    config::GraphStyle,
    structure::{ColonyGraphs, LegendGraph, LinkGraph, RouteGraph},
};

/// A colony together with the graphs built from it.
///
/// The graphs are built once by [`ColonyBuilder::build`](crate::ColonyBuilder::build)
/// and can be read any number of times afterwards.
#[derive(Debug, Clone)]
pub struct Colony {
    info: ColonyInfo,
    pins: Vec<Pin>,
    links: Vec<Link>,
    routes: Vec<Route>,
    style: GraphStyle,
    link_graph: LinkGraph,
    route_graph: RouteGraph,
    legend_graph: LegendGraph,
}

impl Colony {
    pub(crate) fn new(model: ColonyModel, style: GraphStyle, graphs: ColonyGraphs) -> Self {
        let ColonyModel {
            info,
            pins,
            links,
            routes,
        } = model;

        Self {
            info,
            pins,
            links,
            routes,
            style,
            link_graph: graphs.link_graph,
            route_graph: graphs.route_graph,
            legend_graph: graphs.legend_graph,
        }
    }

    pub fn info(&self) -> &ColonyInfo {
        &self.info
    }

    pub fn planet_name(&self) -> &str {
        &self.info.planet_name
    }

    /// Returns the pins in input order.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the style the graphs were decorated with.
    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    /// Returns the undirected graph of physical links.
    pub fn link_graph(&self) -> &LinkGraph {
        &self.link_graph
    }

    /// Returns the directed graph of cargo routes, with rank groups.
    pub fn route_graph(&self) -> &RouteGraph {
        &self.route_graph
    }

    /// Returns the commodity color legend.
    pub fn legend_graph(&self) -> &LegendGraph {
        &self.legend_graph
    }

    /// Returns the base file name for exported artifacts.
    ///
    /// This is the planet name with spaces replaced by underscores.
    pub fn export_stem(&self) -> String {
        self.info.planet_name.replace(' ', "_")
    }
}
