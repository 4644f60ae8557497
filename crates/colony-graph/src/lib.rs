//! Colony Graph - link and route graphs for planetary colonies.
//!
//! A colony is a set of pins on a planet surface, physical links between
//! them, and routes that move commodities from pin to pin. This crate turns
//! a resolved colony into three graphs for a renderer to draw:
//!
//! - a [`LinkGraph`] of physical links,
//! - a [`RouteGraph`] of cargo routes, colored by commodity and decorated
//!   with rank groups that line up processors sharing a schematic,
//! - a [`LegendGraph`] mapping each routed commodity to its color.

pub mod config;

mod colony;
mod error;
mod structure;

pub use colony_graph_core::{catalog, color, geometry, identifier, palette, semantic, window};

pub use colony::Colony;
pub use error::{ColonyError, EdgeKind, IntegrityError, ResolutionError};
pub use structure::{
    AlignmentEdge, FlowEdge, LEGEND_SHAPE, LegendGraph, LegendNode, LinkEdge, LinkGraph,
    NodeStyle, PinGraph, PinNode, PinShape, Rank, RankGroup, RouteEdge, RouteGraph,
};

use log::{debug, info, trace};

use colony_graph_core::{catalog::Catalog, semantic::ColonyModel};
use colony_graph_loader::record::ColonyRecord;

use config::AppConfig;

/// Builder turning colony records into [`Colony`] values.
///
/// # Examples
///
/// ```rust,no_run
/// use colony_graph::{ColonyBuilder, catalog::StaticCatalog, config::AppConfig};
///
/// let json = std::fs::read_to_string("colony.json").expect("Failed to read");
/// let record = colony_graph_loader::parse_record(&json).expect("Failed to parse");
/// let catalog = StaticCatalog::new();
///
/// let builder = ColonyBuilder::new(AppConfig::default());
/// let colony = builder.load(&record, &catalog).expect("Failed to build");
///
/// println!("{} links", colony.link_graph().edge_count());
/// ```
#[derive(Default)]
pub struct ColonyBuilder {
    config: AppConfig,
}

impl ColonyBuilder {
    /// Create a new colony builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate and resolve a raw record, then build its graphs.
    ///
    /// # Errors
    ///
    /// Returns `ColonyError` for malformed records, unknown catalog ids,
    /// dangling link or route endpoints, or an invalid style configuration.
    pub fn load(
        &self,
        record: &ColonyRecord,
        catalog: &impl Catalog,
    ) -> Result<Colony, ColonyError> {
        let model = colony_graph_loader::load(record, catalog)?;
        self.build(model, catalog)
    }

    /// Build the link, route and legend graphs of a resolved colony.
    ///
    /// # Errors
    ///
    /// Returns `ColonyError` if an edge references an unknown pin, a route
    /// commodity cannot be resolved, or the style configuration is invalid.
    /// No partial colony is returned.
    pub fn build(&self, model: ColonyModel, catalog: &impl Catalog) -> Result<Colony, ColonyError> {
        info!(
            planet = model.info.planet_name,
            pins = model.pins.len(),
            links = model.links.len(),
            routes = model.routes.len();
            "Building colony graphs"
        );

        let style = self.config.style().resolve().map_err(ColonyError::Config)?;
        let graphs = structure::build_graphs(&model, catalog, self.config.layout(), &style)?;
        debug!("Colony graphs built successfully");

        let colony = Colony::new(model, style, graphs);
        trace!(colony:?; "Built colony");

        Ok(colony)
    }
}
