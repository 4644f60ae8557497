//! Commodity colors and the legend graph.
//!
//! Route edges are colored by commodity. [`ColorCache`] resolves each
//! commodity through the catalog once, derives its color from the fixed
//! palette, and remembers it in first-seen order. Once all routes are in,
//! the cache turns into the [`LegendGraph`]: one node per commodity, no
//! edges.

use indexmap::IndexMap;
use log::debug;

use colony_graph_core::{
    catalog::Catalog,
    color::Color,
    identifier::TypeId,
    palette::{self, commodity_color},
};

use crate::error::ResolutionError;

/// Renderer shape used for legend entries.
pub const LEGEND_SHAPE: &str = "plaintext";

/// One commodity in the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendNode {
    content_type_id: TypeId,
    label: String,
    uid: u32,
    color: Color,
    font_name: String,
}

impl LegendNode {
    /// Returns the commodity type id, which also identifies the node.
    pub fn content_type_id(&self) -> TypeId {
        self.content_type_id
    }

    /// Returns the commodity name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the commodity ordinal the color was derived from.
    pub fn uid(&self) -> u32 {
        self.uid
    }

    /// Returns the font color, the color of this commodity's routes.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn shape(&self) -> &'static str {
        LEGEND_SHAPE
    }
}

/// Commodity colors assigned so far, keyed by content type id.
#[derive(Debug, Default)]
pub(crate) struct ColorCache {
    entries: IndexMap<TypeId, LegendNode>,
}

impl ColorCache {
    /// Returns the color for a commodity, resolving it on first use.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] if the catalog does not know the
    /// commodity or reports an ordinal outside the palette range.
    pub(crate) fn color_for(
        &mut self,
        content_type_id: TypeId,
        catalog: &impl Catalog,
        font_name: &str,
    ) -> Result<Color, ResolutionError> {
        if let Some(entry) = self.entries.get(&content_type_id) {
            return Ok(entry.color);
        }

        let commodity =
            catalog
                .commodity(content_type_id)
                .map_err(|source| ResolutionError::Commodity {
                    content_type_id,
                    source,
                })?;

        if !palette::is_valid_uid(commodity.uid()) {
            return Err(ResolutionError::InvalidOrdinal {
                content_type_id,
                uid: commodity.uid(),
            });
        }

        let color = commodity_color(commodity.uid());
        debug!(
            content_type_id,
            commodity = commodity.name(),
            uid = commodity.uid(),
            color = color.to_hex();
            "Assigned commodity color"
        );

        self.entries.insert(
            content_type_id,
            LegendNode {
                content_type_id,
                label: commodity.name().to_string(),
                uid: commodity.uid(),
                color,
                font_name: font_name.to_string(),
            },
        );
        Ok(color)
    }

    pub(crate) fn into_legend(self) -> LegendGraph {
        LegendGraph {
            nodes: self.entries.into_values().collect(),
        }
    }
}

/// Color key for the route graph: one node per commodity, no edges.
///
/// Nodes appear in the order their commodity was first routed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendGraph {
    nodes: Vec<LegendNode>,
}

impl LegendGraph {
    /// Returns an iterator over the legend nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &LegendNode> {
        self.nodes.iter()
    }

    /// Returns the node for a commodity, if it was routed.
    pub fn node(&self, content_type_id: TypeId) -> Option<&LegendNode> {
        self.nodes
            .iter()
            .find(|node| node.content_type_id == content_type_id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Always zero; the legend carries no edges.
    pub fn edge_count(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use colony_graph_core::catalog::{CatalogError, LookupKind, StaticCatalog};

    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_commodity(2268, "Aqueous Liquids", 1)
            .with_commodity(3645, "Water", 42)
            .with_commodity(9000, "Broken", 84)
    }

    #[test]
    fn test_color_is_cached_per_commodity() {
        let catalog = catalog();
        let mut cache = ColorCache::default();

        let first = cache.color_for(3645, &catalog, "monospace").unwrap();
        let second = cache.color_for(3645, &catalog, "monospace").unwrap();

        assert_eq!(first, second);
        assert_eq!(first, commodity_color(42));
        assert_eq!(cache.into_legend().node_count(), 1);
    }

    #[test]
    fn test_legend_keeps_first_seen_order() {
        let catalog = catalog();
        let mut cache = ColorCache::default();
        cache.color_for(3645, &catalog, "monospace").unwrap();
        cache.color_for(2268, &catalog, "monospace").unwrap();
        cache.color_for(3645, &catalog, "monospace").unwrap();

        let legend = cache.into_legend();
        let labels: Vec<&str> = legend.nodes().map(LegendNode::label).collect();
        assert_eq!(labels, vec!["Water", "Aqueous Liquids"]);
        assert_eq!(legend.edge_count(), 0);

        let water = legend.node(3645).unwrap();
        assert_eq!(water.uid(), 42);
        assert_eq!(water.shape(), "plaintext");
        assert_eq!(water.color(), commodity_color(42));
    }

    #[test]
    fn test_unknown_commodity() {
        let mut cache = ColorCache::default();
        let err = cache.color_for(1, &catalog(), "monospace").unwrap_err();
        assert_eq!(
            err,
            ResolutionError::Commodity {
                content_type_id: 1,
                source: CatalogError::not_found(LookupKind::Commodity, 1),
            }
        );
    }

    #[test]
    fn test_out_of_range_ordinal() {
        let mut cache = ColorCache::default();
        let err = cache.color_for(9000, &catalog(), "monospace").unwrap_err();
        assert_eq!(
            err,
            ResolutionError::InvalidOrdinal {
                content_type_id: 9000,
                uid: 84,
            }
        );
        assert!(cache.into_legend().is_empty());
    }
}
