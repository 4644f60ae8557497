//! Rank grouping of processors that share a schematic.
//!
//! Processors running the same schematic are related even when no route
//! joins them. To have them drawn side by side, every schematic gets a
//! [`RankGroup`] asking the renderer for a shared rank, and consecutive
//! members are chained with invisible [`AlignmentEdge`]s. The first member of
//! each group is then chained to the first member of the next group so the
//! groups line up against each other.
//!
//! Pins whose label marks them as high-tier processors are left out; see
//! [`is_high_tier_processor`].

use indexmap::IndexMap;
use log::debug;

use colony_graph_core::{
    identifier::{PinId, SchematicId},
    semantic::is_high_tier_processor,
    window::WindowExt,
};

use crate::{
    error::ColonyError,
    structure::route::{AlignmentEdge, RankGroup, RouteGraph},
};

/// Groups eligible processors by schematic.
///
/// Groups appear in the order their schematic is first met while walking
/// the graph's nodes; members within a group are sorted by pin id.
pub(crate) fn group_by_schematic(graph: &RouteGraph) -> Vec<RankGroup> {
    let mut groups: IndexMap<SchematicId, Vec<PinId>> = IndexMap::new();

    for node in graph.nodes() {
        let Some(schematic) = node.schematic() else {
            continue;
        };
        if is_high_tier_processor(node.label()) {
            debug!(pin = node.pin_id().get(); "Skipping high-tier processor in rank grouping");
            continue;
        }
        groups.entry(schematic.id).or_default().push(node.pin_id());
    }

    groups
        .into_iter()
        .map(|(schematic_id, mut members)| {
            members.sort_unstable();
            RankGroup::new(schematic_id, members)
        })
        .collect()
}

/// Adds rank groups and alignment edges to the route graph.
///
/// Single-member groups are kept: they add no edge of their own but still
/// take part in the chain across groups.
pub(crate) fn align_rank_groups(graph: &mut RouteGraph, weight: u32) -> Result<(), ColonyError> {
    let edge = AlignmentEdge::new(weight);
    let groups = group_by_schematic(graph);

    for group in &groups {
        debug!(
            schematic_id = group.schematic_id(),
            members = group.members().len();
            "Adding rank group"
        );
        for (pin, next_pin) in group.members().iter().copied().pairwise() {
            graph.add_alignment(pin, next_pin, edge)?;
        }
    }

    let representatives = groups.iter().filter_map(RankGroup::representative);
    for (pin, next_pin) in representatives.pairwise() {
        graph.add_alignment(pin, next_pin, edge)?;
    }

    for group in groups {
        graph.add_rank_group(group);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use colony_graph_core::{
        catalog::StaticCatalog,
        semantic::{Pin, PinRole, Schematic},
    };

    use super::*;
    use crate::{
        config::StyleConfig,
        structure::{
            legend::ColorCache,
            node::PinNode,
            route::{Rank, build_route_graph},
        },
    };

    fn processor(raw: u64, type_name: &str, schematic_id: SchematicId) -> Pin {
        Pin {
            id: PinId::new(raw),
            type_id: 2473,
            type_name: type_name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            role: PinRole::Processor(Schematic {
                id: schematic_id,
                name: format!("Schematic {schematic_id}"),
            }),
        }
    }

    fn plain(raw: u64) -> Pin {
        Pin {
            id: PinId::new(raw),
            type_id: 2541,
            type_name: "Barren Storage Facility".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            role: PinRole::Plain,
        }
    }

    fn route_graph(pins: &[Pin]) -> RouteGraph {
        let style = StyleConfig::default().resolve().unwrap();
        let nodes: Vec<PinNode> = pins
            .iter()
            .map(|pin| PinNode::from_pin(pin, 300.0, &style))
            .collect();
        build_route_graph(
            &nodes,
            &[],
            &StaticCatalog::new(),
            &mut ColorCache::default(),
            &style,
        )
        .unwrap()
    }

    fn pid(raw: u64) -> PinId {
        PinId::new(raw)
    }

    fn alignment_pairs(graph: &RouteGraph) -> Vec<(u64, u64)> {
        graph
            .alignment_edges()
            .map(|(source, target, _)| (source.get(), target.get()))
            .collect()
    }

    #[test]
    fn test_two_groups_with_singleton() {
        let mut graph = route_graph(&[
            processor(1, "Basic Industry Facility", 10),
            processor(2, "Basic Industry Facility", 10),
            processor(3, "Basic Industry Facility", 20),
        ]);
        align_rank_groups(&mut graph, 9999).unwrap();

        let groups = graph.rank_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].members(), &[pid(1), pid(2)]);
        assert_eq!(groups[1].members(), &[pid(3)]);
        assert!(groups.iter().all(|g| g.rank() == Rank::Same));

        assert_eq!(alignment_pairs(&graph), vec![(1, 2), (1, 3)]);
        assert!(graph.alignment_edges().all(|(_, _, e)| e.weight() == 9999));
        assert!(graph.edges().all(|(_, _, e)| !e.is_visible()));
    }

    #[test]
    fn test_members_sorted_groups_in_first_seen_order() {
        let graph = route_graph(&[
            processor(40, "Basic Industry Facility", 7),
            processor(30, "Advanced Industry Facility", 5),
            processor(10, "Basic Industry Facility", 7),
            processor(20, "Advanced Industry Facility", 5),
        ]);

        let groups = group_by_schematic(&graph);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].schematic_id(), 7);
        assert_eq!(groups[0].members(), &[pid(10), pid(40)]);
        assert_eq!(groups[1].schematic_id(), 5);
        assert_eq!(groups[1].members(), &[pid(20), pid(30)]);
        assert_eq!(groups[1].representative(), Some(pid(20)));
    }

    #[test]
    fn test_chain_within_large_group() {
        let mut graph = route_graph(&[
            processor(4, "Basic Industry Facility", 1),
            processor(2, "Basic Industry Facility", 1),
            processor(3, "Basic Industry Facility", 1),
            processor(1, "Basic Industry Facility", 1),
        ]);
        align_rank_groups(&mut graph, 50).unwrap();

        assert_eq!(alignment_pairs(&graph), vec![(1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_high_tier_and_plain_pins_are_skipped() {
        let mut graph = route_graph(&[
            processor(1, "Barren High-Tech Production Plant", 99),
            plain(2),
            processor(3, "Basic Industry Facility", 10),
        ]);
        align_rank_groups(&mut graph, 9999).unwrap();

        assert_eq!(graph.rank_groups().len(), 1);
        assert_eq!(graph.rank_groups()[0].members(), &[pid(3)]);
        assert_eq!(graph.alignment_edges().count(), 0);
    }

    #[test]
    fn test_no_processors_no_groups() {
        let mut graph = route_graph(&[plain(1), plain(2)]);
        align_rank_groups(&mut graph, 9999).unwrap();

        assert!(graph.rank_groups().is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_grouping_ignores_input_order() {
        let forward = route_graph(&[
            processor(1, "Basic Industry Facility", 10),
            processor(2, "Basic Industry Facility", 10),
        ]);
        let backward = route_graph(&[
            processor(2, "Basic Industry Facility", 10),
            processor(1, "Basic Industry Facility", 10),
        ]);

        assert_eq!(group_by_schematic(&forward), group_by_schematic(&backward));
    }
}
