//! Plain-text summary of a built colony.

use std::io::{self, Write};

use colony_graph::{Colony, PinNode, RouteEdge};

/// Writes the nodes, edges, rank groups and legend of a colony.
pub fn write_summary(out: &mut impl Write, colony: &Colony) -> io::Result<()> {
    let info = colony.info();
    writeln!(
        out,
        "Colony {} ({}, system {}, upgrade {}, updated {})",
        info.planet_name,
        info.planet_type,
        info.solar_system_id,
        info.command_center_upgrade_level,
        info.last_update_string(),
    )?;

    let links = colony.link_graph();
    writeln!(
        out,
        "  link graph: {} nodes, {} edges",
        links.node_count(),
        links.edge_count()
    )?;
    for node in links.nodes() {
        write_node(out, node)?;
    }
    for (source, target, edge) in links.edges() {
        writeln!(out, "    link {source} -- {target} level {}", edge.level())?;
    }

    let routes = colony.route_graph();
    let legend = colony.legend_graph();
    writeln!(
        out,
        "  route graph: {} nodes, {} edges, {} rank groups",
        routes.node_count(),
        routes.edge_count(),
        routes.rank_groups().len()
    )?;
    for (source, target, edge) in routes.edges() {
        match edge {
            RouteEdge::Flow(flow) => {
                let commodity = legend
                    .node(flow.content_type_id())
                    .map_or("?", |node| node.label());
                writeln!(
                    out,
                    "    route {source} -> {target} {commodity} {}",
                    flow.color()
                )?;
            }
            RouteEdge::Alignment(alignment) => {
                writeln!(
                    out,
                    "    align {source} -> {target} weight {}",
                    alignment.weight()
                )?;
            }
        }
    }
    for group in routes.rank_groups() {
        let members: Vec<String> = group.members().iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "    rank same (schematic {}): {}",
            group.schematic_id(),
            members.join(", ")
        )?;
    }

    writeln!(out, "  legend: {} commodities", legend.node_count())?;
    for node in legend.nodes() {
        writeln!(
            out,
            "    {} {} {}",
            node.content_type_id(),
            node.label(),
            node.color()
        )?;
    }

    Ok(())
}

fn write_node(out: &mut impl Write, node: &PinNode) -> io::Result<()> {
    let point = node.position().point();
    writeln!(
        out,
        "    pin {} [{}] {} @ ({:.1}, {:.1})",
        node.pin_id(),
        node.shape().render_name(),
        node.label(),
        point.x(),
        point.y()
    )
}
