//! Record-per-node rendering of a computation graph.

use std::fmt::Write;
use std::time::Instant;

use bagel_graph::{Edge, Graph, Node};
use tracing::debug;

use super::config::RenderConfig;
use super::dot::{DotBuilder, escape_quoted, escape_record_text, fixed2, node_name};

/// Render the graph with an explicit configuration.
///
/// Layout of the document:
///
/// ```text
/// digraph "<title>" {
///   size="100,100";
///   ranksep="1";
///   nodesep="1";
///   node00000 [penwidth=2.000000, shape=Mrecord, label="[0]|{} |<o> INPUT}", ...];
///
/// node00000:o -> node00001:i0 [penwidth=2.000000, label=" 1.00"];
/// }
/// ```
pub fn render_with_config(title: &str, graph: &Graph, config: &RenderConfig) -> String {
    let render_start = Instant::now();

    let estimated_size =
        graph.nodes.len() * 140 + graph.input_count() * 40 + graph.edges.len() * 80 + 128;
    let mut dot = DotBuilder::with_capacity(title, estimated_size);

    dot.attr("size", &config.canvas_size_attr())
        .attr("ranksep", &config.rank_sep.to_string())
        .attr("nodesep", &config.node_sep.to_string());

    let pen = config.pen_width_attr();
    for node in &graph.nodes {
        dot.statement(&node_statement(node, &pen, config));
    }

    // Edge statements start at column zero.
    dot.blank().set_indent(0);
    for edge in &graph.edges {
        dot.statement(&edge_statement(edge, &pen));
    }

    let output = dot.build();
    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        bytes = output.len(),
        secs = render_start.elapsed().as_secs_f64(),
        "graph rendered"
    );
    output
}

/// One `Mrecord` statement: `[id]` field, the input column, and the output port.
fn node_statement(node: &Node, pen: &str, config: &RenderConfig) -> String {
    let mut out = String::with_capacity(96 + node.inputs.len() * 40);
    let _ = write!(
        out,
        "{} [penwidth={}, shape=Mrecord, label=\"[{}]|{{",
        node_name(node.id),
        pen,
        node.id
    );

    for (pos, slot) in node.inputs.iter().enumerate() {
        out.push_str(if pos == 0 { "{" } else { "| " });
        let _ = write!(
            out,
            " <i{}> {} b({}) d({})",
            slot.idx,
            slot.slot_type,
            fixed2(slot.bias),
            fixed2(slot.default)
        );
    }

    let _ = write!(
        out,
        "}} |<o> {}}}\", fillcolor=\"{}\", style=filled];",
        escape_record_text(&node.node_type),
        escape_quoted(config.fill_for(node.kind()))
    );
    out
}

fn edge_statement(edge: &Edge, pen: &str) -> String {
    format!(
        "{}:o -> {}:i{} [penwidth={}, label=\"{}\"];",
        node_name(edge.from_node_id),
        node_name(edge.to_node_id),
        edge.to_node_input_idx,
        pen,
        fixed2(edge.weight)
    )
}

#[cfg(test)]
mod tests {
    use bagel_graph::InputSlot;
    use pretty_assertions::assert_eq;

    use super::*;

    fn pen() -> String {
        RenderConfig::default().pen_width_attr()
    }

    #[test]
    fn node_without_inputs() {
        let node = Node::new(0, "INPUT", vec![]);
        assert_eq!(
            node_statement(&node, &pen(), &RenderConfig::default()),
            "node00000 [penwidth=2.000000, shape=Mrecord, label=\"[0]|{} |<o> INPUT}\", fillcolor=\"#bbeebb\", style=filled];"
        );
    }

    #[test]
    fn node_with_inputs_nests_input_column() {
        let node = Node::new(
            12,
            "SIN",
            vec![
                InputSlot::new(0, "SUM", 0.5, 0.0),
                InputSlot::new(1, "MAX", -1.25, 3.0),
            ],
        );
        assert_eq!(
            node_statement(&node, &pen(), &RenderConfig::default()),
            "node00012 [penwidth=2.000000, shape=Mrecord, label=\"[12]|{{ <i0> SUM b( 0.50) d( 0.00)| <i1> MAX b(-1.25) d( 3.00)} |<o> SIN}\", fillcolor=\"#ffff70\", style=filled];"
        );
    }

    #[test]
    fn greater_than_in_type_is_escaped() {
        let node = Node::new(5, ">0", vec![]);
        let stmt = node_statement(&node, &pen(), &RenderConfig::default());
        assert!(stmt.contains("|<o> \\>0}"), "{stmt}");
    }

    #[test]
    fn negative_port_indices_are_rendered_as_given() {
        let node = Node::new(2, "SIN", vec![InputSlot::new(-1, "SUM", 0.0, 0.0)]);
        let stmt = node_statement(&node, &pen(), &RenderConfig::default());
        assert!(stmt.contains("{{ <i-1> SUM b( 0.00) d( 0.00)}"), "{stmt}");
        assert_eq!(
            edge_statement(&Edge::new(1, 2, -1, 1.0), &pen()),
            "node00001:o -> node00002:i-1 [penwidth=2.000000, label=\" 1.00\"];"
        );
    }

    #[test]
    fn nan_values_use_c_spelling() {
        let node = Node::new(0, "SIN", vec![InputSlot::new(0, "SUM", f64::NAN, 0.0)]);
        let stmt = node_statement(&node, &pen(), &RenderConfig::default());
        assert!(stmt.contains("b(  nan) d( 0.00)"), "{stmt}");
    }

    #[test]
    fn quotes_in_configured_fill_are_escaped() {
        let config = RenderConfig {
            compute_fill: "a\"b".to_string(),
            ..RenderConfig::default()
        };
        let stmt = node_statement(&Node::new(0, "SIN", vec![]), &pen(), &config);
        assert!(stmt.ends_with("fillcolor=\"a\\\"b\", style=filled];"), "{stmt}");
    }

    #[test]
    fn edge_uses_output_port_and_target_slot() {
        let edge = Edge::new(1, 2, 3, 0.5);
        assert_eq!(
            edge_statement(&edge, &pen()),
            "node00001:o -> node00002:i3 [penwidth=2.000000, label=\" 0.50\"];"
        );
    }

    #[test]
    fn custom_config_flows_into_output() {
        let config = RenderConfig {
            line_width: 0.5,
            canvas_size: (20, 10),
            rank_sep: 2.5,
            node_sep: 0.25,
            output_fill: "white".to_string(),
            ..RenderConfig::default()
        };
        let graph = Graph::new(
            vec![Node::new(9, "OUTPUT", vec![])],
            vec![Edge::new(9, 9, 0, 1.0)],
        );
        let out = render_with_config("cfg", &graph, &config);
        assert!(out.contains("  size=\"20,10\";\n"), "{out}");
        assert!(out.contains("  ranksep=\"2.5\";\n"), "{out}");
        assert!(out.contains("  nodesep=\"0.25\";\n"), "{out}");
        assert!(out.contains("penwidth=0.500000, shape=Mrecord"), "{out}");
        assert!(out.contains("fillcolor=\"white\""), "{out}");
        assert!(out.contains("[penwidth=0.500000, label=\" 1.00\"];"), "{out}");
    }
}
