//! Graphviz DOT export via petgraph.

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, UnGraph};

use crate::discourse::{DiscourseReport, GraphSpec};

/// DOT source for one graph
pub fn to_dot(spec: &GraphSpec) -> String {
    if spec.directed {
        let mut graph = DiGraph::<&str, ()>::new();
        let nodes: Vec<_> = spec.nodes.iter().map(|n| graph.add_node(n.as_str())).collect();
        for &(a, b) in &spec.edges {
            graph.add_edge(nodes[a], nodes[b], ());
        }
        format!("{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    } else {
        let mut graph = UnGraph::<&str, ()>::new_undirected();
        let nodes: Vec<_> = spec.nodes.iter().map(|n| graph.add_node(n.as_str())).collect();
        for &(a, b) in &spec.edges {
            graph.add_edge(nodes[a], nodes[b], ());
        }
        format!("{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}

/// Structure graph, then the cohesion graph when the chain is non-empty
pub fn render_graphs(report: &DiscourseReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("// {}\n", report.structure_graph.kind.title()));
    out.push_str(&to_dot(&report.structure_graph));

    if report.has_cohesion_network() {
        out.push_str(&format!("\n// {}\n", report.cohesion_graph.kind.title()));
        out.push_str(&to_dot(&report.cohesion_graph));
    }

    out
}
