//! Sectioned plain-text report.

use std::fmt::Write;

use crate::discourse::{DiscourseReport, GraphSpec};

const NO_CHAINS: &str = "No strong chains found.";
const NO_COHESION_NETWORK: &str = "No significant lexical cohesion network to display.";
const COMPLETED: &str = "Discourse Analysis Completed!";

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title, "-".repeat(title.chars().count()));
}

fn write_edges(out: &mut String, graph: &GraphSpec) {
    let arrow = if graph.directed { "->" } else { "--" };
    let _ = writeln!(
        out,
        "Nodes: {}, Edges: {}",
        graph.node_count(),
        graph.edge_count()
    );
    for (from, to) in graph.labelled_edges() {
        let _ = writeln!(out, "  {} {} {}", from, arrow, to);
    }
}

/// Render the full report as text
pub fn render_report(report: &DiscourseReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "DiscoMind: Discourse Analysis");

    heading(&mut out, "1. Text Segmentation");
    for seg in &report.segments {
        let _ = writeln!(out, "Segment {}: {}", seg.index, seg.text);
    }

    heading(&mut out, "2. Lexical Chains & Cohesion");
    if report.lexical_chain.is_empty() {
        let _ = writeln!(out, "Lexical Chains: {}", NO_CHAINS);
    } else {
        let _ = writeln!(out, "Lexical Chains: {}", report.lexical_chain.join(", "));
    }

    heading(&mut out, "3. Intent & Rhetorical Structure");
    for seg in &report.segments {
        let _ = writeln!(out, "Segment {} Intent: {}", seg.index, seg.intent);
    }

    heading(&mut out, "4. Mimamsa Sentence Classification");
    for seg in &report.segments {
        let _ = writeln!(out, "Segment {} Mimamsa Type: {}", seg.index, seg.classification);
    }

    heading(
        &mut out,
        "5. Sentence Requirement Checks (Akanksha, Sannidhi, Yogyata)",
    );
    for check in report.requirements.checks() {
        let mark = if check.satisfied { "[ok]" } else { "[!]" };
        let _ = writeln!(out, "{} ({}): {} {}", check.name, check.gloss, mark, check.message);
    }

    heading(&mut out, "6. Six Mimamsa Tests of a Subsidiary");
    for test in &report.tests {
        let mark = if test.passed { "[ok]" } else { "[x]" };
        let _ = writeln!(out, "{}: {} {}", test.test_name, mark, test.message);
    }

    let _ = writeln!(out, "\n{}", COMPLETED);

    heading(&mut out, report.structure_graph.kind.title());
    write_edges(&mut out, &report.structure_graph);

    heading(&mut out, report.cohesion_graph.kind.title());
    if report.has_cohesion_network() {
        write_edges(&mut out, &report.cohesion_graph);
    } else {
        let _ = writeln!(out, "{}", NO_COHESION_NETWORK);
    }

    out
}
