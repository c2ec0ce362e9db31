//! Discourse Graphs.
//!
//! Builds the node and edge sets behind the two visualizations. Layout and
//! drawing belong to the rendering side; this module only produces plain data.

use serde::{Deserialize, Serialize};

use super::rhetoric::Intent;

/// Label of the single root node of the structure graph
pub const STRUCTURE_ROOT: &str = "Discourse";

/// Which visualization a graph feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// Star: root to every segment
    Structure,
    /// Complete graph over the lexical chain
    Cohesion,
}

impl GraphKind {
    pub fn title(&self) -> &'static str {
        match self {
            GraphKind::Structure => "Discourse Tree",
            GraphKind::Cohesion => "Lexical Cohesion Network",
        }
    }
}

/// Node labels plus edges as index pairs into `nodes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub kind: GraphKind,
    pub directed: bool,
    pub nodes: Vec<String>,
    pub edges: Vec<(usize, usize)>,
}

impl GraphSpec {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges resolved to their node labels
    pub fn labelled_edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|&(a, b)| (self.nodes[a].as_str(), self.nodes[b].as_str()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Root plus one `S{i}: {intent}` child per segment, 1-based
    pub fn structure(&self, intents: &[Intent]) -> GraphSpec {
        let mut nodes = Vec::with_capacity(intents.len() + 1);
        nodes.push(STRUCTURE_ROOT.to_string());
        nodes.extend(
            intents
                .iter()
                .enumerate()
                .map(|(i, intent)| format!("S{}: {}", i + 1, intent)),
        );

        let edges = (1..nodes.len()).map(|child| (0, child)).collect();

        GraphSpec {
            kind: GraphKind::Structure,
            directed: true,
            nodes,
            edges,
        }
    }

    /// One node per chain word, an edge for every unordered pair
    pub fn cohesion(&self, chain: &[String]) -> GraphSpec {
        let n = chain.len();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j));
            }
        }

        GraphSpec {
            kind: GraphKind::Cohesion,
            directed: false,
            nodes: chain.to_vec(),
            edges,
        }
    }
}
