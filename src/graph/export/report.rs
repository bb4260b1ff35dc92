use super::{Export, ExportError};
use crate::graph::{Graph, PetersenGraph};

/// Plain text adjacency table, one `vertex: [neighbors]` line per vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyReport;

impl AdjacencyReport {
    pub fn from_graph(graph: &dyn Graph) -> String {
        let mut out = String::new();

        for node in graph.iter_nodes() {
            // Nodes come from the graph itself, so the lookup can't miss.
            let neighbors = graph.neighbors(node).unwrap_or(&[]);
            let list = neighbors
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("{}: [{}]\n", node, list));
        }

        out
    }
}

impl Export for AdjacencyReport {
    fn export(&self, graph: &PetersenGraph, _name: &str) -> Result<String, ExportError> {
        Ok(Self::from_graph(graph))
    }
}
