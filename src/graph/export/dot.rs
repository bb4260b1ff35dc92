use super::{Export, ExportError};
use crate::graph::{PetersenGraph, WeightedGraph};

/// Empty struct. Only implements Export trait functionalities.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dot;

impl Dot {
    /// Returns a string representing the graph in Graphviz dot format.
    /// Weights, if present, are added as labels of the corresponding edge.
    pub fn from_weighted_graph(graph: &dyn WeightedGraph, name: &str) -> String {
        let mut out = format!("graph \"{}\" {{\n", name.replace('"', "\\\""));

        for node in graph.iter_nodes() {
            out.push_str(&format!("\t{}\n", node));
        }

        for ((from, to), weight) in graph.iter_weighted_edges() {
            match weight {
                Some(weight) => {
                    out.push_str(&format!("\t{} -- {} [label=\"{}\"]\n", from, to, weight))
                }
                None => out.push_str(&format!("\t{} -- {}\n", from, to)),
            }
        }

        out.push('}');
        out
    }
}

impl Export for Dot {
    fn export(&self, graph: &PetersenGraph, name: &str) -> Result<String, ExportError> {
        Ok(Self::from_weighted_graph(graph, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate::{generate, generate_weighted};

    #[test]
    fn plain_dot_works() {
        let graph = generate(3, 1).unwrap();
        let dot = Dot.export(&graph, "GP(3, 1)").unwrap();

        assert!(dot.starts_with("graph \"GP(3, 1)\" {\n"), "{}", dot);
        assert!(dot.ends_with('}'));
        assert!(dot.contains("\t1 -- 4\n"));
        assert!(dot.contains("\t3 -- 1\n"));
        assert!(dot.contains("\t6 -- 4\n"));
        assert_eq!(dot.matches(" -- ").count(), 9);
        assert!(!dot.contains("label"));
    }

    #[test]
    fn weighted_dot_has_labels() {
        let graph = generate_weighted(5, 2).unwrap();
        let dot = Dot.export(&graph, "petersen").unwrap();

        assert!(dot.contains("\t1 -- 6 [label=\"29\"]\n"), "{}", dot);
        assert!(dot.contains("\t10 -- 7 [label=\"7\"]\n"), "{}", dot);
        assert_eq!(dot.matches("label=").count(), 15);
    }

    #[test]
    fn quotes_in_names_are_escaped() {
        let graph = generate(2, 1).unwrap();
        let dot = Dot.export(&graph, "say \"hi\"").unwrap();

        assert!(dot.starts_with("graph \"say \\\"hi\\\"\" {"), "{}", dot);
        // Parallel edges of GP(2, 1) are kept apart.
        assert_eq!(dot.matches(" -- ").count(), 6);
    }
}
