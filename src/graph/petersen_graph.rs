use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::graph::{Edge, GpParams, Graph, GraphError, WeightedGraph};

/// The construction step an edge was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeClass {
    Spoke,
    Outer,
    Inner,
}

impl fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeClass::Spoke => "spoke",
            EdgeClass::Outer => "outer",
            EdgeClass::Inner => "inner",
        };
        f.write_str(name)
    }
}

/// An undirected edge annotated with its class, its 1-based index within that class
/// and, for weighted graphs, its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GpEdge {
    pub ends: Edge<usize>,
    pub class: EdgeClass,
    pub index: usize,
    pub weight: Option<usize>,
}

impl GpEdge {
    pub fn connects(&self, edge: Edge<usize>) -> bool {
        self.ends == edge || self.ends == (edge.1, edge.0)
    }

    pub fn touches(&self, id: usize) -> bool {
        self.ends.0 == id || self.ends.1 == id
    }
}

/// Immutable result of one generation call.
///
/// Vertices are `1..=n` (outer) and `n+1..=2n` (inner). Edges are kept in
/// construction order: all spokes, then the outer cycle, then the inner circulant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetersenGraph {
    params: GpParams,
    edges: Vec<GpEdge>,
    adjacency: BTreeMap<usize, Vec<usize>>,
}

impl PetersenGraph {
    pub(crate) fn from_parts(
        params: GpParams,
        edges: Vec<GpEdge>,
        adjacency: BTreeMap<usize, Vec<usize>>,
    ) -> Self {
        PetersenGraph {
            params,
            edges,
            adjacency,
        }
    }

    pub fn params(&self) -> GpParams {
        self.params
    }

    pub fn is_outer(&self, id: usize) -> bool {
        self.params.outer_vertices().contains(&id)
    }

    pub fn is_inner(&self, id: usize) -> bool {
        self.params.inner_vertices().contains(&id)
    }

    pub fn gp_edges(&self) -> &[GpEdge] {
        &self.edges
    }

    pub fn edges_of_class(&self, class: EdgeClass) -> impl Iterator<Item = &GpEdge> + '_ {
        self.edges.iter().filter(move |edge| edge.class == class)
    }

    /// Neighbor lists of all `2n` vertices, in the order the edges were constructed.
    pub fn adjacency(&self) -> &BTreeMap<usize, Vec<usize>> {
        &self.adjacency
    }

    pub fn is_weighted(&self) -> bool {
        self.edges.iter().all(|edge| edge.weight.is_some())
    }

    /// Edge weights in construction order, or `None` for an unweighted graph.
    pub fn weights(&self) -> Option<Vec<usize>> {
        self.edges.iter().map(|edge| edge.weight).collect()
    }

    /// True if the graph is weighted and no two edges share a weight.
    pub fn has_distinct_weights(&self) -> bool {
        match self.weights() {
            Some(weights) => {
                let mut seen = HashSet::with_capacity(weights.len());
                weights.into_iter().all(|weight| seen.insert(weight))
            }
            None => false,
        }
    }

    /// False when the index arithmetic produced parallel edges (`k == n / 2` for even `n`).
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.edges.len());
        self.edges.iter().all(|edge| {
            let (a, b) = edge.ends;
            a != b && seen.insert((a.min(b), a.max(b)))
        })
    }

    /// Returns the vertex joined to `id` by its spoke.
    pub fn spoke_partner(&self, id: usize) -> Result<usize, GraphError> {
        let n = self.params.vertex_count();
        if self.is_outer(id) {
            Ok(id + n)
        } else if self.is_inner(id) {
            Ok(id - n)
        } else {
            Err(GraphError::MissingNode(id))
        }
    }
}

impl Graph for PetersenGraph {
    fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn order(&self) -> usize {
        self.adjacency.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn iter_nodes(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    fn neighbors(&self, id: usize) -> Result<&[usize], GraphError> {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(GraphError::MissingNode(id))
    }

    fn has_node(&self, id: usize) -> bool {
        self.adjacency.contains_key(&id)
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<usize>> + '_> {
        Box::new(self.edges.iter().map(|edge| edge.ends))
    }

    fn has_edge(&self, edge: Edge<usize>) -> bool {
        self.edges.iter().any(|e| e.connects(edge))
    }
}

impl WeightedGraph for PetersenGraph {
    fn edge_weight(&self, edge: Edge<usize>) -> Result<Option<usize>, GraphError> {
        self.edges
            .iter()
            .find(|e| e.connects(edge))
            .map(|e| e.weight)
            .ok_or(GraphError::MissingEdge {
                from: edge.0,
                to: edge.1,
            })
    }

    fn iter_weighted_edges(
        &self,
    ) -> Box<dyn Iterator<Item = (Edge<usize>, Option<usize>)> + '_> {
        Box::new(self.edges.iter().map(|edge| (edge.ends, edge.weight)))
    }
}
