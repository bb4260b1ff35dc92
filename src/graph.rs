mod error;
mod params;
mod petersen_graph;

pub mod export;
pub mod generate;

pub use error::{GraphError, InvalidReason};
pub use params::GpParams;
pub(crate) use params::parse_integer;
pub use petersen_graph::{EdgeClass, GpEdge, PetersenGraph};

pub type Edge<IndexType> = (IndexType, IndexType);

/// Read-only view of an undirected graph with `usize` vertex ids.
pub trait Graph {
    /// Returns true if there are no nodes, or false otherwise.
    fn is_empty(&self) -> bool;

    /// Returns the number of nodes in this graph.
    fn order(&self) -> usize;

    /// Returns the number of edges in this graph.
    /// Parallel edges are counted once per occurrence.
    fn size(&self) -> usize;

    /// Returns an iterator over node ids.
    fn iter_nodes(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns the node ids of this graph.
    fn nodes(&self) -> Vec<usize> {
        self.iter_nodes().collect()
    }

    /// Returns the neighbors of the node with id.
    /// Returns an error if node is not in graph.
    fn neighbors(&self, id: usize) -> Result<&[usize], GraphError>;

    /// Returns true if node with id is a member, or false otherwise.
    fn has_node(&self, id: usize) -> bool;

    /// Returns the count of neighbors at node with given id.
    /// Returns an error if the node is not in the graph.
    fn degree(&self, id: usize) -> Result<usize, GraphError> {
        Ok(self.neighbors(id)?.len())
    }

    /// Returns an iterator over edge ids in the form (from_id, to_id).
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<usize>> + '_>;

    /// Returns a vec of all edge ids in the form (from_id, to_id).
    fn edges(&self) -> Vec<Edge<usize>> {
        self.iter_edges().collect()
    }

    /// Returns true if the edge exists in either direction, or false otherwise.
    fn has_edge(&self, edge: Edge<usize>) -> bool;
}

pub trait WeightedGraph: Graph {
    /// Returns the weight of an edge, or `None` if the graph carries no weights.
    /// Returns MissingEdge if the edge is not in the graph.
    fn edge_weight(&self, edge: Edge<usize>) -> Result<Option<usize>, GraphError>;

    /// Returns an iterator over all edges with their weights.
    /// Unlike [`WeightedGraph::edge_weight`] this keeps parallel edges apart.
    fn iter_weighted_edges(
        &self,
    ) -> Box<dyn Iterator<Item = (Edge<usize>, Option<usize>)> + '_>;
}
