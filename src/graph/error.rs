use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(InvalidReason),
    #[error("vertex {0} is not part of the graph")]
    MissingNode(usize),
    #[error("edge ({from}, {to}) is not part of the graph")]
    MissingEdge { from: usize, to: usize },
}

/// Why a `(n, k)` pair was rejected before generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("vertex count and skip must be integers, got `{0}`")]
    NotInteger(String),
    #[error("vertex count must be at least 2, got {0}")]
    TooFewVertices(i64),
    #[error("vertex count {vertex_count} is too large, expected at most {max}")]
    TooManyVertices { vertex_count: i64, max: usize },
    #[error("skip {skip} out of range, expected 1 <= skip <= {max} for {vertex_count} vertices")]
    SkipOutOfRange {
        vertex_count: usize,
        skip: i64,
        max: usize,
    },
}

impl From<InvalidReason> for GraphError {
    fn from(reason: InvalidReason) -> Self {
        GraphError::InvalidParameter(reason)
    }
}
