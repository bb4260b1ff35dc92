mod petersen;

pub use petersen::{generate, generate_weighted, GeneralizedPetersen, Weighting};

use crate::graph::PetersenGraph;

/// A Generator for generalized Petersen graphs.
pub trait Generate {
    /// Generates the graph for the generator's parameters.
    /// Parameters are validated when the generator is built, so this cannot fail.
    fn generate(&self) -> PetersenGraph;
}
