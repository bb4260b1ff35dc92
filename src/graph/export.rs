mod dot;
mod layout;
mod report;
pub mod svg;

pub use dot::Dot;
pub use layout::shell_layout;
pub use report::AdjacencyReport;
pub use svg::Svg;

use crate::graph::PetersenGraph;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render template: {0}")]
    Template(#[from] tera::Error),
}

/// An exporter for generated graphs.
pub trait Export {
    /// Returns a String representation of the graph according to the export format used.
    fn export(&self, graph: &PetersenGraph, name: &str) -> Result<String, ExportError>;
}
