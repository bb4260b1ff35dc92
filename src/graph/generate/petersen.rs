use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Generate;
use crate::graph::{EdgeClass, GpEdge, GpParams, GraphError, PetersenGraph};

/// How edges are labelled by a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    #[default]
    Plain,
    /// Graceful-style labelling with one formula per edge class.
    Graceful,
}

/// Builds GP(n, k): an outer `n`-cycle, an inner circulant with step `k`
/// and one spoke per outer vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralizedPetersen {
    params: GpParams,
    weighting: Weighting,
}

impl GeneralizedPetersen {
    pub fn new(params: GpParams, weighting: Weighting) -> Self {
        GeneralizedPetersen { params, weighting }
    }

    /// Validates `(n, k)` and returns an unweighted generator.
    pub fn plain(vertex_count: i64, skip: i64) -> Result<Self, GraphError> {
        Ok(Self::new(GpParams::new(vertex_count, skip)?, Weighting::Plain))
    }

    /// Validates `(n, k)` and returns a generator with graceful-style weights.
    pub fn weighted(vertex_count: i64, skip: i64) -> Result<Self, GraphError> {
        Ok(Self::new(
            GpParams::new(vertex_count, skip)?,
            Weighting::Graceful,
        ))
    }

    pub fn params(&self) -> GpParams {
        self.params
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    fn weight(&self, class: EdgeClass, index: usize) -> Option<usize> {
        let n = self.params.vertex_count();
        match self.weighting {
            Weighting::Plain => None,
            Weighting::Graceful => Some(match class {
                EdgeClass::Spoke => spoke_weight(n, index),
                EdgeClass::Outer => outer_weight(n, index),
                EdgeClass::Inner => inner_weight(n, self.params.skip(), index),
            }),
        }
    }
}

impl Generate for GeneralizedPetersen {
    fn generate(&self) -> PetersenGraph {
        let n = self.params.vertex_count();
        let k = self.params.skip();
        let mut sink = EdgeSink::new(self.params);

        // Every edge class walks the index space once, so each edge is added exactly once.
        for i in 0..n {
            let index = i + 1;
            sink.push(
                (i + 1, i + 1 + n),
                EdgeClass::Spoke,
                index,
                self.weight(EdgeClass::Spoke, index),
            );
        }

        for i in 0..n {
            let index = i + 1;
            sink.push(
                (i + 1, (i + 1) % n + 1),
                EdgeClass::Outer,
                index,
                self.weight(EdgeClass::Outer, index),
            );
        }

        for i in 0..n {
            let index = i + 1;
            sink.push(
                (i + 1 + n, (i + k) % n + 1 + n),
                EdgeClass::Inner,
                index,
                self.weight(EdgeClass::Inner, index),
            );
        }

        sink.finish()
    }
}

/// Collects edges and records both endpoints in the adjacency lists as it goes.
struct EdgeSink {
    params: GpParams,
    edges: Vec<GpEdge>,
    adjacency: BTreeMap<usize, Vec<usize>>,
}

impl EdgeSink {
    fn new(params: GpParams) -> Self {
        let n = params.vertex_count();
        EdgeSink {
            params,
            edges: Vec::with_capacity(3 * n),
            adjacency: (1..=2 * n).map(|id| (id, Vec::with_capacity(3))).collect(),
        }
    }

    fn push(
        &mut self,
        ends: (usize, usize),
        class: EdgeClass,
        index: usize,
        weight: Option<usize>,
    ) {
        self.adjacency.entry(ends.0).or_default().push(ends.1);
        self.adjacency.entry(ends.1).or_default().push(ends.0);
        self.edges.push(GpEdge {
            ends,
            class,
            index,
            weight,
        });
    }

    fn finish(self) -> PetersenGraph {
        PetersenGraph::from_parts(self.params, self.edges, self.adjacency)
    }
}

/// Weight of spoke `i` (1-based): `6n - 2i + 1`.
pub(crate) fn spoke_weight(n: usize, i: usize) -> usize {
    6 * n - 2 * i + 1
}

/// Weight of outer-cycle edge `i` (1-based): `2n + 2i - 1`.
pub(crate) fn outer_weight(n: usize, i: usize) -> usize {
    2 * n + 2 * i - 1
}

/// Weight of inner-circulant edge `i` (1-based): `2i - 1`, with two overrides at the
/// wraparound. Both checks always run and the second one wins. They only meet for
/// `k == 1`, where both yield `2n - 1`.
pub(crate) fn inner_weight(n: usize, k: usize, i: usize) -> usize {
    let mut weight = 2 * i - 1;
    if i == n {
        weight = 2 * (n - k) + 1;
    }
    if i == n - k + 1 {
        weight = 2 * n - 1;
    }
    weight
}

/// Generates the unweighted GP(n, k).
pub fn generate(vertex_count: i64, skip: i64) -> Result<PetersenGraph, GraphError> {
    Ok(GeneralizedPetersen::plain(vertex_count, skip)?.generate())
}

/// Generates GP(n, k) with graceful-style edge weights.
pub fn generate_weighted(vertex_count: i64, skip: i64) -> Result<PetersenGraph, GraphError> {
    Ok(GeneralizedPetersen::weighted(vertex_count, skip)?.generate())
}
