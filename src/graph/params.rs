use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

use crate::graph::{GraphError, InvalidReason};

/// Validated parameters of a generalized Petersen graph GP(n, k).
///
/// The only way to obtain a value is through [`GpParams::new`] or
/// [`GpParams::parse`], so every instance satisfies `n >= 2` and
/// `1 <= k <= n / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GpParams {
    vertex_count: usize,
    skip: usize,
}

impl GpParams {
    pub const MIN_VERTEX_COUNT: usize = 2;

    /// Largest `n` for which every spoke weight `6n - 2i + 1` fits in a `usize`.
    pub const MAX_VERTEX_COUNT: usize = usize::MAX / 6;

    /// Validates `n` and `k`.
    /// The vertex count is checked first, so a pair with both values out of range
    /// reports the vertex count.
    pub fn new(vertex_count: i64, skip: i64) -> Result<Self, GraphError> {
        let n = match usize::try_from(vertex_count) {
            Ok(n) if n < Self::MIN_VERTEX_COUNT => {
                return Err(InvalidReason::TooFewVertices(vertex_count).into())
            }
            Ok(n) if n.checked_mul(6).is_some() => n,
            Err(_) if vertex_count < 0 => {
                return Err(InvalidReason::TooFewVertices(vertex_count).into())
            }
            _ => {
                return Err(InvalidReason::TooManyVertices {
                    vertex_count,
                    max: Self::MAX_VERTEX_COUNT,
                }
                .into())
            }
        };

        let max = Self::max_skip(n);
        match usize::try_from(skip) {
            Ok(k) if (1..=max).contains(&k) => Ok(GpParams {
                vertex_count: n,
                skip: k,
            }),
            _ => Err(InvalidReason::SkipOutOfRange {
                vertex_count: n,
                skip,
                max,
            }
            .into()),
        }
    }

    /// Parses and validates textual input such as command line arguments.
    pub fn parse(vertex_count: &str, skip: &str) -> Result<Self, GraphError> {
        Self::new(parse_integer(vertex_count)?, parse_integer(skip)?)
    }

    /// Largest skip allowed for `vertex_count` outer vertices.
    pub const fn max_skip(vertex_count: usize) -> usize {
        vertex_count / 2
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Outer vertex ids `1..=n`.
    pub fn outer_vertices(&self) -> RangeInclusive<usize> {
        1..=self.vertex_count
    }

    /// Inner vertex ids `n+1..=2n`.
    pub fn inner_vertices(&self) -> RangeInclusive<usize> {
        self.vertex_count + 1..=2 * self.vertex_count
    }
}

impl fmt::Display for GpParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GP({}, {})", self.vertex_count, self.skip)
    }
}

pub(crate) fn parse_integer(raw: &str) -> Result<i64, GraphError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InvalidReason::NotInteger(raw.trim().to_owned()).into())
}
