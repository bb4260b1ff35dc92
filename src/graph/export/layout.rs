use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::graph::PetersenGraph;
use crate::util::Point;

/// Radius of the inner ring relative to the outer one.
const INNER_RADIUS: f64 = 0.5;

/// Places outer vertices on the unit circle and inner vertices on a smaller
/// concentric circle, each inner vertex at the angle of its spoke partner.
/// Vertex 1 sits at the top and ids increase counter-clockwise.
pub fn shell_layout(graph: &PetersenGraph) -> BTreeMap<usize, Point> {
    let params = graph.params();
    let n = params.vertex_count();
    let step = 2. * PI / n as f64;

    params
        .outer_vertices()
        .flat_map(|id| {
            let angle = FRAC_PI_2 + step * (id - 1) as f64;
            vec![
                (id, Point::on_circle(1., angle)),
                (id + n, Point::on_circle(INNER_RADIUS, angle)),
            ]
        })
        .collect()
}
