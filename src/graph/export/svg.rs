use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use super::{shell_layout, Export, ExportError};
use crate::graph::{EdgeClass, PetersenGraph};
use crate::util::{scale::PointScaler, Point};

const TEMPLATE: &str = include_str!("../../templates/graph.svg");
const NODE_RADIUS: usize = 12;

/// Renders a graph as SVG using the shell layout.
/// `width` and `height` size the drawing area, `padding` is added on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Svg {
    pub width: usize,
    pub height: usize,
    pub padding: usize,
}

impl Default for Svg {
    fn default() -> Self {
        Svg {
            width: 600,
            height: 600,
            padding: 40,
        }
    }
}

#[derive(Serialize)]
struct SvgNode {
    x: String,
    y: String,
    label: usize,
    color: &'static str,
}

#[derive(Serialize)]
struct SvgEdge {
    class: EdgeClass,
    path: String,
    color: &'static str,
    label: String,
    label_x: String,
    label_y: String,
}

fn edge_color(class: EdgeClass) -> &'static str {
    match class {
        EdgeClass::Spoke => "gray",
        EdgeClass::Outer => "steelblue",
        EdgeClass::Inner => "indianred",
    }
}

fn coordinate(value: f64) -> String {
    format!("{:.2}", value)
}

impl Svg {
    fn scaled_point(&self, point: &Point, scaler: &PointScaler) -> Point {
        let scaled_point = scaler.scale_point(point);

        // The scaled point needs to be adjusted to our SVG canvas size and padding.
        Point {
            x: (scaled_point.x * self.width as f64) + self.padding as f64,
            y: (scaled_point.y * (self.height as f64 * -1.0)) + (self.padding + self.height) as f64,
        }
    }

    fn context(&self, graph: &PetersenGraph, name: &str) -> Context {
        let layout = shell_layout(graph);
        let scaler = PointScaler::from_point_iterator(layout.values().copied());
        let placed = |id: usize| {
            layout
                .get(&id)
                .map(|point| self.scaled_point(point, &scaler))
                .unwrap_or(Point { x: 0., y: 0. })
        };

        let nodes: Vec<SvgNode> = layout
            .keys()
            .map(|&id| {
                let point = placed(id);
                SvgNode {
                    x: coordinate(point.x),
                    y: coordinate(point.y),
                    label: id,
                    color: if graph.is_outer(id) { "skyblue" } else { "slategray" },
                }
            })
            .collect();

        let edges: Vec<SvgEdge> = graph
            .gp_edges()
            .iter()
            .map(|edge| {
                let p1 = placed(edge.ends.0);
                let p2 = placed(edge.ends.1);
                let mid = p1.midpoint(&p2);
                SvgEdge {
                    class: edge.class,
                    path: format!(
                        "M {} {} L {} {}",
                        coordinate(p1.x),
                        coordinate(p1.y),
                        coordinate(p2.x),
                        coordinate(p2.y)
                    ),
                    color: edge_color(edge.class),
                    label: edge.weight.map(|w| w.to_string()).unwrap_or_default(),
                    label_x: coordinate(mid.x),
                    label_y: coordinate(mid.y),
                }
            })
            .collect();

        let mut context = Context::new();
        context.insert("name", &name);
        context.insert("canvas_width", &(self.width + 2 * self.padding));
        context.insert("canvas_height", &(self.height + 2 * self.padding));
        context.insert("radius", &NODE_RADIUS);
        context.insert("nodes", &nodes);
        context.insert("edges", &edges);
        context
    }
}

impl Export for Svg {
    fn export(&self, graph: &PetersenGraph, name: &str) -> Result<String, ExportError> {
        let context = self.context(graph, name);
        Ok(Tera::one_off(TEMPLATE, &context, true)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate::{generate, generate_weighted};

    #[test]
    fn svg_contains_all_elements() {
        let graph = generate(5, 2).unwrap();
        let svg = Svg::default().export(&graph, "petersen").unwrap();

        assert!(svg.starts_with("<svg"), "{}", svg);
        assert!(svg.contains("<title>petersen</title>"));
        assert!(svg.contains("width=\"680\""));
        assert_eq!(svg.matches("<circle").count(), 10);
        assert_eq!(svg.matches("<path").count(), 15);
        assert_eq!(svg.matches("class=\"spoke\"").count(), 5);
        // Only vertex labels, no weight labels.
        assert_eq!(svg.matches("<text").count(), 10);
    }

    #[test]
    fn weighted_svg_labels_edges() {
        let graph = generate_weighted(5, 2).unwrap();
        let svg = Svg::default().export(&graph, "petersen").unwrap();

        assert_eq!(svg.matches("<text").count(), 25);
        assert!(svg.contains(">29</text>"));
    }

    #[test]
    fn first_vertex_is_drawn_at_the_top() {
        let svg = Svg {
            width: 100,
            height: 100,
            padding: 10,
        };
        let graph = generate(4, 1).unwrap();
        let context = svg.context(&graph, "square").into_json();

        assert_eq!(context["nodes"][0]["x"], "60.00");
        assert_eq!(context["nodes"][0]["y"], "10.00");
        assert_eq!(context["nodes"][0]["label"], 1);
    }

    #[test]
    fn names_are_escaped() {
        let graph = generate(3, 1).unwrap();
        let svg = Svg::default().export(&graph, "<b>").unwrap();

        assert!(svg.contains("<title>&lt;b&gt;</title>"), "{}", svg);
    }
}
