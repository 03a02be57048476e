//! Final rescaling into an origin-centred unit box.
//!
//! Only the z axis is guarded against a zero extent (flat layouts keep z at 0).
//! A zero extent on x or y divides by zero and yields NaN coordinates, as for a
//! single node or a perfectly colinear layout.

use serde::Serialize;

use crate::graph::{NodeArena, Vec3};

/// Axis-aligned bounds of the present nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Bounds of every node in the arena, or None when it is empty.
    pub fn of(nodes: &NodeArena) -> Option<Self> {
        let mut positions = nodes.node_weights().map(|n| n.position);
        let first = positions.next()?;

        Some(positions.fold(Self { min: first, max: first }, |bounds, p| Self {
            min: bounds.min.min(p),
            max: bounds.max.max(p),
        }))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Per-axis factor mapping this box onto a unit box.
    pub fn unit_scale(&self) -> Vec3 {
        let extent = self.extent();
        Vec3::new(
            1.0 / extent.x,
            1.0 / extent.y,
            if self.max.z == self.min.z { 0.0 } else { 1.0 / extent.z },
        )
    }

    /// Flat `[min_x, min_y, min_z, max_x, max_y, max_z]`.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(6);
        out.extend(self.min.to_array());
        out.extend(self.max.to_array());
        out
    }
}

/// Centre the layout on the origin and scale it to unit extent.
///
/// Returns the bounds the layout had before rescaling.
pub fn normalize(nodes: &mut NodeArena) -> Option<BoundingBox> {
    let bounds = BoundingBox::of(nodes)?;
    let center = bounds.center();
    let scale = bounds.unit_scale();

    for node in nodes.node_weights_mut() {
        node.position = (node.position - center).scale_by(scale);
    }

    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Attributes, Node, NodeId};

    fn arena(positions: &[Vec3]) -> NodeArena {
        let mut nodes = NodeArena::default();
        for (i, &p) in positions.iter().enumerate() {
            nodes.add_node(Node::new(NodeId(i as i64), p, Attributes::new()));
        }
        nodes
    }

    #[test]
    fn test_bounds() {
        let nodes = arena(&[Vec3::new(-10.0, -5.0, 1.0), Vec3::new(10.0, 5.0, 3.0)]);

        let bounds = BoundingBox::of(&nodes).unwrap();
        assert_eq!(bounds.min, Vec3::new(-10.0, -5.0, 1.0));
        assert_eq!(bounds.max, Vec3::new(10.0, 5.0, 3.0));
        assert_eq!(bounds.center(), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(bounds.to_vec(), vec![-10.0, -5.0, 1.0, 10.0, 5.0, 3.0]);
    }

    #[test]
    fn test_empty_has_no_bounds() {
        let mut nodes = NodeArena::default();
        assert_eq!(BoundingBox::of(&nodes), None);
        assert_eq!(normalize(&mut nodes), None);
    }

    #[test]
    fn test_normalize_to_unit_box() {
        let mut nodes = arena(&[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(40.0, 10.0, 4.0),
            Vec3::new(20.0, 30.0, 8.0),
        ]);

        normalize(&mut nodes);

        let bounds = BoundingBox::of(&nodes).unwrap();
        assert_eq!(bounds.min, Vec3::new(-0.5, -0.5, -0.5));
        assert_eq!(bounds.max, Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_flat_layout_keeps_zero_z() {
        let mut nodes = arena(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, 2.0, 0.0)]);

        normalize(&mut nodes);

        for node in nodes.node_weights() {
            assert_eq!(node.z(), 0.0);
        }
        assert_eq!(BoundingBox::of(&nodes).unwrap().extent(), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_zero_extent_on_x_is_not_guarded() {
        let mut nodes = arena(&[Vec3::new(3.0, 0.0, 0.0), Vec3::new(3.0, 8.0, 0.0)]);

        normalize(&mut nodes);

        for node in nodes.node_weights() {
            assert!(node.x().is_nan());
            assert!(node.y().is_finite());
        }
    }

    #[test]
    fn test_normalize_skips_holes() {
        let mut nodes = arena(&[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1000.0, 1000.0, 0.0),
            Vec3::new(10.0, 10.0, 0.0),
        ]);
        nodes.remove_node(petgraph::stable_graph::NodeIndex::new(1));

        let before = normalize(&mut nodes).unwrap();
        assert_eq!(before.max, Vec3::new(10.0, 10.0, 0.0));
    }
}
