//! Force kernels.
//!
//! Each kernel only accumulates into node velocities; positions are read, never
//! written, so kernel order affects rounding but not the physics. The engine
//! runs them as attraction, repulsion, gravity.
//!
//! Two bodies at exactly the same point have no defined direction between
//! them. Such pairs contribute nothing instead of spreading NaN through the
//! layout.
//!
//! Repulsion divides by the squared length as computed from the components,
//! not by the square of the rooted distance; the two can differ in the last
//! bit, and pinned layouts depend on this form.

use petgraph::visit::NodeIndexable;

use super::config::{Dimensions, LayoutConfig};
use crate::graph::{Edge, NodeArena, NodeIndex, Vec3};

#[inline]
fn active_axes(delta: Vec3, dimensions: Dimensions) -> Vec3 {
    if dimensions.is_2d() {
        delta.flattened()
    } else {
        delta
    }
}

/// Pull the endpoints of every stretched edge towards each other.
///
/// Edges shorter than the spring length exert no force; edges with a missing
/// endpoint are skipped.
pub fn apply_attraction(
    nodes: &mut NodeArena,
    edges: &[Edge],
    config: &LayoutConfig,
    dimensions: Dimensions,
) {
    for edge in edges {
        let Some((from, to)) = edge.endpoints() else {
            continue;
        };
        let (Some(a), Some(b)) = (nodes.node_weight(from), nodes.node_weight(to)) else {
            continue;
        };

        let delta = active_axes(b.position - a.position, dimensions);
        let distance = delta.length();
        if distance == 0.0 {
            continue;
        }

        let force = config.attraction * (distance - config.spring_length).max(0.0);
        let pull = delta / distance * force;

        nodes[from].velocity += pull;
        nodes[to].velocity -= pull;
    }
}

/// Push every unordered pair of nodes apart with an inverse-square force.
///
/// Walks every arena slot, so vacant slots left by removed nodes are skipped.
pub fn apply_repulsion(nodes: &mut NodeArena, config: &LayoutConfig, dimensions: Dimensions) {
    let bound = nodes.node_bound();

    for i in 0..bound {
        let a = NodeIndex::new(i);
        let Some(pa) = nodes.node_weight(a).map(|n| n.position) else {
            continue;
        };

        for j in (i + 1)..bound {
            let b = NodeIndex::new(j);
            let Some(pb) = nodes.node_weight(b).map(|n| n.position) else {
                continue;
            };

            let delta = active_axes(pa - pb, dimensions);
            let distance_sq = delta.length_squared();
            if distance_sq == 0.0 {
                continue;
            }

            let distance = distance_sq.sqrt();
            let force = config.repulsion / distance_sq;
            let push = delta / distance * force;

            nodes[a].velocity += push;
            nodes[b].velocity -= push;
        }
    }
}

/// Pull every node towards the origin, regardless of connectivity.
pub fn apply_gravity(nodes: &mut NodeArena, config: &LayoutConfig) {
    for node in nodes.node_weights_mut() {
        node.velocity -= node.position * config.gravity;
    }
}
