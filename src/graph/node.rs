//! Node type and related structures.
//!
//! Nodes are the vertices returned by a graph query. Each node has:
//! - The identifier it carried in the source graph
//! - Position (x, y, z) in layout space
//! - Velocity (vx, vy, vz) accumulated during one simulation step
//! - The attribute bag copied from the source element (display only)

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::vector::Vec3;

/// Ordered string attributes carried through from the source graph.
pub type Attributes = IndexMap<String, String>;

/// Source-graph node identifier.
///
/// Node ids are the non-negative element ids of the query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl NodeId {
    /// Create a new NodeId from a raw element id.
    #[inline]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw i64 value.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl From<i64> for NodeId {
    #[inline]
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<NodeId> for i64 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// A node being laid out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(flatten)]
    pub position: Vec3,
    /// Force accumulated in the current step; zero between steps.
    #[serde(skip)]
    pub velocity: Vec3,
    pub attributes: Attributes,
}

impl Node {
    /// Create a node at rest at `position`.
    pub fn new(id: NodeId, position: Vec3, attributes: Attributes) -> Self {
        Self {
            id,
            position,
            velocity: Vec3::ZERO,
            attributes,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Look up a single attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Move by the damped velocity and come to rest.
    ///
    /// Returns the magnitude of the velocity before it was cleared.
    #[inline]
    pub fn advance(&mut self, damper: f64) -> f64 {
        let speed = self.velocity.length();
        self.position += self.velocity * damper;
        self.velocity = Vec3::ZERO;
        speed
    }
}
