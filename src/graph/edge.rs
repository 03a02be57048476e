//! Edge type and related structures.
//!
//! Edges are the relationships returned by a graph query. Each edge has:
//! - The (negative) identifier it carried in the source graph
//! - Source and target slots in the engine's node arena, absent when the
//!   endpoint could not be resolved
//! - The attribute bag copied from the source element

use std::fmt;

use petgraph::stable_graph::NodeIndex;

use super::node::Attributes;

/// Source-graph edge identifier.
///
/// Edge ids are the negative element ids of the query result and are kept
/// exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub i64);

impl EdgeId {
    /// Create a new EdgeId from a raw element id.
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

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({})", self.0)
    }
}

impl From<i64> for EdgeId {
    #[inline]
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EdgeId> for i64 {
    #[inline]
    fn from(id: EdgeId) -> Self {
        id.0
    }
}

/// An edge between two arena slots.
///
/// Endpoints are non-owning: they index the engine's node arena and are
/// cleared when the node they point at goes away.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: Option<NodeIndex>,
    pub to: Option<NodeIndex>,
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(
        id: EdgeId,
        from: Option<NodeIndex>,
        to: Option<NodeIndex>,
        attributes: Attributes,
    ) -> Self {
        Self {
            id,
            from,
            to,
            attributes,
        }
    }

    /// Both endpoints, if both resolved.
    #[inline]
    pub fn endpoints(&self) -> Option<(NodeIndex, NodeIndex)> {
        Some((self.from?, self.to?))
    }

    /// True when at least one endpoint is absent. Degenerate edges exert no force.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.endpoints().is_none()
    }

    /// Whether either endpoint refers to `index`.
    #[inline]
    pub fn touches(&self, index: NodeIndex) -> bool {
        self.from == Some(index) || self.to == Some(index)
    }

    /// Drop any endpoint that refers to `index`.
    pub fn detach(&mut self, index: NodeIndex) {
        if self.from == Some(index) {
            self.from = None;
        }
        if self.to == Some(index) {
            self.to = None;
        }
    }

    /// Look up a single attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(-42);
        assert_eq!(id.raw(), -42);
        assert_eq!(format!("{}", id), "Edge(-42)");
    }

    #[test]
    fn test_endpoints() {
        let a = NodeIndex::new(0);
        let b = NodeIndex::new(1);

        let edge = Edge::new(EdgeId(-1), Some(a), Some(b), Attributes::new());
        assert_eq!(edge.endpoints(), Some((a, b)));
        assert!(!edge.is_degenerate());

        let dangling = Edge::new(EdgeId(-2), Some(a), None, Attributes::new());
        assert_eq!(dangling.endpoints(), None);
        assert!(dangling.is_degenerate());
    }

    #[test]
    fn test_detach() {
        let a = NodeIndex::new(0);
        let b = NodeIndex::new(1);
        let mut edge = Edge::new(EdgeId(-1), Some(a), Some(b), Attributes::new());

        assert!(edge.touches(b));
        edge.detach(b);
        assert_eq!(edge.from, Some(a));
        assert_eq!(edge.to, None);
        assert!(edge.is_degenerate());
        assert!(!edge.touches(b));
    }

    #[test]
    fn test_attribute_lookup() {
        let mut attributes = Attributes::new();
        attributes.insert("label".to_string(), "knows".to_string());
        let edge = Edge::new(EdgeId(-3), None, None, attributes);

        assert_eq!(edge.attribute("label"), Some("knows"));
        assert_eq!(edge.attribute("weight"), None);
    }
}
