//! Input payload handed over by the query layer.
//!
//! A graph is a flat, ordered list of elements. The sign of an element's id
//! decides what it is: `id < 0` is an edge whose `from`/`to` reference other
//! elements' ids, `id >= 0` is a node.

use serde::Deserialize;

use super::node::Attributes;
use crate::error::Result;

/// One entry of a query result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphElement {
    pub id: i64,
    #[serde(default)]
    pub values: Attributes,
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub to: Option<i64>,
}

impl GraphElement {
    /// A node element.
    pub fn node(id: i64, values: Attributes) -> Self {
        Self {
            id,
            values,
            from: None,
            to: None,
        }
    }

    /// An edge element. `id` should be negative.
    pub fn edge(id: i64, from: i64, to: i64, values: Attributes) -> Self {
        Self {
            id,
            values,
            from: Some(from),
            to: Some(to),
        }
    }

    #[inline]
    pub fn is_edge(&self) -> bool {
        self.id < 0
    }
}

/// A query result ready to be laid out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "GraphPayload")]
pub struct Graph {
    pub elements: Vec<GraphElement>,
}

/// Accepted wire shapes: `{ "elements": [...] }` or a bare `[...]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum GraphPayload {
    Record { elements: Vec<GraphElement> },
    Elements(Vec<GraphElement>),
}

impl From<GraphPayload> for Graph {
    fn from(payload: GraphPayload) -> Self {
        match payload {
            GraphPayload::Record { elements } | GraphPayload::Elements(elements) => {
                Self { elements }
            }
        }
    }
}

impl Graph {
    pub fn new(elements: Vec<GraphElement>) -> Self {
        Self { elements }
    }

    /// Decode a graph from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Number of node elements.
    pub fn node_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.is_edge()).count()
    }

    /// Number of edge elements.
    pub fn edge_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_edge()).count()
    }
}

impl From<Vec<GraphElement>> for Graph {
    fn from(elements: Vec<GraphElement>) -> Self {
        Self::new(elements)
    }
}
