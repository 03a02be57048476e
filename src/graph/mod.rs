//! Graph data structures.
//!
//! Nodes live in petgraph's StableGraph, which doubles as the engine's node
//! arena: slots stay stable when nodes are removed, leaving holes that every
//! pairwise pass has to skip. Edges are kept in load order beside it and point
//! into the arena by index.

mod edge;
mod element;
mod node;
mod vector;

use petgraph::Directed;
use petgraph::stable_graph::StableGraph;

pub use edge::{Edge, EdgeId};
pub use element::{Graph, GraphElement};
pub use node::{Attributes, Node, NodeId};
pub use petgraph::stable_graph::NodeIndex;
pub use vector::Vec3;

/// Node storage. Edge weights are indices into the engine's edge list.
pub type NodeArena = StableGraph<Node, usize, Directed>;
