//! ForceLayout - the force-directed layout engine.
//!
//! The engine owns one graph at a time: nodes in a StableGraph arena, edges in
//! load order pointing into it. `load` seeds every node on a spiral, `simulate`
//! runs the solver to rest (or to the iteration cap) and normalizes the result.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::visit::{EdgeRef, NodeIndexable};

use super::config::{Dimensions, LayoutConfig};
use super::forces;
use super::normalize::{self, BoundingBox};
use super::seed::SpiralSeeder;
use crate::clock;
use crate::graph::{Edge, EdgeId, Graph, GraphElement, Node, NodeArena, NodeId, NodeIndex};

/// The layout engine.
///
/// This struct manages:
/// - The node arena and the id → slot map
/// - The edge list with arena references
/// - Spiral seeding state
/// - Run diagnostics (iterations, timing)
pub struct ForceLayout {
    config: LayoutConfig,

    dimensions: Dimensions,

    /// Node arena. Petgraph edges mirror the resolved entries of `edges`.
    nodes: NodeArena,

    /// Map from source node id to arena slot
    node_id_to_index: HashMap<NodeId, NodeIndex>,

    /// Edges in load order
    edges: Vec<Edge>,

    seeder: SpiralSeeder,

    iterations: u32,

    start_time: f64,

    end_time: f64,
}

impl ForceLayout {
    /// Create an empty engine with the default parameters.
    pub fn new(dimensions: Dimensions) -> Self {
        Self::with_config(dimensions, LayoutConfig::default())
    }

    /// Create an empty engine with custom parameters.
    pub fn with_config(dimensions: Dimensions, config: LayoutConfig) -> Self {
        Self {
            config,
            dimensions,
            nodes: NodeArena::default(),
            node_id_to_index: HashMap::new(),
            edges: Vec::new(),
            seeder: SpiralSeeder::new(),
            iterations: 0,
            start_time: 0.0,
            end_time: 0.0,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn is_2d(&self) -> bool {
        self.dimensions.is_2d()
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replace the current graph with `graph`.
    ///
    /// Elements are read in order. Nodes are seeded as they appear; an edge
    /// only resolves endpoints that were loaded before it; anything else
    /// becomes an absent endpoint.
    pub fn load(&mut self, graph: &Graph) {
        self.clear();

        for element in &graph.elements {
            if element.is_edge() {
                self.push_edge(element);
            } else {
                self.push_node(element);
            }
        }

        let degenerate = self.edges.iter().filter(|e| e.is_degenerate()).count();
        log::debug!(
            "loaded {} nodes, {} edges ({} degenerate)",
            self.nodes.node_count(),
            self.edges.len(),
            degenerate
        );
    }

    fn push_node(&mut self, element: &GraphElement) {
        let id = NodeId(element.id);
        let position = self.seeder.next_position(self.dimensions);
        let index = self
            .nodes
            .add_node(Node::new(id, position, element.values.clone()));

        // First occurrence wins, like a front-to-back scan.
        self.node_id_to_index.entry(id).or_insert(index);
    }

    fn push_edge(&mut self, element: &GraphElement) {
        let id = EdgeId(element.id);
        let from = element.from.and_then(|raw| self.node_index(NodeId(raw)));
        let to = element.to.and_then(|raw| self.node_index(NodeId(raw)));

        let edge = Edge::new(id, from, to, element.values.clone());
        match edge.endpoints() {
            Some((source, target)) => {
                self.nodes.add_edge(source, target, self.edges.len());
            }
            None => log::trace!(
                "{} is degenerate: from={:?} to={:?}",
                id,
                element.from,
                element.to
            ),
        }
        self.edges.push(edge);
    }

    /// Drop the graph and all run diagnostics.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_id_to_index.clear();
        self.edges.clear();
        self.seeder.reset();
        self.iterations = 0;
        self.start_time = 0.0;
        self.end_time = 0.0;
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Run the solver until total movement in a step drops below the
    /// threshold or the iteration cap is reached, then normalize.
    ///
    /// The first step always runs. `iterations` counts the steps after which
    /// the loop decided to continue.
    pub fn simulate(&mut self) {
        self.start_time = clock::now_ms();
        self.iterations = 0;

        loop {
            let movement = self.step();
            if movement >= self.config.movement_threshold
                && self.iterations < self.config.max_iterations
            {
                self.iterations += 1;
            } else {
                if movement >= self.config.movement_threshold {
                    log::warn!(
                        "layout stopped at the iteration cap ({}) while still moving ({:.3})",
                        self.config.max_iterations,
                        movement
                    );
                }
                break;
            }
        }

        normalize::normalize(&mut self.nodes);

        self.end_time = clock::now_ms();
        log::debug!(
            "layout of {} nodes finished after {} iterations in {:.2} ms",
            self.nodes.node_count(),
            self.iterations,
            self.performance()
        );
    }

    /// One solver step. Returns the summed speed of all nodes before damping.
    fn step(&mut self) -> f64 {
        forces::apply_attraction(&mut self.nodes, &self.edges, &self.config, self.dimensions);
        forces::apply_repulsion(&mut self.nodes, &self.config, self.dimensions);
        forces::apply_gravity(&mut self.nodes, &self.config);

        let damper = self.config.damper;
        self.nodes
            .node_weights_mut()
            .map(|node| node.advance(damper))
            .sum()
    }

    /// Iterations counted by the last `simulate`.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Wall-clock duration of the last `simulate`, in milliseconds.
    pub fn performance(&self) -> f64 {
        self.end_time - self.start_time
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Present nodes in load order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.node_weights()
    }

    /// Edges in load order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Upper bound on arena slots (max index + 1).
    /// May be larger than node_count() once nodes have been removed.
    pub fn node_bound(&self) -> usize {
        self.nodes.node_bound()
    }

    /// Arena slot of the node with `id`.
    pub fn node_index(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_id_to_index.get(&id).copied()
    }

    /// Node at an arena slot.
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.node_weight(index)
    }

    pub fn find_node(&self, id: NodeId) -> Option<&Node> {
        self.node_index(id).and_then(|index| self.node(index))
    }

    /// Resolve an edge's endpoints against the arena.
    pub fn edge_endpoints(&self, edge: &Edge) -> (Option<&Node>, Option<&Node>) {
        (
            edge.from.and_then(|index| self.node(index)),
            edge.to.and_then(|index| self.node(index)),
        )
    }

    /// Ids of nodes joined to `id` by a resolved edge, in either direction.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let Some(index) = self.node_index(id) else {
            return Vec::new();
        };

        let mut neighbors: Vec<NodeId> = self
            .nodes
            .edges_directed(index, Direction::Outgoing)
            .map(|e| e.target())
            .chain(
                self.nodes
                    .edges_directed(index, Direction::Incoming)
                    .map(|e| e.source()),
            )
            .filter_map(|n| self.nodes.node_weight(n).map(|node| node.id))
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Current bounds of the present nodes.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::of(&self.nodes)
    }

    /// Positions as `[x0, y0, z0, x1, y1, z1, ...]` in node order.
    pub fn positions(&self) -> Vec<f64> {
        self.nodes().flat_map(|n| n.position.to_array()).collect()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Remove a node, leaving a hole in the arena.
    ///
    /// Edges that referenced it lose that endpoint and become degenerate.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(index) = self.node_id_to_index.remove(&id) else {
            return false;
        };

        for edge in self.edges.iter_mut().filter(|e| e.touches(index)) {
            edge.detach(index);
        }
        let removed = self.nodes.remove_node(index).is_some();

        // A later node sharing the id takes over the lookup.
        if let Some(next) = self
            .nodes
            .node_indices()
            .find(|&i| self.nodes[i].id == id)
        {
            self.node_id_to_index.insert(id, next);
        }
        removed
    }
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}
