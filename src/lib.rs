//! Graph Layout - WASM Module
//!
//! This module computes force-directed layouts for graph query results and
//! exposes them to JavaScript via wasm-bindgen. The query layer hands over a
//! flat element list; the renderer gets nodes and edges back with normalized
//! 2D or 3D coordinates.
//!
//! # Architecture
//!
//! - `graph`: Nodes, edges and the input payload; nodes live in petgraph's StableGraph
//! - `layout`: Spiral seeding, force kernels, normalization and the `ForceLayout` engine
//! - `clock`: Millisecond timer for run diagnostics on wasm32 and native
//! - `error`: Errors at the JavaScript boundary

use js_sys::Float64Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod clock;
pub mod error;
pub mod graph;
pub mod layout;

use error::GraphError;
use graph::{Attributes, Graph, NodeId};
use layout::{Dimensions, ForceLayout, LayoutConfig};

/// Initialize the WASM module: panic messages and `log` output go to the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed; that logger stays in use.
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("console logger not installed: {}", err);
    }
}

/// Edge as handed to the renderer: endpoints are node ids, or null when absent.
#[derive(Serialize)]
struct EdgeView<'a> {
    id: i64,
    from: Option<i64>,
    to: Option<i64>,
    attributes: &'a Attributes,
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, GraphError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| GraphError::Encode(err.to_string()))
}

/// Node id from a JS number. Only integers in the safe range name a node;
/// NaN, infinities and fractions name none.
fn node_id_from_js(id: f64) -> Option<NodeId> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    (id.fract() == 0.0 && id.abs() <= MAX_SAFE_INTEGER).then(|| NodeId(id as i64))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, GraphError> {
    serde_wasm_bindgen::from_value(value).map_err(|err| GraphError::Payload(err.to_string()))
}

/// Main entry point for the layout engine.
///
/// This struct wraps the internal ForceLayout and provides the public API
/// exposed to JavaScript. Ids cross the boundary as JS numbers.
#[wasm_bindgen]
pub struct ForceLayoutWasm {
    engine: ForceLayout,
}

#[wasm_bindgen]
impl ForceLayoutWasm {
    /// Create an engine with the default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new(is_2d: bool) -> Self {
        Self {
            engine: ForceLayout::new(Dimensions::from_is_2d(is_2d)),
        }
    }

    /// Create an engine with custom parameters.
    ///
    /// `config` is a partial `LayoutConfig` in camelCase; missing fields keep
    /// their defaults. `undefined`/`null` means all defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(is_2d: bool, config: JsValue) -> Result<ForceLayoutWasm, JsValue> {
        let config: LayoutConfig = if config.is_undefined() || config.is_null() {
            LayoutConfig::default()
        } else {
            from_js(config)?
        };
        Ok(Self {
            engine: ForceLayout::with_config(Dimensions::from_is_2d(is_2d), config),
        })
    }

    #[wasm_bindgen(js_name = is2d)]
    pub fn is_2d(&self) -> bool {
        self.engine.is_2d()
    }

    // =========================================================================
    // Loading and Simulation
    // =========================================================================

    /// Load a graph: `{ elements: [...] }` or a bare element array.
    pub fn load(&mut self, graph: JsValue) -> Result<(), JsValue> {
        let graph: Graph = from_js(graph)?;
        self.engine.load(&graph);
        Ok(())
    }

    /// Load a graph from JSON text.
    #[wasm_bindgen(js_name = loadJson)]
    pub fn load_json(&mut self, text: &str) -> Result<(), JsValue> {
        let graph = Graph::from_json(text)?;
        self.engine.load(&graph);
        Ok(())
    }

    /// Run the simulation to rest and normalize the layout.
    pub fn simulate(&mut self) {
        self.engine.simulate();
    }

    /// Iterations counted by the last simulation.
    #[wasm_bindgen(js_name = getIterations)]
    pub fn get_iterations(&self) -> u32 {
        self.engine.iterations()
    }

    /// Duration of the last simulation in milliseconds.
    #[wasm_bindgen(js_name = getPerformance)]
    pub fn get_performance(&self) -> f64 {
        self.engine.performance()
    }

    // =========================================================================
    // Results
    // =========================================================================

    /// Nodes as `[{ id, x, y, z, attributes }, ...]` in load order.
    #[wasm_bindgen(js_name = getNodes)]
    pub fn get_nodes(&self) -> Result<JsValue, JsValue> {
        let nodes: Vec<_> = self.engine.nodes().collect();
        Ok(to_js(&nodes)?)
    }

    /// Edges as `[{ id, from, to, attributes }, ...]` in load order.
    #[wasm_bindgen(js_name = getEdges)]
    pub fn get_edges(&self) -> Result<JsValue, JsValue> {
        let edges: Vec<_> = self
            .engine
            .edges()
            .iter()
            .map(|edge| {
                let (from, to) = self.engine.edge_endpoints(edge);
                EdgeView {
                    id: edge.id.raw(),
                    from: from.map(|n| n.id.raw()),
                    to: to.map(|n| n.id.raw()),
                    attributes: &edge.attributes,
                }
            })
            .collect();
        Ok(to_js(&edges)?)
    }

    /// A single node, or undefined. Non-integral ids match nothing.
    #[wasm_bindgen(js_name = findNode)]
    pub fn find_node(&self, id: f64) -> Result<JsValue, JsValue> {
        match node_id_from_js(id).and_then(|id| self.engine.find_node(id)) {
            Some(node) => Ok(to_js(node)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Positions as a Float64Array `[x0, y0, z0, x1, y1, z1, ...]`.
    #[wasm_bindgen(js_name = getPositions)]
    pub fn get_positions(&self) -> Float64Array {
        Float64Array::from(&self.engine.positions()[..])
    }

    /// Returns [min_x, min_y, min_z, max_x, max_y, max_z], or None if the graph is empty.
    #[wasm_bindgen(js_name = getBounds)]
    pub fn get_bounds(&self) -> Option<Vec<f64>> {
        self.engine.bounds().map(|bounds| bounds.to_vec())
    }

    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> u32 {
        self.engine.node_count() as u32
    }

    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> u32 {
        self.engine.edge_count() as u32
    }

    /// Ids of nodes joined to `id` by an edge; empty for non-integral ids.
    #[wasm_bindgen(js_name = getNeighbors)]
    pub fn get_neighbors(&self, id: f64) -> Vec<f64> {
        node_id_from_js(id)
            .map(|id| self.engine.neighbors(id))
            .unwrap_or_default()
            .into_iter()
            .map(|n| n.raw() as f64)
            .collect()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Remove a node; edges touching it lose that endpoint.
    ///
    /// Returns true if the node existed and was removed. Non-integral ids
    /// remove nothing.
    #[wasm_bindgen(js_name = removeNode)]
    pub fn remove_node(&mut self, id: f64) -> bool {
        node_id_from_js(id).is_some_and(|id| self.engine.remove_node(id))
    }

    /// Clear all nodes and edges.
    pub fn clear(&mut self) {
        self.engine.clear();
    }
}
