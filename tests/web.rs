//! Browser-side checks of the JavaScript surface.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use graph_layout_wasm::{ForceLayoutWasm, init};
use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const GRAPH: &str = r#"{
    "elements": [
        { "id": 1, "values": { "name": "marko" } },
        { "id": 42, "values": { "name": "vadas" } },
        { "id": 118, "values": { "name": "lop" } },
        { "id": -1, "from": 1, "to": 42 },
        { "id": -2, "from": 42, "to": 118 },
        { "id": -3, "from": 118, "to": 99 }
    ]
}"#;

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn load_and_simulate() {
    let mut layout = ForceLayoutWasm::new(true);
    layout.load_json(GRAPH).unwrap();
    layout.simulate();

    assert_eq!(layout.node_count(), 3);
    assert_eq!(layout.edge_count(), 3);
    assert!(layout.get_iterations() >= 1);
    assert!(layout.get_performance() >= 0.0);
    assert_eq!(layout.get_positions().length(), 9);
}

#[wasm_bindgen_test]
fn nodes_and_edges_are_plain_objects() {
    let mut layout = ForceLayoutWasm::new(false);
    layout.load_json(GRAPH).unwrap();
    layout.simulate();

    let nodes = Array::from(&layout.get_nodes().unwrap());
    assert_eq!(nodes.length(), 3);
    let first = nodes.get(0);
    assert_eq!(get(&first, "id").as_f64(), Some(1.0));
    assert!(get(&first, "x").as_f64().is_some());
    assert_eq!(get(&get(&first, "attributes"), "name").as_string().as_deref(), Some("marko"));

    let edges = Array::from(&layout.get_edges().unwrap());
    let dangling = edges.get(2);
    assert_eq!(get(&dangling, "from").as_f64(), Some(118.0));
    assert!(get(&dangling, "to").is_null());
}

#[wasm_bindgen_test]
fn find_node_and_neighbors() {
    let mut layout = ForceLayoutWasm::new(true);
    layout.load_json(GRAPH).unwrap();

    assert!(layout.find_node(7.0).unwrap().is_undefined());
    assert_eq!(get(&layout.find_node(42.0).unwrap(), "id").as_f64(), Some(42.0));
    assert_eq!(layout.get_neighbors(42.0), vec![1.0, 118.0]);

    assert!(layout.remove_node(42.0));
    assert_eq!(layout.node_count(), 2);
    assert!(layout.get_neighbors(1.0).is_empty());
}

#[wasm_bindgen_test]
fn config_and_errors() {
    let config = js_sys::JSON::parse(r#"{ "maxIterations": 2 }"#).unwrap();
    let mut layout = ForceLayoutWasm::with_config(true, config).unwrap();
    layout.load_json(GRAPH).unwrap();
    layout.simulate();
    assert_eq!(layout.get_iterations(), 2);

    assert!(layout.load_json("{ not json").is_err());
    assert!(ForceLayoutWasm::with_config(true, JsValue::UNDEFINED).is_ok());
}

#[wasm_bindgen_test]
fn init_twice_keeps_logger() {
    init();
    init();

    let mut layout = ForceLayoutWasm::new(true);
    layout.load_json(GRAPH).unwrap();
    layout.simulate();
    assert_eq!(layout.node_count(), 3);
}
