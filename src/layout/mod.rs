//! Force-directed layout.
//!
//! Spring attraction along edges, inverse-square repulsion between every pair
//! of nodes and a centering gravity, iterated until the layout settles, then
//! rescaled into a unit box around the origin.

pub mod config;
pub mod engine;
pub mod forces;
pub mod normalize;
pub mod seed;

pub use config::{Dimensions, LayoutConfig};
pub use engine::ForceLayout;
pub use normalize::BoundingBox;
pub use seed::SpiralSeeder;
