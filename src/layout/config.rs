//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Spring stiffness applied to edges longer than the rest length.
pub const ATTRACTION_CONSTANT: f64 = 0.1;
/// Inverse-square repulsion between every pair of nodes.
pub const REPULSION_CONSTANT: f64 = 100_000.0;
/// Edge length below which attraction is zero.
pub const SPRING_LENGTH: f64 = 100.0;
/// Pull of every node towards the origin.
pub const GRAVITY: f64 = 0.1;
/// Fraction of the accumulated velocity applied to positions each step.
pub const DAMPER: f64 = 0.5;
/// Hard cap on counted iterations.
pub const ITERATION_COUNT: u32 = 500;
/// Total per-step movement below which the simulation stops.
pub const MOVEMENT_THRESHOLD: f64 = 10.0;

/// Number of active axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dimensions {
    Two,
    #[default]
    Three,
}

impl Dimensions {
    #[inline]
    pub fn from_is_2d(is_2d: bool) -> Self {
        if is_2d { Self::Two } else { Self::Three }
    }

    #[inline]
    pub fn is_2d(self) -> bool {
        self == Self::Two
    }
}

/// Configuration for the force simulation.
///
/// The defaults reproduce the reference layout exactly; changing any field
/// changes the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Spring constant for edges (default: 0.1).
    pub attraction: f64,
    /// Pairwise repulsion constant (default: 100000.0).
    pub repulsion: f64,
    /// Edge rest length (default: 100.0).
    pub spring_length: f64,
    /// Centering pull (default: 0.1).
    pub gravity: f64,
    /// Velocity damping (default: 0.5).
    pub damper: f64,
    /// Maximum counted iterations (default: 500).
    pub max_iterations: u32,
    /// Stop once total movement in a step falls below this (default: 10.0).
    pub movement_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            attraction: ATTRACTION_CONSTANT,
            repulsion: REPULSION_CONSTANT,
            spring_length: SPRING_LENGTH,
            gravity: GRAVITY,
            damper: DAMPER,
            max_iterations: ITERATION_COUNT,
            movement_threshold: MOVEMENT_THRESHOLD,
        }
    }
}
