//! Deterministic spiral seeding.
//!
//! Every node gets the next point on a widening spiral, in load order. Two
//! angles advance in lock step; the second one lifts the spiral off the
//! plane in 3D.

use super::config::Dimensions;
use crate::graph::Vec3;

const INITIAL_ANGLE: f64 = 0.1;
const ANGLE_STEP: f64 = 0.1;
const RADIUS_PER_RADIAN: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SpiralSeeder {
    angle1: f64,
    angle2: f64,
}

impl SpiralSeeder {
    pub fn new() -> Self {
        Self {
            angle1: INITIAL_ANGLE,
            angle2: INITIAL_ANGLE,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance both angles and return the next seed position.
    pub fn next_position(&mut self, dimensions: Dimensions) -> Vec3 {
        self.angle1 += ANGLE_STEP;
        self.angle2 += ANGLE_STEP;
        let distance = RADIUS_PER_RADIAN * self.angle1;

        match dimensions {
            Dimensions::Two => Vec3::new(
                self.angle1.cos() * distance,
                self.angle1.sin() * distance,
                0.0,
            ),
            Dimensions::Three => Vec3::new(
                self.angle1.cos() * distance,
                self.angle1.sin() * distance + self.angle2.cos() * distance,
                self.angle2.sin() * distance,
            ),
        }
    }

    pub fn angles(&self) -> (f64, f64) {
        (self.angle1, self.angle2)
    }
}

impl Default for SpiralSeeder {
    fn default() -> Self {
        Self::new()
    }
}
