//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in world space (pixels). y grows downward, matching screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// 2D velocity in world space (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Axis-aligned world-space rectangle, typically the visible screen area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.to_vec2().distance(other.to_vec2())
    }

    /// Squared distance to another position (no sqrt, for nearest-of comparisons).
    pub fn distance_sq_to(&self, other: &Position) -> f32 {
        self.to_vec2().distance_squared(other.to_vec2())
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f32 {
        self.to_vec2().length()
    }

    /// Heading in radians, measured from +x toward +y.
    pub fn heading(&self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl From<Vec2> for Velocity {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }

    /// Elapsed game time in minutes (the unit wave windows are keyed in).
    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed_secs / 60.0
    }
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }
}
