//! Camera/viewport abstraction used for edge-of-screen spawn placement.

use glam::Vec2;

use horde_core::types::Bounds;

/// Provides world-space visible bounds.
pub trait Viewport {
    /// Visible bounds grown outward by `margin` on every side.
    fn visible_bounds(&self, margin: f32) -> Bounds;
}

/// A fixed-size viewport centered on a point (the player, for a follow camera).
#[derive(Debug, Clone, Copy)]
pub struct CenteredViewport {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Viewport for CenteredViewport {
    fn visible_bounds(&self, margin: f32) -> Bounds {
        Bounds {
            left: self.center.x - self.half_extents.x - margin,
            right: self.center.x + self.half_extents.x + margin,
            top: self.center.y - self.half_extents.y - margin,
            bottom: self.center.y + self.half_extents.y + margin,
        }
    }
}
