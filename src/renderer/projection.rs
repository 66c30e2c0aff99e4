//! 2.5D projection
//!
//! A cheap perspective divide: points further away (larger z) shrink toward
//! the screen center. The y axis only lifts things visually.

use glam::{Vec2, Vec3};

/// Eye distance in the perspective divide
pub const EYE_DISTANCE: f32 = 300.0;
/// Depth units to eye-distance units
pub const DEPTH_FACTOR: f32 = 30.0;
/// World units to screen pixels at scale 1
pub const PIXELS_PER_UNIT: f32 = 30.0;
/// Screen-space drop applied to everything (pixels)
pub const VERTICAL_OFFSET: f32 = 50.0;

/// Screen position plus depth-derived scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    pub scale: f32,
}

impl Projected {
    /// False at or behind the eye plane (z <= -10), where the divide breaks down
    pub fn is_visible(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0
    }
}

/// Project a world position onto a viewport of the given pixel size
pub fn project(pos: Vec3, viewport: Vec2) -> Projected {
    let scale = EYE_DISTANCE / (EYE_DISTANCE + pos.z * DEPTH_FACTOR);
    Projected {
        screen: Vec2::new(
            viewport.x / 2.0 + pos.x * PIXELS_PER_UNIT * scale,
            viewport.y / 2.0 - pos.y * PIXELS_PER_UNIT * scale + VERTICAL_OFFSET,
        ),
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Vec2 = Vec2::new(1200.0, 675.0);

    #[test]
    fn test_origin_maps_to_offset_center() {
        let p = project(Vec3::ZERO, VIEW);
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.screen, Vec2::new(600.0, 337.5 + VERTICAL_OFFSET));
    }

    #[test]
    fn test_depth_shrinks() {
        let near = project(Vec3::new(1.0, 0.0, -5.0), VIEW);
        let far = project(Vec3::new(1.0, 0.0, 5.0), VIEW);
        assert!((near.scale - 2.0).abs() < 1e-6);
        assert!((far.scale - 2.0 / 3.0).abs() < 1e-6);
        assert!(near.screen.x - 600.0 > far.screen.x - 600.0);
    }

    #[test]
    fn test_goal_projection() {
        // Goal at (0, 0.5, 3): scale 300/390
        let p = project(Vec3::new(0.0, 0.5, 3.0), VIEW);
        let scale = 300.0 / 390.0;
        assert!((p.scale - scale).abs() < 1e-6);
        assert!((p.screen.y - (337.5 - 15.0 * scale + 50.0)).abs() < 1e-4);
        assert!(p.is_visible());
    }

    #[test]
    fn test_height_moves_up() {
        let low = project(Vec3::new(0.0, 0.0, 0.0), VIEW);
        let high = project(Vec3::new(0.0, 1.0, 0.0), VIEW);
        assert!(high.screen.y < low.screen.y);
    }

    #[test]
    fn test_behind_eye_is_invisible() {
        assert!(!project(Vec3::new(0.0, 0.0, -10.0), VIEW).is_visible());
        assert!(!project(Vec3::new(0.0, 0.0, -12.0), VIEW).is_visible());
        assert!(project(Vec3::new(0.0, 0.0, -8.0), VIEW).is_visible());
    }

    #[test]
    fn test_deterministic() {
        let pos = Vec3::new(2.5, 0.3, -1.7);
        assert_eq!(project(pos, VIEW), project(pos, VIEW));
    }
}
