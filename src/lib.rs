//! Cat Thief - a 2.5D arcade game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (movement, patrols, collisions, phases)
//! - `renderer`: Projection and Canvas 2D scene drawing
//! - `input`: Held-key tracking
//! - `clock`: Frame delta to tick/countdown conversion
//! - `tuning`: Data-driven game balance

pub mod clock;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use clock::{FrameClock, LoopControl};
pub use input::InputTracker;
pub use tuning::{HitPolicy, Tuning};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed into the clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Canvas size in logical pixels
    pub const CANVAS_WIDTH: f32 = 1200.0;
    pub const CANVAS_HEIGHT: f32 = 675.0;

    /// Character spawn and goal placement
    pub const CAT_SPAWN: Vec3 = Vec3::new(0.0, 0.0, -5.0);
    pub const GOAL_POSITION: Vec3 = Vec3::new(0.0, 0.5, 3.0);

    /// Character movement per tick, per held direction
    pub const CAT_SPEED: f32 = 0.15;
    /// Half-extent of the playable square on x and z
    pub const WORLD_BOUND: f32 = 8.0;
    /// Goal is reached when strictly closer than this
    pub const GOAL_RADIUS: f32 = 1.0;
    /// Score awarded for reaching the goal
    pub const WIN_BONUS: u32 = 100;

    /// Enemy step per tick is `level speed * ENEMY_STEP`
    pub const ENEMY_STEP: f32 = 0.02;
    /// Distance at which a waypoint counts as reached
    pub const WAYPOINT_ARRIVAL: f32 = 0.2;
    /// Added to enemy radius for hit detection
    pub const COLLISION_MARGIN: f32 = 0.5;
    /// Fraction of the separation vector applied as push-back
    pub const PUSH_BACK: f32 = 0.3;

    /// Enemy layout
    pub const SPAWN_RING_RADIUS: f32 = 4.0;
    pub const PATROL_BASE_RADIUS: f32 = 3.0;
    pub const PATROL_WAYPOINTS: usize = 8;
}

/// Distance on the floor plane (x, z), ignoring height
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

/// Point on a floor-plane circle of radius `r` at angle `theta`
#[inline]
pub fn floor_circle_point(r: f32, theta: f32) -> Vec3 {
    Vec3::new(r * theta.cos(), 0.0, r * theta.sin())
}
