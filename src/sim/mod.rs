//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only
//! - Stable iteration order (enemies in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod patrol;
pub mod state;
pub mod tick;

pub use collision::{clamp_to_bounds, push_away, reaches_goal, touches_enemy};
pub use level::{LEVELS, Level};
pub use patrol::PatrolPath;
pub use state::{Enemy, EnemyKind, GamePhase, GameState, LossCause};
pub use tick::{TickInput, countdown, tick};
