//! Data-driven game balance
//!
//! Defaults reproduce the stock game. A host page may override any subset of
//! fields with a JSON document; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How many lives a single tick may cost when several enemies overlap the cat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPolicy {
    /// Every overlapping enemy costs a life
    #[default]
    PerEnemy,
    /// At most one life per tick, however many enemies overlap
    SinglePerTick,
}

/// Rendering toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Glow/drop shadows behind glyphs and the table
    pub shadows: bool,
    /// Collision rings around enemies and the cat
    pub collision_rings: bool,
    /// Disables the goal bobbing animation
    pub reduced_motion: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            shadows: true,
            collision_rings: true,
            reduced_motion: false,
        }
    }
}

/// Gameplay constants that can be overridden at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub cat_speed: f32,
    pub world_bound: f32,
    pub goal_radius: f32,
    pub win_bonus: u32,
    pub enemy_step: f32,
    pub waypoint_arrival: f32,
    pub collision_margin: f32,
    pub push_back: f32,
    pub hit_policy: HitPolicy,
    pub render: RenderOptions,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            cat_speed: CAT_SPEED,
            world_bound: WORLD_BOUND,
            goal_radius: GOAL_RADIUS,
            win_bonus: WIN_BONUS,
            enemy_step: ENEMY_STEP,
            waypoint_arrival: WAYPOINT_ARRIVAL,
            collision_margin: COLLISION_MARGIN,
            push_back: PUSH_BACK,
            hit_policy: HitPolicy::PerEnemy,
            render: RenderOptions::default(),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse, falling back to defaults on malformed input or out-of-range fields
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning.validated()
            }
            Err(e) => {
                log::warn!("Ignoring invalid tuning JSON: {}", e);
                Self::default()
            }
        }
    }

    /// Replace unusable values with their defaults. Distances, speeds and
    /// radii must be positive; margin and push-back must not be negative.
    pub fn validated(self) -> Self {
        Self {
            cat_speed: positive_or(self.cat_speed, CAT_SPEED, "cat_speed"),
            world_bound: positive_or(self.world_bound, WORLD_BOUND, "world_bound"),
            goal_radius: positive_or(self.goal_radius, GOAL_RADIUS, "goal_radius"),
            enemy_step: positive_or(self.enemy_step, ENEMY_STEP, "enemy_step"),
            waypoint_arrival: positive_or(
                self.waypoint_arrival,
                WAYPOINT_ARRIVAL,
                "waypoint_arrival",
            ),
            collision_margin: non_negative_or(
                self.collision_margin,
                COLLISION_MARGIN,
                "collision_margin",
            ),
            push_back: non_negative_or(self.push_back, PUSH_BACK, "push_back"),
            ..self
        }
    }

    /// DOM element id holding inline tuning JSON
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "tuning";

    /// Load tuning from an inline `<script id="tuning">` element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json_or_default(&json),
            _ => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Load tuning from an optional file path (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default tuning");
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

fn positive_or(value: f32, default: f32, name: &str) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Tuning {} = {} must be positive, using {}", name, value, default);
        default
    }
}

fn non_negative_or(value: f32, default: f32, name: &str) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("Tuning {} = {} must not be negative, using {}", name, value, default);
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState, TickInput, tick};

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.cat_speed, CAT_SPEED);
        assert_eq!(t.world_bound, WORLD_BOUND);
        assert_eq!(t.win_bonus, 100);
        assert_eq!(t.hit_policy, HitPolicy::PerEnemy);
        assert!(t.render.shadows);
    }

    #[test]
    fn test_partial_override() {
        let t = Tuning::from_json(r#"{ "cat_speed": 0.3, "hit_policy": "single_per_tick" }"#)
            .unwrap();
        assert_eq!(t.cat_speed, 0.3);
        assert_eq!(t.hit_policy, HitPolicy::SinglePerTick);
        // Untouched fields keep defaults
        assert_eq!(t.goal_radius, GOAL_RADIUS);
        assert!(t.render.collision_rings);
    }

    #[test]
    fn test_nested_render_override() {
        let t = Tuning::from_json(r#"{ "render": { "reduced_motion": true } }"#).unwrap();
        assert!(t.render.reduced_motion);
        assert!(t.render.shadows);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(Tuning::from_json("{ not json").is_err());
        let t = Tuning::from_json_or_default("{ not json");
        assert_eq!(t.push_back, PUSH_BACK);
    }

    #[test]
    fn test_negative_bound_falls_back_and_ticks() {
        let t = Tuning::from_json_or_default(r#"{ "world_bound": -1.0 }"#);
        assert_eq!(t.world_bound, WORLD_BOUND);

        let mut state = GameState::new(t);
        assert!(state.start_level(0));
        tick(&mut state, &TickInput { up: true, ..Default::default() });
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.cat.z > CAT_SPAWN.z);
    }

    #[test]
    fn test_validated_replaces_unusable_fields() {
        let t = Tuning {
            cat_speed: 0.0,
            goal_radius: -2.0,
            enemy_step: f32::NAN,
            waypoint_arrival: f32::INFINITY,
            collision_margin: -0.1,
            push_back: 0.0,
            win_bonus: 250,
            ..Tuning::default()
        }
        .validated();

        assert_eq!(t.cat_speed, CAT_SPEED);
        assert_eq!(t.goal_radius, GOAL_RADIUS);
        assert_eq!(t.enemy_step, ENEMY_STEP);
        assert_eq!(t.waypoint_arrival, WAYPOINT_ARRIVAL);
        assert_eq!(t.collision_margin, COLLISION_MARGIN);
        // Zero push-back is allowed, other fields pass through
        assert_eq!(t.push_back, 0.0);
        assert_eq!(t.win_bonus, 250);
        assert_eq!(t.world_bound, WORLD_BOUND);
    }
}
