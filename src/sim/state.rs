//! Game state and session transitions
//!
//! Everything the simulation and renderer read lives here. The host owns one
//! `GameState` and drives it through `tick`, `countdown` and the session
//! methods below.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::level::{LEVELS, Level};
use super::patrol::PatrolPath;
use crate::consts::*;
use crate::floor_circle_point;
use crate::tuning::Tuning;

/// Coarse game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level selection, nothing simulated
    Menu,
    /// Active gameplay
    Playing,
    /// Goal reached
    Won,
    /// Out of lives or out of time
    Lost,
}

/// Why the last level was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    Caught,
    TimeUp,
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Mouse,
    Dog,
    Guard,
    Bear,
}

impl EnemyKind {
    /// Kind of the `index`-th enemy in a level; everything past the third is a bear
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => EnemyKind::Mouse,
            1 => EnemyKind::Dog,
            2 => EnemyKind::Guard,
            _ => EnemyKind::Bear,
        }
    }

    /// Collision radius in world units
    pub fn radius(&self) -> f32 {
        match self {
            EnemyKind::Mouse => 0.8,
            EnemyKind::Dog => 1.2,
            EnemyKind::Guard => 1.0,
            EnemyKind::Bear => 1.5,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            EnemyKind::Mouse => "🐭",
            EnemyKind::Dog => "🐕",
            EnemyKind::Guard => "👮",
            EnemyKind::Bear => "🐻",
        }
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec3,
    /// Carried for completeness, never integrated
    pub vel: Vec3,
    pub kind: EnemyKind,
    pub radius: f32,
    pub patrol: Option<PatrolPath>,
}

impl Enemy {
    /// Enemy `index` of `count`: starts on the spawn ring, patrols a circle of
    /// radius `PATROL_BASE_RADIUS + index`
    pub fn spawn(index: usize, count: usize) -> Self {
        let kind = EnemyKind::for_index(index);
        let angle = index as f32 / count as f32 * std::f32::consts::TAU;
        Self {
            pos: floor_circle_point(SPAWN_RING_RADIUS, angle),
            vel: Vec3::ZERO,
            kind,
            radius: kind.radius(),
            patrol: Some(PatrolPath::circle(
                PATROL_BASE_RADIUS + index as f32,
                PATROL_WAYPOINTS,
            )),
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Selected (menu) or active level, index into `LEVELS`
    pub level_index: usize,
    /// Character position; y stays 0
    pub cat: Vec3,
    pub goal: Vec3,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub lives: u32,
    /// Whole seconds remaining
    pub time_left: u32,
    /// Simulation ticks since the level started
    pub time_ticks: u64,
    #[serde(default)]
    pub loss_cause: Option<LossCause>,
    #[serde(default)]
    pub tuning: Tuning,
}

impl GameState {
    /// Fresh session sitting in the menu with the first level selected
    pub fn new(tuning: Tuning) -> Self {
        let first = &LEVELS[0];
        Self {
            phase: GamePhase::Menu,
            level_index: 0,
            cat: CAT_SPAWN,
            goal: GOAL_POSITION,
            enemies: Vec::new(),
            score: 0,
            lives: first.lives,
            time_left: first.time_limit,
            time_ticks: 0,
            loss_cause: None,
            tuning,
        }
    }

    /// The selected or active level
    pub fn level(&self) -> &'static Level {
        &LEVELS[self.level_index.min(LEVELS.len() - 1)]
    }

    pub fn has_next_level(&self) -> bool {
        self.level_index + 1 < LEVELS.len()
    }

    /// Begin level `index`. Returns false (and changes nothing) when the
    /// index is outside the catalog.
    pub fn start_level(&mut self, index: usize) -> bool {
        let Some(level) = LEVELS.get(index) else {
            log::warn!("No level at index {}", index);
            return false;
        };

        self.level_index = index;
        self.cat = CAT_SPAWN;
        self.goal = GOAL_POSITION;
        self.lives = level.lives;
        self.time_left = level.time_limit;
        self.score = 0;
        self.time_ticks = 0;
        self.loss_cause = None;
        self.enemies = (0..level.enemies)
            .map(|i| Enemy::spawn(i, level.enemies))
            .collect();
        self.phase = GamePhase::Playing;

        log::info!(
            "{} started: {} enemies at speed {}, {} lives, {}s",
            level.name,
            level.enemies,
            level.enemy_speed,
            level.lives,
            level.time_limit
        );
        true
    }

    /// Replay the current level
    pub fn retry(&mut self) -> bool {
        self.start_level(self.level_index)
    }

    /// Move on after a win. Only valid from `Won` with a level remaining.
    pub fn next_level(&mut self) -> bool {
        if self.phase != GamePhase::Won || !self.has_next_level() {
            return false;
        }
        self.start_level(self.level_index + 1)
    }

    /// Abandon the level and go back to level selection
    pub fn return_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
        self.score = 0;
        self.enemies.clear();
        self.loss_cause = None;
    }

    /// Move the menu selection by `delta`, clamped to the catalog
    pub fn select_level(&mut self, delta: i32) {
        if self.phase != GamePhase::Menu {
            return;
        }
        let max = LEVELS.len() as i64 - 1;
        let next = (self.level_index as i64 + delta as i64).clamp(0, max);
        self.level_index = next as usize;
    }
}
