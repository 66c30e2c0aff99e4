//! Fixed timestep simulation tick
//!
//! `tick` runs at 60 Hz and `countdown` at 1 Hz, both only while playing.

use super::collision::{clamp_to_bounds, push_away, reaches_goal, touches_enemy};
use super::state::{GamePhase, GameState, LossCause};
use crate::tuning::HitPolicy;

/// Movement intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let level = state.level();
    let tuning = &state.tuning;
    let speed = tuning.cat_speed;
    let bound = tuning.world_bound;
    let enemy_step = level.enemy_speed * tuning.enemy_step;
    let arrival = tuning.waypoint_arrival;
    let margin = tuning.collision_margin;
    let push = tuning.push_back;
    let policy = tuning.hit_policy;

    // Axes are independent, so diagonals move faster
    let mut cat = state.cat;
    if input.up {
        cat.z += speed;
    }
    if input.down {
        cat.z -= speed;
    }
    if input.left {
        cat.x -= speed;
    }
    if input.right {
        cat.x += speed;
    }
    cat = clamp_to_bounds(cat, bound);

    if reaches_goal(cat, state.goal, state.tuning.goal_radius) {
        state.score += state.tuning.win_bonus;
        state.phase = GamePhase::Won;
        log::info!(
            "{} cleared in {} ticks, score {}",
            level.name,
            state.time_ticks,
            state.score
        );
        return;
    }

    let mut hit_this_tick = false;
    for enemy in &mut state.enemies {
        if let Some(patrol) = enemy.patrol.as_mut() {
            enemy.pos = patrol.advance(enemy.pos, enemy_step, arrival);
        }

        if !touches_enemy(cat, enemy.pos, enemy.radius, margin) {
            continue;
        }

        cat = push_away(cat, enemy.pos, push);

        let costs_life = match policy {
            HitPolicy::PerEnemy => true,
            HitPolicy::SinglePerTick => !hit_this_tick,
        };
        hit_this_tick = true;

        if costs_life && state.lives > 0 {
            state.lives -= 1;
            log::debug!("Caught by {:?}, {} lives left", enemy.kind, state.lives);
            if state.lives == 0 {
                state.phase = GamePhase::Lost;
                state.loss_cause = Some(LossCause::Caught);
                log::info!("{} lost: out of lives", level.name);
            }
        }
    }

    // Push-back may leave the square
    state.cat = clamp_to_bounds(cat, bound);
}

/// One-second countdown step
pub fn countdown(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    if state.time_left <= 1 {
        state.time_left = 0;
        state.phase = GamePhase::Lost;
        state.loss_cause = Some(LossCause::TimeUp);
        log::info!("{} lost: time is up", state.level().name);
    } else {
        state.time_left -= 1;
    }
}
