//! Goal and enemy contact tests, plus the soft push-back response

use glam::Vec3;

use crate::planar_distance;

/// Goal contact uses full 3D distance, so the goal's height counts against
/// the cat (which stays on the floor)
#[inline]
pub fn reaches_goal(cat: Vec3, goal: Vec3, goal_radius: f32) -> bool {
    cat.distance(goal) < goal_radius
}

/// Enemy contact is planar: within the enemy radius plus a fixed margin
#[inline]
pub fn touches_enemy(cat: Vec3, enemy_pos: Vec3, enemy_radius: f32, margin: f32) -> bool {
    planar_distance(cat, enemy_pos) < enemy_radius + margin
}

/// Push `cat` away from `enemy_pos` by `factor` of their floor separation.
/// Soft response: repeated contact nudges the cat out over several ticks.
#[inline]
pub fn push_away(cat: Vec3, enemy_pos: Vec3, factor: f32) -> Vec3 {
    Vec3::new(
        cat.x + (cat.x - enemy_pos.x) * factor,
        cat.y,
        cat.z + (cat.z - enemy_pos.z) * factor,
    )
}

/// Clamp x and z into the square `[-bound, bound]`
#[inline]
pub fn clamp_to_bounds(pos: Vec3, bound: f32) -> Vec3 {
    Vec3::new(pos.x.clamp(-bound, bound), pos.y, pos.z.clamp(-bound, bound))
}
