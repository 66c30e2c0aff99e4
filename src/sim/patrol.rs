//! Enemy patrol paths
//!
//! A patrol is a closed loop of floor waypoints. The enemy walks toward the
//! current waypoint at constant speed and moves on to the next one once it is
//! within the arrival distance, wrapping back to the first forever.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::floor_circle_point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrolPath {
    pub waypoints: Vec<Vec3>,
    /// Index of the waypoint currently being walked to
    pub index: usize,
}

impl PatrolPath {
    pub fn new(waypoints: Vec<Vec3>) -> Self {
        Self { waypoints, index: 0 }
    }

    /// `count` evenly spaced waypoints on a floor circle around the origin,
    /// starting at angle 0
    pub fn circle(radius: f32, count: usize) -> Self {
        let waypoints = (0..count)
            .map(|j| {
                let theta = j as f32 / count as f32 * std::f32::consts::TAU;
                floor_circle_point(radius, theta)
            })
            .collect();
        Self::new(waypoints)
    }

    pub fn target(&self) -> Option<Vec3> {
        self.waypoints.get(self.index).copied()
    }

    /// Advance one tick from `pos`. Returns the new position.
    ///
    /// Arrival bumps the index without moving; otherwise the enemy steps
    /// `step` units toward the target on the floor plane, never past it.
    pub fn advance(&mut self, pos: Vec3, step: f32, arrival: f32) -> Vec3 {
        let Some(target) = self.target() else {
            return pos;
        };

        let dx = target.x - pos.x;
        let dz = target.z - pos.z;
        let distance = (dx * dx + dz * dz).sqrt();

        if distance < arrival {
            self.index = (self.index + 1) % self.waypoints.len();
            return pos;
        }

        let travel = step.min(distance);
        Vec3::new(
            pos.x + dx / distance * travel,
            pos.y,
            pos.z + dz / distance * travel,
        )
    }
}
