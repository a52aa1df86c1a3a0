//! Banana flight
//!
//! Positions are evaluated in closed form from the launch parameters and the
//! total elapsed time, never integrated, so a flight is independent of how
//! finely it is stepped.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::state::PlayerId;
use crate::consts::*;
use crate::{deg_to_rad, wrap_degrees};

/// Banana spin in degrees per simulated second
const SPIN_RATE: f32 = 100.0;

/// A banana in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Instantaneous velocity (screen space, +y is down)
    pub vel: Vec2,
    /// Launch angle in radians, already mirrored for player 2
    pub angle: f32,
    pub start: Vec2,
    /// Initial velocity with +y pointing up
    pub init_vel: Vec2,
    /// Elapsed flight time (simulated seconds)
    pub time: f32,
    pub thrower: PlayerId,
}

impl Projectile {
    /// Closed-form position at flight time `t`
    pub fn position_at(&self, wind: i32, t: f32) -> Vec2 {
        let drift = wind as f32 / WIND_DIVISOR;
        Vec2::new(
            self.start.x + self.init_vel.x * t + 0.5 * drift * t * t,
            self.start.y + (-self.init_vel.y * t + 0.5 * GRAVITY * t * t) * GRAVITY_SCALE,
        )
    }

    /// Closed-form velocity at flight time `t`
    pub fn velocity_at(&self, wind: i32, t: f32) -> Vec2 {
        Vec2::new(
            self.init_vel.x + wind as f32 / WIND_DIVISOR * t,
            vertical_velocity_at(self.init_vel.y, t),
        )
    }

    /// Current vertical velocity, positive when falling
    pub fn vertical_velocity(&self) -> f32 {
        vertical_velocity_at(self.init_vel.y, self.time)
    }

    pub fn is_descending(&self) -> bool {
        self.vertical_velocity() > 0.0
    }

    /// Sprite rotation in degrees; purely cosmetic
    pub fn rotation(&self) -> f32 {
        wrap_degrees(SPIN_RATE * self.time)
    }
}

fn vertical_velocity_at(init_vy: f32, t: f32) -> f32 {
    -init_vy + GRAVITY * t * GRAVITY_SCALE
}

/// Where the throwing hand releases the banana
pub fn launch_point(avatar: &Avatar) -> Vec2 {
    let hand = match avatar.player {
        PlayerId::One => THROW_OFFSET_P1,
        PlayerId::Two => THROW_OFFSET_P2,
    };
    Vec2::new(avatar.pos.x + hand, avatar.pos.y - THROW_LIFT)
}

/// Player 2 throws toward decreasing x, so its angle is mirrored
pub fn launch_angle(angle_degrees: f32, player: PlayerId) -> f32 {
    let radians = deg_to_rad(angle_degrees);
    match player {
        PlayerId::One => radians,
        PlayerId::Two => PI - radians,
    }
}

/// Release a banana from `avatar`
pub fn create_projectile(avatar: &Avatar, angle_degrees: f32, velocity: f32) -> Projectile {
    let start = launch_point(avatar);
    let angle = launch_angle(angle_degrees, avatar.player);
    let init_vel = Vec2::new(angle.cos() * velocity, angle.sin() * velocity);

    Projectile {
        pos: start,
        vel: Vec2::new(init_vel.x, -init_vel.y),
        angle,
        start,
        init_vel,
        time: 0.0,
        thrower: avatar.player,
    }
}

/// Move the banana forward by `dt` simulated seconds
pub fn advance(projectile: &Projectile, wind: i32, dt: f32) -> Projectile {
    let t = projectile.time + dt;
    Projectile {
        pos: projectile.position_at(wind, t),
        vel: projectile.velocity_at(wind, t),
        time: t,
        ..*projectile
    }
}
