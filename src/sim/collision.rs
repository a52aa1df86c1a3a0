//! Per-tick hit classification for a banana in flight
//!
//! Checks run in a fixed priority order and the first match wins:
//! ground, above the screen, side edges, sun, then sampled points against
//! the opponent and the (damaged) skyline.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::city::City;
use super::geom::point_in_circle;
use super::state::PlayerId;
use super::trajectory::Projectile;
use crate::consts::*;

/// Horizontal step between sampled points
const LOOK_STEP: i32 = 4;
/// Sampling continues only while the offset sits on this value
const LOOK_CONTINUE: i32 = 4;
/// Vertical distance between the two sample rows
const LOOK_DROP: f32 = 6.0;
const MAX_SAMPLES: usize = 2;

/// What a banana struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    Avatar(PlayerId),
    Terrain,
    Sun,
}

/// Outcome of one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// Whether the throw ended on this tick
    pub hit: bool,
    /// `None` with `hit` set means the banana left the playfield
    pub target: Option<HitTarget>,
    /// Banana position on the tick it ended
    pub hit_pos: Option<Vec2>,
}

impl StepResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            target: None,
            hit_pos: None,
        }
    }

    pub fn hit(target: Option<HitTarget>, pos: Vec2) -> Self {
        Self {
            hit: true,
            target,
            hit_pos: Some(pos),
        }
    }

    /// Terrain and avatar hits leave a crater
    pub fn explodes(&self) -> bool {
        matches!(
            self.target,
            Some(HitTarget::Terrain) | Some(HitTarget::Avatar(_))
        )
    }
}

/// Offsets sampled around the banana, in sampling order
///
/// Player 1 starts 8 ahead and steps back by 4; player 2 starts at 0 and
/// steps forward by 4. The loop keeps going only while the offset lands on 4,
/// which gives both throwers exactly two samples but at different points.
pub fn sample_offsets(thrower: PlayerId) -> Vec<Vec2> {
    let direction = match thrower {
        PlayerId::One => -LOOK_STEP,
        PlayerId::Two => LOOK_STEP,
    };
    let mut look_x = 8 * (2 - thrower.number() as i32);
    let mut offsets = Vec::with_capacity(MAX_SAMPLES);

    for i in 0..MAX_SAMPLES {
        offsets.push(Vec2::new(look_x as f32, i as f32 * LOOK_DROP));
        look_x += direction;
        if look_x != LOOK_CONTINUE {
            break;
        }
    }
    offsets
}

#[inline]
fn hits_ground(pos: Vec2) -> bool {
    pos.y >= PLAY_HEIGHT - GROUND_MARGIN
}

#[inline]
fn off_sides(pos: Vec2) -> bool {
    pos.x <= LEFT_MARGIN || pos.x >= PLAY_WIDTH - RIGHT_MARGIN
}

#[inline]
fn hits_sun(pos: Vec2) -> bool {
    // Strict: a banana grazing the rim passes
    pos.distance(Vec2::new(SUN_X, SUN_Y)) < SUN_RADIUS
}

/// Classify the banana's current position
pub fn detect_collision(projectile: &Projectile, avatars: &[Avatar; 2], city: &City) -> StepResult {
    let pos = projectile.pos;

    if hits_ground(pos) {
        return StepResult::hit(Some(HitTarget::Terrain), pos);
    }

    // Above the screen; it will come back down
    if pos.y <= 0.0 {
        return StepResult::miss();
    }

    if off_sides(pos) {
        return StepResult::hit(None, pos);
    }

    if hits_sun(pos) {
        return StepResult::hit(Some(HitTarget::Sun), pos);
    }

    let opponent = &avatars[projectile.thrower.opponent().index()];
    let descending = projectile.is_descending();

    for offset in sample_offsets(projectile.thrower) {
        let sample = pos + offset;

        if opponent.contains(sample) {
            return StepResult::hit(Some(HitTarget::Avatar(opponent.player)), pos);
        }

        // Rising bananas pass through roofs
        if descending && city.solid_at(sample).is_some() {
            return StepResult::hit(Some(HitTarget::Terrain), pos);
        }
    }

    StepResult::miss()
}

/// True if an explosion at `center` would reach `avatar`
pub fn explosion_reaches(avatar: &Avatar, center: Vec2, radius: f32) -> bool {
    point_in_circle(avatar.pos, center, radius + AVATAR_WIDTH / 2.0)
}
