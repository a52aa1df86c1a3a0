//! Avatar placement and the cosmetic arm poses derived from match state

use std::f32::consts::{FRAC_PI_4, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::city::{Building, City};
use super::geom::{Rect, point_in_rect};
use super::rng::RandomSource;
use super::state::PlayerId;
use crate::consts::*;

/// Hit box extents around the avatar origin (asymmetric, like the sprite)
const HIT_BACK: f32 = 15.0;
const HIT_FRONT: f32 = 14.0;
const HIT_TOP: f32 = 1.0;
const HIT_BOTTOM: f32 = 28.0;

/// A player's avatar standing on a roof
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub player: PlayerId,
}

impl Avatar {
    /// Stand on top of `building`
    pub fn on_building(building: &Building, player: PlayerId) -> Self {
        Self {
            pos: Vec2::new(
                building.x + building.width / 2.0 - AVATAR_X_ADJUST,
                building.y - AVATAR_Y_ADJUST,
            ),
            player,
        }
    }

    pub fn hit_box(&self) -> Rect {
        Rect::new(
            self.pos.x - HIT_BACK,
            self.pos.y - HIT_TOP,
            HIT_BACK + HIT_FRONT,
            HIT_TOP + HIT_BOTTOM,
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        point_in_rect(p, &self.hit_box())
    }
}

/// Index of the building an avatar stands on: 2nd or 3rd from its edge
fn pick_building(len: usize, player: PlayerId, rng: &mut impl RandomSource) -> usize {
    let from_edge = rng.int_in(1, 2) as usize;
    match player {
        PlayerId::One => from_edge.min(len.saturating_sub(1)),
        PlayerId::Two => len.saturating_sub(1).saturating_sub(from_edge),
    }
}

/// Place both avatars on the skyline, player 1 on the left
pub fn place_avatars(city: &City, rng: &mut impl RandomSource) -> [Avatar; 2] {
    let len = city.len();
    let left = pick_building(len, PlayerId::One, rng);
    let right = pick_building(len, PlayerId::Two, rng);
    log::debug!("Avatars placed on buildings {} and {}", left, right);

    let place = |index: usize, player: PlayerId| match city.buildings.get(index) {
        Some(building) => Avatar::on_building(building, player),
        // Empty city: stand on the ground near the player's edge
        None => Avatar {
            pos: Vec2::new(
                match player {
                    PlayerId::One => PLAY_WIDTH * 0.25,
                    PlayerId::Two => PLAY_WIDTH * 0.75,
                },
                BOTTOM_LINE - AVATAR_Y_ADJUST,
            ),
            player,
        },
    };

    [place(left, PlayerId::One), place(right, PlayerId::Two)]
}

/// Arm raised while winding up a throw
pub fn throwing_arm_angle(player: PlayerId) -> f32 {
    match player {
        PlayerId::One => 3.0 * PI / 4.0,
        PlayerId::Two => FRAC_PI_4,
    }
}

/// Arm raised while waiting for the player's input
pub fn ready_arm_angle(player: PlayerId) -> f32 {
    match player {
        PlayerId::One => FRAC_PI_4,
        PlayerId::Two => 3.0 * PI / 4.0,
    }
}

/// Victory dance alternates arms every frame
pub fn dance_arm_angle(frame: u32, player: PlayerId) -> f32 {
    if frame % 2 == 0 {
        throwing_arm_angle(player)
    } else {
        ready_arm_angle(player)
    }
}

/// The loser disappears once the round is decided
pub fn is_avatar_hidden(player: PlayerId, winner: Option<PlayerId>) -> bool {
    winner.is_some_and(|w| w != player)
}
