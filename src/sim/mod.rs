//! The duel itself: skyline, bananas, blasts and scoring
//!
//! Given the same `RandomSource` answers, every operation here produces the
//! same state:
//! - Flights are closed-form in elapsed time, so tick size never drifts them
//! - Buildings are visited left to right, player 1 before player 2
//! - Nothing here draws, sleeps or reads input

pub mod avatar;
pub mod city;
pub mod collision;
pub mod destruction;
pub mod geom;
pub mod rng;
pub mod state;
pub mod tick;
pub mod trajectory;
pub mod wind;

pub use avatar::{
    Avatar, dance_arm_angle, is_avatar_hidden, place_avatars, ready_arm_angle,
    throwing_arm_angle,
};
pub use city::{Building, BuildingColor, City, ExplosionHole, SlopePattern, Window, generate_city};
pub use collision::{HitTarget, StepResult, detect_collision, explosion_reaches, sample_offsets};
pub use destruction::apply_explosion;
pub use geom::{Rect, circle_intersects_rect, clamped_distance, point_in_circle, point_in_rect};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, seeded};
pub use state::{MatchPhase, MatchState, PlayerId};
pub use tick::{FireOutcome, abandon_throw, apply_explosion_at, fire, new_round, reset, step};
pub use trajectory::{Projectile, advance, create_projectile, launch_angle, launch_point};
pub use wind::generate_wind;
