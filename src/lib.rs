//! Gorillas - a two-player banana-throwing artillery duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (city generation, trajectories, collisions, match state)
//! - `duel`: Headless session driver owning state, RNG and settings
//! - `settings`: JSON-backed tuning knobs
//! - `validation`: Throw input validation for front ends

pub mod duel;
pub mod settings;
pub mod sim;
pub mod validation;

pub use duel::{Duel, ThrowReport};
pub use settings::Settings;
pub use validation::{InputError, ThrowInput, validate_throw};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (simulated seconds per tick)
    pub const SIM_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const PLAY_WIDTH: f32 = 640.0;
    pub const PLAY_HEIGHT: f32 = 350.0;
    /// Ground line; building heights are measured upward from here
    pub const BOTTOM_LINE: f32 = 335.0;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 9.8;
    /// Gravity is tuned for a 350 unit tall screen
    pub const GRAVITY_SCALE: f32 = PLAY_HEIGHT / 350.0;
    /// Wind is divided by this before it acts as horizontal acceleration
    pub const WIND_DIVISOR: f32 = 5.0;

    /// City layout
    pub const BUILDING_SEAM: i32 = 2;
    pub const BUILDING_BASE_WIDTH: i32 = 37;
    pub const HEIGHT_STEP: i32 = 10;
    pub const MIN_BUILDING_HEIGHT: i32 = HEIGHT_STEP;
    pub const RANDOM_HEIGHT_RANGE: i32 = 120;
    pub const LOW_START_HEIGHT: i32 = 15;
    pub const HIGH_START_HEIGHT: i32 = 130;
    /// Free space kept above the tallest roof (plus an avatar)
    pub const MAX_ROOF_CLEARANCE: i32 = 60;

    /// Window grid
    pub const WINDOW_INSET: i32 = 3;
    pub const WINDOW_SPACING_X: i32 = 10;
    pub const WINDOW_SPACING_Y: i32 = 15;
    pub const WINDOW_MIN_ELEVATION: i32 = 7;
    pub const WINDOW_LIT_CHANCE: f32 = 0.75;

    /// Avatar footprint
    pub const AVATAR_WIDTH: f32 = 30.0;
    pub const AVATAR_HEIGHT: f32 = 28.0;
    /// Avatar placement relative to the building it stands on
    pub const AVATAR_X_ADJUST: f32 = 14.0;
    pub const AVATAR_Y_ADJUST: f32 = 30.0;

    /// Throwing hand offset from the avatar origin
    pub const THROW_OFFSET_P1: f32 = 5.0;
    pub const THROW_OFFSET_P2: f32 = 25.0;
    pub const THROW_LIFT: f32 = 4.0 + 3.0;

    /// Velocities below this drop the banana on the thrower
    pub const SELF_KILL_VELOCITY: f32 = 2.0;

    /// Playfield margins for the collision detector
    pub const GROUND_MARGIN: f32 = 7.0;
    pub const LEFT_MARGIN: f32 = 3.0;
    pub const RIGHT_MARGIN: f32 = 10.0;

    /// The sun (decorative, but it does stop bananas)
    pub const SUN_X: f32 = PLAY_WIDTH / 2.0;
    pub const SUN_Y: f32 = 25.0;
    pub const SUN_RADIUS: f32 = 12.0;

    /// Default blast radius for banana explosions
    pub const EXPLOSION_RADIUS: f32 = 30.0;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}
