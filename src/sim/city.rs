//! Procedural skyline generation
//!
//! The city is a left-to-right run of buildings separated by fixed seams.
//! Heights follow one of six slope patterns with a random bonus per building.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Rect, point_in_circle, point_in_rect};
use super::rng::RandomSource;
use crate::consts::*;

const GROUND: i32 = BOTTOM_LINE as i32;
const WIDTH: i32 = PLAY_WIDTH as i32;
/// Roofs at or above this height would crowd the avatar against the top of the screen
const CLEARANCE: i32 = MAX_ROOF_CLEARANCE + AVATAR_HEIGHT as i32;
/// Height forced onto buildings that break the clearance
const CAPPED_HEIGHT: i32 = CLEARANCE - 5;

/// How building heights trend across the skyline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlopePattern {
    Rising,
    Falling,
    /// The three "V" variants share one rule: climb toward the middle, then drop
    VShapeA,
    VShapeB,
    VShapeC,
    /// Drop toward the middle, then climb
    InvertedV,
}

impl SlopePattern {
    /// Map a roll in `1..=6` onto a pattern
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            1 => SlopePattern::Rising,
            2 => SlopePattern::Falling,
            3 => SlopePattern::VShapeA,
            4 => SlopePattern::VShapeB,
            5 => SlopePattern::VShapeC,
            _ => SlopePattern::InvertedV,
        }
    }

    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::from_roll(rng.int_in(1, 6))
    }

    fn is_v_shape(self) -> bool {
        matches!(
            self,
            SlopePattern::VShapeA | SlopePattern::VShapeB | SlopePattern::VShapeC
        )
    }

    /// Running height before the first building
    pub fn start_height(self) -> i32 {
        match self {
            SlopePattern::Falling | SlopePattern::InvertedV => HIGH_START_HEIGHT,
            _ => LOW_START_HEIGHT,
        }
    }

    /// Running height for the building starting at `x`
    pub fn next_height(self, current: i32, x: i32) -> i32 {
        let past_middle = x > WIDTH / 2;
        match self {
            SlopePattern::Rising => current + HEIGHT_STEP,
            SlopePattern::Falling => current - HEIGHT_STEP,
            SlopePattern::InvertedV if past_middle => current + 2 * HEIGHT_STEP,
            SlopePattern::InvertedV => current - 2 * HEIGHT_STEP,
            _ if past_middle => current - 2 * HEIGHT_STEP,
            _ => {
                debug_assert!(self.is_v_shape());
                current + 2 * HEIGHT_STEP
            }
        }
    }
}

/// Building facade palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingColor {
    Red,
    Magenta,
    Brown,
    Gray,
}

impl BuildingColor {
    pub const PALETTE: [BuildingColor; 4] = [
        BuildingColor::Red,
        BuildingColor::Magenta,
        BuildingColor::Brown,
        BuildingColor::Gray,
    ];

    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::PALETTE[rng.int_in(0, Self::PALETTE.len() as i32 - 1) as usize]
    }

    pub fn hex(self) -> &'static str {
        match self {
            BuildingColor::Red => "#AA0000",
            BuildingColor::Magenta => "#AA00AA",
            BuildingColor::Brown => "#AA5500",
            BuildingColor::Gray => "#AAAAAA",
        }
    }
}

/// A single window on a facade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub pos: Vec2,
    pub lit: bool,
}

/// A destroyed circular region of a building
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionHole {
    pub center: Vec2,
    pub radius: f32,
}

impl ExplosionHole {
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        point_in_circle(p, self.center, self.radius)
    }
}

/// A building in the skyline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Left edge
    pub x: f32,
    /// Roof (top edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: BuildingColor,
    pub windows: Vec<Window>,
    pub holes: Vec<ExplosionHole>,
}

impl Building {
    /// Build a standing building with its facade laid out
    pub fn new(
        x: i32,
        width: i32,
        height: i32,
        color: BuildingColor,
        rng: &mut impl RandomSource,
    ) -> Self {
        Self {
            x: x as f32,
            y: (GROUND - height) as f32,
            width: width as f32,
            height: height as f32,
            color,
            windows: generate_windows(x, width, height, rng),
            holes: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Center of the roof line
    pub fn roof_center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y)
    }

    /// True if `p` lies inside the building and not inside a blast hole
    pub fn is_solid_at(&self, p: Vec2) -> bool {
        point_in_rect(p, &self.rect()) && !self.holes.iter().any(|h| h.contains(p))
    }
}

/// The whole skyline for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub slope: SlopePattern,
    pub buildings: Vec<Building>,
}

impl City {
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// First building with solid material at `p`
    pub fn solid_at(&self, p: Vec2) -> Option<&Building> {
        self.buildings.iter().find(|b| b.is_solid_at(p))
    }

    pub fn window_count(&self) -> usize {
        self.buildings.iter().map(|b| b.windows.len()).sum()
    }
}

/// Random width, clipped to the space left before the right edge
fn building_width(x: i32, rng: &mut impl RandomSource) -> i32 {
    let width = rng.int_in(BUILDING_BASE_WIDTH, 2 * BUILDING_BASE_WIDTH - 1);
    width.min(WIDTH - x - BUILDING_SEAM)
}

/// Running height plus a random bonus, kept within floor and clearance
fn building_height(running: i32, rng: &mut impl RandomSource) -> i32 {
    let mut height = running + rng.int_in(0, RANDOM_HEIGHT_RANGE - 1);
    if height < MIN_BUILDING_HEIGHT {
        height = MIN_BUILDING_HEIGHT;
    }
    if GROUND - height <= CLEARANCE {
        height = CAPPED_HEIGHT;
    }
    height
}

/// Lay out window columns and rows across a facade
pub fn generate_windows(
    x: i32,
    width: i32,
    height: i32,
    rng: &mut impl RandomSource,
) -> Vec<Window> {
    let mut windows = Vec::new();
    let mut column = x + WINDOW_INSET;
    while column < x + width - WINDOW_INSET {
        // Elevation above the ground line, from just under the roof downward
        let mut elevation = height - WINDOW_INSET;
        while elevation >= WINDOW_MIN_ELEVATION {
            windows.push(Window {
                pos: Vec2::new(column as f32, (GROUND - elevation) as f32),
                lit: rng.chance(WINDOW_LIT_CHANCE),
            });
            elevation -= WINDOW_SPACING_Y;
        }
        column += WINDOW_SPACING_X;
    }
    windows
}

/// Generate a fresh skyline
pub fn generate_city(rng: &mut impl RandomSource) -> City {
    let slope = SlopePattern::random(rng);
    let mut running = slope.start_height();
    let mut x = BUILDING_SEAM;
    let mut buildings = Vec::new();

    while x < WIDTH {
        running = slope.next_height(running, x);

        let width = building_width(x, rng);
        if width <= 0 {
            break;
        }
        let height = building_height(running, rng);
        let color = BuildingColor::random(rng);

        buildings.push(Building::new(x, width, height, color, rng));
        x += width + BUILDING_SEAM;
    }

    log::debug!(
        "Generated {:?} city with {} buildings",
        slope,
        buildings.len()
    );

    City { slope, buildings }
}
