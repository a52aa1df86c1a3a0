//! Throw input validation
//!
//! Front ends check player input here before calling into the simulation,
//! which trusts its arguments.

use std::ops::RangeInclusive;

use thiserror::Error;

pub const ANGLE_RANGE: RangeInclusive<f32> = 1.0..=179.0;
pub const VELOCITY_RANGE: RangeInclusive<f32> = 1.0..=200.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Angle must be between 1 and 179 degrees")]
    AngleOutOfRange(f32),
    #[error("Velocity must be between 1 and 200")]
    VelocityOutOfRange(f32),
    #[error("Expected an angle and a velocity, got {0:?}")]
    Malformed(String),
}

/// A throw that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowInput {
    pub angle: f32,
    pub velocity: f32,
}

impl ThrowInput {
    /// Parse "angle velocity" (whitespace or comma separated) and validate it
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let malformed = || InputError::Malformed(line.trim().to_string());
        let mut parts = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty());

        let angle = parts.next().ok_or_else(malformed)?;
        let velocity = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        let angle = angle.parse::<f32>().map_err(|_| malformed())?;
        let velocity = velocity.parse::<f32>().map_err(|_| malformed())?;
        validate_throw(angle, velocity)
    }
}

pub fn validate_angle(angle: f32) -> Result<f32, InputError> {
    if ANGLE_RANGE.contains(&angle) {
        Ok(angle)
    } else {
        Err(InputError::AngleOutOfRange(angle))
    }
}

pub fn validate_velocity(velocity: f32) -> Result<f32, InputError> {
    if VELOCITY_RANGE.contains(&velocity) {
        Ok(velocity)
    } else {
        Err(InputError::VelocityOutOfRange(velocity))
    }
}

/// Angle is checked before velocity
pub fn validate_throw(angle: f32, velocity: f32) -> Result<ThrowInput, InputError> {
    Ok(ThrowInput {
        angle: validate_angle(angle)?,
        velocity: validate_velocity(velocity)?,
    })
}
