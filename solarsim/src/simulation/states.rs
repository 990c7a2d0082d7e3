//! Core state types for the solar system simulation.
//!
//! Defines the 2D body and system structs:
//! - `Body` holds the physical state of one star or planet using `NVec2`
//! - `System` holds the ordered list of bodies and the physical time `t`
//!
//! Display attributes (`radius`, `color`) ride along so a scenario can be
//! saved back out, but nothing in the physics core reads them.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::simulation::error::{LoadError, LoadErrorKind};

pub type NVec2 = Vector2<f64>;

/// What a body is drawn as. Has no effect on physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a kind token is neither `star` nor `planet`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl FromStr for BodyKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "star" => Ok(BodyKind::Star),
            "planet" => Ok(BodyKind::Planet),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub color: String, // opaque display token
    pub m: f64, // mass, kg
    pub radius: f64, // display radius, px
    pub x: NVec2, // position, m
    pub v: NVec2, // velocity, m/s
    pub f: NVec2, // net force of the current step, N
}

impl Body {
    /// Build a body with a zeroed force accumulator
    pub fn new(kind: BodyKind, color: impl Into<String>, m: f64, radius: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            kind,
            color: color.into(),
            m,
            radius,
            x,
            v,
            f: NVec2::zeros(),
        }
    }

    /// Largest absolute coordinate of this body's position
    pub fn max_abs_coordinate(&self) -> f64 {
        self.x.x.abs().max(self.x.y.abs())
    }

    /// True when position, velocity and force are all finite
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).chain(self.f.iter()).all(|c| c.is_finite())
    }

    /// Check the body can enter a simulation and be saved back out.
    /// `line` is reported in the error.
    pub fn validate(&self, line: usize) -> Result<(), LoadError> {
        // `!(m > 0)` also catches NaN
        if !(self.m > 0.0) {
            return Err(LoadError::at(line, LoadErrorKind::NonPositiveMass(self.m)));
        }
        if !(self.radius > 0.0) {
            return Err(LoadError::at(line, LoadErrorKind::NonPositiveRadius(self.radius)));
        }
        // The color is one whitespace-separated field on a scenario line
        if self.color.is_empty() || self.color.chars().any(char::is_whitespace) {
            return Err(LoadError::at(line, LoadErrorKind::BadColor(self.color.clone())));
        }
        if !self.is_finite() {
            return Err(LoadError::at(line, LoadErrorKind::NonFinite("state")));
        }
        Ok(())
    }
}

/// Validate a whole body list. Errors report the 1-based position of the
/// offending body.
pub fn validate_bodies(bodies: &[Body]) -> Result<(), LoadError> {
    if bodies.is_empty() {
        return Err(LoadError::empty());
    }
    for (i, body) in bodies.iter().enumerate() {
        body.validate(i + 1)?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies, load order
    pub t: f64, // physical time since load, s
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Maximum absolute coordinate across all bodies, `None` when empty
    pub fn max_distance(&self) -> Option<f64> {
        self.bodies
            .iter()
            .map(Body::max_abs_coordinate)
            .reduce(f64::max)
    }
}
