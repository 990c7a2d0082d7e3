//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the settings fixed for the life of a scenario:
//! - the gravitational constant `G`,
//! - the spatial extent `max_distance` measured once at load,
//! - the singularity guard `min_separation` derived from it

/// Newton's gravitational constant, N·m²/kg²
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408E-11;

/// `min_separation = max_distance / GUARD_DIVISOR`
pub const GUARD_DIVISOR: f64 = 1000.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub max_distance: f64, // largest |coordinate| at load time
    pub min_separation: f64, // pairs closer than this exert no force
}

impl Parameters {
    /// Derive the guard threshold from the scenario's initial extent.
    pub fn from_max_distance(max_distance: f64) -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            max_distance,
            min_separation: max_distance / GUARD_DIVISOR,
        }
    }
}
