//! Build fully-initialized simulation scenarios from a loaded body list
//!
//! A `Scenario` is the runtime bundle for one loaded system:
//! - numerical parameters (`Parameters`), with the singularity guard
//!   measured once from the initial positions
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//!
//! It is replaced wholesale when a new scenario is loaded.

use std::path::Path;

use log::info;

use crate::configuration::scenario_file;
use crate::simulation::error::{LoadError, SimError};
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{validate_bodies, Body, System};

pub struct Scenario {
    pub parameters: Parameters,
    system: System,
    forces: ForceSet,
}

impl Scenario {
    /// Build a scenario from an initial body list.
    ///
    /// Rejects an empty list and any body that fails [`Body::validate`]. The
    /// guard threshold is fixed here and never recomputed.
    pub fn build_scenario(bodies: Vec<Body>) -> Result<Self, LoadError> {
        validate_bodies(&bodies)?;

        let system = System::new(bodies);
        let max_distance = system.max_distance().ok_or_else(LoadError::empty)?;
        let parameters = Parameters::from_max_distance(max_distance);

        // Forces: register Newtonian gravity with the load-time guard
        let forces = ForceSet::new().with(NewtonianGravity {
            G: parameters.G,
            min_separation: parameters.min_separation,
        });

        info!(
            "scenario ready: {} bodies, max distance {:e} m, guard {:e} m",
            system.bodies.len(),
            parameters.max_distance,
            parameters.min_separation
        );

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }

    /// Read a scenario file and build it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let bodies = scenario_file::load_scenario(path)?;
        Self::build_scenario(bodies)
    }

    /// Write the current body states to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        scenario_file::save_scenario(path, &self.system.bodies)
    }

    /// Advance every body by one step of `dt`
    pub fn step(&mut self, dt: f64) -> Result<(), SimError> {
        semi_implicit_euler(&mut self.system, &self.forces, dt)
    }

    /// Sum of all `dt` applied since load
    pub fn physical_time(&self) -> f64 {
        self.system.t
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn max_distance(&self) -> f64 {
        self.parameters.max_distance
    }

    pub fn min_separation(&self) -> f64 {
        self.parameters.min_separation
    }
}
