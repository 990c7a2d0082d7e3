//! Run driver around a `Scenario`
//!
//! Owns the idle/running state, the time step and the speed setting, and
//! notifies a [`StepObserver`] after each step. Speed only changes how often
//! steps are taken, never what a step does.

use std::path::Path;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::configuration::config::{speed_delay, MAX_SPEED};
use crate::simulation::error::{LoadError, SimError};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Consumer of body snapshots, e.g. a renderer or a logger
pub trait StepObserver {
    /// Called once after a scenario replaces the previous one
    fn on_load(&mut self, _bodies: &[Body]) {}

    /// Called after every successful step
    fn on_step(&mut self, time: f64, bodies: &[Body]);
}

/// Observer that ignores everything
pub struct NoObserver;

impl StepObserver for NoObserver {
    fn on_step(&mut self, _time: f64, _bodies: &[Body]) {}
}

pub struct Engine {
    scenario: Option<Scenario>,
    state: RunState,
    time_step: f64, // dt handed to every step
    speed: u8, // 0..=MAX_SPEED
}

impl Engine {
    pub fn new(time_step: f64) -> Result<Self, SimError> {
        check_time_step(time_step)?;
        Ok(Self {
            scenario: None,
            state: RunState::Idle,
            time_step,
            speed: MAX_SPEED,
        })
    }

    /// Replace the current scenario. On failure the previous one is kept
    /// along with its state; on success the engine is idle at t = 0.
    pub fn load(&mut self, bodies: Vec<Body>, observer: &mut dyn StepObserver) -> Result<(), LoadError> {
        let scenario = Scenario::build_scenario(bodies)?;
        self.install(scenario, observer);
        Ok(())
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>, observer: &mut dyn StepObserver) -> Result<(), LoadError> {
        let scenario = Scenario::load(path)?;
        self.install(scenario, observer);
        Ok(())
    }

    fn install(&mut self, scenario: Scenario, observer: &mut dyn StepObserver) {
        self.state = RunState::Idle;
        observer.on_load(scenario.bodies());
        self.scenario = Some(scenario);
        info!("scenario loaded, engine idle");
    }

    pub fn start(&mut self) -> Result<(), SimError> {
        if self.scenario.is_none() {
            return Err(SimError::NoScenario);
        }
        if self.state != RunState::Running {
            self.state = RunState::Running;
            info!("started execution");
        }
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.state != RunState::Idle {
            self.state = RunState::Idle;
            info!("paused execution at {:.1} s", self.physical_time());
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn set_time_step(&mut self, dt: f64) -> Result<(), SimError> {
        check_time_step(dt)?;
        self.time_step = dt;
        Ok(())
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.min(MAX_SPEED);
    }

    /// Wall-clock delay between ticks for the current speed
    pub fn step_delay(&self) -> Duration {
        speed_delay(self.speed)
    }

    pub fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    /// Physical time of the loaded scenario, 0 when nothing is loaded
    pub fn physical_time(&self) -> f64 {
        self.scenario.as_ref().map_or(0.0, Scenario::physical_time)
    }

    /// Take one step if running. Returns whether a step was taken.
    /// A fault stops the run and leaves the bodies as they were.
    pub fn tick(&mut self, observer: &mut dyn StepObserver) -> Result<bool, SimError> {
        if self.state != RunState::Running {
            return Ok(false);
        }
        let scenario = self.scenario.as_mut().ok_or(SimError::NoScenario)?;

        if let Err(err) = scenario.step(self.time_step) {
            warn!("step failed at {:.1} s: {err}", scenario.physical_time());
            self.state = RunState::Idle;
            return Err(err);
        }
        debug!("{:.1} seconds gone", scenario.physical_time());
        observer.on_step(scenario.physical_time(), scenario.bodies());
        Ok(true)
    }

    /// Start, take `steps` ticks and go idle again. With `paced` set, sleep
    /// for the speed delay between ticks.
    pub fn run_steps(&mut self, steps: u64, paced: bool, observer: &mut dyn StepObserver) -> Result<u64, SimError> {
        self.start()?;
        let mut taken = 0;
        while taken < steps && self.tick(observer)? {
            taken += 1;
            if paced && taken < steps {
                thread::sleep(self.step_delay());
            }
        }
        self.pause();
        Ok(taken)
    }
}

fn check_time_step(dt: f64) -> Result<(), SimError> {
    if dt.is_finite() && dt != 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTimeStep(dt))
    }
}
