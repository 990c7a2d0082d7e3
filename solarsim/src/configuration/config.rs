//! Run configuration for the headless driver, loaded from YAML.
//!
//! The scenario itself lives in a plain-text file (see
//! [`scenario_file`](super::scenario_file)); this file only says how to run it.
//!
//! # YAML format
//!
//! ```yaml
//! scenario: "scenarios/one_satellite.txt"  # bodies to load
//! time_step: 86400.0                       # dt in seconds
//! steps: 365                               # number of steps to run
//! speed: 100                               # 0..=100, delay = 101 - speed ms
//! report_every: 30                         # snapshot every N steps, 0 = end only
//! output: "out.txt"                        # save final state here
//! log_level: "info"
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

pub const MAX_SPEED: u8 = 100;

fn default_time_step() -> f64 {
    1.0
}

fn default_steps() -> u64 {
    1
}

/// Top-level run configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub scenario: PathBuf, // scenario text file
    #[serde(default = "default_time_step")]
    pub time_step: f64, // physical seconds per step
    #[serde(default = "default_steps")]
    pub steps: u64, // steps to run before stopping
    #[serde(default)]
    pub speed: Option<u8>, // slider position; `None` runs without delay
    #[serde(default)]
    pub report_every: u64, // snapshot cadence in steps
    #[serde(default)]
    pub output: Option<PathBuf>, // where to save the final state
    #[serde(default)]
    pub log_level: Option<String>, // default log filter when RUST_LOG is unset
}

impl RunConfig {
    /// Config for a scenario with every other field defaulted
    pub fn for_scenario(scenario: impl Into<PathBuf>) -> Self {
        Self {
            scenario: scenario.into(),
            time_step: default_time_step(),
            steps: default_steps(),
            speed: None,
            report_every: 0,
            output: None,
            log_level: None,
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: RunConfig = serde_yaml::from_str(text).context("invalid run configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("cannot open config {}", path.display()))?;
        let cfg: RunConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid run configuration in {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.time_step.is_finite() && self.time_step != 0.0,
            "time_step must be finite and non-zero, got {}",
            self.time_step
        );
        if let Some(speed) = self.speed {
            ensure!(speed <= MAX_SPEED, "speed must be within 0..={MAX_SPEED}, got {speed}");
        }
        Ok(())
    }

    /// Relative paths that do not exist from the working directory are
    /// looked up under `base` instead. The output is moved only when its
    /// parent directory exists under `base` but not here.
    pub fn resolve_against(&mut self, base: &Path) {
        if self.scenario.is_relative() && !self.scenario.exists() {
            let candidate = base.join(&self.scenario);
            if candidate.exists() {
                self.scenario = candidate;
            }
        }
        let moved = self.output.as_ref().and_then(|output| {
            let parent = output.parent().filter(|p| !p.as_os_str().is_empty())?;
            let relocate = output.is_relative() && !parent.exists() && base.join(parent).is_dir();
            relocate.then(|| base.join(output))
        });
        if moved.is_some() {
            self.output = moved;
        }
    }

    /// Wall-clock pause between steps
    pub fn step_delay(&self) -> Option<Duration> {
        self.speed.map(speed_delay)
    }
}

/// Slider position to inter-step delay: 0 is slowest (101 ms), 100 fastest (1 ms)
pub fn speed_delay(speed: u8) -> Duration {
    let speed = speed.min(MAX_SPEED);
    Duration::from_millis(u64::from(MAX_SPEED - speed) + 1)
}
