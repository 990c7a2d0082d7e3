pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyKind, System, NVec2};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT};
pub use simulation::error::{LoadError, LoadErrorKind, SimError};
pub use simulation::forces::{ForceSet, ForceTerm, NewtonianGravity};
pub use simulation::integrator::{move_body, semi_implicit_euler};
pub use simulation::scenario::Scenario;
pub use simulation::engine::{Engine, RunState, StepObserver, NoObserver};

pub use configuration::config::RunConfig;
pub use configuration::scenario_file::{load_scenario, save_scenario, parse_scenario, write_scenario};

pub use benchmark::benchmark::{bench_forces, bench_steps};
