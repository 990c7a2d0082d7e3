use solarsim::{bench_forces, bench_steps};
use solarsim::{Body, Engine, RunConfig, StepObserver};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Newtonian solar system simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a scenario, step it and optionally save the result
    Run(RunArgs),
    /// Time the force pass and full steps for growing body counts
    Bench {
        #[arg(long, default_value_t = 10)]
        steps: usize,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// YAML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Scenario text file, overrides the config
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    /// Time step in seconds
    #[arg(long)]
    dt: Option<f64>,
    #[arg(long)]
    steps: Option<u64>,
    /// 0..=100, pace steps like the speed slider
    #[arg(long)]
    speed: Option<u8>,
    /// Save the final state here
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(long)]
    report_every: Option<u64>,
}

// merge here to keep main clean
fn resolve_config(args: RunArgs) -> Result<RunConfig> {
    let mut cfg = match (&args.config, &args.scenario) {
        (Some(path), _) => RunConfig::from_yaml_file(path)?,
        (None, Some(scenario)) => RunConfig::for_scenario(scenario),
        (None, None) => anyhow::bail!("either --config or --scenario is required"),
    };

    if let Some(scenario) = args.scenario {
        cfg.scenario = scenario;
    }
    if let Some(dt) = args.dt {
        cfg.time_step = dt;
    }
    if let Some(steps) = args.steps {
        cfg.steps = steps;
    }
    if args.speed.is_some() {
        cfg.speed = args.speed;
    }
    if args.output.is_some() {
        cfg.output = args.output;
    }
    if let Some(every) = args.report_every {
        cfg.report_every = every;
    }
    cfg.resolve_against(Path::new(env!("CARGO_MANIFEST_DIR")));
    cfg.validate()?;
    Ok(cfg)
}

/// Logs body positions every `every` steps
struct SnapshotLogger {
    every: u64,
    seen: u64,
}

impl SnapshotLogger {
    fn report(time: f64, bodies: &[Body]) {
        info!("{time:.1} seconds gone");
        for (i, b) in bodies.iter().enumerate() {
            info!("  #{i} {} x = ({:e}, {:e}) v = ({:e}, {:e})", b.kind, b.x.x, b.x.y, b.v.x, b.v.y);
        }
    }
}

impl StepObserver for SnapshotLogger {
    fn on_load(&mut self, bodies: &[Body]) {
        self.seen = 0;
        Self::report(0.0, bodies);
    }

    fn on_step(&mut self, time: f64, bodies: &[Body]) {
        self.seen += 1;
        if self.every > 0 && self.seen % self.every == 0 {
            Self::report(time, bodies);
        }
    }
}

fn run(cfg: RunConfig) -> Result<()> {
    let mut engine = Engine::new(cfg.time_step)?;
    let mut logger = SnapshotLogger { every: cfg.report_every, seen: 0 };

    engine
        .load_file(&cfg.scenario, &mut logger)
        .with_context(|| format!("failed to load scenario {}", cfg.scenario.display()))?;
    if let Some(speed) = cfg.speed {
        engine.set_speed(speed);
    }

    info!("modelling started");
    let taken = engine.run_steps(cfg.steps, cfg.speed.is_some(), &mut logger)?;

    let scenario = engine.scenario().context("no scenario after run")?;
    if cfg.report_every == 0 || taken % cfg.report_every != 0 {
        SnapshotLogger::report(scenario.physical_time(), scenario.bodies());
    }
    if let Some(output) = &cfg.output {
        scenario
            .save(output)
            .with_context(|| format!("failed to save scenario {}", output.display()))?;
    }
    info!("modelling finished after {taken} steps");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => {
            let cfg = resolve_config(args)?;
            let level = cfg.log_level.clone().unwrap_or_else(|| "info".to_string());
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
            run(cfg)
        }
        Command::Bench { steps } => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
            bench_forces();
            bench_steps(steps);
            Ok(())
        }
    }
}
