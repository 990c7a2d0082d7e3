use std::time::Instant;

use log::{info, warn};

use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, NVec2, System};

/// Deterministic ring of `n` bodies around a heavy star, no rand needed
pub fn bench_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);
    bodies.push(Body::new(BodyKind::Star, "yellow", 1.989e30, 10.0, NVec2::zeros(), NVec2::zeros()));

    for i in 1..n {
        let i_f = i as f64;
        let r = 1.0e11 + i_f * 1.0e9;
        let x = NVec2::new((i_f * 0.37).cos() * r, (i_f * 0.37).sin() * r);
        let v = NVec2::new(-(i_f * 0.37).sin(), (i_f * 0.37).cos()) * 3.0e4;
        bodies.push(Body::new(BodyKind::Planet, "blue", 5.972e24, 2.0, x, v));
    }
    System::new(bodies)
}

fn gravity_for(sys: &System) -> ForceSet {
    let params = Parameters::from_max_distance(sys.max_distance().unwrap_or(0.0));
    ForceSet::new().with(NewtonianGravity {
        G: params.G,
        min_separation: params.min_separation,
    })
}

/// Time one O(n²) force pass for growing system sizes
pub fn bench_forces() -> Vec<(usize, f64)> {
    let ns = [10, 50, 100, 200, 400, 800];
    let mut results = Vec::with_capacity(ns.len());

    for n in ns {
        let mut sys = bench_system(n);
        let forces = gravity_for(&sys);

        // Warm up
        forces.accumulate_forces(&mut sys);

        let t0 = Instant::now();
        forces.accumulate_forces(&mut sys);
        let elapsed = t0.elapsed().as_secs_f64();

        info!("N = {n:5}, force pass = {elapsed:10.6} s");
        results.push((n, elapsed));
    }
    results
}

/// Time full steps (forces + moves) per system size, averaged over `steps`
pub fn bench_steps(steps: usize) -> Vec<(usize, f64)> {
    let ns = [10, 50, 100, 200, 400];
    let steps = steps.max(1);
    let dt = 3600.0;
    let mut results = Vec::with_capacity(ns.len());

    for n in ns {
        let mut sys = bench_system(n);
        let forces = gravity_for(&sys);

        let t0 = Instant::now();
        let mut completed = 0usize;
        for _ in 0..steps {
            if let Err(err) = semi_implicit_euler(&mut sys, &forces, dt) {
                warn!("N = {n:5}, step {completed} failed: {err}");
                break;
            }
            completed += 1;
        }
        let per_step = t0.elapsed().as_secs_f64() / completed.max(1) as f64;

        info!("N = {n:5}, {completed} steps, {per_step:10.6} s/step, t = {:.1} s", sys.t);
        results.push((n, per_step));
    }
    results
}
