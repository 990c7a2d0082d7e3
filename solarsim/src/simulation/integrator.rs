//! Fixed-step time integration for the solar system
//!
//! One force evaluation per step: every force is computed from a single
//! snapshot of positions, then every body is moved.

use super::error::SimError;
use super::forces::ForceSet;
use super::states::{Body, System};

/// Advance one body by `dt` from its accumulated force.
///
/// Position uses the pre-step velocity plus a half-step correction, then the
/// velocity is updated:
/// - x_n+1 = x_n + a_n dt²/2 + v_n dt
/// - v_n+1 = v_n + a_n dt
///
/// The mass is assumed positive; that is checked at load.
pub fn move_body(body: &mut Body, dt: f64) {
    let a = body.f / body.m;
    body.x += a * (dt * dt) / 2.0 + body.v * dt;
    body.v += a * dt;
}

/// Advance the system by one step of `dt`.
///
/// All forces first, then all moves, then `sys.t += dt`. A zero or
/// non-finite `dt` is rejected. If any force, position or velocity comes
/// out non-finite the system is restored to its pre-step state and the
/// fault is returned.
pub fn semi_implicit_euler(sys: &mut System, forces: &ForceSet, dt: f64) -> Result<(), SimError> {
    if !dt.is_finite() || dt == 0.0 {
        return Err(SimError::InvalidTimeStep(dt));
    }

    let snapshot = sys.clone();
    let result = advance(sys, forces, dt);
    if result.is_err() {
        *sys = snapshot;
    }
    result
}

fn advance(sys: &mut System, forces: &ForceSet, dt: f64) -> Result<(), SimError> {
    // Phase 1: forces for the whole system at one instant
    forces.accumulate_forces(sys);
    if let Some(body) = sys.bodies.iter().position(|b| !b.f.iter().all(|c| c.is_finite())) {
        return Err(SimError::NonFiniteForce { body });
    }

    // Phase 2: move every body
    for b in sys.bodies.iter_mut() {
        move_body(b, dt);
    }
    if let Some(body) = sys.bodies.iter().position(|b| !b.is_finite()) {
        return Err(SimError::NonFiniteState { body });
    }

    sys.t += dt;
    Ok(())
}
