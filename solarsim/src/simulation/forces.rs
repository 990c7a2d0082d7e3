//! Force contributors for the solar system engine
//!
//! Defines the force trait, the set that sums terms into each body's
//! accumulator, and direct Newtonian gravity with a minimum-separation
//! guard.

use crate::simulation::states::{NVec2, System};

/// Collection of force terms.
/// Each term implements [`ForceTerm`] and their contributions are summed
/// into the force accumulator of every body
pub struct ForceSet {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Recompute the net force on every body in `sys`.
    /// Accumulators are reset first, nothing carries over from a previous step.
    pub fn accumulate_forces(&self, sys: &mut System) {
        for b in sys.bodies.iter_mut() {
            b.f = NVec2::zeros();
        }
        for term in &self.terms {
            term.apply(sys);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`System`].
/// Implementations add their contribution into each body's `f`; they read
/// positions and masses and must not touch anything else.
pub trait ForceTerm {
    fn apply(&self, sys: &mut System);
}

/// Newtonian gravity summed over every ordered pair.
/// Pairs closer than `min_separation` contribute nothing.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub min_separation: f64, // singularity guard
}

impl NewtonianGravity {
    /// Force on body `i` from all others, evaluated at one instant
    pub fn net_force(&self, sys: &System, i: usize) -> NVec2 {
        let mut f = NVec2::zeros();
        let Some(body) = sys.bodies.get(i) else {
            return f;
        };

        for (j, other) in sys.bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            // Separation vector from `other` to `body` and its length r
            let dx = body.x.x - other.x.x;
            let dy = body.x.y - other.x.y;
            let r = (dx * dx + dy * dy).sqrt();

            // Bearing of `body` as seen from `other`
            let angle = dy.atan2(dx);

            // Guard: closer than min_separation the pair exerts no force,
            // otherwise |F| = G m_other m_body / r^2
            if r >= self.min_separation {
                let magnitude = self.G * other.m * body.m / (r * r);

                // Attraction points back toward `other`, against the bearing
                f.x -= magnitude * angle.cos();
                f.y -= magnitude * angle.sin();
            }
        }
        f
    }
}

impl ForceTerm for NewtonianGravity {
    fn apply(&self, sys: &mut System) {
        // Evaluate every body against the same positions before writing.
        let snapshot: &System = sys;
        let forces: Vec<NVec2> = (0..snapshot.bodies.len())
            .map(|i| self.net_force(snapshot, i))
            .collect();

        for (b, f) in sys.bodies.iter_mut().zip(forces) {
            b.f += f;
        }
    }
}
