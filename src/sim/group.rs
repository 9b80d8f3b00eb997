//! ParticleGroup - per-tick simulation driver
//!
//! Owns the particle collection and a parallel next-state buffer. A tick
//! runs Commit -> Integrate -> Partition -> Resolve: collision results are
//! staged, not applied, so every resolution within one tick reads the same
//! consistent snapshot; staged state becomes current at the start of the
//! following tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{self, PairOutcome};
use super::particle::Particle;
use super::sweep;
use crate::consts::{DOMAIN_HEIGHT, DOMAIN_WIDTH};
use crate::error::{PhysicsError, Result};

/// The particle population and its domain.
///
/// Domain bounds are fixed at construction; the population can grow via
/// [`add`](Self::add) before the run loop starts but is not spawned into or
/// culled mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleGroup {
    bounds: Vec2,
    particles: Vec<Particle>,
    /// Next-state buffer, parallel to `particles` by slot. `Some` entries
    /// were written by this tick's collision pass and are consumed at the
    /// start of the next tick.
    staged: Vec<Option<(Vec2, Vec2)>>,
}

impl Default for ParticleGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleGroup {
    /// Empty group over the default domain.
    pub fn new() -> Self {
        Self {
            bounds: Vec2::new(DOMAIN_WIDTH, DOMAIN_HEIGHT),
            particles: Vec::new(),
            staged: Vec::new(),
        }
    }

    /// Empty group over a custom rectangular domain `[0, w] x [0, h]`.
    pub fn with_bounds(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(PhysicsError::InvalidParam(
                "domain bounds must be finite and > 0".to_string(),
            ));
        }
        Ok(Self {
            bounds: Vec2::new(width, height),
            particles: Vec::new(),
            staged: Vec::new(),
        })
    }

    /// Append a particle to the managed collection.
    pub fn add(&mut self, particle: Particle) {
        self.particles.push(particle);
        self.staged.push(None);
    }

    /// Spawn `n` particles at the domain center with uniform random
    /// velocities in [-300, 300] per axis, radius 10 and mass 10.
    /// Deterministic for a given seed.
    pub fn spawn_random(&mut self, n: usize, seed: u64) -> Result<()> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = self.bounds * 0.5;
        for _ in 0..n {
            let vel = Vec2::new(
                rng.random_range(-300.0..=300.0),
                rng.random_range(-300.0..=300.0),
            );
            self.add(Particle::new(
                center,
                vel,
                Vec2::ZERO,
                10.0,
                Some(10.0),
                None,
            )?);
        }
        Ok(())
    }

    /// Read access for rendering.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Domain bounds `(width, height)`.
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Total translational kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f32 {
        self.particles.iter().map(|p| p.kinetic_energy()).sum()
    }

    /// Total momentum (diagnostic).
    pub fn momentum(&self) -> Vec2 {
        self.particles.iter().map(|p| p.momentum()).sum()
    }

    /// Advance the simulation by one timestep.
    ///
    /// 1. Commit: consume next-state buffers from the previous tick's
    ///    collision pass - a collision computed in tick N becomes visible
    ///    to tick N+1's integration, an explicit one-tick latency.
    /// 2. Integrate: Euler step plus wall reflection per particle, in
    ///    collection order.
    /// 3. Partition: sweep-and-prune along the x axis.
    /// 4. Resolve: all pairs within each cluster, overlap-gated; results
    ///    are staged for the next commit.
    ///
    /// Degenerate pairs are skipped (logged at debug) and never abort the
    /// tick. A non-positive `dt` is ignored with a warning.
    pub fn tick(&mut self, dt: f32) {
        if !(dt > 0.0) {
            log::warn!("ignoring tick with non-positive dt {dt}");
            return;
        }

        // Commit
        for (particle, slot) in self.particles.iter_mut().zip(self.staged.iter_mut()) {
            if let Some((pos, vel)) = slot.take() {
                particle.pos = pos;
                particle.vel = vel;
            }
        }

        // Integrate
        for particle in &mut self.particles {
            particle.update(dt);
            particle.handle_walls(self.bounds);
        }

        // Partition + Resolve
        for cluster in sweep::clusters(&self.particles) {
            for (ci, &i) in cluster.iter().enumerate() {
                for &j in &cluster[ci + 1..] {
                    if !collision::is_collision(&self.particles[i], &self.particles[j]) {
                        continue;
                    }
                    match collision::resolve_collision(&self.particles[i], &self.particles[j]) {
                        PairOutcome::Resolved { a, b } => {
                            self.staged[i] = Some((a.pos, a.vel));
                            self.staged[j] = Some((b.pos, b.vel));
                            log::trace!("resolved pair ({i}, {j})");
                        }
                        PairOutcome::Skipped(reason) => {
                            log::debug!("skipped pair ({i}, {j}) this tick: {reason:?}");
                        }
                    }
                }
            }
        }
    }
}
