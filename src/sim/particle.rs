//! Particle state, integration and wall reflection

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_COLOR;
use crate::error::{PhysicsError, Result};

/// A circular rigid body.
///
/// Particles are anonymous; identity is the slot in the owning
/// [`ParticleGroup`](super::ParticleGroup). `color` is rendering-only and
/// has no physical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Circle radius, always > 0
    pub radius: f32,
    /// Mass, always > 0
    pub mass: f32,
    /// Packed 0xRRGGBB for the renderer
    pub color: u32,
}

impl Particle {
    /// Create a particle, validating physical invariants.
    ///
    /// `mass` defaults to `pi * radius^2` (uniform areal density) and
    /// `color` to dark green when unspecified. Fails with
    /// [`PhysicsError::InvalidParam`] on zero, negative or non-finite
    /// radius/mass - a particle never exists in a non-physical state.
    pub fn new(
        pos: Vec2,
        vel: Vec2,
        acc: Vec2,
        radius: f32,
        mass: Option<f32>,
        color: Option<u32>,
    ) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidParam(
                "radius must be finite and > 0".to_string(),
            ));
        }
        let mass = mass.unwrap_or(std::f32::consts::PI * radius * radius);
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidParam(
                "mass must be finite and > 0".to_string(),
            ));
        }

        Ok(Self {
            pos,
            vel,
            acc,
            radius,
            mass,
            color: color.unwrap_or(DEFAULT_COLOR),
        })
    }

    /// Advance velocity and position by one forward Euler step.
    ///
    /// No sub-stepping or energy correction; drift under large `dt` is an
    /// accepted limitation of the integrator.
    pub fn update(&mut self, dt: f32) {
        self.vel += self.acc * dt;
        self.pos += self.vel * dt;
    }

    /// Reflect off the four static walls of `[0, W] x [0, H]`.
    ///
    /// Per axis: if the surface has penetrated a wall, mirror the position
    /// back inside by twice the penetration and flip that axis of velocity
    /// (lossless bounce). Axes are independent; both can fire in the same
    /// tick on a corner hit.
    pub fn handle_walls(&mut self, bounds: Vec2) {
        let x_border = bounds.x - self.radius;
        let y_border = bounds.y - self.radius;

        if self.pos.x >= x_border {
            self.pos.x += 2.0 * (x_border - self.pos.x);
            self.vel.x = -self.vel.x;
        }
        if self.pos.x <= self.radius {
            self.pos.x += 2.0 * (self.radius - self.pos.x);
            self.vel.x = -self.vel.x;
        }

        if self.pos.y >= y_border {
            self.pos.y += 2.0 * (y_border - self.pos.y);
            self.vel.y = -self.vel.y;
        }
        if self.pos.y <= self.radius {
            self.pos.y += 2.0 * (self.radius - self.pos.y);
            self.vel.y = -self.vel.y;
        }
    }

    /// Translational kinetic energy: 1/2 m |v|^2
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// Momentum: m v
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(pos: Vec2, radius: f32) -> Particle {
        Particle::new(pos, Vec2::ZERO, Vec2::ZERO, radius, None, None).unwrap()
    }

    #[test]
    fn test_mass_defaults_to_areal_density() {
        let p = still(Vec2::ZERO, 10.0);
        assert!((p.mass - std::f32::consts::PI * 100.0).abs() < 1e-3);
        assert_eq!(p.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_zero_radius_rejected() {
        let err = Particle::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, 0.0, None, None).unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_zero_mass_rejected() {
        let err =
            Particle::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, 5.0, Some(0.0), None).unwrap_err();
        assert!(err.to_string().contains("mass"));
    }

    #[test]
    fn test_euler_step() {
        let mut p = Particle::new(
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 10.0),
            1.0,
            Some(1.0),
            None,
        )
        .unwrap();
        p.update(0.5);
        // vel picks up acc first, position uses the new velocity
        assert_eq!(p.vel, Vec2::new(3.0, 5.0));
        assert_eq!(p.pos, Vec2::new(2.5, 4.5));
    }

    #[test]
    fn test_left_wall_mirrors_position() {
        // Particle at x=5 with radius 5, vel (-10, 0), dt 1.0: crosses to
        // x=-5, must come back mirrored about the x=radius line to x=15
        // with vel.x negated.
        let bounds = Vec2::new(800.0, 600.0);
        let mut p = Particle::new(
            Vec2::new(5.0, 300.0),
            Vec2::new(-10.0, 0.0),
            Vec2::ZERO,
            5.0,
            None,
            None,
        )
        .unwrap();
        p.update(1.0);
        assert_eq!(p.pos.x, -5.0);
        p.handle_walls(bounds);
        assert_eq!(p.pos, Vec2::new(15.0, 300.0));
        assert_eq!(p.vel, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_corner_hit_fires_both_axes() {
        let bounds = Vec2::new(100.0, 100.0);
        let mut p = Particle::new(
            Vec2::new(2.0, 2.0),
            Vec2::new(-1.0, -1.0),
            Vec2::ZERO,
            5.0,
            None,
            None,
        )
        .unwrap();
        p.handle_walls(bounds);
        assert_eq!(p.pos, Vec2::new(8.0, 8.0));
        assert_eq!(p.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_interior_particle_untouched() {
        let bounds = Vec2::new(100.0, 100.0);
        let mut p = still(Vec2::new(50.0, 50.0), 5.0);
        let before = p;
        p.handle_walls(bounds);
        assert_eq!(p, before);
    }
}
