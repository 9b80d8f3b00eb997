//! Particle Arena - a 2D rigid-circle elastic collision sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (particles, broad/narrow phase, tick driver)
//! - `error`: Library error type
//!
//! The crate is a pure simulation core: an external driver supplies a
//! timestep each tick and reads particle positions/radii/colors back out
//! for drawing. No rendering or platform code lives here.

pub mod error;
pub mod sim;

pub use error::{PhysicsError, Result};
pub use sim::{Particle, ParticleGroup};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (360 Hz, matching the reference driver)
    pub const SIM_DT: f32 = 1.0 / 360.0;

    /// Default domain bounds. Particles live in [0, WIDTH] x [0, HEIGHT].
    pub const DOMAIN_WIDTH: f32 = 800.0;
    pub const DOMAIN_HEIGHT: f32 = 600.0;

    /// Default particle color (packed 0xRRGGBB, dark green)
    pub const DEFAULT_COLOR: u32 = 0x006400;

    /// Squared-length threshold below which a separation vector is treated
    /// as degenerate (coincident centers)
    pub const COINCIDENT_EPS_SQ: f32 = 1e-12;
}
