//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep driven from outside
//! - Seeded RNG only
//! - Stable iteration order (collection slot order)
//! - No rendering or platform dependencies
//!
//! A tick runs Commit -> Integrate -> Partition -> Resolve. Collision
//! results are staged into a next-state buffer and only become visible to
//! the following tick's integration (one-tick latency, by contract).

pub mod collision;
pub mod group;
pub mod particle;
pub mod quadratic;
pub mod sweep;

pub use collision::{PairOutcome, SkipReason, Staged, resolve_collision};
pub use group::ParticleGroup;
pub use particle::Particle;
pub use quadratic::solve_quadratic;
pub use sweep::clusters;
