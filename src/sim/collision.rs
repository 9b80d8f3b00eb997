//! Narrow-phase collision detection and resolution
//!
//! The tricky part of the simulator: a cheap end-of-step circle overlap
//! test decides *whether* a pair collided during the tick; the resolver
//! then recovers the exact time of impact from a quadratic in the backward
//! time offset, rewinds both particles to the contact instant, applies the
//! two-body elastic impulse, and replays them forward to the tick boundary
//! with their new velocities.

use glam::Vec2;

use super::particle::Particle;
use super::quadratic::solve_quadratic;
use crate::consts::COINCIDENT_EPS_SQ;

/// Position/velocity pair staged for the next tick boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Staged {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Why a candidate pair was left unresolved this tick.
///
/// None of these abort the run: a skipped pair is at worst a brief visual
/// overlap that self-corrects as relative motion changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No real impact time exists (zero relative velocity or negative
    /// discriminant).
    NoImpactTime,
    /// Both quadratic roots are non-positive; the contact lies in the
    /// forward direction and is already resolved.
    NonPositiveImpactTime,
    /// Centers coincide at the impact instant; the impulse axis is the
    /// zero vector and the pair cannot be separated this tick.
    CoincidentCenters,
}

/// Outcome of resolving one overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairOutcome {
    /// New states for both particles, to be staged into the next-state
    /// buffer (NOT applied immediately).
    Resolved { a: Staged, b: Staged },
    /// Pair skipped for this tick with a recorded reason.
    Skipped(SkipReason),
}

/// End-of-step overlap gate: circles touching or interpenetrating.
#[inline]
pub fn is_collision(a: &Particle, b: &Particle) -> bool {
    a.pos.distance(b.pos) <= a.radius + b.radius
}

/// Resolve an overlapping pair via time-of-impact rewind and elastic impulse.
///
/// The impact offset `t` (how long ago the surfaces first touched) solves
/// `||(p_a - p_b) - t*(v_b - v_a)|| = r_a + r_b`, i.e. the quadratic with
/// `A = |v_b - v_a|^2`, `B = 2*(p_a - p_b).(v_b - v_a)`,
/// `C = |p_a - p_b|^2 - (r_a + r_b)^2`.
///
/// Rewind is linear back-extrapolation (`p - v*t`, acceleration is not
/// re-integrated), the impulse is the standard two-dimensional two-body
/// elastic collision formula, and the replay uses the post-impact velocity
/// (`p_impact + v'*t`).
pub fn resolve_collision(a: &Particle, b: &Particle) -> PairOutcome {
    let distance_v = a.pos - b.pos;
    let velocity_v = b.vel - a.vel;
    let total_radius = a.radius + b.radius;

    let Some((t1, t2)) = solve_quadratic(
        velocity_v.length_squared(),
        2.0 * distance_v.dot(velocity_v),
        distance_v.length_squared() - total_radius * total_radius,
    ) else {
        return PairOutcome::Skipped(SkipReason::NoImpactTime);
    };

    // Pick by sign, not by order
    let dt_impact = if t1 > 0.0 { t1 } else { t2 };
    if dt_impact <= 0.0 {
        return PairOutcome::Skipped(SkipReason::NonPositiveImpactTime);
    }

    // Rewind both centers to the moment of first contact
    let pos_a = a.pos - a.vel * dt_impact;
    let pos_b = b.pos - b.vel * dt_impact;

    let separation = pos_a - pos_b;
    let sep_len_sq = separation.length_squared();
    if sep_len_sq <= COINCIDENT_EPS_SQ {
        // Exactly coincident centers, the impulse axis is undefined
        return PairOutcome::Skipped(SkipReason::CoincidentCenters);
    }

    // Two-body elastic impulse along the contact normal:
    //   v_a' = v_a - (2 m_b / (m_a + m_b)) * ((v_a - v_b).n / |n|^2) * n
    // and symmetrically for b. Conserves momentum and kinetic energy.
    let total_mass = a.mass + b.mass;
    let rel_vel = a.vel - b.vel;
    let projection = rel_vel.dot(separation) / sep_len_sq;
    let new_vel_a = a.vel - separation * (2.0 * b.mass / total_mass) * projection;
    let new_vel_b = b.vel + separation * (2.0 * a.mass / total_mass) * projection;

    // Replay to the tick boundary with the post-impact velocities
    PairOutcome::Resolved {
        a: Staged {
            pos: pos_a + new_vel_a * dt_impact,
            vel: new_vel_a,
        },
        b: Staged {
            pos: pos_b + new_vel_b * dt_impact,
            vel: new_vel_b,
        },
    }
}
