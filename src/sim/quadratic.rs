//! Real-root quadratic solver
//!
//! The narrow phase reduces time-of-impact to a quadratic in the backward
//! time offset; this is the one numeric helper it needs.

/// Solve `a*t^2 + b*t + c = 0` for real roots.
///
/// Returns `None` when `a == 0` (degenerate - e.g. zero relative velocity
/// between a particle pair, there is no meaningful quadratic and no linear
/// fallback is attempted) or when the discriminant is negative.
///
/// A zero discriminant yields two identical roots (tangency). Root order is
/// unspecified; callers must pick by sign, not position.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    if a == 0.0 {
        return None;
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let t1 = (-b + sqrt_disc) / (2.0 * a);
    let t2 = (-b - sqrt_disc) / (2.0 * a);
    Some((t1, t2))
}
