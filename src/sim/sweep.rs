//! Sweep-and-prune broad phase
//!
//! 1-D sweep along the x axis: particles whose `[x - r, x + r]` intervals
//! chain together form one cluster, and only pairs inside a cluster reach
//! the narrow phase. The sweep never bounds y, so clusters can contain
//! pairs with no real overlap - the narrow-phase circle test is the
//! correctness gate, this pass is purely a pair-count optimization.

use super::particle::Particle;

/// Partition particles into interaction clusters of collection indices.
///
/// Sorts indices by ascending `pos.x`, then walks the order keeping a
/// running maximum of `pos.x + radius`: a particle whose `pos.x - radius`
/// is within that maximum extends the current cluster, otherwise it starts
/// a new one. An empty slice yields no clusters.
pub fn clusters(particles: &[Particle]) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..particles.len()).collect();
    order.sort_by(|&a, &b| {
        particles[a]
            .pos
            .x
            .partial_cmp(&particles[b].pos.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut out: Vec<Vec<usize>> = Vec::new();
    let mut max_reach = f32::NEG_INFINITY;

    for idx in order {
        let p = &particles[idx];
        let lo = p.pos.x - p.radius;
        let hi = p.pos.x + p.radius;

        match out.last_mut() {
            Some(cluster) if lo <= max_reach => cluster.push(idx),
            _ => out.push(vec![idx]),
        }
        max_reach = max_reach.max(hi);
    }

    out
}
