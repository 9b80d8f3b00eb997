//! Headless demo driver
//!
//! Runs a seeded simulation at the fixed timestep and logs energy and
//! momentum drift. A renderer would call the same `tick` and read
//! positions back out; here we just exercise the core.
//!
//! Usage: particle-arena [particles] [seconds] [seed] [--json]
//! `--json` prints the final particle states as JSON to stdout.

use particle_arena::consts::SIM_DT;
use particle_arena::{ParticleGroup, Result};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json_dump = args.iter().any(|a| a == "--json");
    let mut numeric = args.iter().filter(|a| !a.starts_with("--"));
    let num_particles: usize = numeric
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(100);
    let seconds: f32 = numeric.next().and_then(|a| a.parse().ok()).unwrap_or(10.0);
    let seed: u64 = numeric.next().and_then(|a| a.parse().ok()).unwrap_or(1);

    let mut group = ParticleGroup::new();
    group.spawn_random(num_particles, seed)?;

    let e0 = group.kinetic_energy();
    log::info!(
        "running {num_particles} particles for {seconds}s at {:.0} Hz (seed {seed})",
        1.0 / SIM_DT
    );
    log::info!("initial kinetic energy: {e0:.1}");

    let ticks = (seconds / SIM_DT) as u64;
    let report_every = (ticks / 10).max(1);
    for i in 0..ticks {
        group.tick(SIM_DT);
        if (i + 1) % report_every == 0 {
            let e = group.kinetic_energy();
            let p = group.momentum();
            log::info!(
                "t={:.2}s ke={e:.1} (drift {:+.3}%) momentum=({:.1}, {:.1})",
                (i + 1) as f32 * SIM_DT,
                (e - e0) / e0 * 100.0,
                p.x,
                p.y
            );
        }
    }

    if json_dump {
        match serde_json::to_string_pretty(group.particles()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::warn!("snapshot failed: {e}"),
        }
    }

    Ok(())
}
