//! Conway's Game of Life smoke test: 100x100 torus, 35% fill, 200
//! generations, snapshots under `output/`.

use hrot::prelude::*;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let config = SimConfig::life_test();
    let rule = Rule::conway();
    tracing::info!(rule = %rule, "running Game of Life test");

    match Simulation::new(config, rule).and_then(|mut sim| sim.run()) {
        Ok(summary) => {
            println!(
                "{} generations, activity {:.2}%, {:.3} ms/generation",
                summary.generations,
                summary.activity_score(),
                summary.ms_per_generation()
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "simulation failed");
            std::process::exit(1);
        }
    }
}
