//! Benchmark profiles for the HROT engine.
//!
//! - [`reference_profile`]: Game of Life on a 100x100 torus (10K cells)
//! - [`stress_profile`]: a range-5 multi-state rule on 316x316 (~100K cells)
//! - [`random_grid`]: seeded random grids for stepping benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hrot_core::{Neighborhood, Rule};
use hrot_engine::{InitMode, SimConfig};
use hrot_grid::{Grid, GridError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Game of Life at the default 100x100 size, in memory.
pub fn reference_profile(seed: u64) -> (SimConfig, Rule) {
    let config = SimConfig {
        seed: Some(seed),
        write_output: false,
        ..SimConfig::life_test()
    };
    (config, Rule::conway())
}

/// A wide-kernel, 8-state rule on ~100K cells, in memory.
pub fn stress_profile(seed: u64) -> (SimConfig, Rule) {
    let config = SimConfig {
        width: 316,
        height: 316,
        max_generations: 50,
        init: InitMode::Random { density: 0.35 },
        seed: Some(seed),
        write_output: false,
        ..SimConfig::default()
    };
    (config, range5_rule())
}

/// `R5,C8,S34-58,B34-45`: a range-5 Moore rule with decay.
pub fn range5_rule() -> Rule {
    Rule::new(5, 8, Neighborhood::Moore)
        .unwrap()
        .with_survive(34..=58)
        .with_birth(34..=45)
}

/// A `width x height` grid filled at `density` from a seeded generator.
pub fn random_grid(width: u32, height: u32, density: f32, seed: u64) -> Result<Grid, GridError> {
    let mut grid = Grid::new(width, height)?;
    grid.fill_random(&mut ChaCha8Rng::seed_from_u64(seed), density)?;
    Ok(grid)
}
