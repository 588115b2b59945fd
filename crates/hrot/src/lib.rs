//! HROT: higher-range outer-totalistic cellular automata.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all HROT sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use hrot::prelude::*;
//!
//! let rule: Rule = "R2,C3,S1-3,B2,NN".parse().unwrap();
//! let config = SimConfig {
//!     width: 24,
//!     height: 24,
//!     max_generations: 8,
//!     seed: Some(42),
//!     write_output: false,
//!     ..SimConfig::default()
//! };
//! let summary = Simulation::new(config, rule).unwrap().run().unwrap();
//! assert_eq!(summary.generations, 8);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`rule`] | `hrot-core` | Rules, neighbourhoods, rule text |
//! | [`grid`] | `hrot-grid` | Cell buffers, edges, init, snapshots |
//! | [`engine`] | `hrot-engine` | Stepping, simulation driver, run info |
//! | [`daily`] | `hrot-daily` | Date-seeded rule generation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Rule model and rule text (`hrot-core`).
pub use hrot_core as rule;

/// Grid storage, initialisation, and snapshots (`hrot-grid`).
pub use hrot_grid as grid;

/// Stepping engine and simulation driver (`hrot-engine`).
///
/// [`engine::Stepper`] for single steps, [`engine::Simulation`] for
/// full runs with snapshots.
pub use hrot_engine as engine;

/// Daily rule generation (`hrot-daily`).
pub use hrot_daily as daily;

/// Common imports for typical HROT usage.
pub mod prelude {
    // Rules
    pub use hrot_core::{parse, serialize, Neighborhood, Rule, RuleError};

    // Grids
    pub use hrot_grid::{EdgeBehavior, Grid, GridError};

    // Engine
    pub use hrot_engine::{
        InitMode, Parallelism, RunInfo, RunSummary, SimConfig, SimError, Simulation, Stepper,
    };

    // Daily
    pub use hrot_daily::{DailyRuleGenerator, DailyRun, DailySeed};
}
