//! Stepping engine and simulation driver for HROT automata.
//!
//! [`Stepper`] computes one generation from another, spreading rows
//! across a rayon pool. [`Simulation`] owns a pair of alternating grids,
//! writes a snapshot per generation, and reports a [`RunSummary`] with the
//! run's activity score.
//!
//! ```
//! use hrot_core::Rule;
//! use hrot_engine::{InitMode, SimConfig, Simulation};
//!
//! let config = SimConfig {
//!     width: 20,
//!     height: 20,
//!     max_generations: 4,
//!     init: InitMode::Random { density: 0.35 },
//!     seed: Some(7),
//!     write_output: false,
//!     ..SimConfig::default()
//! };
//! let mut sim = Simulation::new(config, Rule::conway()).unwrap();
//! while sim.has_budget() {
//!     sim.advance().unwrap();
//! }
//! let summary = sim.finish().unwrap();
//! assert!(summary.activity_score() <= 100.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod error;
pub mod kernel;
pub mod metrics;
pub mod run_info;
pub mod step;

pub use config::{ConfigError, InitMode, SimConfig};
pub use driver::{RunPhase, Simulation};
pub use error::SimError;
pub use kernel::Kernel;
pub use metrics::{GenerationStats, RunSummary};
pub use run_info::{RunInfo, RUN_INFO_FILE};
pub use step::{step, transition, Parallelism, StepError, Stepper};
