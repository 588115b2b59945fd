//! Daily rule generation.
//!
//! A [`DailySeed`] (the date as `YYYYMMDD`) deterministically selects a
//! random HROT rule and a random initial grid, so every run on the same
//! day reproduces the same automaton.
//!
//! ```no_run
//! use hrot_daily::DailyRuleGenerator;
//!
//! let summary = DailyRuleGenerator::today()
//!     .output_folder("output")
//!     .generate()
//!     .unwrap()
//!     .run()
//!     .unwrap();
//! println!("activity {:.2}%", summary.activity_score());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generator;
pub mod seed;

pub use generator::{DailyRuleGenerator, DailyRun};
pub use seed::DailySeed;
