//! Random rule generation from a daily seed.

use std::io;
use std::path::{Path, PathBuf};

use hrot_core::{Neighborhood, Rule, RuleError};
use hrot_engine::{InitMode, RunInfo, RunSummary, SimConfig, SimError, Simulation};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::seed::DailySeed;

/// Inclusive bounds of the drawn range.
pub const RANGE_BOUNDS: (u32, u32) = (1, 8);
/// Inclusive bounds of the drawn state count.
pub const STATE_BOUNDS: (u32, u32) = (2, 16);
/// Chance, in percent, that any survive or birth entry is set.
pub const ENTRY_PERCENT: u32 = 15;
/// Fixed daily grid size.
pub const DAILY_SIZE: u32 = 100;
/// Fixed daily generation budget.
pub const DAILY_GENERATIONS: u64 = 200;
/// Fixed daily random-fill density.
pub const DAILY_DENSITY: f32 = 0.35;

/// Derives a rule and run setup from a [`DailySeed`].
///
/// # Examples
///
/// ```
/// use hrot_daily::{DailyRuleGenerator, DailySeed};
///
/// let seed = DailySeed::from_date(2025, 11, 22).unwrap();
/// let a = DailyRuleGenerator::new(seed).generate().unwrap();
/// let b = DailyRuleGenerator::new(seed).generate().unwrap();
/// assert_eq!(a.rule_text(), b.rule_text());
/// ```
#[derive(Clone, Debug)]
pub struct DailyRuleGenerator {
    seed: DailySeed,
    output_folder: PathBuf,
}

impl DailyRuleGenerator {
    /// A generator writing to the default `output` folder.
    pub fn new(seed: DailySeed) -> Self {
        Self {
            seed,
            output_folder: SimConfig::default().output_folder,
        }
    }

    /// A generator for today's UTC date.
    pub fn today() -> Self {
        Self::new(DailySeed::today())
    }

    /// Write snapshots and the run-info record under `folder`.
    pub fn output_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.output_folder = folder.into();
        self
    }

    /// The seed driving generation.
    pub fn seed(&self) -> DailySeed {
        self.seed
    }

    /// Draw the rule.
    ///
    /// Seeds one `ChaCha8Rng` with the daily seed, then draws in a fixed
    /// order: range, state count, neighbourhood, and for every count in
    /// `0..=max_count` a survive entry followed by a birth entry. The
    /// generator is handed to the returned [`DailyRun`] so the initial
    /// grid continues the same stream.
    ///
    /// # Errors
    ///
    /// Only if the drawn bounds fall outside what [`Rule::new`] accepts,
    /// which the fixed bounds here never do.
    pub fn generate(&self) -> Result<DailyRun, RuleError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.value());

        let range = rng.random_range(RANGE_BOUNDS.0..=RANGE_BOUNDS.1);
        let states = rng.random_range(STATE_BOUNDS.0..=STATE_BOUNDS.1);
        let neighborhood = if rng.random_range(0..=1u32) == 0 {
            Neighborhood::Moore
        } else {
            Neighborhood::VonNeumann
        };
        let max = neighborhood.max_count(range);

        let mut survive = Vec::new();
        let mut birth = Vec::new();
        for n in 0..=max {
            if rng.random_range(1..=100u32) <= ENTRY_PERCENT {
                survive.push(n);
            }
            if rng.random_range(1..=100u32) <= ENTRY_PERCENT {
                birth.push(n);
            }
        }

        let rule = Rule::new(range, states, neighborhood)?
            .with_survive(survive)
            .with_birth(birth);
        let rule_text = rule.to_string();

        info!(
            seed = self.seed.value(),
            rule = %rule_text,
            range,
            states,
            neighborhood = neighborhood.name(),
            "generated daily rule"
        );

        Ok(DailyRun {
            seed: self.seed,
            config: self.config(),
            rule,
            rule_text,
            rng,
        })
    }

    /// The fixed daily setup: 100x100 torus, 35% random fill, 200
    /// generations.
    ///
    /// `seed` carries the daily seed so it is reported by
    /// [`Simulation::seed`](hrot_engine::Simulation::seed), but the daily
    /// initial grid is not drawn from it afresh: it continues the stream
    /// the rule was drawn from (see [`DailyRun::into_simulation`]).
    /// Passing this config to `Simulation::new` yields a different grid.
    pub fn config(&self) -> SimConfig {
        SimConfig {
            width: DAILY_SIZE,
            height: DAILY_SIZE,
            max_generations: DAILY_GENERATIONS,
            output_folder: self.output_folder.clone(),
            init: InitMode::Random {
                density: DAILY_DENSITY,
            },
            seed: Some(self.seed.value()),
            ..SimConfig::default()
        }
    }
}

/// A generated rule with its run setup and the generator stream that
/// produced it.
#[derive(Clone, Debug)]
pub struct DailyRun {
    seed: DailySeed,
    rule: Rule,
    rule_text: String,
    config: SimConfig,
    rng: ChaCha8Rng,
}

impl DailyRun {
    /// The seed the rule was drawn from.
    pub fn seed(&self) -> DailySeed {
        self.seed
    }

    /// The drawn rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The drawn rule in rule-text form.
    pub fn rule_text(&self) -> &str {
        &self.rule_text
    }

    /// The run setup. Build the simulation with
    /// [`into_simulation`](Self::into_simulation) to get the daily initial
    /// grid; `Simulation::new` on this config reseeds and draws another.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Mutable access to the run setup, e.g. to disable output.
    pub fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    /// The run-info header for this run.
    pub fn run_info(&self) -> RunInfo {
        RunInfo::for_rule(self.seed.value(), &self.rule, self.config.max_generations)
    }

    /// Write (truncating) `rule_info.txt` in the output folder.
    pub fn write_run_info(&self) -> io::Result<PathBuf> {
        self.run_info().write(&self.config.output_folder)
    }

    /// The output folder.
    pub fn output_folder(&self) -> &Path {
        &self.config.output_folder
    }

    /// Build the simulation, initialising the grid from the generator
    /// stream that drew the rule.
    pub fn into_simulation(mut self) -> Result<Simulation, SimError> {
        Simulation::with_rng(self.config, self.rule, &mut self.rng)
    }

    /// Write the run-info header (when output is enabled), then run to
    /// completion.
    pub fn run(self) -> Result<RunSummary, SimError> {
        if self.config.write_output {
            self.write_run_info().map_err(SimError::RunInfo)?;
        }
        self.into_simulation()?.run()
    }
}
