//! The generation loop: double-buffered grids, snapshots, and run
//! bookkeeping.

use std::time::{Duration, Instant};

use hrot_core::Rule;
use hrot_grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, warn};

use crate::config::{InitMode, SimConfig};
use crate::error::SimError;
use crate::metrics::{GenerationStats, RunSummary};
use crate::run_info::RunInfo;
use crate::step::Stepper;

/// Generations between progress log lines.
pub const PROGRESS_INTERVAL: u64 = 100;

/// Lifecycle of a [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    /// Grids allocated and initialised; no generation stepped yet.
    Init,
    /// At least one generation stepped.
    Running,
    /// [`finish`](Simulation::finish) has run; no further stepping.
    Terminal,
}

/// A rule running on a pair of alternating grids.
///
/// # Examples
///
/// ```
/// use hrot_core::Rule;
/// use hrot_engine::{InitMode, SimConfig, Simulation};
///
/// let config = SimConfig {
///     width: 32,
///     height: 32,
///     max_generations: 10,
///     init: InitMode::Center,
///     write_output: false,
///     ..SimConfig::default()
/// };
/// let summary = Simulation::new(config, Rule::conway())
///     .unwrap()
///     .run()
///     .unwrap();
/// assert_eq!(summary.generations, 10);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    stepper: Stepper,
    grids: [Grid; 2],
    current: usize,
    generation: u64,
    total_changed: u64,
    phase: RunPhase,
    seed: Option<u64>,
    initial_active: usize,
    elapsed: Duration,
}

impl Simulation {
    /// Validate `config`, allocate both grids, and apply the init
    /// strategy.
    ///
    /// Random initialisation uses a `ChaCha8Rng` seeded from
    /// `config.seed`, or from a fresh entropy draw that is logged so the
    /// run can be reproduced.
    pub fn new(config: SimConfig, rule: Rule) -> Result<Self, SimError> {
        let seed = match (&config.init, config.seed) {
            (InitMode::Random { .. }, None) => {
                let seed: u64 = rand::rng().random();
                info!(seed, "no seed configured, drew one from entropy");
                Some(seed)
            }
            (_, seed) => seed,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or_default());
        Self::build(config, rule, seed, &mut rng)
    }

    /// Like [`new`](Self::new), but random initialisation draws from
    /// `rng` instead of a generator seeded from the config.
    pub fn with_rng<R: Rng + ?Sized>(
        config: SimConfig,
        rule: Rule,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let seed = config.seed;
        Self::build(config, rule, seed, rng)
    }

    fn build<R: Rng + ?Sized>(
        config: SimConfig,
        rule: Rule,
        seed: Option<u64>,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        config.validate()?;
        let stepper = Stepper::with_parallelism(rule, config.edge, config.parallelism)?;
        let dims = (config.width, config.height);

        let first = match &config.init {
            InitMode::Random { density } => {
                let mut grid = Grid::new(dims.0, dims.1)?;
                grid.fill_random(rng, *density)?;
                grid
            }
            InitMode::Center => {
                let mut grid = Grid::new(dims.0, dims.1)?;
                grid.fill_center();
                grid
            }
            InitMode::File(path) => {
                let grid = Grid::load(path).map_err(|source| SimError::InitFile {
                    path: path.clone(),
                    source,
                })?;
                if grid.dims() != dims {
                    return Err(SimError::InitDimensionMismatch {
                        expected: dims,
                        found: grid.dims(),
                    });
                }
                info!(path = %path.display(), active = grid.active_count(), "loaded initial state");
                grid
            }
        };
        let second = Grid::new(dims.0, dims.1)?;
        let initial_active = first.active_count();

        info!(
            rule = %stepper.rule(),
            width = dims.0,
            height = dims.1,
            init = config.init.name(),
            threads = stepper.threads(),
            initial_active,
            "simulation initialized"
        );

        Ok(Self {
            config,
            stepper,
            grids: [first, second],
            current: 0,
            generation: 0,
            total_changed: 0,
            phase: RunPhase::Init,
            seed,
            initial_active,
            elapsed: Duration::ZERO,
        })
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The rule being run.
    pub fn rule(&self) -> &Rule {
        self.stepper.rule()
    }

    /// The grid holding the current generation.
    pub fn grid(&self) -> &Grid {
        &self.grids[self.current]
    }

    /// Index of the current generation (generations stepped so far).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cells changed over all steps so far.
    pub fn total_changed(&self) -> u64 {
        self.total_changed
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Seed used for random initialisation, if one was.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// `true` while the generation budget allows another step.
    pub fn has_budget(&self) -> bool {
        self.phase != RunPhase::Terminal
            && (self.config.max_generations == 0 || self.generation < self.config.max_generations)
    }

    /// Save, step, and swap once.
    ///
    /// # Errors
    ///
    /// `SimError::Finished` once the budget is exhausted or the run is
    /// terminal; `SimError::Snapshot` if the snapshot of the current
    /// generation cannot be written. Snapshots of earlier generations
    /// remain on disk.
    pub fn advance(&mut self) -> Result<GenerationStats, SimError> {
        if !self.has_budget() {
            return Err(SimError::Finished);
        }
        let started = Instant::now();
        let generation = self.generation;

        if self.config.write_output {
            if let Err(source) = self.grid().save(&self.config.output_folder, generation) {
                error!(generation, error = %source, "failed to save snapshot, aborting run");
                return Err(SimError::Snapshot { generation, source });
            }
        }

        let active = self.grid().active_count();
        if generation % PROGRESS_INTERVAL == 0 {
            info!(generation, active, "progress");
        }

        let (front, back) = self.grids.split_at_mut(1);
        let (current, next) = if self.current == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        let changed = self.stepper.step(current, next)?;

        self.current ^= 1;
        self.generation += 1;
        self.total_changed += changed;
        self.phase = RunPhase::Running;
        self.elapsed += started.elapsed();

        Ok(GenerationStats {
            generation,
            changed,
            active,
        })
    }

    /// Advance until the budget is exhausted, then [`finish`](Self::finish).
    ///
    /// With `max_generations == 0` this never returns unless a step
    /// fails.
    ///
    /// # Errors
    ///
    /// A snapshot failure stops the loop but the run is still finished:
    /// the summary is logged and the activity score recorded for the
    /// generations completed, then `SimError::Snapshot` is returned. The
    /// partial metrics stay available through [`summary`](Self::summary).
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        while self.has_budget() {
            match self.advance() {
                Ok(_) => {}
                Err(e @ SimError::Snapshot { .. }) => {
                    if let Err(record) = self.finish() {
                        warn!(error = %record, "could not record activity of aborted run");
                    }
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }
        self.finish()
    }

    /// Summarise the run, log it, and append the activity score to the
    /// run-info record when output is enabled. Moves to
    /// [`RunPhase::Terminal`].
    ///
    /// Once terminal, further calls return the same summary without
    /// logging or appending again.
    pub fn finish(&mut self) -> Result<RunSummary, SimError> {
        if self.phase == RunPhase::Terminal {
            return Ok(self.summary());
        }
        self.phase = RunPhase::Terminal;
        let summary = self.summary();
        info!(
            generations = summary.generations,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            ms_per_generation = format_args!("{:.3}", summary.ms_per_generation()),
            activity = format_args!("{:.2}", summary.activity_score()),
            final_active = summary.final_active,
            "simulation complete"
        );
        if self.config.write_output {
            RunInfo::append_activity(&self.config.output_folder, summary.activity_score())
                .map_err(SimError::RunInfo)?;
        }
        Ok(summary)
    }

    /// Metrics of the run so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            generations: self.generation,
            changed_cells: self.total_changed,
            cell_count: self.grid().cell_count(),
            elapsed: self.elapsed,
            initial_active: self.initial_active,
            final_active: self.grid().active_count(),
        }
    }
}
