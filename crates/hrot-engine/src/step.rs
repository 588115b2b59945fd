//! One-generation state transition.
//!
//! Every cell's next state depends only on the previous buffer and the
//! rule, so rows are computed independently: in parallel on a rayon pool,
//! or sequentially on the calling thread. Both paths run the same row
//! kernel and produce bit-identical output.

use std::error::Error;
use std::fmt;

use hrot_core::Rule;
use hrot_grid::{EdgeBehavior, Grid, ALIVE, DEAD};
use rayon::prelude::*;

use crate::kernel::Kernel;

/// First decaying state.
pub const DECAY_START: u8 = 2;

/// Next state of a single cell in state `state` with `n` alive
/// neighbours.
///
/// - dead: born (`1`) if `birth[n]`, else stays dead
/// - alive: stays alive if `survive[n]`, else enters decay (`2`) when the
///   rule has more than two states, or dies
/// - decaying `k >= 2`: advances to `k + 1`, or to dead once `k + 1`
///   reaches the state count. `n` is ignored.
#[inline]
pub fn transition(state: u8, n: usize, rule: &Rule) -> u8 {
    match state {
        DEAD => {
            if rule.births(n) {
                ALIVE
            } else {
                DEAD
            }
        }
        ALIVE => {
            if rule.survives(n) {
                ALIVE
            } else if rule.states() > 2 {
                DECAY_START
            } else {
                DEAD
            }
        }
        k => {
            let next = u16::from(k) + 1;
            if next < rule.states() {
                next as u8
            } else {
                DEAD
            }
        }
    }
}

/// How a [`Stepper`] distributes rows across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    /// Every row on the calling thread.
    Sequential,
    /// Rayon's global pool.
    #[default]
    Global,
    /// A dedicated pool with this many threads. Must be at least 1.
    Threads(usize),
}

/// Errors from a stepping call or stepper construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The current and next buffers have different dimensions.
    DimensionMismatch {
        /// `(width, height)` of the current buffer.
        current: (u32, u32),
        /// `(width, height)` of the next buffer.
        next: (u32, u32),
    },
    /// A dedicated thread pool could not be built.
    ThreadPool {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { current, next } => write!(
                f,
                "buffer dimensions differ: current {}x{}, next {}x{}",
                current.0, current.1, next.0, next.1
            ),
            Self::ThreadPool { reason } => write!(f, "thread pool build failed: {reason}"),
        }
    }
}

impl Error for StepError {}

enum Executor {
    Sequential,
    Global,
    Pool(rayon::ThreadPool),
}

/// A rule and edge topology compiled for repeated stepping.
///
/// # Examples
///
/// ```
/// use hrot_core::Rule;
/// use hrot_engine::Stepper;
/// use hrot_grid::{EdgeBehavior, Grid};
///
/// // Horizontal blinker on a 5x5 torus.
/// let mut current = Grid::new(5, 5).unwrap();
/// for x in 1..=3 {
///     current.set(x, 2, 1);
/// }
/// let mut next = Grid::new(5, 5).unwrap();
///
/// let stepper = Stepper::new(Rule::conway(), EdgeBehavior::Wrap);
/// let changed = stepper.step(&current, &mut next).unwrap();
/// assert_eq!(changed, 4);
/// assert_eq!(next.get(2, 1), Some(1));
/// assert_eq!(next.get(1, 2), Some(0));
/// ```
pub struct Stepper {
    rule: Rule,
    edge: EdgeBehavior,
    kernel: Kernel,
    executor: Executor,
}

impl fmt::Debug for Stepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper")
            .field("rule", &self.rule.to_string())
            .field("edge", &self.edge)
            .field("threads", &self.threads())
            .finish()
    }
}

impl Stepper {
    /// Compile `rule` for stepping on rayon's global pool.
    pub fn new(rule: Rule, edge: EdgeBehavior) -> Self {
        Self {
            kernel: Kernel::for_rule(&rule),
            rule,
            edge,
            executor: Executor::Global,
        }
    }

    /// Compile `rule` with an explicit parallelism mode.
    ///
    /// # Errors
    ///
    /// Returns `Err(StepError::ThreadPool)` if `Threads(0)` is requested
    /// or the dedicated pool cannot be spawned.
    pub fn with_parallelism(
        rule: Rule,
        edge: EdgeBehavior,
        parallelism: Parallelism,
    ) -> Result<Self, StepError> {
        let executor = match parallelism {
            Parallelism::Sequential => Executor::Sequential,
            Parallelism::Global => Executor::Global,
            Parallelism::Threads(0) => {
                return Err(StepError::ThreadPool {
                    reason: "thread count must be at least 1".to_string(),
                })
            }
            Parallelism::Threads(n) => Executor::Pool(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("hrot-step-{i}"))
                    .build()
                    .map_err(|e| StepError::ThreadPool {
                        reason: e.to_string(),
                    })?,
            ),
        };
        Ok(Self {
            executor,
            ..Self::new(rule, edge)
        })
    }

    /// The compiled rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Edge topology.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// The compiled neighbourhood kernel.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Number of threads rows are spread across.
    pub fn threads(&self) -> usize {
        match &self.executor {
            Executor::Sequential => 1,
            Executor::Global => rayon::current_num_threads(),
            Executor::Pool(pool) => pool.current_num_threads(),
        }
    }

    /// Compute the generation after `current` into `next`.
    ///
    /// `current` is only read; every cell of `next` is overwritten.
    /// Returns the number of cells whose state changed.
    ///
    /// # Errors
    ///
    /// Returns `Err(StepError::DimensionMismatch)` if the two grids have
    /// different dimensions; `next` is left untouched.
    pub fn step(&self, current: &Grid, next: &mut Grid) -> Result<u64, StepError> {
        if current.dims() != next.dims() {
            return Err(StepError::DimensionMismatch {
                current: current.dims(),
                next: next.dims(),
            });
        }
        let width = current.width() as usize;
        let height = current.height() as usize;
        let cells = current.cells();
        let deltas = self.kernel.flat_deltas(width);
        let row = |(y, out): (usize, &mut [u8])| -> u64 {
            self.step_row(cells, out, y, width, height, &deltas)
        };

        let out = next.cells_mut();
        let changed: u64 = match &self.executor {
            Executor::Sequential => out.chunks_mut(width).enumerate().map(row).sum(),
            Executor::Global => out.par_chunks_mut(width).enumerate().map(row).sum(),
            Executor::Pool(pool) => {
                pool.install(|| out.par_chunks_mut(width).enumerate().map(row).sum())
            }
        };
        Ok(changed)
    }

    fn step_row(
        &self,
        cells: &[u8],
        out: &mut [u8],
        y: usize,
        width: usize,
        height: usize,
        deltas: &[isize],
    ) -> u64 {
        let r = self.kernel.range() as usize;
        let interior_row = y >= r && y + r < height;
        let base = y * width;
        let mut changed = 0;
        for (x, slot) in out.iter_mut().enumerate() {
            let idx = base + x;
            let state = cells[idx];
            let n = if state > ALIVE {
                0
            } else if interior_row && x >= r && x + r < width {
                Kernel::count_interior(cells, idx, deltas)
            } else {
                self.kernel.count(cells, width, height, x, y, self.edge)
            };
            let next = transition(state, n, &self.rule);
            *slot = next;
            if next != state {
                changed += 1;
            }
        }
        changed
    }
}

/// One-shot convenience over [`Stepper`]: compute the generation after
/// `current` into `next` under `rule` and `edge`, returning the number
/// of changed cells.
pub fn step(
    current: &Grid,
    next: &mut Grid,
    rule: &Rule,
    edge: EdgeBehavior,
) -> Result<u64, StepError> {
    Stepper::new(rule.clone(), edge).step(current, next)
}
