//! Standard patterns and rules.

use hrot_core::Rule;
use hrot_grid::Grid;

use crate::grid_from_rows;

/// Conway's Game of Life, `R1,C2,S2-3,B3`.
pub fn life_rule() -> Rule {
    Rule::conway()
}

/// A horizontal blinker centred in a 5x5 grid, with its vertical phase.
///
/// Returns `(horizontal, vertical)`.
pub fn blinker() -> (Grid, Grid) {
    (
        grid_from_rows(&[".....", ".....", ".OOO.", ".....", "....."]),
        grid_from_rows(&[".....", "..O..", "..O..", "..O..", "....."]),
    )
}

/// A south-east glider in the top-left corner of an 8x8 grid.
pub fn glider() -> Grid {
    grid_from_rows(&[
        ".O......",
        "..O.....",
        "OOO.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ])
}
