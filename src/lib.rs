//! Minimal sum-of-products solver for 2 to 4 variable Karnaugh maps.
//!
//! Given minterms and don't-cares, the solver finds every prime implicant
//! as a wraparound rectangle of the map and returns all minimum-size covers.
//! Each cover is returned as an expression such as `!A!B + BC + AB`.

#[macro_use]
extern crate tracing;

pub mod cells;
pub mod cover;
pub mod error;
pub mod expr;
pub mod grid;
pub mod group;
pub mod prime;
pub mod problem;
pub mod region;
pub mod solver;
pub mod truth_table;
pub mod utils;

#[cfg(test)]
pub(crate) mod tests;

pub use cells::CellSet;
pub use error::{KMapError, KMapResult};
pub use expr::{Expression, Literal, Term};
pub use grid::{Cell, Grid, Position};
pub use group::Group;
pub use problem::{CellValue, Problem};
pub use solver::{solve, Solution, Solver, SolverOptions};
pub use truth_table::TruthTable;
