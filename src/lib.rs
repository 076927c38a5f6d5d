//! Solvers for the crane unloading problem: given a rectangular grid of
//! empty, crane, and building cells, find a monotone East/South path from
//! the top-left cell that passes over as many cranes as possible without
//! ever entering a building.
//!
//! Two independent algorithms solve the same problem and always agree on
//! the optimal crane count: an exhaustive enumeration of all monotone paths
//! ([`crane_unloading_exhaustive`]) and a polynomial-time dynamic program
//! ([`crane_unloading_dyn_prog`]).

pub mod error;
pub mod grid;
pub mod path;
pub mod solver;

pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use path::{Path, StepDirection};
pub use solver::{crane_unloading_dyn_prog, crane_unloading_exhaustive};
