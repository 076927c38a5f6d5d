use thiserror::Error;

/// Errors that can occur while constructing a [`Grid`](crate::grid::Grid)
/// from external input.
///
/// Everything that can go wrong during a solve is a programming-contract
/// violation and panics instead; see the `# Panics` sections on the solver
/// and path methods.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input contained no rows or no columns.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// A row of the input had a different length than the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An unrecognized character was encountered while parsing a text map.
    #[error("unknown cell character {character:?} at row {row}, column {column}")]
    UnknownCell {
        character: char,
        row: usize,
        column: usize,
    },

    /// The start cell (0, 0) was a building, so no path could ever begin.
    #[error("start cell (0, 0) must not be a building")]
    BuildingAtStart,
}

pub type Result<T> = std::result::Result<T, Error>;
