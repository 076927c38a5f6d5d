use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// An open cell a path may pass through.
    Empty,
    /// An open cell holding one crane to unload.
    Crane,
    /// A blocked cell no path may ever occupy.
    Building,
}

impl Cell {
    /// The character used for this cell in text maps and in `Display` output.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Crane => 'C',
            Cell::Building => 'X',
        }
    }

    /// Parses a text-map character, returning `None` for anything that is
    /// not `.`, `C`, or `X`.
    pub fn from_char(character: char) -> Option<Cell> {
        match character {
            '.' => Some(Cell::Empty),
            'C' => Some(Cell::Crane),
            'X' => Some(Cell::Building),
            _ => None,
        }
    }
}

/// An immutable rectangular grid of [`Cell`]s.
///
/// A grid always has at least one row and one column, and its start cell
/// (0, 0) is never a building; both invariants are established at
/// construction, before any solver sees the grid. Cells are stored in a
/// single row-major vector.
///
/// # Examples
///
/// ```
/// use cranes::{Cell, Grid};
///
/// let grid = Grid::parse("C.X\n..C").unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.columns(), 3);
/// assert_eq!(grid.get(0, 0), Cell::Crane);
/// assert_eq!(grid.get(0, 2), Cell::Building);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from a matrix of cells, one inner `Vec` per row.
    ///
    /// Returns an error if the matrix is empty, if the rows are not all the
    /// same length, or if the start cell is a building.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Grid> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(Error::EmptyGrid);
        }

        let columns = rows[0].len();
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (row, content) in rows.iter().enumerate() {
            if content.len() != columns {
                return Err(Error::RaggedRow {
                    row,
                    expected: columns,
                    found: content.len(),
                });
            }
            cells.extend_from_slice(content);
        }

        if cells[0] == Cell::Building {
            return Err(Error::BuildingAtStart);
        }

        Ok(Grid {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    /// Parses a text map with one line per row: `.` for an empty cell, `C`
    /// for a crane, and `X` for a building.
    ///
    /// # Examples
    ///
    /// ```
    /// use cranes::Grid;
    ///
    /// let grid = Grid::parse(".C\nX.").unwrap();
    /// assert_eq!(grid.rows(), 2);
    ///
    /// assert!(Grid::parse(".C\n?.").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Grid> {
        let mut rows = Vec::new();
        for (row, line) in text.lines().enumerate() {
            let mut content = Vec::with_capacity(line.len());
            for (column, character) in line.chars().enumerate() {
                let cell = Cell::from_char(character).ok_or(Error::UnknownCell {
                    character,
                    row,
                    column,
                })?;
                content.push(cell);
            }
            rows.push(content);
        }
        Grid::from_rows(&rows)
    }

    /// Generates a random grid, mainly useful as a test or benchmark
    /// fixture. Each cell is independently a crane with probability
    /// `crane_probability` and a building with probability
    /// `building_probability`; the start cell is forced to be non-building.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero, or if the probabilities are
    /// negative or sum to more than 1.
    pub fn random(
        rows: usize,
        columns: usize,
        crane_probability: f64,
        building_probability: f64,
        rng: &mut impl Rng,
    ) -> Grid {
        assert!(
            rows > 0 && columns > 0,
            "grid must have at least one row and one column"
        );
        assert!(
            crane_probability >= 0.0
                && building_probability >= 0.0
                && crane_probability + building_probability <= 1.0,
            "cell probabilities must be non-negative and sum to at most 1"
        );

        let mut cells = Vec::with_capacity(rows * columns);
        for _ in 0..rows * columns {
            let roll: f64 = rng.gen();
            cells.push(if roll < crane_probability {
                Cell::Crane
            } else if roll < crane_probability + building_probability {
                Cell::Building
            } else {
                Cell::Empty
            });
        }
        if cells[0] == Cell::Building {
            cells[0] = Cell::Empty;
        }

        Grid {
            rows,
            columns,
            cells,
        }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the classification of the cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) is out of range for a {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_str("\n")?;
            }
            for column in 0..self.columns {
                write!(f, "{}", self.get(row, column).as_char())?;
            }
        }
        Ok(())
    }
}
