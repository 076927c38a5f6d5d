use crate::grid::{Cell, Grid};

/// A single move along a monotone path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Move one column to the right.
    East,
    /// Move one row down.
    South,
}

/// A monotone East/South walk over a [`Grid`], starting at (0, 0).
///
/// A path owns its move sequence and tracks its current position together
/// with the number of cranes collected so far, counting the start cell.
/// Since every move increases `row + column` by one and the path can never
/// leave the grid, a path holds at most `rows + columns - 2` moves. Paths
/// are cheap value objects and can be cloned freely.
///
/// # Examples
///
/// ```
/// use cranes::{Grid, Path, StepDirection};
///
/// let grid = Grid::parse("C.\n.C").unwrap();
/// let mut path = Path::new(&grid);
/// assert_eq!(path.total_cranes(), 1);
///
/// assert!(path.is_step_valid(StepDirection::East));
/// path.add_step(StepDirection::East);
/// path.add_step(StepDirection::South);
/// assert_eq!((path.row(), path.column()), (1, 1));
/// assert_eq!(path.total_cranes(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Path<'a> {
    grid: &'a Grid,
    steps: Vec<StepDirection>,
    row: usize,
    column: usize,
    cranes: usize,
}

impl<'a> Path<'a> {
    /// Creates the zero-length path at the start cell of `grid`. The crane
    /// count starts at 1 if (0, 0) holds a crane, else 0.
    pub fn new(grid: &'a Grid) -> Path<'a> {
        let cranes = usize::from(grid.get(0, 0) == Cell::Crane);
        Path {
            grid,
            steps: Vec::new(),
            row: 0,
            column: 0,
            cranes,
        }
    }

    /// The cell one step in `direction` from the current position, or `None`
    /// if that step would leave the grid.
    fn destination(&self, direction: StepDirection) -> Option<(usize, usize)> {
        match direction {
            StepDirection::East => {
                (self.column + 1 < self.grid.columns()).then(|| (self.row, self.column + 1))
            }
            StepDirection::South => {
                (self.row + 1 < self.grid.rows()).then(|| (self.row + 1, self.column))
            }
        }
    }

    /// Returns whether one step in `direction` stays inside the grid and
    /// lands on a non-building cell. Does not mutate the path.
    pub fn is_step_valid(&self, direction: StepDirection) -> bool {
        match self.destination(direction) {
            Some((row, column)) => self.grid.get(row, column) != Cell::Building,
            None => false,
        }
    }

    /// Appends one move, advancing the current position and, if the
    /// destination holds a crane, the crane count.
    ///
    /// # Panics
    ///
    /// Panics if [`is_step_valid`](Path::is_step_valid) does not hold for
    /// `direction`; callers must check validity first.
    pub fn add_step(&mut self, direction: StepDirection) {
        let (row, column) = self
            .destination(direction)
            .filter(|&(row, column)| self.grid.get(row, column) != Cell::Building)
            .expect("add_step requires is_step_valid to hold for the direction");

        self.steps.push(direction);
        self.row = row;
        self.column = column;
        if self.grid.get(row, column) == Cell::Crane {
            self.cranes += 1;
        }
    }

    /// Returns the number of cranes collected so far, including the start
    /// cell. Monotone non-decreasing as steps are added.
    #[inline]
    pub fn total_cranes(&self) -> usize {
        self.cranes
    }

    /// Returns the row of the current position.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of the current position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the move sequence, oldest first.
    #[inline]
    pub fn steps(&self) -> &[StepDirection] {
        &self.steps
    }

    /// Iterates over the `(row, column)` coordinates the path visits, in
    /// order, starting with (0, 0).
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut row = 0;
        let mut column = 0;
        std::iter::once((0, 0)).chain(self.steps.iter().map(move |step| {
            match step {
                StepDirection::East => column += 1,
                StepDirection::South => row += 1,
            }
            (row, column)
        }))
    }
}
