use log::debug;

use crate::grid::{Cell, Grid};
use crate::path::{Path, StepDirection};

/// Solves the crane unloading problem with dynamic programming.
///
/// A `rows x columns` table of `Option<Path>` is filled in row-major order,
/// so predecessors are always computed before dependents. Each non-building
/// cell takes the better of its predecessor above extended one step `South`
/// and its predecessor to the left extended one step `East`; when both exist
/// and tie on crane count, the vertical extension wins. Building cells never
/// receive an entry and stay unreachable. The best entry of the finished
/// table, scanned in row-major order with ties kept by the earlier entry, is
/// the answer.
///
/// Runs in `O(rows * columns)` table operations and always returns the same
/// optimal crane count as
/// [`crane_unloading_exhaustive`](crate::solver::crane_unloading_exhaustive),
/// though the two may pick different paths when several are optimal.
///
/// # Panics
///
/// Panics if the grid is empty.
///
/// # Examples
///
/// ```
/// use cranes::{crane_unloading_dyn_prog, Grid};
///
/// let grid = Grid::parse("C.X\n.CC").unwrap();
/// let best = crane_unloading_dyn_prog(&grid);
/// assert_eq!(best.total_cranes(), 3);
/// ```
pub fn crane_unloading_dyn_prog(setting: &Grid) -> Path<'_> {
    assert!(setting.rows() > 0, "grid must have at least one row");
    assert!(setting.columns() > 0, "grid must have at least one column");

    let mut table: Vec<Vec<Option<Path<'_>>>> =
        vec![vec![None; setting.columns()]; setting.rows()];
    table[0][0] = Some(Path::new(setting));

    for row in 0..setting.rows() {
        for column in 0..setting.columns() {
            if setting.get(row, column) == Cell::Building {
                continue;
            }

            let from_above = if row > 0 {
                table[row - 1][column]
                    .clone()
                    .filter(|path| path.is_step_valid(StepDirection::South))
                    .map(|mut path| {
                        path.add_step(StepDirection::South);
                        path
                    })
            } else {
                None
            };

            let from_left = if column > 0 {
                table[row][column - 1]
                    .clone()
                    .filter(|path| path.is_step_valid(StepDirection::East))
                    .map(|mut path| {
                        path.add_step(StepDirection::East);
                        path
                    })
            } else {
                None
            };

            let incoming = match (from_above, from_left) {
                (Some(above), Some(left)) => {
                    // Ties go to the vertical extension.
                    if above.total_cranes() >= left.total_cranes() {
                        Some(above)
                    } else {
                        Some(left)
                    }
                }
                (above, left) => above.or(left),
            };

            // The start cell keeps its base-case entry.
            if let Some(path) = incoming {
                table[row][column] = Some(path);
            }
        }
    }

    assert!(
        table[0][0].is_some(),
        "start cell must always be reachable"
    );

    let mut best = (0, 0);
    for row in 0..setting.rows() {
        for column in 0..setting.columns() {
            if let (Some(candidate), Some(incumbent)) =
                (&table[row][column], &table[best.0][best.1])
            {
                if candidate.total_cranes() > incumbent.total_cranes() {
                    best = (row, column);
                }
            }
        }
    }

    let best = table[best.0][best.1]
        .take()
        .expect("a best entry must exist once the table is filled");
    debug!(
        "dynamic programming best path collects {} cranes in {} steps",
        best.total_cranes(),
        best.steps().len()
    );
    best
}
