use log::debug;

use crate::grid::Grid;
use crate::path::{Path, StepDirection};

/// Solves the crane unloading problem by enumerating every monotone path.
///
/// For every length `L` from 1 up to `rows + columns - 2`, every `L`-bit
/// integer is replayed as a move sequence, bit 1 meaning `East` and bit 0
/// meaning `South`. A candidate whose indicated step is invalid is discarded
/// outright; the alternate direction is never tried, so the enumeration is a
/// fixed bit-to-direction mapping with rejection. A fully valid candidate
/// replaces the best path found so far only when it collects strictly more
/// cranes, so ties keep the first path found at each step count.
///
/// This runs in exponential time and exists as a correctness reference for
/// [`crane_unloading_dyn_prog`](crate::solver::crane_unloading_dyn_prog),
/// not for production-size grids.
///
/// # Panics
///
/// Panics if the grid is empty or if `rows + columns - 2 >= 64`, the point
/// where the bit enumeration no longer fits a 64-bit count.
///
/// # Examples
///
/// ```
/// use cranes::{crane_unloading_exhaustive, Grid};
///
/// let grid = Grid::parse("C.\n.C").unwrap();
/// let best = crane_unloading_exhaustive(&grid);
/// assert_eq!(best.total_cranes(), 2);
/// ```
pub fn crane_unloading_exhaustive(setting: &Grid) -> Path<'_> {
    assert!(setting.rows() > 0, "grid must have at least one row");
    assert!(setting.columns() > 0, "grid must have at least one column");

    let max_steps = setting.rows() + setting.columns() - 2;
    assert!(
        max_steps < 64,
        "grid too large for exhaustive search: {} steps",
        max_steps
    );

    let mut best = Path::new(setting);
    let mut candidates: u64 = 0;

    for steps in 1..=max_steps {
        for bits in 0..(1u64 << steps) {
            candidates += 1;
            let mut current = Path::new(setting);
            let mut valid = true;

            for k in 0..steps {
                let direction = if (bits >> k) & 1 == 1 {
                    StepDirection::East
                } else {
                    StepDirection::South
                };

                if current.is_step_valid(direction) {
                    current.add_step(direction);
                } else {
                    valid = false;
                    break;
                }
            }

            if valid && current.total_cranes() > best.total_cranes() {
                best = current;
            }
        }
    }

    debug!(
        "exhaustive search examined {} candidates, best path collects {} cranes",
        candidates,
        best.total_cranes()
    );
    best
}
