pub mod dyn_prog;
pub mod exhaustive;

pub use dyn_prog::crane_unloading_dyn_prog;
pub use exhaustive::crane_unloading_exhaustive;

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{crane_unloading_dyn_prog, crane_unloading_exhaustive};
    use crate::grid::{Cell, Grid};
    use crate::path::Path;

    /// Count-only reference: the maximum number of cranes on any monotone
    /// path, with no path reconstruction.
    fn max_cranes_reference(grid: &Grid) -> usize {
        let mut table = vec![vec![None::<usize>; grid.columns()]; grid.rows()];
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                if grid.get(row, column) == Cell::Building {
                    continue;
                }
                let mut reachable = if row == 0 && column == 0 {
                    Some(0)
                } else {
                    None
                };
                if row > 0 {
                    if let Some(above) = table[row - 1][column] {
                        reachable = Some(reachable.map_or(above, |best: usize| best.max(above)));
                    }
                }
                if column > 0 {
                    if let Some(left) = table[row][column - 1] {
                        reachable = Some(reachable.map_or(left, |best: usize| best.max(left)));
                    }
                }
                let here = usize::from(grid.get(row, column) == Cell::Crane);
                table[row][column] = reachable.map(|best| best + here);
            }
        }
        table
            .iter()
            .flatten()
            .filter_map(|entry| *entry)
            .max()
            .unwrap_or(0)
    }

    fn assert_path_well_formed(grid: &Grid, path: &Path<'_>) {
        let cells: Vec<(usize, usize)> = path.cells().collect();
        assert_eq!(cells.len(), path.steps().len() + 1);
        assert_eq!(cells[0], (0, 0));

        let mut cranes = 0;
        for &(row, column) in &cells {
            assert!(row < grid.rows() && column < grid.columns());
            assert_ne!(grid.get(row, column), Cell::Building);
            if grid.get(row, column) == Cell::Crane {
                cranes += 1;
            }
        }
        assert_eq!(cranes, path.total_cranes());

        for pair in cells.windows(2) {
            let row_delta = pair[1].0 as isize - pair[0].0 as isize;
            let column_delta = pair[1].1 as isize - pair[0].1 as isize;
            assert!(
                matches!((row_delta, column_delta), (0, 1) | (1, 0)),
                "non-monotone step {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_solvers_agree_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(335);
        for rows in 1..=6 {
            for columns in 1..=6 {
                for &building_probability in &[0.0, 0.3] {
                    let grid = Grid::random(rows, columns, 0.3, building_probability, &mut rng);
                    let expected = max_cranes_reference(&grid);

                    let exhaustive = crane_unloading_exhaustive(&grid);
                    let dyn_prog = crane_unloading_dyn_prog(&grid);

                    assert_eq!(exhaustive.total_cranes(), expected, "grid:\n{}", grid);
                    assert_eq!(dyn_prog.total_cranes(), expected, "grid:\n{}", grid);
                    assert_path_well_formed(&grid, &exhaustive);
                    assert_path_well_formed(&grid, &dyn_prog);
                }
            }
        }
    }

    #[test]
    fn test_solvers_are_idempotent() {
        let grid = Grid::parse("C.C\n.XC\nC..").unwrap();
        let first = crane_unloading_dyn_prog(&grid).total_cranes();
        let second = crane_unloading_dyn_prog(&grid).total_cranes();
        assert_eq!(first, second);

        let first = crane_unloading_exhaustive(&grid).total_cranes();
        let second = crane_unloading_exhaustive(&grid).total_cranes();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_row_has_one_possible_path() {
        let grid = Grid::parse("C.CC.").unwrap();
        assert_eq!(crane_unloading_exhaustive(&grid).total_cranes(), 3);
        assert_eq!(crane_unloading_dyn_prog(&grid).total_cranes(), 3);
    }

    #[test]
    fn test_dense_building_maze() {
        // Exactly one corridor survives; both solvers must thread it.
        let grid = Grid::parse("C.X\nXCX\nX.C").unwrap();
        assert_eq!(crane_unloading_exhaustive(&grid).total_cranes(), 3);
        assert_eq!(crane_unloading_dyn_prog(&grid).total_cranes(), 3);
    }
}
