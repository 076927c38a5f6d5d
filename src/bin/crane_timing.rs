use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use cranes::{crane_unloading_dyn_prog, crane_unloading_exhaustive, Grid};

fn main() {
    let mut rng = StdRng::seed_from_u64(2026);

    for &(rows, columns) in &[(4, 4), (6, 6), (8, 8), (10, 10), (20, 20)] {
        let grid = Grid::random(rows, columns, 0.3, 0.1, &mut rng);
        println!("{}x{} grid:", rows, columns);
        println!("{}", grid);

        let start = Instant::now();
        let best = crane_unloading_dyn_prog(&grid);
        println!(
            "  dynamic programming: {} cranes in {:?}",
            best.total_cranes(),
            start.elapsed()
        );

        // The enumeration visits 2^(rows+columns-2) candidates; keep that
        // under a few million.
        if rows + columns - 2 <= 20 {
            let start = Instant::now();
            let best = crane_unloading_exhaustive(&grid);
            println!(
                "  exhaustive:          {} cranes in {:?}",
                best.total_cranes(),
                start.elapsed()
            );
        } else {
            println!("  exhaustive:          skipped (too many candidates)");
        }
        println!();
    }
}
