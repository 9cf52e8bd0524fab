use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use seabattle::{
    default_fleet, place_fleet, CellState, Grid, Placement, GRID_SIZE, TOTAL_FLEET_CELLS,
};

// The 50-attempt budget is a heuristic giveup that legitimately fires for
// some seeds (SPEC_FULL §4/§7); such seeds are skipped via `prop_assume!`.
fn random_layout(seed: u64) -> Option<(Grid, Vec<Placement>)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new(GRID_SIZE);
    let mut fleet = default_fleet();
    fleet.shuffle(&mut rng);
    let placements = place_fleet(&mut grid, &fleet, &mut rng).ok()?;
    Some((grid, placements))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_footprints_disjoint_and_separated(seed in any::<u64>()) {
        let layout = random_layout(seed);
        prop_assume!(layout.is_some());
        let (_, placements) = layout.unwrap();
        for (i, a) in placements.iter().enumerate() {
            for b in placements.iter().skip(i + 1) {
                for (ax, ay) in a.cells() {
                    for (bx, by) in b.cells() {
                        let d = ax.abs_diff(bx).max(ay.abs_diff(by));
                        prop_assert!(d >= 2, "cells ({},{}) and ({},{}) too close", ax, ay, bx, by);
                    }
                }
            }
        }
    }

    #[test]
    fn fleet_occupied_count_preserved(seed in any::<u64>()) {
        let layout = random_layout(seed);
        prop_assume!(layout.is_some());
        let (grid, placements) = layout.unwrap();
        prop_assert_eq!(grid.count(CellState::Occupied), TOTAL_FLEET_CELLS);
        let total: usize = placements.iter().map(|p| p.length).sum();
        prop_assert_eq!(total, TOTAL_FLEET_CELLS);
    }

    #[test]
    fn fleet_footprints_stay_in_bounds(seed in any::<u64>()) {
        let layout = random_layout(seed);
        prop_assume!(layout.is_some());
        let (grid, placements) = layout.unwrap();
        for p in &placements {
            for (x, y) in p.cells() {
                prop_assert!(grid.contains(x, y));
                prop_assert_eq!(grid.get(x, y).unwrap(), CellState::Occupied);
            }
        }
    }

    #[test]
    fn layout_reproducible_from_seed(seed in any::<u64>()) {
        let layout_a = random_layout(seed);
        let layout_b = random_layout(seed);
        prop_assume!(layout_a.is_some());
        let (grid_a, placements_a) = layout_a.unwrap();
        let (grid_b, placements_b) = layout_b.unwrap();
        prop_assert_eq!(grid_a, grid_b);
        prop_assert_eq!(placements_a, placements_b);
    }
}
