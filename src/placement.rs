//! Placement engine: randomized, collision-free unit placement with an
//! exclusion halo and a bounded attempt budget.

use log::debug;
use rand::Rng;

use crate::common::PlacementError;
use crate::config::MAX_PLACE_ATTEMPTS;
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, Unit};

/// A committed placement: the seed cell the run starts from, the chosen
/// orientation, and the unit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    /// Footprint cells, in run order from the seed.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (x, y) = (self.x, self.y);
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => (x, y + i),
            Orientation::Vertical => (x + i, y),
        })
    }
}

/// Place a single unit onto `grid`.
///
/// Draws uniform seed coordinates until one lands on an `Empty` cell whose
/// horizontal or vertical run fits; each draw consumes one attempt out of
/// [`MAX_PLACE_ATTEMPTS`], and exhausting the budget fails with
/// `InvalidConfiguration`. When both orientations fit, one is chosen
/// uniformly at random.
pub fn place_unit<R: Rng>(
    grid: &mut Grid,
    unit: &impl Unit,
    rng: &mut R,
) -> Result<Placement, PlacementError> {
    // a zero-size grid has no cells to seed from
    if grid.size() == 0 {
        return Err(PlacementError::InvalidConfiguration);
    }
    let length = unit.length();
    let mut attempts: u32 = 0;
    loop {
        if attempts == MAX_PLACE_ATTEMPTS {
            return Err(PlacementError::InvalidConfiguration);
        }
        attempts += 1;

        let x = rng.random_range(1..=grid.size());
        let y = rng.random_range(1..=grid.size());
        if grid.get(x, y)? != CellState::Empty {
            continue;
        }

        let horizontal = run_fits(grid, x, y, length, Orientation::Horizontal)?;
        let vertical = run_fits(grid, x, y, length, Orientation::Vertical)?;
        let orientation = match (horizontal, vertical) {
            (true, true) => {
                if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
            (true, false) => Orientation::Horizontal,
            (false, true) => Orientation::Vertical,
            // Dead seed; retry against the same attempt budget.
            (false, false) => continue,
        };

        let placement = Placement {
            x,
            y,
            orientation,
            length,
        };
        commit(grid, &placement)?;
        debug!(
            "placed unit of length {} at ({}, {}) {:?} after {} attempt(s)",
            length, x, y, orientation, attempts
        );
        return Ok(placement);
    }
}

/// Place every unit of `fleet` in order. Fails fast on the first unit whose
/// attempt budget is exhausted; no partial result is exposed.
pub fn place_fleet<R: Rng>(
    grid: &mut Grid,
    fleet: &[impl Unit],
    rng: &mut R,
) -> Result<Vec<Placement>, PlacementError> {
    fleet
        .iter()
        .map(|unit| place_unit(grid, unit, rng))
        .collect()
}

/// A run fits when all `length` cells from `(x, y)` in the orientation's
/// increasing direction stay on the grid and are `Empty`.
fn run_fits(
    grid: &Grid,
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
) -> Result<bool, PlacementError> {
    let start = match orientation {
        Orientation::Horizontal => y,
        Orientation::Vertical => x,
    };
    if start + length - 1 > grid.size() {
        return Ok(false);
    }
    for i in 0..length {
        let (cx, cy) = match orientation {
            Orientation::Horizontal => (x, y + i),
            Orientation::Vertical => (x + i, y),
        };
        if grid.get(cx, cy)? != CellState::Empty {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Mark the footprint `Occupied`, then mark every in-bounds cell 8-adjacent
/// to the footprint (end-caps included) as `BorderZone`. Only `Empty` cells
/// are marked; an `Occupied` cell is never downgraded.
fn commit(grid: &mut Grid, placement: &Placement) -> Result<(), PlacementError> {
    for (cx, cy) in placement.cells() {
        grid.set(cx, cy, CellState::Occupied)?;
    }
    for (cx, cy) in placement.cells() {
        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                let nx = cx as i64 + dx;
                let ny = cy as i64 + dy;
                if nx < 1 || ny < 1 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !grid.contains(nx, ny) {
                    continue;
                }
                if grid.get(nx, ny)? == CellState::Empty {
                    grid.set(nx, ny, CellState::BorderZone)?;
                }
            }
        }
    }
    Ok(())
}
