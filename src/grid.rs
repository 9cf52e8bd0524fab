//! Board grid state: a passive store of cell states with range-checked access.

use crate::common::PlacementError;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Free cell, available for placement.
    Empty,
    /// Cell covered by a unit's footprint.
    Occupied,
    /// Cell in the exclusion halo around a placed unit.
    BorderZone,
}

/// An N×N grid addressed with 1-based coordinates `(x, y)` in `[1, size]²`.
///
/// Created all-`Empty`, mutated only by the placement engine, then read-only
/// for rendering. No transition rules are enforced here; sequencing is the
/// engine's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell `Empty`. `size` must be ≥ 1; fitting
    /// the fleet (`size` ≥ longest unit) is the caller's responsibility.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(x, y)` lies within `[1, size]²`.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (1..=self.size).contains(&x) && (1..=self.size).contains(&y)
    }

    /// State of the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, PlacementError> {
        Ok(self.cells[self.index(x, y)?])
    }

    /// Overwrite the cell at `(x, y)` unconditionally.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), PlacementError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, PlacementError> {
        if self.contains(x, y) {
            Ok((x - 1) * self.size + (y - 1))
        } else {
            Err(PlacementError::OutOfRange { x, y })
        }
    }
}
