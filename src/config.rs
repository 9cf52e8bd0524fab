use crate::ship::Ship;

pub const GRID_SIZE: usize = 10;

pub const NUM_SHIPS: usize = 10;
/// Default fleet: one 4-cell, two 3-cell, three 2-cell, four 1-cell units.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
pub const TOTAL_FLEET_CELLS: usize = 20;

/// Seed draws allowed before a unit's placement is declared unsatisfiable.
pub const MAX_PLACE_ATTEMPTS: u32 = 50;

/// Build the default fleet in declaration order; callers shuffle it.
pub fn default_fleet() -> Vec<Ship> {
    FLEET_LENGTHS.iter().map(|&len| Ship::new(len)).collect()
}
