//! Textual rendering of a placed grid.

use std::io::{self, Write};

use crate::grid::{CellState, Grid};

pub const BANNER: &str = r"
  _____              ____        _   _   _
 / ____|            |  _ \      | | | | | |
| (___   ___  __ _  | |_) | __ _| |_| |_| | ___
 \___ \ / _ \/ _` | |  _ < / _` | __| __| |/ _ \
 ____) |  __/ (_| | | |_) | (_| | |_| |_| |  __/
|_____/ \___|\__,_| |____/ \__,_|\__|\__|_|\___|
";

/// Write the grid, one row per `x` in increasing order, columns by `y`.
/// Occupied cells render as `X`; empty and border-zone cells both render
/// as `.` so the halo stays invisible to the player.
pub fn render<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    for x in 1..=grid.size() {
        for y in 1..=grid.size() {
            let mark = match grid.get(x, y) {
                Ok(CellState::Occupied) => 'X',
                _ => '.',
            };
            write!(out, "{}  ", mark)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
