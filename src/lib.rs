//! Randomized fleet placement for a Battleship-style board.
//!
//! A fixed fleet of linear units is placed one at a time onto an N×N grid:
//! uniform seed draws, per-orientation feasibility checks, and a one-cell
//! exclusion halo around every committed footprint keep units apart. The
//! whole operation either succeeds for every unit or fails fatally once the
//! bounded attempt budget runs out.

mod common;
mod config;
mod grid;
mod logging;
mod placement;
mod render;
mod ship;

pub use common::*;
pub use config::*;
pub use grid::*;
pub use logging::init_logging;
pub use placement::*;
pub use render::*;
pub use ship::*;
