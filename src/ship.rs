//! Unit descriptors and orientation.

/// Orientation of a unit on the grid. `Horizontal` runs extend along
/// increasing `y`, `Vertical` runs along increasing `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Capability of anything placeable by the engine. Length is the only
/// property placement depends on today; shaped variants would extend this.
pub trait Unit {
    fn length(&self) -> usize;
}

/// A plain linear ship of a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
}

impl Ship {
    /// Create a ship of `length` cells. `length` must be ≥ 1.
    pub const fn new(length: usize) -> Self {
        Ship { length }
    }
}

impl Unit for Ship {
    fn length(&self) -> usize {
        self.length
    }
}
