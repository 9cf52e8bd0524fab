//! Shared error types for grid access and fleet placement.

/// Errors returned by `Grid` accessors and the placement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Requested coordinate lies outside `[1, size]²`.
    OutOfRange { x: usize, y: usize },
    /// Attempt budget exhausted: the fleet and grid size could not be
    /// satisfied within the retry limit.
    InvalidConfiguration,
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfRange { x, y } => {
                write!(f, "coordinate ({}, {}) is out of grid range", x, y)
            }
            PlacementError::InvalidConfiguration => {
                write!(f, "invalid configuration of units and grid size")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
