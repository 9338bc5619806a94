//! Uniform cell-centred 1-D grid.

use crate::error::GridError;

/// A one-dimensional grid of `N` equal-width cells.
///
/// Cell `i` is centred at `i * dx`. Interface `i` separates cell `i - 1`
/// from cell `i`; interface `0` lies left of the first cell and interface
/// `N` right of the last, so there is always one more interface than
/// there are cells.
///
/// The grid is immutable after construction and caches its cell centres
/// so snapshots can borrow them without reallocating.
///
/// # Examples
///
/// ```
/// use fluxcorr_grid::UniformGrid;
///
/// let grid = UniformGrid::new(5, 2.0).unwrap();
/// assert_eq!(grid.cell_count(), 5);
/// assert_eq!(grid.interface_count(), 6);
/// assert_eq!(grid.center(3), 6.0);
/// assert_eq!(grid.length(), 10.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UniformGrid {
    cell_width: f64,
    centers: Vec<f64>,
}

impl UniformGrid {
    /// Smallest grid the transport stencil supports: every interior
    /// interface reads two cells on either side.
    pub const MIN_CELLS: usize = 4;

    /// Create a grid with `cell_count` cells of width `cell_width`.
    ///
    /// Returns `Err(GridError::TooFewCells)` if `cell_count < MIN_CELLS`, or
    /// `Err(GridError::InvalidCellWidth)` if the width is not finite and
    /// positive.
    pub fn new(cell_count: usize, cell_width: f64) -> Result<Self, GridError> {
        if cell_count < Self::MIN_CELLS {
            return Err(GridError::TooFewCells {
                got: cell_count,
                min: Self::MIN_CELLS,
            });
        }
        if !cell_width.is_finite() || cell_width <= 0.0 {
            return Err(GridError::InvalidCellWidth { value: cell_width });
        }
        let centers = (0..cell_count).map(|i| i as f64 * cell_width).collect();
        Ok(Self {
            cell_width,
            centers,
        })
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.centers.len()
    }

    /// Number of interfaces (`cell_count() + 1`).
    pub fn interface_count(&self) -> usize {
        self.centers.len() + 1
    }

    /// Width of every cell.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Total extent covered by the cells.
    pub fn length(&self) -> f64 {
        self.cell_width * self.centers.len() as f64
    }

    /// Centre of cell `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= cell_count()`.
    pub fn center(&self, i: usize) -> f64 {
        self.centers[i]
    }

    /// All cell centres in order.
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }
}
