//! Boundary-extension access for stencils that reach past the domain.

/// A cell-indexed slice viewed with clamped (constant) extension.
///
/// Indices left of the domain read the first cell and indices right of it
/// read the last cell, as if the domain were padded with ghost cells
/// holding the boundary values. This replaces physically over-allocated
/// ghost slots.
///
/// ```
/// use fluxcorr_transport::Extended;
///
/// let values = [1.0, 2.0, 3.0];
/// let ext = Extended::new(&values);
/// assert_eq!(ext.at(-2), 1.0);
/// assert_eq!(ext.at(1), 2.0);
/// assert_eq!(ext.at(5), 3.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Extended<'a> {
    values: &'a [f64],
}

impl<'a> Extended<'a> {
    /// Wrap a non-empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: &'a [f64]) -> Self {
        assert!(!values.is_empty(), "cannot extend an empty slice");
        Self { values }
    }

    /// Value at `i`, clamped into the domain.
    #[inline]
    pub fn at(&self, i: isize) -> f64 {
        let last = self.values.len() - 1;
        if i <= 0 {
            self.values[0]
        } else if i as usize >= last {
            self.values[last]
        } else {
            self.values[i as usize]
        }
    }

    /// Number of real (non-ghost) cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; construction rejects empty slices.
    pub fn is_empty(&self) -> bool {
        false
    }
}
