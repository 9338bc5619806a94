//! Reusable initial fields.

use std::ops::Range;

/// `cells` zeros with `value` on the cells in `range`.
///
/// The range is clipped to the field.
pub fn rectangular_pulse(cells: usize, range: Range<usize>, value: f64) -> Vec<f64> {
    let mut field = vec![0.0; cells];
    let end = range.end.min(cells);
    let start = range.start.min(end);
    field[start..end].fill(value);
    field
}

/// `values` surrounded by `pad` zeros on each side.
pub fn padded_profile(values: &[f64], pad: usize) -> Vec<f64> {
    let mut field = vec![0.0; values.len() + 2 * pad];
    field[pad..pad + values.len()].copy_from_slice(values);
    field
}

/// A deterministic non-smooth profile with repeated local extrema.
///
/// Cell `i` holds `amplitude * ((i * 7) % period) / period`.
pub fn sawtooth(cells: usize, period: usize, amplitude: f64) -> Vec<f64> {
    let period = period.max(1);
    (0..cells)
        .map(|i| amplitude * ((i * 7) % period) as f64 / period as f64)
        .collect()
}
