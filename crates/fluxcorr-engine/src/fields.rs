//! Per-cell updates applied between transport steps.

/// Recompute `velocity[i] = momentum[i] / density[i]`, or `0` where the
/// density is not positive.
pub fn derive_velocity(momentum: &[f64], density: &[f64], velocity: &mut [f64]) {
    debug_assert_eq!(momentum.len(), density.len());
    debug_assert_eq!(velocity.len(), density.len());
    for ((v, &m), &rho) in velocity.iter_mut().zip(momentum).zip(density) {
        *v = if rho > 0.0 { m / rho } else { 0.0 };
    }
}

/// Set negative values to zero. Returns how many cells changed.
pub fn clamp_negative(values: &mut [f64]) -> usize {
    let mut clamped = 0;
    for x in values.iter_mut().filter(|x| **x < 0.0) {
        *x = 0.0;
        clamped += 1;
    }
    clamped
}

/// `Σ values * dx`.
pub fn integrate(values: &[f64], dx: f64) -> f64 {
    values.iter().sum::<f64>() * dx
}
