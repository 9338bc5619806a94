//! Interface transport, diffusion and antidiffusion coefficients.
//!
//! All three sequences are interface-indexed: entry `i` sits between cell
//! `i - 1` and cell `i`, so each has one more entry than the velocity
//! field.

/// Nondimensional diffusion coefficient for Courant number `eps`.
///
/// `(1 + 2 eps²) / 6`, the Boris-Book choice that keeps the provisional
/// step positive for `|eps| <= 1/2`.
#[inline]
pub fn diffusion(eps: f64) -> f64 {
    (1.0 + 2.0 * eps * eps) / 6.0
}

/// Nondimensional antidiffusion coefficient for Courant number `eps`.
///
/// `(1 - eps²) / 6`. Removes the excess smoothing of [`diffusion`] to
/// second order.
#[inline]
pub fn antidiffusion(eps: f64) -> f64 {
    (1.0 - eps * eps) / 6.0
}

/// Fill the interface Courant numbers for velocity field `v`.
///
/// Interior interfaces average the two adjacent cell velocities; the two
/// boundary interfaces take the single adjacent cell's velocity.
///
/// `epsilon.len()` must be `v.len() + 1` and `v` must not be empty.
pub fn courant_numbers(v: &[f64], dt: f64, dx: f64, epsilon: &mut [f64]) {
    debug_assert_eq!(epsilon.len(), v.len() + 1);
    let n = v.len();
    let ratio = dt / dx;
    epsilon[0] = v[0] * ratio;
    epsilon[n] = v[n - 1] * ratio;
    for i in 1..n {
        epsilon[i] = 0.5 * (v[i] + v[i - 1]) * ratio;
    }
}

/// Fill `nu` and `mu` from the interface Courant numbers.
pub fn diffusion_coefficients(epsilon: &[f64], nu: &mut [f64], mu: &mut [f64]) {
    debug_assert_eq!(epsilon.len(), nu.len());
    debug_assert_eq!(epsilon.len(), mu.len());
    for ((&eps, nu), mu) in epsilon.iter().zip(nu.iter_mut()).zip(mu.iter_mut()) {
        *nu = diffusion(eps);
        *mu = antidiffusion(eps);
    }
}

/// Largest `|epsilon|` and the interface where it first occurs.
///
/// Returns `(0.0, 0)` for an empty slice.
pub fn max_courant(epsilon: &[f64]) -> (f64, usize) {
    epsilon
        .iter()
        .enumerate()
        .fold((0.0, 0), |(best, at), (i, &eps)| {
            if eps.abs() > best {
                (eps.abs(), i)
            } else {
                (best, at)
            }
        })
}
