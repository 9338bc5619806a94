//! Monotonicity-preserving antidiffusive flux limiter.
//!
//! Each raw flux is clipped so the corrected update cannot push a cell
//! past the provisional values of its neighbours: the limited flux keeps
//! the sign of the local provisional gradient and never exceeds the
//! neighbouring gradients on either side.
//!
//! Boundary handling falls out of the clamped extension. At interface `1`
//! the gradient behind reads `u[0] - u[0]`, and at interface `N - 1` the
//! gradient ahead reads `u[N-1] - u[N-1]`; both are zero, so no
//! antidiffusion ever crosses into or out of a boundary cell.

use crate::stencil::Extended;

/// Limited antidiffusive flux at interface `j`.
///
/// With `s` the sign of `u[j] - u[j-1]` (`+1` when equal):
/// ```text
/// phi_tilde[j] = s * max(0, min(|phi|, s*(u[j+1] - u[j]), s*(u[j-1] - u[j-2])))
/// ```
/// Reads outside the domain go through the clamped extension.
#[inline]
pub fn limit_interface(provisional: Extended<'_>, raw: f64, j: usize) -> f64 {
    let j = j as isize;
    let left = provisional.at(j - 1);
    let right = provisional.at(j);
    let s = if right >= left { 1.0 } else { -1.0 };
    let ahead = s * (provisional.at(j + 1) - right);
    let behind = s * (left - provisional.at(j - 2));
    s * raw.abs().min(ahead.min(behind)).max(0.0)
}

/// Limit every raw flux into `limited`.
///
/// `raw` and `limited` are interface-indexed (`provisional.len() + 1`
/// entries). The two domain-boundary interfaces are set to zero; every
/// interior interface goes through [`limit_interface`].
pub fn limit_fluxes(provisional: &[f64], raw: &[f64], limited: &mut [f64]) {
    debug_assert_eq!(raw.len(), provisional.len() + 1);
    debug_assert_eq!(limited.len(), raw.len());
    let n = provisional.len();
    let ext = Extended::new(provisional);
    limited[0] = 0.0;
    limited[n] = 0.0;
    for j in 1..n {
        limited[j] = limit_interface(ext, raw[j], j);
    }
}
