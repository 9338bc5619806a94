//! The flux-corrected transport step.

use crate::coefficients::{courant_numbers, diffusion_coefficients, max_courant};
use crate::error::TransportError;
use crate::limiter::limit_fluxes;
use crate::scratch::TransportScratch;

/// Diagnostics from one transport step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransportStats {
    /// Largest `|epsilon|` over all interfaces.
    ///
    /// The scheme assumes this stays at or below 1 (and is positive for
    /// values up to 0.5). The kernel reports it; callers decide what to do.
    pub max_courant: f64,
    /// Interface where `max_courant` first occurs.
    pub max_courant_interface: usize,
}

/// Flux-corrected transport kernel with owned scratch space.
///
/// Stateless between calls apart from reusing its buffers: the output of
/// a step depends only on that step's inputs.
///
/// # Examples
///
/// ```
/// use fluxcorr_transport::FctTransport;
///
/// let mut fct = FctTransport::with_capacity(8);
/// let u = [0.0, 0.0, 0.0, 4.0, 4.0, 0.0, 0.0, 0.0];
/// let v = [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0];
/// let mut next = [0.0; 8];
/// let stats = fct.transport_into(&u, &v, 0.25, 1.0, &mut next).unwrap();
/// assert!(stats.max_courant <= 0.25);
/// assert_eq!(next[0], u[0]);
/// assert_eq!(next[7], u[7]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FctTransport {
    scratch: TransportScratch,
}

impl FctTransport {
    /// Smallest field the stencil supports.
    pub const MIN_CELLS: usize = 4;

    /// Create a kernel with empty scratch; buffers grow on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a kernel with scratch pre-sized for `cells` cells.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            scratch: TransportScratch::new(cells),
        }
    }

    /// Intermediate buffers from the most recent step.
    pub fn scratch(&self) -> &TransportScratch {
        &self.scratch
    }

    /// Advance `u` by one step of length `dt` under velocity `v`, writing
    /// the result into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] without touching `out` if the field is
    /// shorter than [`MIN_CELLS`](Self::MIN_CELLS), any slice length
    /// differs from `u.len()`, `dt` or `dx` is not finite and positive, or
    /// an input value is not finite.
    pub fn transport_into(
        &mut self,
        u: &[f64],
        v: &[f64],
        dt: f64,
        dx: f64,
        out: &mut [f64],
    ) -> Result<TransportStats, TransportError> {
        check_inputs(u, v, dt, dx, out.len())?;
        let n = u.len();
        self.scratch.resize(n);
        let buf = self.scratch.buffers();

        // Stage 1: interface coefficients.
        courant_numbers(v, dt, dx, buf.epsilon);
        diffusion_coefficients(buf.epsilon, buf.nu, buf.mu);
        let (max_courant, max_courant_interface) = max_courant(buf.epsilon);

        // Stage 2: provisional transported and diffused field.
        let eps = &*buf.epsilon;
        let nu = &*buf.nu;
        let ut = &mut *buf.provisional;
        ut[0] = u[0];
        ut[n - 1] = u[n - 1];
        for i in 1..n - 1 {
            let advective = 0.5 * (eps[i + 1] * (u[i + 1] + u[i]) - eps[i] * (u[i] + u[i - 1]));
            let diffusive = nu[i + 1] * (u[i + 1] - u[i]) - nu[i] * (u[i] - u[i - 1]);
            ut[i] = u[i] - advective + diffusive;
        }

        // Stage 3: raw antidiffusive fluxes.
        let mu = &*buf.mu;
        let phi = &mut *buf.raw_flux;
        phi[0] = 0.0;
        phi[n] = 0.0;
        for i in 1..n {
            phi[i] = mu[i] * (ut[i] - ut[i - 1]);
        }

        // Stage 4: limit.
        limit_fluxes(ut, phi, buf.limited_flux);

        // Stage 5: corrected update.
        let phi_tilde = &*buf.limited_flux;
        for (i, out) in out.iter_mut().enumerate() {
            *out = ut[i] - phi_tilde[i + 1] + phi_tilde[i];
        }

        Ok(TransportStats {
            max_courant,
            max_courant_interface,
        })
    }

    /// Advance `u` by one step and return the new field.
    pub fn transport(
        &mut self,
        u: &[f64],
        v: &[f64],
        dt: f64,
        dx: f64,
    ) -> Result<Vec<f64>, TransportError> {
        let mut out = vec![0.0; u.len()];
        self.transport_into(u, v, dt, dx, &mut out)?;
        Ok(out)
    }
}

/// Advance `u` by one flux-corrected transport step.
///
/// Convenience wrapper allocating fresh scratch; use [`FctTransport`] to
/// reuse buffers across steps.
pub fn fct_transport(u: &[f64], v: &[f64], dt: f64, dx: f64) -> Result<Vec<f64>, TransportError> {
    FctTransport::new().transport(u, v, dt, dx)
}

fn check_inputs(
    u: &[f64],
    v: &[f64],
    dt: f64,
    dx: f64,
    out_len: usize,
) -> Result<(), TransportError> {
    let n = u.len();
    if n < FctTransport::MIN_CELLS {
        return Err(TransportError::GridTooSmall {
            cells: n,
            min: FctTransport::MIN_CELLS,
        });
    }
    for (what, got) in [("velocity", v.len()), ("output", out_len)] {
        if got != n {
            return Err(TransportError::LengthMismatch {
                what,
                expected: n,
                got,
            });
        }
    }
    for (name, value) in [("dt", dt), ("dx", dx)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(TransportError::InvalidStep { name, value });
        }
    }
    for (what, values) in [("field", u), ("velocity", v)] {
        if let Some(index) = values.iter().position(|x| !x.is_finite()) {
            return Err(TransportError::NonFiniteInput { what, index });
        }
    }
    Ok(())
}
