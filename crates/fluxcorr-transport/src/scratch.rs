//! Reusable work buffers for the transport kernel.
//!
//! A transport step needs six transient sequences. [`TransportScratch`]
//! owns them so repeated steps on the same grid allocate nothing; buffers
//! grow on demand and are overwritten by every call.

/// Heap-owned work buffers for one transport step.
///
/// After a step the buffers hold that step's intermediate values and can
/// be inspected for diagnostics. They carry no meaning into the next step.
#[derive(Clone, Debug, Default)]
pub struct TransportScratch {
    cells: usize,
    epsilon: Vec<f64>,
    nu: Vec<f64>,
    mu: Vec<f64>,
    provisional: Vec<f64>,
    raw_flux: Vec<f64>,
    limited_flux: Vec<f64>,
}

/// Mutable borrows of every buffer, handed to the kernel stages.
pub(crate) struct ScratchBuffers<'a> {
    pub epsilon: &'a mut [f64],
    pub nu: &'a mut [f64],
    pub mu: &'a mut [f64],
    pub provisional: &'a mut [f64],
    pub raw_flux: &'a mut [f64],
    pub limited_flux: &'a mut [f64],
}

impl TransportScratch {
    /// Create scratch sized for `cells` cells.
    pub fn new(cells: usize) -> Self {
        let mut s = Self::default();
        s.resize(cells);
        s
    }

    /// Resize every buffer for a field of `cells` cells.
    ///
    /// Cell-indexed buffers get `cells` entries, interface-indexed buffers
    /// `cells + 1`. Existing capacity is reused.
    pub fn resize(&mut self, cells: usize) {
        self.cells = cells;
        let interfaces = cells + 1;
        self.epsilon.resize(interfaces, 0.0);
        self.nu.resize(interfaces, 0.0);
        self.mu.resize(interfaces, 0.0);
        self.raw_flux.resize(interfaces, 0.0);
        self.limited_flux.resize(interfaces, 0.0);
        self.provisional.resize(cells, 0.0);
    }

    pub(crate) fn buffers(&mut self) -> ScratchBuffers<'_> {
        ScratchBuffers {
            epsilon: &mut self.epsilon,
            nu: &mut self.nu,
            mu: &mut self.mu,
            provisional: &mut self.provisional,
            raw_flux: &mut self.raw_flux,
            limited_flux: &mut self.limited_flux,
        }
    }

    /// Number of cells the buffers are sized for.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Interface Courant numbers from the last step.
    pub fn epsilon(&self) -> &[f64] {
        &self.epsilon
    }

    /// Interface diffusion coefficients from the last step.
    pub fn nu(&self) -> &[f64] {
        &self.nu
    }

    /// Interface antidiffusion coefficients from the last step.
    pub fn mu(&self) -> &[f64] {
        &self.mu
    }

    /// Provisional transported-and-diffused field from the last step.
    pub fn provisional(&self) -> &[f64] {
        &self.provisional
    }

    /// Raw antidiffusive fluxes from the last step.
    pub fn raw_flux(&self) -> &[f64] {
        &self.raw_flux
    }

    /// Limited antidiffusive fluxes from the last step.
    pub fn limited_flux(&self) -> &[f64] {
        &self.limited_flux
    }
}
