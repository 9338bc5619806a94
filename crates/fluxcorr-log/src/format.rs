//! C-compatible `%e` number formatting.
//!
//! Rust's `{:.6e}` writes `1.000000e1`; C's `%e` writes `1.000000e+01`.
//! Logs use the C form so they stay byte-comparable with logs produced by
//! other tools.

use std::fmt;

/// Formats an `f64` like C's `printf("%e", x)`.
///
/// Six fractional digits, an explicit exponent sign, and at least two
/// exponent digits. Non-finite values print as `inf`, `-inf` and `nan`.
///
/// ```
/// use fluxcorr_log::Scientific;
///
/// assert_eq!(Scientific(10.0).to_string(), "1.000000e+01");
/// assert_eq!(Scientific(-0.004).to_string(), "-4.000000e-03");
/// assert_eq!(Scientific(0.0).to_string(), "0.000000e+00");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scientific(pub f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("nan");
        }
        if x.is_infinite() {
            return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
        }

        let mut buf = StackBuf::default();
        fmt::write(&mut buf, format_args!("{x:.6e}"))?;
        let text = buf.as_str();
        let (mantissa, exponent) = text.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Fixed-capacity text buffer; `{:.6e}` of any finite `f64` fits.
struct StackBuf {
    bytes: [u8; 32],
    len: usize,
}

impl Default for StackBuf {
    fn default() -> Self {
        Self {
            bytes: [0; 32],
            len: 0,
        }
    }
}

impl StackBuf {
    fn as_str(&self) -> &str {
        // Only whole `&str`s are ever copied in.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl fmt::Write for StackBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}
