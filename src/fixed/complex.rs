use crate::common::{sin_cos, ComplexSample};
use super::types::{ComplexFixed, Fixed};

/// Fixed-point samples of any precision.
///
/// Twiddle factors come from the same `f64` trigonometry as the float samples and are
/// quantized to `FRAC` bits, so each incremental twiddle update adds up to half an LSB
/// of rounding error. The fast transforms stay within a few percent at N = 1024 in Q16;
/// `direct_ft` raises its twiddles to powers up to N - 1 and is only accurate for small N.
///
/// The payload has `63 - FRAC` integer bits (about 1.4e14 in Q16). Coefficients beyond
/// that saturate at `Fixed::MAX` / `Fixed::MIN` rather than wrapping or panicking.
impl<const FRAC: u32> ComplexSample for ComplexFixed<FRAC> {
    #[inline]
    fn zero() -> Self {
        ComplexFixed::new(Fixed::ZERO, Fixed::ZERO)
    }

    #[inline]
    fn one() -> Self {
        ComplexFixed::new(Fixed::from_f64(1.0), Fixed::ZERO)
    }

    #[inline]
    fn from_parts(re: f64, im: f64) -> Self {
        ComplexFixed::new(Fixed::from_f64(re), Fixed::from_f64(im))
    }

    #[inline]
    fn to_parts(self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }

    #[inline]
    fn scale(self, k: f64) -> Self {
        ComplexFixed::new(self.re.scale(k), self.im.scale(k))
    }

    fn expj(theta: f64) -> Self {
        let (sin, cos) = sin_cos(theta);
        ComplexFixed::new(Fixed::from_f64(cos), Fixed::from_f64(sin))
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
