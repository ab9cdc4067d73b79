use crate::common::{sin_cos, ComplexSample};
use num_complex::{Complex32, Complex64};

// Double precision is the reference sample type.
impl ComplexSample for Complex64 {
    #[inline]
    fn zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    #[inline]
    fn one() -> Self {
        Complex64::new(1.0, 0.0)
    }

    #[inline]
    fn from_parts(re: f64, im: f64) -> Self {
        Complex64::new(re, im)
    }

    #[inline]
    fn to_parts(self) -> (f64, f64) {
        (self.re, self.im)
    }

    #[inline]
    fn scale(self, k: f64) -> Self {
        Complex64::new(self.re * k, self.im * k)
    }

    fn expj(theta: f64) -> Self {
        let (sin, cos) = sin_cos(theta);
        Complex64::new(cos, sin)
    }
}

/// Single precision samples. The angle is still evaluated in `f64`
/// and only narrowed at the end.
impl ComplexSample for Complex32 {
    #[inline]
    fn zero() -> Self {
        Complex32::new(0.0, 0.0)
    }

    #[inline]
    fn one() -> Self {
        Complex32::new(1.0, 0.0)
    }

    #[inline]
    fn from_parts(re: f64, im: f64) -> Self {
        Complex32::new(re as f32, im as f32)
    }

    #[inline]
    fn to_parts(self) -> (f64, f64) {
        (self.re as f64, self.im as f64)
    }

    #[inline]
    fn scale(self, k: f64) -> Self {
        let k = k as f32;
        Complex32::new(self.re * k, self.im * k)
    }

    fn expj(theta: f64) -> Self {
        let (sin, cos) = sin_cos(theta);
        Complex32::new(cos as f32, sin as f32)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
