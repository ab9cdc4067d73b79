// src/common.rs

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Mul, Sub};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    EmptyInput,
    NotPowerOfTwo,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "Input sequence must not be empty"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Anything that turns a sequence of samples into a same-length sequence of coefficients.
pub trait FftProcess<T> {
    fn process(&self, input: &[T]) -> Result<Vec<T>, FftError>;
}

/// Complex arithmetic every transform is written against.
///
/// Implemented for `Complex64`, `Complex32` and the fixed-point `ComplexFixed<FRAC>`,
/// so the same transform code runs on any of them. Values are small and `Copy`;
/// every operation returns a new value.
pub trait ComplexSample:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Additive identity, (0, 0).
    fn zero() -> Self;

    /// Multiplicative identity, (1, 0).
    fn one() -> Self;

    fn from_parts(re: f64, im: f64) -> Self;

    fn to_parts(self) -> (f64, f64);

    /// Multiplies both components by the real factor `k`.
    fn scale(self, k: f64) -> Self;

    /// The point on the unit circle at angle `theta`: (cos theta, sin theta).
    fn expj(theta: f64) -> Self;
}

/// Sine and cosine of `angle`, from std when available and from libm otherwise.
/// Every twiddle factor in the crate goes through here.
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Round half away from zero, agnostic to std.
pub(crate) fn round(value: f64) -> f64 {
    #[cfg(feature = "std")]
    return value.round();

    #[cfg(not(feature = "std"))]
    return libm::round(value);
}
