// src/fixed/types/fixed.rs

use core::fmt;
use core::ops::{Add, Mul, Sub};

use crate::common::round;

/// Generic fixed-point number based on the number of fractional bits (FRAC).
/// The internal value is stored as a signed 64-bit integer, leaving `63 - FRAC`
/// integer bits. Arithmetic saturates at the ends of that range instead of wrapping.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed<const FRAC: u32>(i64);

impl<const FRAC: u32> Fixed<FRAC> {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Creates a Fixed from the raw integer value (without shift).
    #[inline]
    pub const fn from_bits(bits: i64) -> Self {
        Self(bits)
    }

    /// Converts an f64 to Fixed, rounding to the nearest representable value.
    /// Values outside the representable range saturate.
    pub fn from_f64(value: f64) -> Self {
        let scaling_factor = (1u64 << FRAC) as f64;
        Self(round(value * scaling_factor) as i64)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << FRAC) as f64
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i64 {
        self.0
    }

    /// Multiplies by a real factor, rounding the raw result.
    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self(round(self.0 as f64 * k) as i64)
    }

    #[inline]
    pub const fn convert<const TO_FRAC: u32>(self) -> Fixed<TO_FRAC> {
        if TO_FRAC > FRAC {
            Fixed::from_bits(self.0 << (TO_FRAC - FRAC))
        } else {
            Fixed::from_bits(self.0 >> (FRAC - TO_FRAC))
        }
    }
}

// Mixed-precision operators: the result keeps the precision of the left operand.

impl<const F1: u32, const F2: u32> Add<Fixed<F2>> for Fixed<F1> {
    type Output = Fixed<F1>;

    #[inline]
    fn add(self, rhs: Fixed<F2>) -> Self::Output {
        Fixed(self.0.saturating_add(rhs.convert::<F1>().0))
    }
}

impl<const F1: u32, const F2: u32> Sub<Fixed<F2>> for Fixed<F1> {
    type Output = Fixed<F1>;

    #[inline]
    fn sub(self, rhs: Fixed<F2>) -> Self::Output {
        Fixed(self.0.saturating_sub(rhs.convert::<F1>().0))
    }
}

impl<const F1: u32, const F2: u32> Mul<Fixed<F2>> for Fixed<F1> {
    type Output = Fixed<F1>;

    #[inline]
    fn mul(self, rhs: Fixed<F2>) -> Self::Output {
        let product = self.0 as i128 * rhs.0 as i128;

        // Add 2^(F2-1) before shifting to round to nearest
        let rounded = if F2 > 0 {
            (product + (1i128 << (F2 - 1))) >> F2
        } else {
            product
        };

        Fixed(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl<const FRAC: u32> fmt::Debug for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Decimal value plus the raw payload
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}
