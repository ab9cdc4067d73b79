#![no_std]

// Transforms hand back freshly allocated sequences.
extern crate alloc;

// The standard library is pulled in for tests and for the `std` feature
// (error trait, native trig, timing harness).
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod algorithm;
pub mod common;
mod transform;
pub mod fixed;
pub mod float;

pub use algorithm::{ramp, Algorithm};
#[cfg(feature = "std")]
pub use algorithm::time_it;
pub use common::{ComplexSample, FftError, FftProcess};
pub use transform::{
    bit_reverse, direct_ft, factor, iterative_fft, mixed_radix_fft, recursive_fft,
};
pub use fixed::{ComplexFixed, Fixed, Q16};
pub use num_complex::{Complex32, Complex64};
