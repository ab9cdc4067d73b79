use alloc::vec::Vec;
use core::fmt;

use crate::common::{ComplexSample, FftError, FftProcess};
use crate::transform::{direct_ft, iterative_fft, mixed_radix_fft, recursive_fft};

/// Selects one of the transform variants behind a single [`FftProcess`] entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Definition-based DFT, any length.
    Direct,
    /// Recursive radix-2 FFT, power-of-two lengths.
    Recursive,
    /// Iterative radix-2 FFT, power-of-two lengths.
    Iterative,
    /// Mixed-radix Cooley-Tukey FFT, any positive length.
    MixedRadix,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Direct,
        Algorithm::Recursive,
        Algorithm::Iterative,
        Algorithm::MixedRadix,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Direct => "direct_ft",
            Algorithm::Recursive => "recursive_fft",
            Algorithm::Iterative => "iterative_fft",
            Algorithm::MixedRadix => "mixed_radix_fft",
        }
    }

    /// Whether `process` accepts a sequence of length `n`.
    pub const fn supports_len(self, n: usize) -> bool {
        match self {
            Algorithm::Direct => true,
            Algorithm::Recursive | Algorithm::Iterative => n.is_power_of_two(),
            Algorithm::MixedRadix => n > 0,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<C: ComplexSample> FftProcess<C> for Algorithm {
    fn process(&self, input: &[C]) -> Result<Vec<C>, FftError> {
        match self {
            Algorithm::Direct => Ok(direct_ft(input)),
            Algorithm::Recursive => recursive_fft(input),
            Algorithm::Iterative => iterative_fft(input),
            Algorithm::MixedRadix => mixed_radix_fft(input),
        }
    }
}

/// Canonical benchmark input: element `j` is `(j, 0)`.
pub fn ramp<C: ComplexSample>(n: usize) -> Vec<C> {
    (0..n).map(|j| C::from_parts(j as f64, 0.0)).collect()
}

/// Mean wall-clock time of one `algorithm` call on `ramp(size)`, over `repeats` calls.
///
/// The length is validated once up front, so an unsupported size fails before
/// any timing starts. Zero repeats measures nothing and returns `Duration::ZERO`.
#[cfg(feature = "std")]
pub fn time_it<C: ComplexSample>(
    algorithm: Algorithm,
    size: usize,
    repeats: u32,
) -> Result<std::time::Duration, FftError> {
    use std::hint::black_box;
    use std::time::{Duration, Instant};

    let input: Vec<C> = ramp(size);
    algorithm.process(input.as_slice())?;
    if repeats == 0 {
        return Ok(Duration::ZERO);
    }

    let start = Instant::now();
    for _ in 0..repeats {
        black_box(algorithm.process(black_box(input.as_slice()))?);
    }
    Ok(start.elapsed() / repeats)
}
