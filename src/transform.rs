// src/transform.rs

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::common::{ComplexSample, FftError};

/// Smallest factor of `n` greater than one, or `n` itself when `n` is prime.
///
/// Candidates run from 2 up to and including the integer square root of `n`.
/// Values below 2 have no proper factor and are returned unchanged.
pub fn factor(n: usize) -> usize {
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return i;
        }
        i += 1;
    }
    n
}

/// Reverses the low `r` bits of `k`.
pub fn bit_reverse(k: usize, r: u32) -> usize {
    let mut k = k;
    let mut l = 0;
    for _ in 0..r {
        l = (l << 1) | (k & 1);
        k >>= 1;
    }
    l
}

/// Discrete Fourier Transform straight from the defining summation, O(N^2).
///
/// Accepts any length, including zero. Twiddle factors are updated incrementally:
/// one `expj` call per transform, then only complex multiplications.
pub fn direct_ft<C: ComplexSample>(x: &[C]) -> Vec<C> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }

    let w = C::expj(-2.0 * PI / n as f64);
    let mut wk = C::one();
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut acc = C::zero();
        let mut wkn = C::one();
        for &sample in x {
            acc = acc + wkn * sample;
            wkn = wkn * wk;
        }
        out.push(acc);
        wk = wk * w;
    }
    out
}

/// Radix-2 decimation-in-time FFT, recursive form.
///
/// The length must be a non-zero power of two.
pub fn recursive_fft<C: ComplexSample>(x: &[C]) -> Result<Vec<C>, FftError> {
    check_power_of_two(x.len())?;
    Ok(recursive_fft_core(x))
}

fn recursive_fft_core<C: ComplexSample>(x: &[C]) -> Vec<C> {
    let n = x.len();
    if n == 1 {
        return x.to_vec();
    }

    let half = n >> 1;
    let (even, odd): (Vec<C>, Vec<C>) = x.chunks_exact(2).map(|pair| (pair[0], pair[1])).unzip();
    let xe = recursive_fft_core(&even);
    let xo = recursive_fft_core(&odd);

    let w = C::expj(-2.0 * PI / n as f64);
    let mut wk = C::one();
    let mut out = vec![C::zero(); n];
    for k in 0..half {
        let t = wk * xo[k];
        out[k] = xe[k] + t;
        out[k + half] = xe[k] - t;
        wk = wk * w;
    }
    out
}

/// Radix-2 decimation-in-time FFT, iterative in-place butterfly network.
///
/// Same contract as [`recursive_fft`]. The input is copied into a fresh buffer in
/// bit-reversed order and the butterflies run on that buffer, which is returned.
pub fn iterative_fft<C: ComplexSample>(x: &[C]) -> Result<Vec<C>, FftError> {
    let n = x.len();
    check_power_of_two(n)?;

    let r = n.trailing_zeros();
    let mut buffer = vec![C::zero(); n];
    for (k, &sample) in x.iter().enumerate() {
        buffer[bit_reverse(k, r)] = sample;
    }

    let mut step = 1;
    while step < n {
        let w = C::expj(-PI / step as f64);
        for l in (0..n).step_by(step << 1) {
            let mut wkn = C::one();
            for i in 0..step {
                let p = l + i;
                let q = p + step;
                let new_q = buffer[p] - wkn * buffer[q];
                buffer[p] = buffer[p].scale(2.0) - new_q;
                buffer[q] = new_q;
                wkn = wkn * w;
            }
        }
        step <<= 1;
    }

    Ok(buffer)
}

/// Cooley-Tukey FFT for any positive length.
///
/// Splits by the smallest prime factor at every level and falls back to
/// [`direct_ft`] once the length is prime.
pub fn mixed_radix_fft<C: ComplexSample>(x: &[C]) -> Result<Vec<C>, FftError> {
    if x.is_empty() {
        return Err(FftError::EmptyInput);
    }
    Ok(mixed_radix_core(x))
}

fn mixed_radix_core<C: ComplexSample>(x: &[C]) -> Vec<C> {
    let n = x.len();
    let n1 = factor(n);
    if n1 == n {
        return direct_ft(x);
    }

    let n2 = n / n1;
    let w = C::expj(-2.0 * PI / n as f64);
    let mut wj = C::one();
    let mut out = vec![C::zero(); n];
    let mut xj = Vec::with_capacity(n2);
    for j in 0..n1 {
        xj.clear();
        xj.extend(x.iter().skip(j).step_by(n1).copied());
        let sub = mixed_radix_core(&xj);

        let mut wkj = C::one();
        for (k, coeff) in out.iter_mut().enumerate() {
            *coeff = *coeff + sub[k % n2] * wkj;
            wkj = wkj * wj;
        }
        wj = wj * w;
    }
    out
}

fn check_power_of_two(n: usize) -> Result<(), FftError> {
    if n == 0 {
        return Err(FftError::EmptyInput);
    }
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }
    Ok(())
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
