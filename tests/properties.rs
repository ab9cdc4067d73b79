//! Property tests for the transform core.
//!
//! Reproduce a failure: `PROPTEST_SEED=<seed> cargo test --test properties`

use proptest::prelude::*;
use simple_dft::{
    Algorithm, Complex64, FftProcess, bit_reverse, direct_ft, factor, iterative_fft,
    mixed_radix_fft, recursive_fft,
};

const TOLERANCE: f64 = 1e-6;

fn arb_sequence(len: usize) -> impl Strategy<Value = Vec<Complex64>> {
    prop::collection::vec((-10.0..10.0_f64, -10.0..10.0_f64), len)
        .prop_map(|pairs| pairs.into_iter().map(|(re, im)| Complex64::new(re, im)).collect())
}

fn arb_pow2_sequence() -> impl Strategy<Value = Vec<Complex64>> {
    (0u32..=7).prop_flat_map(|bits| arb_sequence(1 << bits))
}

fn arb_any_sequence() -> impl Strategy<Value = Vec<Complex64>> {
    (1usize..=64).prop_flat_map(arb_sequence)
}

fn close(a: Complex64, b: Complex64, scale: f64) -> bool {
    (a - b).l1_norm() <= TOLERANCE * (1.0 + scale)
}

fn energy(x: &[Complex64]) -> f64 {
    x.iter().map(|c| c.norm_sqr()).sum()
}

// ═══════════════════════════════════════════════════════════════
// Property 1: every variant agrees with the direct transform
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn radix_2_variants_agree_with_direct(x in arb_pow2_sequence()) {
        let reference = direct_ft(&x);
        let scale = energy(&x).sqrt() * x.len() as f64;
        let recursive = recursive_fft(&x).expect("power of two length");
        let iterative = iterative_fft(&x).expect("power of two length");
        prop_assert_eq!(recursive.len(), x.len());
        prop_assert_eq!(iterative.len(), x.len());
        for k in 0..x.len() {
            prop_assert!(close(recursive[k], reference[k], scale),
                "recursive X[{k}] = {} vs {}", recursive[k], reference[k]);
            prop_assert!(close(iterative[k], reference[k], scale),
                "iterative X[{k}] = {} vs {}", iterative[k], reference[k]);
        }
    }

    #[test]
    fn mixed_radix_agrees_with_direct(x in arb_any_sequence()) {
        let reference = direct_ft(&x);
        let scale = energy(&x).sqrt() * x.len() as f64;
        let out = mixed_radix_fft(&x).expect("non-empty input");
        prop_assert_eq!(out.len(), x.len());
        for k in 0..x.len() {
            prop_assert!(close(out[k], reference[k], scale),
                "n = {}: X[{k}] = {} vs {}", x.len(), out[k], reference[k]);
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 2: linearity and the DC component
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn transforms_are_linear(
        (x, y) in (1usize..=32).prop_flat_map(|n| (arb_sequence(n), arb_sequence(n))),
        a in -4.0..4.0_f64,
        b in -4.0..4.0_f64,
    ) {
        let n = x.len();
        let combined: Vec<Complex64> = x.iter().zip(&y).map(|(&p, &q)| p * a + q * b).collect();
        let scale = (energy(&x).sqrt() + energy(&y).sqrt()) * 4.0 * n as f64;

        for algorithm in Algorithm::ALL.into_iter().filter(|alg| alg.supports_len(n)) {
            let fx = algorithm.process(x.as_slice()).expect("supported length");
            let fy = algorithm.process(y.as_slice()).expect("supported length");
            let fc = algorithm.process(combined.as_slice()).expect("supported length");
            for k in 0..n {
                let expected = fx[k] * a + fy[k] * b;
                prop_assert!(close(fc[k], expected, scale),
                    "{algorithm} n = {n}: X[{k}] = {} vs {}", fc[k], expected);
            }
        }
    }

    #[test]
    fn dc_component_is_sum_of_samples(x in arb_any_sequence()) {
        let sum: Complex64 = x.iter().sum();
        let scale = energy(&x).sqrt() * x.len() as f64;
        for algorithm in Algorithm::ALL.into_iter().filter(|alg| alg.supports_len(x.len())) {
            let out = algorithm.process(x.as_slice()).expect("supported length");
            prop_assert!(close(out[0], sum, scale), "{algorithm}: {} vs {}", out[0], sum);
        }
    }

    #[test]
    fn parseval_energy_relation(x in arb_any_sequence()) {
        let n = x.len() as f64;
        let expected = n * energy(&x);
        for algorithm in Algorithm::ALL.into_iter().filter(|alg| alg.supports_len(x.len())) {
            let out = algorithm.process(x.as_slice()).expect("supported length");
            let got = energy(&out);
            prop_assert!((got - expected).abs() <= 1e-6 * (1.0 + expected),
                "{algorithm}: {got} vs {expected}");
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 3: integer helpers
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn bit_reverse_is_an_involution(r in 0u32..=20, seed in any::<usize>()) {
        let k = if r == 0 { 0 } else { seed % (1usize << r) };
        let rev = bit_reverse(k, r);
        prop_assert!(rev < 1usize << r);
        prop_assert_eq!(bit_reverse(rev, r), k);
    }

    #[test]
    fn factor_is_smallest_divisor(n in 2usize..20_000) {
        let f = factor(n);
        prop_assert!(f >= 2);
        prop_assert_eq!(n % f, 0);
        prop_assert!((2..f).all(|d| n % d != 0), "{n} has a divisor below {f}");
    }
}

#[test]
fn prime_lengths_take_the_direct_path() {
    for n in [7usize, 11, 13, 17, 101] {
        assert_eq!(factor(n), n);
        let x: Vec<Complex64> = (0..n).map(|j| Complex64::new(j as f64, -(j as f64))).collect();
        let direct = direct_ft(&x);
        let mixed = mixed_radix_fft(&x).expect("non-empty input");
        for (a, b) in mixed.iter().zip(&direct) {
            assert!((a - b).l1_norm() < 1e-9, "{a} vs {b}");
        }
    }
}
