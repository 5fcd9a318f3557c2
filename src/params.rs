//! Sizing formulas for a Bloom filter.
//!
//! With `n` the number of elements to insert, `p` the target false positive
//! rate, `m` the number of bits and `k` the number of hash functions:
//!
//! * `m = -(n * ln p) / (ln 2)^2`
//! * `k = m / n * ln 2`
//! * `p = (1 - e^(-k * n / m))^k`

use crate::bloom_filters::UninitFilter;
use log::debug;
use std::f64::consts::LN_2;

/// m = -(nlε/(ln2)^2) where ε is desired false positive probability,
/// in our case it is indicated by the letter f
///
/// `f` must lie in (0, 1); anything else gives a meaningless size.
pub fn calculate_m(n: u64, f: f64) -> u64 {
    (-(n as f64) * f.ln() / (LN_2 * LN_2)).ceil() as u64
}

/// k = m/n * ln2
pub fn calculate_k(n: u64, m: u64) -> u64 {
    (LN_2 * m as f64 / n as f64).ceil() as u64
}

/// Expected false positive rate of an `m`-bit filter with `k` hash functions
/// once it holds exactly `n` elements.
pub fn calculate_error_rate(n: u64, m: u64, k: u64) -> f64 {
    let y = n as f64 * k as f64 / m as f64;
    (1. - (-y).exp()).powf(k as f64)
}

/// The four numbers a filter is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub element_count: u64,
    pub bit_array_size: u64,
    pub hash_func_count: u64,
    pub error_rate: f64,
}

impl Params {
    pub fn new(
        element_count: u64,
        bit_array_size: u64,
        hash_func_count: u64,
        error_rate: f64,
    ) -> Self {
        Self {
            element_count,
            bit_array_size,
            hash_func_count,
            error_rate,
        }
    }

    /// Derives the bit array size and hash function count for `n` elements
    /// at false positive rate `f`.
    pub fn from_capacity(n: u64, f: f64) -> Self {
        let m = calculate_m(n, f);
        let k = calculate_k(n, m);
        debug!(
            "bloom params for {} elements at rate {}: m = {} bits, k = {}",
            n, f, m, k
        );
        Self::new(n, m, k, f)
    }

    pub fn expected_error_rate(&self) -> f64 {
        calculate_error_rate(self.element_count, self.bit_array_size, self.hash_func_count)
    }

    pub fn size_in_bytes(&self) -> u64 {
        self.bit_array_size.div_ceil(8)
    }

    pub fn build(&self) -> UninitFilter {
        UninitFilter::from_params(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_array_size_for_ten_billion() {
        let m = calculate_m(10_000_000_000, 0.0001);
        assert_eq!(m, 191_701_167_548);

        let k = calculate_k(10_000_000_000, m);
        assert_eq!(k, 14);

        let rate = calculate_error_rate(10_000_000_000, m, k);
        assert!((rate - 0.0001).abs() / 0.0001 < 0.01, "rate = {}", rate);
    }

    #[test]
    fn bit_array_size_for_hundred_billion() {
        let m = calculate_m(100_000_000_000, 0.0001);
        assert_eq!(m, 1_917_011_675_474);

        let k = calculate_k(100_000_000_000, m);
        let rate = calculate_error_rate(100_000_000_000, m, k);
        assert!((rate - 0.0001).abs() / 0.0001 < 0.01, "rate = {}", rate);
    }

    #[test]
    fn bit_array_size_is_monotonic() {
        assert!(calculate_m(1_000, 0.01) < calculate_m(2_000, 0.01));
        assert!(calculate_m(1_000, 0.01) < calculate_m(1_000, 0.001));
    }

    #[test]
    fn formulas_agree_with_each_other() {
        let cases = [
            (100, 0.1),
            (1_000, 0.01),
            (10_000, 0.02),
            (1_000_000, 0.001),
            (50_000_000, 0.0001),
        ];
        for (n, f) in cases {
            let params = Params::from_capacity(n, f);
            let rate = params.expected_error_rate();
            assert!(
                (rate - f).abs() / f <= 0.15,
                "n = {}, f = {}: derived rate {}",
                n,
                f,
                rate
            );
        }
    }

    #[test]
    fn error_rate_grows_past_capacity() {
        let params = Params::from_capacity(1_000, 0.01);
        let at_capacity = params.expected_error_rate();
        let overfilled =
            calculate_error_rate(4_000, params.bit_array_size, params.hash_func_count);
        assert!(overfilled > at_capacity);
        assert!(overfilled <= 1.);
    }

    #[test]
    fn size_in_bytes_rounds_up() {
        assert_eq!(Params::new(1, 8, 1, 0.5).size_in_bytes(), 1);
        assert_eq!(Params::new(1, 9, 1, 0.5).size_in_bytes(), 2);
    }
}
