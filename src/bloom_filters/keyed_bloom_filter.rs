use crate::bit_array::BitArray;
use crate::bloom_filters::Filter;
use crate::error::FilterError;
use crate::hash_family::{generate_seeds, HmacSha1, KeyedHasher};
use crate::params::Params;
use log::debug;
use rand::RngCore;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};

/// A filter that has its parameters but no bits or seeds yet.
///
/// Call [`UninitFilter::init`] to allocate the bit array and draw the hash
/// family's seeds.
#[derive(Clone, Debug)]
pub struct UninitFilter<H = HmacSha1> {
    params: Params,
    hasher: H,
}

impl UninitFilter {
    pub(crate) fn from_params(params: Params) -> Self {
        Self {
            params,
            hasher: HmacSha1,
        }
    }
}

impl<H> UninitFilter<H> {
    /// Swaps the keyed hash the filter's index functions are built on.
    pub fn with_hasher<G: KeyedHasher>(self, hasher: G) -> UninitFilter<G> {
        UninitFilter {
            params: self.params,
            hasher,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl<H: KeyedHasher> UninitFilter<H> {
    /// Allocates the bit array and draws one distinct seed per hash function
    /// from `rng`. Production callers should pass `rand::rngs::OsRng`.
    ///
    /// Fails only if `rng` itself fails; no filter is produced in that case.
    pub fn init<R>(self, rng: &mut R) -> Result<KeyedBloomFilter<H>, FilterError>
    where
        R: RngCore + ?Sized,
    {
        let seeds = generate_seeds(self.params.hash_func_count, rng)?;
        Ok(self.finish(seeds))
    }

    /// Like [`init`](Self::init), but with the seeds given up front.
    /// Repeated values are dropped, keeping first occurrences in order.
    pub fn init_with_seeds(self, seeds: &[u32]) -> Result<KeyedBloomFilter<H>, FilterError> {
        let mut seen = HashSet::with_capacity(seeds.len());
        let seeds: Vec<u32> = seeds.iter().copied().filter(|s| seen.insert(*s)).collect();
        if seeds.len() as u64 != self.params.hash_func_count {
            return Err(FilterError::SeedCount {
                expected: self.params.hash_func_count,
                found: seeds.len() as u64,
            });
        }
        Ok(self.finish(seeds))
    }

    fn finish(self, seeds: Vec<u32>) -> KeyedBloomFilter<H> {
        debug!(
            "bloom filter initialized: {} bits, {} hash functions, capacity {}",
            self.params.bit_array_size, self.params.hash_func_count, self.params.element_count
        );
        KeyedBloomFilter {
            storage: BitArray::new(self.params.bit_array_size as usize),
            params: self.params,
            seeds,
            hasher: self.hasher,
        }
    }
}

/// Bloom filter whose `k` index functions are one keyed hash under `k`
/// distinct random seeds.
#[derive(Clone)]
pub struct KeyedBloomFilter<H = HmacSha1> {
    params: Params,
    seeds: Vec<u32>,
    hasher: H,

    storage: BitArray,
}

impl KeyedBloomFilter {
    /// n -- number of elements to insert
    /// m -- number of bits in a Bloom filter
    /// k -- number of hash functions
    /// f -- the false positive rate
    ///
    /// Nothing is checked here; `m` and `k` must both be positive. Usually
    /// they come from [`Params::from_capacity`].
    #[allow(clippy::new_ret_no_self)]
    pub fn new(n: u64, m: u64, k: u64, f: f64) -> UninitFilter {
        Params::new(n, m, k, f).build()
    }
}

impl<H> KeyedBloomFilter<H> {
    pub fn element_count(&self) -> u64 {
        self.params.element_count
    }

    pub fn bit_array_size(&self) -> u64 {
        self.params.bit_array_size
    }

    pub fn hash_func_count(&self) -> u64 {
        self.params.hash_func_count
    }

    pub fn error_rate(&self) -> f64 {
        self.params.error_rate
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn seeds(&self) -> &[u32] {
        &self.seeds
    }

    pub fn bits(&self) -> &BitArray {
        &self.storage
    }

    pub fn count_ones(&self) -> usize {
        self.storage.count_ones()
    }

    /// Approximate number of distinct elements inserted so far,
    /// `-m/k * ln(1 - X/m)` with `X` the number of set bits.
    pub fn estimated_len(&self) -> f64 {
        let m = self.params.bit_array_size as f64;
        let k = self.params.hash_func_count as f64;
        let ones = self.storage.count_ones() as f64;
        -m / k * (1. - ones / m).ln()
    }

    /// False positive probability implied by the current fill, `(X/m)^k`.
    pub fn current_error_rate(&self) -> f64 {
        let fill = self.storage.count_ones() as f64 / self.params.bit_array_size as f64;
        fill.powf(self.params.hash_func_count as f64)
    }
}

impl<H: KeyedHasher> KeyedBloomFilter<H> {
    fn bit_index(&self, seed: u32, value: &[u8]) -> usize {
        self.hasher.index(seed, value, self.params.bit_array_size) as usize
    }
}

impl<H: KeyedHasher> Filter for KeyedBloomFilter<H> {
    fn insert(&mut self, value: &[u8]) {
        for &seed in &self.seeds {
            let idx = self.bit_index(seed, value);
            self.storage.set(idx);
        }
    }

    fn lookup(&self, value: &[u8]) -> bool {
        for &seed in &self.seeds {
            if !self.storage.test(self.bit_index(seed, value)) {
                return false;
            }
        }
        true
    }

    fn get_size(&self) -> usize {
        self.storage.len()
    }
}

impl<H> Debug for KeyedBloomFilter<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KeyedBloomFilter {{ num_bits: {}, num_hashes: {}, ones: {} }}",
            self.params.bit_array_size,
            self.params.hash_func_count,
            self.storage.count_ones()
        )
    }
}
