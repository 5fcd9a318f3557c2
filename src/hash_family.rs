//! A family of `k` index functions built from one keyed hash.
//!
//! Every member of the family is the same keyed hash under a different
//! 32-bit seed. Distinct seeds give effectively independent functions.

use crate::error::FilterError;
use hmac::{Hmac, Mac};
use log::trace;
use rand::RngCore;
use sha1::Sha1;
use std::collections::HashSet;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Maps an element to a bit index in `[0, modulus)` under a given seed.
pub trait KeyedHasher {
    fn index(&self, seed: u32, element: &[u8], modulus: u64) -> u64;
}

/// HMAC-SHA1 keyed by the little-endian seed bytes. The 160-bit digest is read
/// as a big-endian integer and reduced modulo the bit count.
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha1;

impl KeyedHasher for HmacSha1 {
    fn index(&self, seed: u32, element: &[u8], modulus: u64) -> u64 {
        let mut mac = <Hmac<Sha1> as Mac>::new_from_slice(&seed.to_le_bytes())
            .expect("HMAC takes keys of any length");
        mac.update(element);
        reduce_be(&mac.finalize().into_bytes(), modulus)
    }
}

/// xxh3 seeded directly with the seed value. Not resistant to crafted input.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3;

impl KeyedHasher for Xxh3 {
    fn index(&self, seed: u32, element: &[u8], modulus: u64) -> u64 {
        xxh3_64_with_seed(element, seed as u64) % modulus
    }
}

/// Big-endian `bytes` mod `modulus`, via Horner's rule.
fn reduce_be(bytes: &[u8], modulus: u64) -> u64 {
    let modulus = modulus as u128;
    bytes
        .iter()
        .fold(0u128, |acc, &b| ((acc << 8) | b as u128) % modulus) as u64
}

/// Draws `count` distinct seeds from `rng`, in draw order.
///
/// Duplicate draws are thrown away and drawn again.
///
/// # Panics
///
/// Panics if `count` exceeds the number of distinct 32-bit values.
pub fn generate_seeds<R>(count: u64, rng: &mut R) -> Result<Vec<u32>, FilterError>
where
    R: RngCore + ?Sized,
{
    assert!(
        count <= u32::MAX as u64 + 1,
        "cannot draw {} distinct 32-bit seeds",
        count
    );
    let mut seen = HashSet::with_capacity(count as usize);
    let mut seeds = Vec::with_capacity(count as usize);
    let mut buf = [0u8; 4];
    while (seeds.len() as u64) < count {
        rng.try_fill_bytes(&mut buf)?;
        let seed = u32::from_le_bytes(buf);
        if seen.insert(seed) {
            seeds.push(seed);
        } else {
            trace!("duplicate seed {} drawn, redrawing", seed);
        }
    }
    Ok(seeds)
}
