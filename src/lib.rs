//! A Bloom filter whose hash family is a keyed hash under distinct random
//! seeds.
//!
//! ```
//! use keyed_bloom::{Filter, Params};
//! use rand::rngs::OsRng;
//!
//! let params = Params::from_capacity(1_000, 0.001);
//! let mut bf = params.build().init(&mut OsRng).unwrap();
//!
//! bf.insert(b"hello");
//! assert!(bf.lookup(b"hello"));
//! ```

pub mod bit_array;
pub mod bloom_filters;
pub mod error;
pub mod hash_family;
pub mod params;

pub use self::bit_array::BitArray;
pub use self::bloom_filters::{Filter, KeyedBloomFilter, UninitFilter};
pub use self::error::FilterError;
pub use self::hash_family::{generate_seeds, HmacSha1, KeyedHasher, Xxh3};
pub use self::params::{calculate_error_rate, calculate_k, calculate_m, Params};
