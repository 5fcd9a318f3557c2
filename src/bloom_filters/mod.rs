mod base;
mod keyed_bloom_filter;

pub use self::base::Filter;
pub use self::keyed_bloom_filter::{KeyedBloomFilter, UninitFilter};
