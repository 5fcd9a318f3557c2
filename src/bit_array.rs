use bit_vec::BitVec;
use std::fmt::{Debug, Formatter};

/// Fixed-length bit vector whose bits can only be set, never cleared.
///
/// Clearing a bit could un-mark any other element that hashes onto it, so no
/// such operation exists.
#[derive(Clone)]
pub struct BitArray {
    storage: BitVec,
    // number of bits currently set
    ones: usize,
}

impl BitArray {
    pub fn new(len: usize) -> Self {
        Self {
            storage: BitVec::from_elem(len, false),
            ones: 0,
        }
    }

    /// Sets bit `idx` and reports whether it was clear before.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    pub fn set(&mut self, idx: usize) -> bool {
        let was_set = self.test(idx);
        if !was_set {
            self.storage.set(idx, true);
            self.ones += 1;
        }
        !was_set
    }

    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    pub fn test(&self, idx: usize) -> bool {
        match self.storage.get(idx) {
            Some(bit) => bit,
            None => panic!("bit index {} out of range for {} bits", idx, self.storage.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn count_ones(&self) -> usize {
        self.ones
    }
}

impl Debug for BitArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitArray {{ len: {}, ones: {} }}", self.storage.len(), self.ones)
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl Eq for BitArray {}
