pub trait Filter {
    /// Marks `value` as present. Inserting the same value again changes nothing.
    fn insert(&mut self, value: &[u8]);

    /// `false` means `value` was never inserted; `true` means it probably was.
    fn lookup(&self, value: &[u8]) -> bool;

    /// number of bits in the filter
    fn get_size(&self) -> usize;
}
