use crate::{
    error::{Error, Result},
    types::{VId, MAX_VERTICES},
};

const HIGHEST: u16 = 0x8000;

/// The vertex membership of a graph.
///
/// Slot `i` is stored in bit `15 - i`, so slot 0 is the most significant bit.
/// This is the order the graph6 header fills slots in.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VertexSet {
    bits: u16,
}

impl VertexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set `{0, 1, ..., n - 1}`.
    ///
    /// `n` is clamped to the number of slots.
    pub fn prefix(n: usize) -> Self {
        let n = n.min(MAX_VERTICES);
        Self {
            bits: (u32::MAX << (MAX_VERTICES - n)) as u16,
        }
    }

    pub fn from_bits(bits: u16) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> u16 {
        self.bits
    }

    pub fn contains(&self, v: VId) -> bool {
        v < MAX_VERTICES && self.bits & mask(v) != 0
    }

    /// Returns `true` if `v` was not already present.
    pub fn insert(&mut self, v: VId) -> Result<bool> {
        check_range(v)?;
        let fresh = !self.contains(v);
        self.bits |= mask(v);
        Ok(fresh)
    }

    /// Returns `true` if `v` was present.
    pub fn remove(&mut self, v: VId) -> Result<bool> {
        check_range(v)?;
        let present = self.contains(v);
        self.bits &= !mask(v);
        Ok(present)
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates over the present slots in ascending order.
    pub fn iter(&self) -> Iter {
        Iter { bits: self.bits }
    }
}

#[inline]
fn mask(v: VId) -> u16 {
    HIGHEST >> v
}

pub(crate) fn check_range(v: VId) -> Result<()> {
    if v < MAX_VERTICES {
        Ok(())
    } else {
        Err(Error::OutOfRange(v))
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = VId;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An iterator over the slots of a [`VertexSet`](struct.VertexSet.html).
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = VId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let v = self.bits.leading_zeros() as VId;
            self.bits &= !mask(v);
            Some(v)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_order() {
        let mut set = VertexSet::new();
        set.insert(0).unwrap();
        assert_eq!(set.bits(), 0x8000);
        set.insert(15).unwrap();
        assert_eq!(set.bits(), 0x8001);
        assert_eq!(VertexSet::prefix(4).bits(), 0xf000);
        assert_eq!(VertexSet::prefix(16).bits(), 0xffff);
        assert_eq!(VertexSet::prefix(0).bits(), 0);
    }

    #[test]
    fn test_insert_remove() {
        let mut set = VertexSet::new();
        assert_eq!(set.insert(3), Ok(true));
        assert_eq!(set.insert(3), Ok(false));
        assert_eq!(set.len(), 1);
        assert_eq!(set.remove(3), Ok(true));
        assert_eq!(set.remove(3), Ok(false));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_remove_out_of_range() {
        let mut set = VertexSet::prefix(3);
        assert_eq!(set.insert(16), Err(Error::OutOfRange(16)));
        assert_eq!(set.remove(16), Err(Error::OutOfRange(16)));
        assert_eq!(set.insert(usize::MAX), Err(Error::OutOfRange(usize::MAX)));
        assert_eq!(set, VertexSet::prefix(3));
    }

    #[test]
    fn test_contains_out_of_range() {
        let set = VertexSet::from_bits(0xffff);
        assert!(set.contains(15));
        assert!(!set.contains(16));
        assert!(!set.contains(usize::MAX));
    }

    #[test]
    fn test_iter() {
        let mut set = VertexSet::new();
        for &v in &[9, 2, 15, 0] {
            set.insert(v).unwrap();
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 9, 15]);
        assert_eq!(set.iter().len(), 4);
        assert_eq!(format!("{:?}", set), "{0, 2, 9, 15}");
    }
}
