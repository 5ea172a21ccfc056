use crate::{
    error::{Error, Result},
    types::VId,
};

/// The adjacency sequence of one vertex slot.
///
/// Neighbors are distinct and kept in ascending order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Neighbors {
    vids: Vec<VId>,
}

impl Neighbors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vids.is_empty()
    }

    pub fn contains(&self, v: VId) -> bool {
        self.vids.binary_search(&v).is_ok()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, VId>> {
        self.vids.iter().copied()
    }

    pub fn as_slice(&self) -> &[VId] {
        &self.vids
    }

    /// Inserts `v` in front of the first neighbor not less than it.
    ///
    /// Returns `false` if `v` was already a neighbor.
    pub fn insert(&mut self, v: VId) -> Result<bool> {
        if self.contains(v) {
            Ok(false)
        } else {
            self.reserve()?;
            Ok(self.insert_reserved(v))
        }
    }

    /// Returns `false` if `v` was not a neighbor.
    pub fn remove(&mut self, v: VId) -> bool {
        match self.vids.binary_search(&v) {
            Ok(pos) => {
                self.vids.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.vids.clear();
    }

    /// Makes room for one more neighbor without touching the contents.
    pub(crate) fn reserve(&mut self) -> Result<()> {
        #[cfg(test)]
        reserve_hook()?;
        self.vids
            .try_reserve(1)
            .map_err(|_| Error::AllocationFailure)
    }

    /// Like [`insert`](#method.insert), for a caller that already made room
    /// with `reserve`.
    pub(crate) fn insert_reserved(&mut self, v: VId) -> bool {
        match self.vids.binary_search(&v) {
            Ok(_) => false,
            Err(pos) => {
                self.vids.insert(pos, v);
                true
            }
        }
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = VId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, VId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for Neighbors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
thread_local! {
    static RESERVES_LEFT: std::cell::Cell<Option<usize>> = std::cell::Cell::new(None);
}

/// Make the reservation that follows the next `n` ones on this thread fail.
#[cfg(test)]
pub(crate) fn fail_reserve_after(n: usize) {
    RESERVES_LEFT.with(|left| left.set(Some(n)));
}

#[cfg(test)]
fn reserve_hook() -> Result<()> {
    RESERVES_LEFT.with(|left| match left.get() {
        Some(0) => {
            left.set(None);
            Err(Error::AllocationFailure)
        }
        Some(n) => {
            left.set(Some(n - 1));
            Ok(())
        }
        None => Ok(()),
    })
}
