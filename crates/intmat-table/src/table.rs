//! The slot table itself.

use intmat_core::{Matrix, MatrixName};
use log::debug;

use crate::config::TableConfig;
use crate::error::TableError;
use crate::slot::SlotIndex;

/// Result of [`MatrixTable::insert`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Insertion {
    /// Slot the new matrix was stored in.
    pub slot: SlotIndex,
    /// Name of the matrix that previously occupied the slot, if any.
    /// That matrix has already been dropped.
    pub evicted: Option<MatrixName>,
}

/// Fixed-capacity collection of matrices addressed by name.
///
/// # Examples
///
/// ```
/// use intmat_core::Matrix;
/// use intmat_table::{MatrixTable, SlotIndex, TableConfig};
///
/// let mut table = MatrixTable::new(TableConfig::new(2)).unwrap();
/// let a = table.insert(Matrix::zeros("a", 1, 1).unwrap());
/// let b = table.insert(Matrix::zeros("b", 1, 1).unwrap());
/// assert_eq!((a.slot, b.slot), (SlotIndex(0), SlotIndex(1)));
///
/// // The third insertion wraps around and evicts "a".
/// let c = table.insert(Matrix::zeros("c", 1, 1).unwrap());
/// assert_eq!(c.slot, SlotIndex(0));
/// assert_eq!(c.evicted.unwrap().as_str(), "a");
/// assert!(table.find_by_name("a").is_none());
/// ```
#[derive(Debug)]
pub struct MatrixTable {
    slots: Box<[Option<Matrix>]>,
    insertions: u64,
}

impl MatrixTable {
    /// Create an empty table.
    ///
    /// Fails with [`TableError::ZeroCapacity`] for a zero slot count and
    /// [`TableError::AllocationFailed`] if the slot array cannot be reserved.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        let capacity = config.capacity;
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        let mut slots: Vec<Option<Matrix>> = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| TableError::AllocationFailed { capacity })?;
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots: slots.into_boxed_slice(),
            insertions: 0,
        })
    }

    /// Store `matrix` in slot `insertions % capacity`.
    ///
    /// Any previous occupant of that slot is dropped unconditionally; names
    /// are not checked for collisions.
    pub fn insert(&mut self, matrix: Matrix) -> Insertion {
        let slot = self.next_slot();
        debug!("slot {slot}: storing matrix ({})", matrix.name());
        let previous = self.slots[slot.0].replace(matrix);
        self.insertions += 1;
        let evicted = previous.map(|old| {
            debug!("slot {slot}: evicted matrix ({})", old.name());
            old.into_parts().0
        });
        Insertion { slot, evicted }
    }

    /// Slot the next [`insert`](Self::insert) will use.
    pub fn next_slot(&self) -> SlotIndex {
        SlotIndex((self.insertions % self.slots.len() as u64) as usize)
    }

    /// First slot whose matrix is named exactly `name`.
    ///
    /// Names compare by full equality: a stored `"A"` does not match a query
    /// for `"AB"`, nor the reverse.
    pub fn find_by_name(&self, name: &str) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|slot| {
                slot.as_ref()
                    .is_some_and(|m| m.name().as_str() == name)
            })
            .map(SlotIndex)
    }

    /// The matrix named `name`.
    pub fn lookup(&self, name: &str) -> Result<&Matrix, TableError> {
        self.find_by_name(name)
            .and_then(|slot| self.get(slot))
            .ok_or_else(|| TableError::NotFound {
                name: name.to_string(),
            })
    }

    /// The matrix named `name`, mutably.
    pub fn lookup_mut(&mut self, name: &str) -> Result<&mut Matrix, TableError> {
        self.find_by_name(name)
            .and_then(|slot| self.get_mut(slot))
            .ok_or_else(|| TableError::NotFound {
                name: name.to_string(),
            })
    }

    /// The matrix in `slot`, if occupied.
    pub fn get(&self, slot: SlotIndex) -> Option<&Matrix> {
        self.slots.get(slot.0)?.as_ref()
    }

    /// The matrix in `slot`, mutably.
    pub fn get_mut(&mut self, slot: SlotIndex) -> Option<&mut Matrix> {
        self.slots.get_mut(slot.0)?.as_mut()
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &Matrix)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|m| (SlotIndex(i), m)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Total slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// How many insertions this table has performed.
    pub fn insertions(&self) -> u64 {
        self.insertions
    }

    /// Drop every stored matrix, returning how many were released.
    ///
    /// The insertion counter is left as is.
    pub fn teardown(&mut self) -> usize {
        let released = self
            .slots
            .iter_mut()
            .filter_map(Option::take)
            .count();
        debug!("teardown released {released} matrices");
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intmat_test_utils::sequential_matrix;
    use proptest::prelude::*;

    fn table(capacity: usize) -> MatrixTable {
        MatrixTable::new(TableConfig::new(capacity)).unwrap()
    }

    fn named(name: &str) -> Matrix {
        Matrix::zeros(name, 1, 1).unwrap()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            MatrixTable::new(TableConfig::new(0)).unwrap_err(),
            TableError::ZeroCapacity
        );
    }

    #[test]
    fn empty_table_finds_nothing() {
        let t = table(10);
        assert!(t.is_empty());
        assert_eq!(t.find_by_name("temp_mat"), None);
        assert_eq!(t.find_by_name(""), None);
        assert!(matches!(t.lookup("A"), Err(TableError::NotFound { .. })));
    }

    #[test]
    fn slots_fill_in_order() {
        let mut t = table(3);
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            let ins = t.insert(named(name));
            assert_eq!(ins.slot, SlotIndex(i));
            assert!(ins.evicted.is_none());
        }
        assert_eq!(t.len(), 3);
        assert_eq!(t.insertions(), 3);
        assert_eq!(t.next_slot(), SlotIndex(0));
    }

    #[test]
    fn overflow_evicts_slot_zero() {
        let mut t = table(10);
        for i in 0..10 {
            let _ = t.insert(named(&format!("m{i}")));
        }
        let ins = t.insert(named("m10"));
        assert_eq!(ins.slot, SlotIndex(0));
        assert_eq!(ins.evicted.map(|n| n.to_string()), Some("m0".to_string()));
        assert_eq!(t.find_by_name("m0"), None);
        assert_eq!(t.find_by_name("m10"), Some(SlotIndex(0)));
        assert_eq!(t.len(), 10);
    }

    #[test]
    fn duplicate_names_resolve_to_first_slot() {
        let mut t = table(4);
        let _ = t.insert(sequential_matrix("dup", 1, 1, 1));
        let _ = t.insert(sequential_matrix("dup", 1, 1, 2));
        assert_eq!(t.find_by_name("dup"), Some(SlotIndex(0)));
        assert_eq!(t.lookup("dup").unwrap().data(), &[1]);
    }

    #[test]
    fn lookup_is_exact_not_prefix() {
        let mut t = table(4);
        let _ = t.insert(named("A"));
        assert_eq!(t.find_by_name("AB"), None);
        assert_eq!(t.find_by_name("A"), Some(SlotIndex(0)));

        let _ = t.insert(named("temp_mat"));
        assert_eq!(t.find_by_name("temp"), None);
    }

    #[test]
    fn lookup_mut_edits_in_place() {
        let mut t = table(2);
        let _ = t.insert(named("A"));
        t.lookup_mut("A").unwrap().data_mut()[0] = 42;
        assert_eq!(t.lookup("A").unwrap().data(), &[42]);
        assert!(t.lookup_mut("B").is_err());
    }

    #[test]
    fn get_mut_addresses_slots_directly() {
        let mut t = table(3);
        let _ = t.insert(named("a"));
        t.get_mut(SlotIndex(0)).unwrap().data_mut()[0] = 7;
        assert_eq!(t.get(SlotIndex(0)).unwrap().data(), &[7]);
        assert!(t.get_mut(SlotIndex(1)).is_none());
        assert!(t.get_mut(SlotIndex(3)).is_none());
    }

    #[test]
    fn independent_tables_keep_their_own_counters() {
        let mut a = table(3);
        let mut b = table(3);
        let _ = a.insert(named("x"));
        let _ = a.insert(named("y"));
        let ins = b.insert(named("z"));
        assert_eq!(ins.slot, SlotIndex(0));
        assert_eq!(a.next_slot(), SlotIndex(2));
    }

    #[test]
    fn teardown_releases_everything() {
        let mut t = table(3);
        let _ = t.insert(named("a"));
        let _ = t.insert(named("b"));
        assert_eq!(t.teardown(), 2);
        assert!(t.is_empty());
        assert_eq!(t.teardown(), 0);
        // Counter survives, so slot assignment keeps rotating.
        assert_eq!(t.next_slot(), SlotIndex(2));
    }

    #[test]
    fn iter_skips_empty_slots() {
        let mut t = table(4);
        let _ = t.insert(named("a"));
        let _ = t.insert(named("b"));
        let names: Vec<_> = t.iter().map(|(_, m)| m.name().to_string()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    proptest! {
        #[test]
        fn oldest_is_evicted_after_wraparound(capacity in 1usize..16, extra in 1usize..16) {
            let mut t = table(capacity);
            let total = capacity + extra;
            for i in 0..total {
                let _ = t.insert(named(&format!("m{i}")));
            }
            prop_assert_eq!(t.len(), capacity);
            // Exactly the most recent `capacity` names remain.
            for i in 0..total {
                let present = t.find_by_name(&format!("m{i}")).is_some();
                prop_assert_eq!(present, i >= extra);
            }
        }
    }
}
