//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [SymbolSet] used for
//! storing the candidate symbols of cells.

use serde::{Deserialize, Serialize};

use std::collections::HashSet;
use std::hash::Hash;

/// The maximum number of distinct symbols a [SymbolSet] can track. This also
/// bounds the side length of boards, since every cell needs a domain over all
/// symbols of the board.
pub const MAX_SYMBOLS: usize = 64;

/// A set of candidate symbols in the range `[1, size]`, implemented as a
/// single machine word where symbol `s` is represented by bit `s - 1`. Since
/// boards are bounded by [MAX_SYMBOLS], one word is always sufficient, which
/// makes snapshots of all domains on a board cheap.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SymbolSet {
    size: usize,
    bits: u64
}

/// An enumeration of the errors that can happen when using a [SymbolSet].
#[derive(Debug, Eq, PartialEq)]
pub enum SymbolSetError {

    /// Indicates that the symbol range provided in the constructor is
    /// invalid, that is, zero or greater than [MAX_SYMBOLS].
    InvalidSize,

    /// Indicates that a symbol that was queried to be inserted or removed is
    /// outside the range `[1, size]` of the `SymbolSet` in question.
    OutOfRange
}

/// Syntactic sugar for `Result<V, SymbolSetError>`.
pub type SymbolSetResult<V> = Result<V, SymbolSetError>;

/// An iterator over the symbols contained in a [SymbolSet] in ascending
/// order.
pub struct SymbolSetIter {
    bits: u64
}

impl Iterator for SymbolSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            None
        }
        else {
            let bit_index = self.bits.trailing_zeros() as usize;
            self.bits &= self.bits - 1;
            Some(bit_index + 1)
        }
    }
}

impl SymbolSet {

    fn check_size(size: usize) -> SymbolSetResult<()> {
        if size == 0 || size > MAX_SYMBOLS {
            Err(SymbolSetError::InvalidSize)
        }
        else {
            Ok(())
        }
    }

    /// Creates a new, empty `SymbolSet` over the symbols `[1, size]`.
    ///
    /// # Errors
    ///
    /// If `size` is zero or greater than [MAX_SYMBOLS]. In that case,
    /// `SymbolSetError::InvalidSize` is returned.
    pub fn empty(size: usize) -> SymbolSetResult<SymbolSet> {
        SymbolSet::check_size(size)?;

        Ok(SymbolSet {
            size,
            bits: 0
        })
    }

    /// Creates a new `SymbolSet` over the symbols `[1, size]` that contains
    /// all of them.
    ///
    /// # Errors
    ///
    /// If `size` is zero or greater than [MAX_SYMBOLS]. In that case,
    /// `SymbolSetError::InvalidSize` is returned.
    pub fn full(size: usize) -> SymbolSetResult<SymbolSet> {
        SymbolSet::check_size(size)?;
        let bits =
            if size == MAX_SYMBOLS { !0u64 } else { (1u64 << size) - 1 };

        Ok(SymbolSet {
            size,
            bits
        })
    }

    /// Creates a new `SymbolSet` over the symbols `[1, size]` that contains
    /// only the given `symbol`.
    ///
    /// # Errors
    ///
    /// * `SymbolSetError::InvalidSize`: If `size` is zero or greater than
    /// [MAX_SYMBOLS].
    /// * `SymbolSetError::OutOfRange`: If `symbol` is zero or greater than
    /// `size`.
    pub fn singleton(size: usize, symbol: usize)
            -> SymbolSetResult<SymbolSet> {
        let mut set = SymbolSet::empty(size)?;
        set.insert(symbol)?;
        Ok(set)
    }

    fn mask(&self, symbol: usize) -> SymbolSetResult<u64> {
        if symbol == 0 || symbol > self.size {
            Err(SymbolSetError::OutOfRange)
        }
        else {
            Ok(1u64 << (symbol - 1))
        }
    }

    /// Returns the number of symbols over which this set ranges, i.e. the
    /// highest symbol that can be contained.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Indicates whether this set contains the given symbol, in which case
    /// this method returns `true`. If it is not contained or outside the
    /// range, `false` will be returned.
    pub fn contains(&self, symbol: usize) -> bool {
        if let Ok(mask) = self.mask(symbol) {
            self.bits & mask > 0
        }
        else {
            false
        }
    }

    /// Inserts the given symbol into this set, such that
    /// [SymbolSet::contains] returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the symbol was
    /// not present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `symbol` is zero or greater than [SymbolSet::size]. In that case,
    /// `SymbolSetError::OutOfRange` is returned.
    pub fn insert(&mut self, symbol: usize) -> SymbolSetResult<bool> {
        let mask = self.mask(symbol)?;
        let changed = self.bits & mask == 0;
        self.bits |= mask;
        Ok(changed)
    }

    /// Removes the given symbol from this set, such that
    /// [SymbolSet::contains] returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the symbol was
    /// present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `symbol` is zero or greater than [SymbolSet::size]. In that case,
    /// `SymbolSetError::OutOfRange` is returned.
    pub fn remove(&mut self, symbol: usize) -> SymbolSetResult<bool> {
        let mask = self.mask(symbol)?;
        let changed = self.bits & mask > 0;
        self.bits &= !mask;
        Ok(changed)
    }

    /// Removes all symbols from this set, such that [SymbolSet::contains]
    /// will return `false` for all inputs and [SymbolSet::is_empty] will
    /// return `true`.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Indicates whether this set is empty, i.e. contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of symbols contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// If this set contains exactly one symbol, returns that symbol,
    /// otherwise `None`. This is the condition under which propagation may
    /// fix a cell to a value.
    pub fn only(&self) -> Option<usize> {
        if self.len() == 1 {
            Some(self.bits.trailing_zeros() as usize + 1)
        }
        else {
            None
        }
    }

    /// Returns an iterator over the symbols contained in this set in
    /// ascending order.
    pub fn iter(&self) -> SymbolSetIter {
        SymbolSetIter {
            bits: self.bits
        }
    }
}

/// Determines whether the given iterator contains at least two equal elements
/// as defined by the [Eq](std::cmp::Eq) trait. The duplication detection is
/// implemented with a [HashSet](std::collections::HashSet), so it is required
/// that the item type implements the [Hash](std::hash::Hash) trait in a
/// consistent way.
pub(crate) fn contains_duplicate<I>(mut iter: I) -> bool
where
    I: Iterator,
    I::Item: Hash + Eq
{
    let mut set = HashSet::new();
    iter.any(|e| !set.insert(e))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn empty_set_contains_nothing() {
        let set = SymbolSet::empty(9).unwrap();
        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(!set.contains(5));
        assert!(!set.contains(9));
        assert_eq!(0, set.len());
    }

    #[test]
    fn full_set_contains_all_symbols() {
        let set = SymbolSet::full(9).unwrap();
        assert!(!set.is_empty());
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(9));
        assert!(!set.contains(10));
        assert_eq!(9, set.len());
    }

    #[test]
    fn full_set_of_maximum_size() {
        let set = SymbolSet::full(MAX_SYMBOLS).unwrap();
        assert_eq!(MAX_SYMBOLS, set.len());
        assert!(set.contains(1));
        assert!(set.contains(MAX_SYMBOLS));
    }

    #[test]
    fn singleton_set_contains_only_given_symbol() {
        let set = SymbolSet::singleton(9, 3).unwrap();
        assert!(!set.is_empty());
        assert!(!set.contains(1));
        assert!(set.contains(3));
        assert!(!set.contains(9));
        assert_eq!(1, set.len());
        assert_eq!(Some(3), set.only());
    }

    #[test]
    fn set_creation_error() {
        assert_eq!(Err(SymbolSetError::InvalidSize), SymbolSet::empty(0));
        assert_eq!(Err(SymbolSetError::InvalidSize),
            SymbolSet::full(MAX_SYMBOLS + 1));
    }

    #[test]
    fn set_insertion_error() {
        let mut set = SymbolSet::empty(4).unwrap();
        assert_eq!(Err(SymbolSetError::OutOfRange), set.insert(0));
        assert_eq!(Err(SymbolSetError::OutOfRange), set.insert(5));
    }

    #[test]
    fn manipulation() {
        let mut set = SymbolSet::empty(9).unwrap();
        set.insert(2).unwrap();
        set.insert(4).unwrap();
        set.insert(6).unwrap();

        assert!(set.contains(2));
        assert!(set.contains(4));
        assert!(set.contains(6));
        assert_eq!(3, set.len());

        set.remove(4).unwrap();

        assert!(set.contains(2));
        assert!(!set.contains(4));
        assert!(set.contains(6));
        assert_eq!(2, set.len());

        set.clear();

        assert!(set.is_empty());
        assert_eq!(0, set.len());
    }

    #[test]
    fn double_insert_and_remove_report_no_change() {
        let mut set = SymbolSet::empty(9).unwrap();
        assert!(set.insert(3).unwrap());
        assert!(!set.insert(3).unwrap());
        assert_eq!(1, set.len());

        assert!(set.remove(3).unwrap());
        assert!(!set.remove(3).unwrap());
        assert_eq!(0, set.len());
    }

    #[test]
    fn only_on_non_singleton_sets() {
        let mut set = SymbolSet::empty(9).unwrap();
        assert_eq!(None, set.only());

        set.insert(2).unwrap();
        set.insert(7).unwrap();
        assert_eq!(None, set.only());

        set.remove(2).unwrap();
        assert_eq!(Some(7), set.only());
    }

    #[test]
    fn iteration_is_ascending() {
        let mut set = SymbolSet::empty(36).unwrap();
        set.insert(1).unwrap();
        set.insert(12).unwrap();
        set.insert(23).unwrap();
        set.insert(36).unwrap();

        let symbols: Vec<usize> = set.iter().collect();
        assert_eq!(vec![1, 12, 23, 36], symbols);
    }

    #[test]
    fn contains_duplicate_false() {
        let vec = vec![1, 5, 2, 4, 3];
        assert!(!contains_duplicate(vec.iter()));
    }

    #[test]
    fn contains_duplicate_true() {
        let vec = vec![1, 5, 2, 4, 5];
        assert!(contains_duplicate(vec.iter()));
    }
}
