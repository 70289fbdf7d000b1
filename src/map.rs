//! An ordered map based on an AVL tree.

mod cursor;

use compare::{Compare, Natural};
use std::cmp::Ordering::{self, *};
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem;
use std::ops::{Bound, Index};
use std::vec;
use crate::node::{Side, Span, SpanMut, Tree};

pub use self::cursor::{Cursor, CursorMut};
pub use crate::node::{Entry, OccupiedEntry, VacantEntry};

/// An ordered map based on an AVL tree.
///
/// Every entry lives in a node whose left and right subtrees differ in height by at most one,
/// so lookups, insertions and removals take logarithmic time. The least and greatest entries
/// are tracked separately and are reachable in constant time.
///
/// Keys are unique: inserting a key that is already present leaves the existing entry alone.
///
/// Keys must keep their relative order for as long as they are stored. A key mutated through
/// interior mutability so that it compares differently leaves the map in an unspecified, but
/// memory-safe, state.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    tree: Tree<K, V>,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map that sorts its keys by their `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map that sorts its keys with `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = avl_map::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [3, 2, 1]);
    /// assert_eq!(map.begin().key(), Some(&3));
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Map { tree: Tree::new(), cmp } }

    /// Returns `true` if the map holds no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    /// Returns how many entries the map holds.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns the greatest number of entries a map of this type can hold.
    pub fn max_size(&self) -> usize { Tree::<K, V>::max_len() }

    /// Returns the comparator that orders the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let map: avl_map::Map<i32, &str> = avl_map::Map::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: avl_map::Map<i32, &str, _> = avl_map::Map::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Returns a comparator that orders `(key, value)` pairs by their keys using the map's
    /// comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::Compare;
    ///
    /// let map: avl_map::Map<i32, &str> = avl_map::Map::new();
    /// let cmp = map.value_cmp();
    ///
    /// assert!(cmp.compares_lt(&(1, "z"), &(2, "a")));
    /// assert!(cmp.compares_eq(&(1, "z"), &(1, "a")));
    /// ```
    pub fn value_cmp(&self) -> ValueCmp<C> { ValueCmp(&self.cmp) }

    /// Drops every entry, leaving an empty map with the same comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.iter().next(), Some((&1, &"a")));
    ///
    /// map.clear();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(map.first(), None);
    /// assert_eq!(map.begin(), map.end());
    /// ```
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Releases storage left behind by removed entries.
    ///
    /// Removing an entry frees its node slot for the next insertion but keeps the slot
    /// allocated, so a map that once held many entries holds on to that memory. This method
    /// gives back the unused slots above the highest live entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::Bound::{Included, Unbounded};
    ///
    /// let mut map: avl_map::Map<_, _> = (0..1000).map(|k| (k, k)).collect();
    ///
    /// assert_eq!(map.remove_range(Included(&10), Unbounded), 990);
    /// map.shrink_to_fit();
    ///
    /// assert_eq!(map.len(), 10);
    /// assert_eq!(map.last(), Some((&9, &9)));
    /// ```
    pub fn shrink_to_fit(&mut self) { self.tree.shrink_to_fit(); }

    /// Exchanges the contents and comparators of two maps.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut a = avl_map::Map::new();
    /// let mut b = avl_map::Map::new();
    ///
    /// a.insert(1, "a");
    /// b.insert(2, "b");
    /// b.insert(3, "c");
    ///
    /// a.swap(&mut b);
    ///
    /// assert_eq!(a.keys().cloned().collect::<Vec<_>>(), [2, 3]);
    /// assert_eq!(b.keys().cloned().collect::<Vec<_>>(), [1]);
    /// ```
    pub fn swap(&mut self, other: &mut Self) { mem::swap(self, other); }

    /// Inserts an entry into the map unless its key is already present.
    ///
    /// Returns a cursor at the entry with the given key, and `true` if the entry was
    /// inserted. An existing entry's value is not replaced; use [`entry`](#method.entry) or
    /// [`get_mut`](#method.get_mut) for that.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert!(map.insert(1, "a").1);
    /// assert_eq!(map.get(&1), Some(&"a"));
    ///
    /// let (cursor, inserted) = map.insert(1, "b");
    /// assert!(!inserted);
    /// assert_eq!(cursor.value(), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (CursorMut<K, V, C>, bool) {
        let (handle, inserted) = self.tree.insert(&self.cmp, key, value);
        (CursorMut::new(&mut self.tree, &self.cmp, Some(handle), false), inserted)
    }

    /// Takes the entry for `key` out of the map, or returns `None` when the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = vec![(4, 'd'), (6, 'f')].into_iter().collect();
    ///
    /// assert_eq!(map.remove(&4), Some((4, 'd')));
    /// assert_eq!(map.remove(&4), None);
    /// assert_eq!(map.first(), Some((&6, &'f')));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let handle = self.tree.get(&self.cmp, key)?;
        Some(self.tree.remove(handle))
    }

    /// Removes the entry whose key is equal to the given key, returning the number of entries
    /// removed (zero or one).
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.erase(&1), 1);
    /// assert_eq!(map.erase(&1), 0);
    /// assert!(map.is_empty());
    /// ```
    pub fn erase<Q: ?Sized>(&mut self, key: &Q) -> usize where C: Compare<Q, K> {
        self.remove(key).map_or(0, |_| 1)
    }

    /// Removes every entry whose key lies in the given range, returning the number of entries
    /// removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::Bound::{Excluded, Included, Unbounded};
    ///
    /// let mut map: avl_map::Map<_, _> = (1..8).map(|k| (k, k * 10)).collect();
    ///
    /// assert_eq!(map.remove_range(Included(&2), Excluded(&5)), 3);
    /// assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [1, 5, 6, 7]);
    ///
    /// assert_eq!(map.remove_range(Excluded(&6), Unbounded), 1);
    /// assert_eq!(map.remove_range(Included(&9), Unbounded), 0);
    /// assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [1, 5, 6]);
    /// ```
    pub fn remove_range<Min: ?Sized, Max: ?Sized>(&mut self, min: Bound<&Min>, max: Bound<&Max>)
        -> usize where C: Compare<Min, K> + Compare<Max, K> {

        let handles = self.tree.range(&self.cmp, min, max).handles(&self.tree);
        for &handle in &handles { self.tree.remove(handle); }
        handles.len()
    }

    /// Looks `key` up once and returns a handle for reading, updating or filling its slot.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut counts = avl_map::Map::new();
    ///
    /// for word in "a b a c a b".split(' ') {
    ///     *counts.entry(word).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(counts[&"a"], 3);
    /// assert_eq!(counts[&"b"], 2);
    /// assert_eq!(counts[&"c"], 1);
    /// ```
    ///
    /// `or_default` inserts a default value for a missing key, so a lookup through it can
    /// grow and rebalance the map:
    ///
    /// ```
    /// let mut map: avl_map::Map<&str, Vec<u32>> = avl_map::Map::new();
    ///
    /// map.entry("a").or_default().push(1);
    /// assert!(map.entry("b").or_default().is_empty());
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<K, V> { self.tree.entry(&self.cmp, key) }

    /// Returns `true` if an entry for `key` exists.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.tree.get(&self.cmp, key).is_some()
    }

    /// Returns how many entries have the given key: 1 if present, 0 otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avl_map::Map<_, _> = vec![(3, "c")].into_iter().collect();
    ///
    /// assert_eq!(map.count(&3), 1);
    /// assert_eq!(map.count(&4), 0);
    /// ```
    pub fn count<Q: ?Sized>(&self, key: &Q) -> usize where C: Compare<Q, K> {
        if self.contains_key(key) { 1 } else { 0 }
    }

    /// Returns the value stored under `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.tree.get(&self.cmp, key).map(|handle| self.tree.key_value(handle).1)
    }

    /// Returns the value stored under `key` for modification, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) { *value = "b"; }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        let handle = self.tree.get(&self.cmp, key)?;
        Some(self.tree.value_mut(handle))
    }

    /// Returns a cursor at the entry for `key`, or at the end position when the key is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.find(&1).value(), Some(&"a"));
    /// assert_eq!(map.find(&3), map.end());
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor<K, V> where C: Compare<Q, K> {
        Cursor::new(&self.tree, self.tree.get(&self.cmp, key), false)
    }

    /// Like [`find`](#method.find), but the cursor can change or remove entries.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = (1..=5).map(|k| (k, ())).collect();
    ///
    /// {
    ///     let mut cursor = map.find_mut(&2);
    ///     assert_eq!(cursor.remove_current(), Some((2, ())));
    ///     assert_eq!(cursor.key(), Some(&3));
    /// }
    ///
    /// assert!(map.find_mut(&9).is_end());
    /// assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [1, 3, 4, 5]);
    /// ```
    pub fn find_mut<Q: ?Sized>(&mut self, key: &Q) -> CursorMut<K, V, C>
        where C: Compare<Q, K> {

        let node = self.tree.get(&self.cmp, key);
        CursorMut::new(&mut self.tree, &self.cmp, node, false)
    }

    /// Returns a cursor at the first entry whose key is not less than the given key, or at
    /// the end if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avl_map::Map<_, _> = vec![(10, "a"), (20, "b"), (30, "c")].into_iter().collect();
    ///
    /// assert_eq!(map.lower_bound(&20).key(), Some(&20));
    /// assert_eq!(map.lower_bound(&21).key(), Some(&30));
    /// assert_eq!(map.lower_bound(&31), map.end());
    /// ```
    pub fn lower_bound<Q: ?Sized>(&self, key: &Q) -> Cursor<K, V> where C: Compare<Q, K> {
        Cursor::new(&self.tree, self.tree.closest(&self.cmp, key, true, Side::Right), false)
    }

    /// Returns a cursor at the first entry whose key is greater than the given key, or at
    /// the end if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avl_map::Map<_, _> = vec![(10, "a"), (20, "b"), (30, "c")].into_iter().collect();
    ///
    /// assert_eq!(map.upper_bound(&19).key(), Some(&20));
    /// assert_eq!(map.upper_bound(&20).key(), Some(&30));
    /// assert_eq!(map.upper_bound(&30), map.end());
    /// ```
    pub fn upper_bound<Q: ?Sized>(&self, key: &Q) -> Cursor<K, V> where C: Compare<Q, K> {
        Cursor::new(&self.tree, self.tree.closest(&self.cmp, key, false, Side::Right), false)
    }

    /// Returns the cursors `(lower_bound(key), upper_bound(key))`, which delimit the entries
    /// whose key is equal to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avl_map::Map<_, _> = vec![(10, "a"), (20, "b"), (30, "c")].into_iter().collect();
    ///
    /// let (lower, upper) = map.equal_range(&20);
    /// assert_eq!(lower.key(), Some(&20));
    /// assert_eq!(upper.key(), Some(&30));
    ///
    /// let (lower, upper) = map.equal_range(&25);
    /// assert_eq!(lower, upper);
    /// ```
    pub fn equal_range<Q: ?Sized>(&self, key: &Q) -> (Cursor<K, V>, Cursor<K, V>)
        where C: Compare<Q, K> {

        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Like [`lower_bound`](#method.lower_bound), but the cursor can change or remove
    /// entries.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = vec![(10, 'a'), (20, 'b')].into_iter().collect();
    ///
    /// if let Some(value) = map.lower_bound_mut(&11).value_mut() { *value = 'B'; }
    /// assert!(map.lower_bound_mut(&21).is_end());
    /// assert_eq!(map[&20], 'B');
    /// ```
    pub fn lower_bound_mut<Q: ?Sized>(&mut self, key: &Q) -> CursorMut<K, V, C>
        where C: Compare<Q, K> {

        let node = self.tree.closest(&self.cmp, key, true, Side::Right);
        CursorMut::new(&mut self.tree, &self.cmp, node, false)
    }

    /// Like [`upper_bound`](#method.upper_bound), but the cursor can change or remove
    /// entries.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = vec![(10, 'a'), (20, 'b')].into_iter().collect();
    ///
    /// assert_eq!(map.upper_bound_mut(&10).remove_current(), Some((20, 'b')));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn upper_bound_mut<Q: ?Sized>(&mut self, key: &Q) -> CursorMut<K, V, C>
        where C: Compare<Q, K> {

        let node = self.tree.closest(&self.cmp, key, false, Side::Right);
        CursorMut::new(&mut self.tree, &self.cmp, node, false)
    }

    /// Returns a cursor at the smallest key, or at the end position if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert_eq!(map.begin(), map.end());
    ///
    /// map.insert(7, "g");
    /// map.insert(4, "d");
    /// assert_eq!(map.begin().key_value(), Some((&4, &"d")));
    /// ```
    pub fn begin(&self) -> Cursor<K, V> {
        Cursor::new(&self.tree, self.tree.end(Side::Left), false)
    }

    /// Returns a cursor at the end position.
    ///
    /// The end position holds no entry. Moving forward from it wraps to the smallest key and
    /// moving backward from it reaches the largest.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avl_map::Map<_, _> = vec![(4, "d"), (7, "g")].into_iter().collect();
    ///
    /// let mut cursor = map.end();
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor.key(), None);
    ///
    /// cursor.move_prev();
    /// assert_eq!(cursor.key(), Some(&7));
    /// ```
    pub fn end(&self) -> Cursor<K, V> { Cursor::new(&self.tree, None, false) }

    /// Returns a reversed cursor at the largest key, or at the end position if the map is
    /// empty. Moving a reversed cursor forward visits smaller keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avl_map::Map<_, _> = vec![(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
    ///
    /// let mut keys = vec![];
    /// let mut cursor = map.rbegin();
    ///
    /// while cursor != map.rend() {
    ///     keys.push(*cursor.key().unwrap());
    ///     cursor.move_next();
    /// }
    ///
    /// assert_eq!(keys, [3, 2, 1]);
    /// ```
    pub fn rbegin(&self) -> Cursor<K, V> {
        Cursor::new(&self.tree, self.tree.end(Side::Right), true)
    }

    /// Returns a reversed cursor at the end position. It differs from `end()` only in
    /// direction.
    pub fn rend(&self) -> Cursor<K, V> { Cursor::new(&self.tree, None, true) }

    /// Like [`begin`](#method.begin), but the cursor can change or remove entries.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = (1..5).map(|k| (k, k)).collect();
    ///
    /// let mut cursor = map.begin_mut();
    /// while let Some(value) = cursor.value_mut() {
    ///     *value *= 10;
    ///     cursor.move_next();
    /// }
    ///
    /// assert_eq!(map.values().cloned().collect::<Vec<_>>(), [10, 20, 30, 40]);
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<K, V, C> {
        let node = self.tree.end(Side::Left);
        CursorMut::new(&mut self.tree, &self.cmp, node, false)
    }

    /// Like [`end`](#method.end), but the cursor can change or remove entries.
    pub fn end_mut(&mut self) -> CursorMut<K, V, C> {
        CursorMut::new(&mut self.tree, &self.cmp, None, false)
    }

    /// Like [`rbegin`](#method.rbegin), but the cursor can change or remove entries.
    pub fn rbegin_mut(&mut self) -> CursorMut<K, V, C> {
        let node = self.tree.end(Side::Right);
        CursorMut::new(&mut self.tree, &self.cmp, node, true)
    }

    /// Like [`rend`](#method.rend), but the cursor can change or remove entries.
    pub fn rend_mut(&mut self) -> CursorMut<K, V, C> {
        CursorMut::new(&mut self.tree, &self.cmp, None, true)
    }

    /// Returns the entry with the smallest key.
    ///
    /// The map keeps track of its smallest node as entries come and go, so this takes
    /// constant time.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert_eq!(map.first(), None);
    ///
    /// map.insert(8, "h");
    /// map.insert(5, "e");
    /// map.insert(9, "i");
    ///
    /// assert_eq!(map.first(), Some((&5, &"e")));
    /// ```
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.end(Side::Left).map(|handle| self.tree.key_value(handle))
    }

    /// Returns the smallest key with its value borrowed mutably, in constant time.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert_eq!(map.first_mut(), None);
    ///
    /// map.insert(8, "h");
    /// map.insert(5, "e");
    ///
    /// if let Some((_, value)) = map.first_mut() { *value = "E"; }
    /// assert_eq!(map[&5], "E");
    /// ```
    pub fn first_mut(&mut self) -> Option<(&K, &mut V)> {
        let handle = self.tree.end(Side::Left)?;
        Some(self.tree.key_value_mut(handle))
    }

    /// Takes the entry with the smallest key out of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert_eq!(map.remove_first(), None);
    ///
    /// map.insert(8, "h");
    /// map.insert(5, "e");
    /// map.insert(9, "i");
    ///
    /// assert_eq!(map.remove_first(), Some((5, "e")));
    /// assert_eq!(map.remove_first(), Some((8, "h")));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_first(&mut self) -> Option<(K, V)> {
        let handle = self.tree.end(Side::Left)?;
        Some(self.tree.remove(handle))
    }

    /// Returns an occupied entry for the smallest key, or `None` for an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = vec![(5, 1), (8, 2)].into_iter().collect();
    ///
    /// if let Some(mut entry) = map.first_entry() {
    ///     *entry.get_mut() += 100;
    /// }
    ///
    /// assert_eq!(map[&5], 101);
    /// assert_eq!(map.first_entry().map(|entry| entry.remove()), Some((5, 101)));
    /// ```
    pub fn first_entry(&mut self) -> Option<OccupiedEntry<K, V>> {
        let handle = self.tree.end(Side::Left)?;
        Some(self.tree.occupied(handle))
    }

    /// Returns the entry with the largest key, in constant time.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert_eq!(map.last(), None);
    ///
    /// map.insert(8, "h");
    /// map.insert(5, "e");
    /// map.insert(9, "i");
    ///
    /// assert_eq!(map.last(), Some((&9, &"i")));
    /// ```
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.end(Side::Right).map(|handle| self.tree.key_value(handle))
    }

    /// Returns the largest key with its value borrowed mutably, in constant time.
    pub fn last_mut(&mut self) -> Option<(&K, &mut V)> {
        let handle = self.tree.end(Side::Right)?;
        Some(self.tree.key_value_mut(handle))
    }

    /// Takes the entry with the largest key out of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// assert_eq!(map.remove_last(), None);
    ///
    /// map.insert(8, "h");
    /// map.insert(5, "e");
    /// map.insert(9, "i");
    ///
    /// assert_eq!(map.remove_last(), Some((9, "i")));
    /// assert_eq!(map.last(), Some((&8, &"h")));
    /// ```
    pub fn remove_last(&mut self) -> Option<(K, V)> {
        let handle = self.tree.end(Side::Right)?;
        Some(self.tree.remove(handle))
    }

    /// Returns an occupied entry for the largest key, or `None` for an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = vec![(5, "e"), (8, "h")].into_iter().collect();
    ///
    /// assert_eq!(map.last_entry().map(|entry| *entry.key()), Some(8));
    /// assert_eq!(map.last_entry().map(|mut entry| entry.insert("H")), Some("h"));
    /// assert_eq!(map[&8], "H");
    /// ```
    pub fn last_entry(&mut self) -> Option<OccupiedEntry<K, V>> {
        let handle = self.tree.end(Side::Right)?;
        Some(self.tree.occupied(handle))
    }

    /// Finds the nearest entry below `key`.
    ///
    /// With `inclusive` set, an entry whose key equals `key` counts as below it. `key` does
    /// not have to be in the map. The search is a single descent from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avl_map::Map<_, _> = vec![(10, 'a'), (20, 'b'), (30, 'c')].into_iter().collect();
    ///
    /// assert_eq!(map.pred(&10, false), None);
    /// assert_eq!(map.pred(&10, true), Some((&10, &'a')));
    /// assert_eq!(map.pred(&25, false), Some((&20, &'b')));
    /// assert_eq!(map.pred(&99, true), Some((&30, &'c')));
    /// ```
    pub fn pred<Q: ?Sized>(&self, key: &Q, inclusive: bool) -> Option<(&K, &V)>
        where C: Compare<Q, K> {

        let handle = self.tree.closest(&self.cmp, key, inclusive, Side::Left)?;
        Some(self.tree.key_value(handle))
    }

    /// Like [`pred`](#method.pred), with the value borrowed mutably.
    pub fn pred_mut<Q: ?Sized>(&mut self, key: &Q, inclusive: bool) -> Option<(&K, &mut V)>
        where C: Compare<Q, K> {

        let handle = self.tree.closest(&self.cmp, key, inclusive, Side::Left)?;
        Some(self.tree.key_value_mut(handle))
    }

    /// Takes the nearest entry below `key` out of the map. See [`pred`](#method.pred).
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = vec![(10, 'a'), (20, 'b')].into_iter().collect();
    ///
    /// assert_eq!(map.remove_pred(&15, false), Some((10, 'a')));
    /// assert_eq!(map.remove_pred(&15, false), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_pred<Q: ?Sized>(&mut self, key: &Q, inclusive: bool) -> Option<(K, V)>
        where C: Compare<Q, K> {

        let handle = self.tree.closest(&self.cmp, key, inclusive, Side::Left)?;
        Some(self.tree.remove(handle))
    }

    /// Returns an occupied entry for the nearest key below `key`. See [`pred`](#method.pred).
    pub fn pred_entry<Q: ?Sized>(&mut self, key: &Q, inclusive: bool)
        -> Option<OccupiedEntry<K, V>> where C: Compare<Q, K> {

        let handle = self.tree.closest(&self.cmp, key, inclusive, Side::Left)?;
        Some(self.tree.occupied(handle))
    }

    /// Finds the nearest entry above `key`.
    ///
    /// With `inclusive` set, an entry whose key equals `key` counts as above it, which makes
    /// `succ(key, true)` the entry under `lower_bound(key)` and `succ(key, false)` the one
    /// under `upper_bound(key)`.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: avl_map::Map<_, _> = vec![(10, 'a'), (20, 'b'), (30, 'c')].into_iter().collect();
    ///
    /// assert_eq!(map.succ(&30, false), None);
    /// assert_eq!(map.succ(&30, true), Some((&30, &'c')));
    /// assert_eq!(map.succ(&15, false), Some((&20, &'b')));
    /// assert_eq!(map.succ(&0, true), Some((&10, &'a')));
    /// ```
    pub fn succ<Q: ?Sized>(&self, key: &Q, inclusive: bool) -> Option<(&K, &V)>
        where C: Compare<Q, K> {

        let handle = self.tree.closest(&self.cmp, key, inclusive, Side::Right)?;
        Some(self.tree.key_value(handle))
    }

    /// Like [`succ`](#method.succ), with the value borrowed mutably.
    pub fn succ_mut<Q: ?Sized>(&mut self, key: &Q, inclusive: bool) -> Option<(&K, &mut V)>
        where C: Compare<Q, K> {

        let handle = self.tree.closest(&self.cmp, key, inclusive, Side::Right)?;
        Some(self.tree.key_value_mut(handle))
    }

    /// Takes the nearest entry above `key` out of the map. See [`succ`](#method.succ).
    pub fn remove_succ<Q: ?Sized>(&mut self, key: &Q, inclusive: bool) -> Option<(K, V)>
        where C: Compare<Q, K> {

        let handle = self.tree.closest(&self.cmp, key, inclusive, Side::Right)?;
        Some(self.tree.remove(handle))
    }

    /// Returns an occupied entry for the nearest key above `key`. See [`succ`](#method.succ).
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = vec![(10, 'a'), (20, 'b')].into_iter().collect();
    ///
    /// if let Some(mut entry) = map.succ_entry(&10, false) { entry.insert('B'); }
    /// assert_eq!(map[&20], 'B');
    /// ```
    pub fn succ_entry<Q: ?Sized>(&mut self, key: &Q, inclusive: bool)
        -> Option<OccupiedEntry<K, V>> where C: Compare<Q, K> {

        let handle = self.tree.closest(&self.cmp, key, inclusive, Side::Right)?;
        Some(self.tree.occupied(handle))
    }

    /// Walks the map from the smallest key to the largest, from either end.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    ///
    /// map.insert(8, "h");
    /// map.insert(5, "e");
    /// map.insert(9, "i");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.len(), 3);
    /// assert_eq!(it.next(), Some((&5, &"e")));
    /// assert_eq!(it.next_back(), Some((&9, &"i")));
    /// assert_eq!(it.next(), Some((&8, &"h")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V> {
        Iter { tree: &self.tree, span: self.tree.span(), len: self.len() }
    }

    /// Walks the map in key order, handing out each value for modification.
    ///
    /// Entries are produced one at a time as the walk advances.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: avl_map::Map<_, _> = vec![("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
    ///
    /// for (key, value) in map.iter_mut() {
    ///     if *key != "y" { *value = -*value; }
    /// }
    ///
    /// assert_eq!(map.values().cloned().collect::<Vec<_>>(), [-1, 2, -3]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        let (span, len) = (self.tree.span(), self.len());
        IterMut { inner: SpanMut::new(&mut self.tree, span), len }
    }

    /// Walks the keys in order.
    pub fn keys(&self) -> Keys<K, V> { Keys(self.iter()) }

    /// Walks the values in the order of their keys.
    pub fn values(&self) -> Values<K, V> { Values(self.iter()) }

    /// Walks the values in the order of their keys, handing each out for modification.
    pub fn values_mut(&mut self) -> ValuesMut<K, V> { ValuesMut(self.iter_mut()) }

    /// Walks the entries whose keys fall between `min` and `max`.
    ///
    /// Both ends are located by a descent from the root, so the cost depends on the height of
    /// the tree and the number of entries visited, not on the size of the map. Bounds that
    /// cross produce an empty walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::Bound::{Included, Excluded, Unbounded};
    ///
    /// let map: avl_map::Map<_, _> = (1..=6).map(|k| (k, k * k)).collect();
    ///
    /// assert_eq!(map.range(Excluded(&2), Included(&4)).collect::<Vec<_>>(),
    ///     [(&3, &9), (&4, &16)]);
    /// assert_eq!(map.range(Included(&5), Unbounded).rev().map(|e| *e.0).collect::<Vec<_>>(),
    ///     [6, 5]);
    /// assert_eq!(map.range(Unbounded, Excluded(&1)).next(), None);
    /// assert_eq!(map.range(Included(&4), Included(&2)).next(), None);
    /// ```
    pub fn range<Min: ?Sized, Max: ?Sized>(&self, min: Bound<&Min>, max: Bound<&Max>)
        -> Range<K, V> where C: Compare<Min, K> + Compare<Max, K> {

        Range { tree: &self.tree, span: self.tree.range(&self.cmp, min, max) }
    }

    /// Like [`range`](#method.range), handing out each value for modification.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::Bound::{Excluded, Unbounded};
    ///
    /// let mut map: avl_map::Map<_, _> = (1..=4).map(|k| (k, 0)).collect();
    ///
    /// for (key, value) in map.range_mut(Unbounded, Excluded(&3)) {
    ///     *value = *key * 100;
    /// }
    ///
    /// assert_eq!(map.values().cloned().collect::<Vec<_>>(), [100, 200, 0, 0]);
    /// ```
    pub fn range_mut<Min: ?Sized, Max: ?Sized>(&mut self, min: Bound<&Min>, max: Bound<&Max>)
        -> RangeMut<K, V> where C: Compare<Min, K> + Compare<Max, K> {

        let span = self.tree.range(&self.cmp, min, max);
        RangeMut(SpanMut::new(&mut self.tree, span))
    }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.tree.insert(&self.cmp, k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: Hasher>(&self, h: &mut H) {
        self.len().hash(h);
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;

    /// Returns the value associated with the given key.
    ///
    /// # Panics
    ///
    /// Panics if the map does not contain the key.
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { IntoIter(self.tree.into_entries().into_iter()) }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C> where V: PartialOrd, C: Compare<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Some(Equal),
                (None, Some(_)) => return Some(Less),
                (Some(_), None) => return Some(Greater),
                (Some(l), Some(r)) => match self.cmp.compare(l.0, r.0) {
                    Equal => match l.1.partial_cmp(r.1) {
                        Some(Equal) => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return Some(non_eq),
                },
            }
        }
    }
}

impl<K, V, C> Ord for Map<K, V, C> where V: Ord, C: Compare<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp.compare(l.0, r.0) {
                    Equal => match l.1.cmp(r.1) {
                        Equal => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return non_eq,
                },
            }
        }
    }
}

/// A comparator that orders `(key, value)` pairs by their keys.
///
/// Created by [`Map::value_cmp`](struct.Map.html#method.value_cmp).
pub struct ValueCmp<'a, C: 'a>(&'a C);

impl<'a, C> Clone for ValueCmp<'a, C> {
    fn clone(&self) -> Self { *self }
}

impl<'a, C> Copy for ValueCmp<'a, C> {}

impl<'a, K, V, C> Compare<(K, V)> for ValueCmp<'a, C> where C: Compare<K> {
    fn compare(&self, l: &(K, V), r: &(K, V)) -> Ordering { self.0.compare(&l.0, &r.0) }
}

/// An owning iterator over the entries of a map, in key order.
///
/// # Examples
///
/// Created by `Map::into_iter`:
///
/// ```
/// let map: avl_map::Map<_, _> = vec![("pear", 3), ("fig", 1), ("kiwi", 2)].into_iter().collect();
///
/// let owned: Vec<(&str, i32)> = map.into_iter().rev().collect();
/// assert_eq!(owned, [("pear", 3), ("kiwi", 2), ("fig", 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct IntoIter<K, V>(vec::IntoIter<(K, V)>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// A borrowing iterator over the entries of a map, in key order.
///
/// It follows parent links from node to node and needs no extra storage.
///
/// # Examples
///
/// Created by [`Map::iter`](struct.Map.html#method.iter) or by iterating over `&Map`:
///
/// ```
/// let map: avl_map::Map<_, _> = vec![(2, "b"), (1, "a")].into_iter().collect();
///
/// let mut lines = vec![];
/// for (key, value) in &map {
///     lines.push(format!("{}={}", key, value));
/// }
/// assert_eq!(lines, ["1=a", "2=b"]);
/// ```
pub struct Iter<'a, K: 'a, V: 'a> {
    tree: &'a Tree<K, V>,
    span: Span,
    len: usize,
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self { Iter { tree: self.tree, span: self.span, len: self.len } }
}

impl<'a, K, V> Debug for Iter<'a, K, V> where K: Debug, V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let handle = self.span.next(self.tree)?;
        self.len -= 1;
        Some(self.tree.key_value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        let handle = self.span.next_back(self.tree)?;
        self.len -= 1;
        Some(self.tree.key_value(handle))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the entries of a map in key order, with values borrowed mutably.
///
/// # Examples
///
/// Created by [`Map::iter_mut`](struct.Map.html#method.iter_mut) or by iterating over
/// `&mut Map`:
///
/// ```
/// let mut map = avl_map::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (_, value) in &mut map {
///     *value = "x";
/// }
///
/// assert_eq!(map[&2], "x");
/// ```
pub struct IterMut<'a, K: 'a, V: 'a> {
    inner: SpanMut<'a, K, V>,
    len: usize,
}

impl<'a, K, V> Debug for IterMut<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.len).finish()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let entry = self.inner.next()?;
        self.len -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> {
        let entry = self.inner.next_back()?;
        self.len -= 1;
        Some(entry)
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator over the keys of a map, smallest first.
///
/// Created by [`Map::keys`](struct.Map.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self { Keys(self.0.clone()) }
}

impl<'a, K, V> Debug for Keys<'a, K, V> where K: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a K> { self.0.next_back().map(|e| e.0) }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator over the values of a map, in the order of their keys.
///
/// Created by [`Map::values`](struct.Map.html#method.values).
pub struct Values<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self { Values(self.0.clone()) }
}

impl<'a, K, V> Debug for Values<'a, K, V> where V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a V> { self.0.next_back().map(|e| e.1) }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

/// An iterator over the values of a map in the order of their keys, borrowed mutably.
///
/// Created by [`Map::values_mut`](struct.Map.html#method.values_mut).
#[derive(Debug)]
pub struct ValuesMut<'a, K: 'a, V: 'a>(IterMut<'a, K, V>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;
    fn next(&mut self) -> Option<&'a mut V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for ValuesMut<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a mut V> { self.0.next_back().map(|e| e.1) }
}

impl<'a, K, V> ExactSizeIterator for ValuesMut<'a, K, V> {}

/// An iterator over the entries of a map between two bounds, in key order.
///
/// Created by [`Map::range`](struct.Map.html#method.range).
pub struct Range<'a, K: 'a, V: 'a> {
    tree: &'a Tree<K, V>,
    span: Span,
}

impl<'a, K, V> Clone for Range<'a, K, V> {
    fn clone(&self) -> Self { Range { tree: self.tree, span: self.span } }
}

impl<'a, K, V> Debug for Range<'a, K, V> where K: Debug, V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let handle = self.span.next(self.tree)?;
        Some(self.tree.key_value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.span.is_empty() { (0, Some(0)) } else { (1, Some(self.tree.len())) }
    }
}

impl<'a, K, V> DoubleEndedIterator for Range<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        let handle = self.span.next_back(self.tree)?;
        Some(self.tree.key_value(handle))
    }
}

/// An iterator over the entries of a map between two bounds, with values borrowed mutably.
///
/// Created by [`Map::range_mut`](struct.Map.html#method.range_mut).
pub struct RangeMut<'a, K: 'a, V: 'a>(SpanMut<'a, K, V>);

impl<'a, K, V> Debug for RangeMut<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RangeMut").field("exhausted", &self.0.is_empty()).finish()
    }
}

impl<'a, K, V> Iterator for RangeMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.0.is_empty() { (0, Some(0)) } else { (1, Some(self.0.tree_len())) }
    }
}

impl<'a, K, V> DoubleEndedIterator for RangeMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next_back() }
}
