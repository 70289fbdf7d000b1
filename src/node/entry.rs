use std::mem::replace;
use super::{Handle, Slot, Tree};

/// An entry in the map.
///
/// See [`Map::entry`](crate::Map::entry) for an example.
pub enum Entry<'a, K: 'a, V: 'a> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K {
        match *self {
            Entry::Occupied(ref e) => e.key(),
            Entry::Vacant(ref e) => e.key(),
        }
    }

    /// Fills a vacant slot with `default`, then returns the value in the slot.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default),
        }
    }

    /// Fills a vacant slot by calling `default`, then returns the value in the slot.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V where F: FnOnce() -> V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default()),
        }
    }

    /// Returns the entry's value, inserting `V::default()` if the entry is vacant.
    ///
    /// Inserting rebalances the tree, so this is a mutation even when used as a lookup.
    pub fn or_default(self) -> &'a mut V where V: Default {
        self.or_insert_with(V::default)
    }
}

/// An occupied entry.
///
/// See [`Map::entry`](crate::Map::entry) for an example.
pub struct OccupiedEntry<'a, K: 'a, V: 'a> {
    tree: &'a mut Tree<K, V>,
    handle: Handle,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub(super) fn new(tree: &'a mut Tree<K, V>, handle: Handle) -> Self {
        OccupiedEntry { tree, handle }
    }

    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K { self.tree.key(self.handle) }

    /// Returns a reference to the entry's value.
    pub fn get(&self) -> &V { self.tree.key_value(self.handle).1 }

    /// Returns a mutable reference to the entry's value.
    pub fn get_mut(&mut self) -> &mut V { self.tree.value_mut(self.handle) }

    /// Returns a mutable reference to the entry's value with the same lifetime as the map.
    pub fn into_mut(self) -> &'a mut V { self.tree.value_mut(self.handle) }

    /// Replaces the entry's value with the given value, returning the old one.
    pub fn insert(&mut self, value: V) -> V { replace(self.get_mut(), value) }

    /// Removes the entry from the map and returns its key and value.
    pub fn remove(self) -> (K, V) { self.tree.remove(self.handle) }
}

/// A vacant entry.
///
/// See [`Map::entry`](crate::Map::entry) for an example.
pub struct VacantEntry<'a, K: 'a, V: 'a> {
    tree: &'a mut Tree<K, V>,
    slot: Slot,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    pub(super) fn new(tree: &'a mut Tree<K, V>, slot: Slot, key: K) -> Self {
        VacantEntry { tree, slot, key }
    }

    /// Returns a reference to the key that would be inserted.
    pub fn key(&self) -> &K { &self.key }

    /// Inserts the entry into the map with its key and the given value, returning a mutable
    /// reference to the value with the same lifetime as the map.
    pub fn insert(self, value: V) -> &'a mut V {
        let handle = self.tree.attach(self.slot, self.key, value);
        self.tree.value_mut(handle)
    }
}
