//! Bidirectional cursors over a map's entries.

use compare::Compare;
use std::fmt::{self, Debug};
use std::ptr;
use crate::node::{Handle, Side, Tree};

fn forward(rev: bool) -> Side { if rev { Side::Left } else { Side::Right } }

/// A cursor over a map's entries with immutable references to the values.
///
/// A cursor points either at an entry or at the *end* position, which lies past both the
/// greatest and the least entry. Moving forward from the end reaches the first entry in the
/// cursor's direction, and moving backward reaches the last one. A reversed cursor walks the
/// entries in descending order.
///
/// Two cursors are equal when they belong to the same map, point at the same position and
/// walk in the same direction.
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
/// let mut keys = vec![];
/// let mut cursor = map.begin();
///
/// while cursor != map.end() {
///     keys.push(*cursor.key().unwrap());
///     cursor.move_next();
/// }
///
/// assert_eq!(keys, [1, 2, 3]);
/// ```
pub struct Cursor<'a, K: 'a, V: 'a> {
    tree: &'a Tree<K, V>,
    node: Option<Handle>,
    rev: bool,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(tree: &'a Tree<K, V>, node: Option<Handle>, rev: bool) -> Self {
        Cursor { tree, node, rev }
    }

    /// Returns a reference to the key at the cursor, or `None` at the end.
    pub fn key(&self) -> Option<&'a K> { self.key_value().map(|e| e.0) }

    /// Returns a reference to the value at the cursor, or `None` at the end.
    pub fn value(&self) -> Option<&'a V> { self.key_value().map(|e| e.1) }

    /// Returns references to the entry at the cursor, or `None` at the end.
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        self.node.map(|handle| tree.key_value(handle))
    }

    /// Moves the cursor to the next entry in its direction.
    pub fn move_next(&mut self) { self.node = self.tree.neighbor(self.node, forward(self.rev)); }

    /// Moves the cursor to the previous entry in its direction.
    pub fn move_prev(&mut self) {
        self.node = self.tree.neighbor(self.node, forward(self.rev).opposite());
    }

    /// Returns the entry the cursor would reach by `move_next`, without moving it.
    pub fn peek_next(&self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        tree.neighbor(self.node, forward(self.rev)).map(|handle| tree.key_value(handle))
    }

    /// Returns the entry the cursor would reach by `move_prev`, without moving it.
    pub fn peek_prev(&self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        let prev = tree.neighbor(self.node, forward(self.rev).opposite());
        prev.map(|handle| tree.key_value(handle))
    }

    /// Checks if the cursor is at the end position.
    pub fn is_end(&self) -> bool { self.node.is_none() }

    /// Checks if the cursor walks the entries in descending order.
    pub fn is_reversed(&self) -> bool { self.rev }

    /// Returns a cursor at the same position that walks in the opposite direction.
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
    /// let mut cursor = map.find(&2).reversed();
    /// cursor.move_next();
    /// assert_eq!(cursor.key(), Some(&1));
    /// assert_eq!(cursor.reversed(), map.begin());
    /// ```
    pub fn reversed(self) -> Self { Cursor { rev: !self.rev, ..self } }
}

impl<'a, K, V> Clone for Cursor<'a, K, V> {
    fn clone(&self) -> Self { *self }
}

impl<'a, K, V> Copy for Cursor<'a, K, V> {}

impl<'a, K, V> PartialEq for Cursor<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node && self.rev == other.rev
    }
}

impl<'a, K, V> Eq for Cursor<'a, K, V> {}

impl<'a, K, V> Debug for Cursor<'a, K, V> where K: Debug, V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("entry", &self.key_value())
            .field("reversed", &self.rev)
            .finish()
    }
}

/// A cursor over a map's entries with mutable references to the values.
///
/// Besides moving like a [`Cursor`], a `CursorMut` can insert and remove entries. Moves
/// that wrap past the end behave as they do for `Cursor`.
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
/// let mut cursor = map.begin_mut();
///
/// while let Some(value) = cursor.value_mut() {
///     *value = "x";
///     cursor.move_next();
/// }
///
/// assert_eq!(map.values().cloned().collect::<Vec<_>>(), ["x", "x", "x"]);
/// ```
pub struct CursorMut<'a, K: 'a, V: 'a, C: 'a> {
    tree: &'a mut Tree<K, V>,
    cmp: &'a C,
    node: Option<Handle>,
    rev: bool,
}

impl<'a, K, V, C> CursorMut<'a, K, V, C> {
    pub(crate) fn new(tree: &'a mut Tree<K, V>, cmp: &'a C, node: Option<Handle>, rev: bool)
        -> Self {

        CursorMut { tree, cmp, node, rev }
    }

    /// Returns a reference to the key at the cursor, or `None` at the end.
    pub fn key(&self) -> Option<&K> { self.node.map(|handle| self.tree.key(handle)) }

    /// Returns a reference to the value at the cursor, or `None` at the end.
    pub fn value(&self) -> Option<&V> {
        self.node.map(|handle| self.tree.key_value(handle).1)
    }

    /// Returns a mutable reference to the value at the cursor, or `None` at the end.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        let tree = &mut *self.tree;
        self.node.map(move |handle| tree.value_mut(handle))
    }

    /// Returns a reference to the key and a mutable reference to the value at the cursor, or
    /// `None` at the end.
    pub fn key_value_mut(&mut self) -> Option<(&K, &mut V)> {
        let tree = &mut *self.tree;
        self.node.map(move |handle| tree.key_value_mut(handle))
    }

    /// Converts the cursor into a mutable reference to the value at its position, with the
    /// same lifetime as the map.
    pub fn into_value_mut(self) -> Option<&'a mut V> {
        let CursorMut { tree, node, .. } = self;
        node.map(move |handle| tree.value_mut(handle))
    }

    /// Moves the cursor to the next entry in its direction.
    pub fn move_next(&mut self) { self.node = self.tree.neighbor(self.node, forward(self.rev)); }

    /// Moves the cursor to the previous entry in its direction.
    pub fn move_prev(&mut self) {
        self.node = self.tree.neighbor(self.node, forward(self.rev).opposite());
    }

    /// Returns the entry the cursor would reach by `move_next`, without moving it.
    pub fn peek_next(&self) -> Option<(&K, &V)> { self.as_cursor().peek_next() }

    /// Returns the entry the cursor would reach by `move_prev`, without moving it.
    pub fn peek_prev(&self) -> Option<(&K, &V)> { self.as_cursor().peek_prev() }

    /// Checks if the cursor is at the end position.
    pub fn is_end(&self) -> bool { self.node.is_none() }

    /// Checks if the cursor walks the entries in descending order.
    pub fn is_reversed(&self) -> bool { self.rev }

    /// Returns a cursor at the same position that walks in the opposite direction.
    pub fn reversed(self) -> Self { CursorMut { rev: !self.rev, ..self } }

    /// Returns an immutable cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<K, V> { Cursor::new(&*self.tree, self.node, self.rev) }

    /// Removes the entry at the cursor and returns it, moving the cursor to the next entry
    /// in its direction. Does nothing and returns `None` at the end.
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
    /// {
    ///     let mut cursor = map.find_mut(&2);
    ///     assert_eq!(cursor.remove_current(), Some((2, "b")));
    ///     assert_eq!(cursor.key(), Some(&3));
    /// }
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let handle = self.node?;
        self.node = self.tree.step(handle, forward(self.rev));
        Some(self.tree.remove(handle))
    }
}

impl<'a, K, V, C> CursorMut<'a, K, V, C> where C: Compare<K> {
    /// Inserts an entry into the map and moves the cursor to the entry with the given key.
    ///
    /// Returns `true` if the entry was inserted. If the map already contains the key, its
    /// value is left unchanged and `false` is returned. The cursor's position does not affect
    /// where the entry goes.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = avl_map::Map::new();
    /// map.insert(1, "a");
    ///
    /// let mut cursor = map.end_mut();
    /// assert!(cursor.insert(3, "c"));
    /// assert_eq!(cursor.key(), Some(&3));
    ///
    /// assert!(!cursor.insert(1, "z"));
    /// assert_eq!(cursor.value(), Some(&"a"));
    ///
    /// cursor.move_next();
    /// assert_eq!(cursor.key(), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let (handle, inserted) = self.tree.insert(self.cmp, key, value);
        self.node = Some(handle);
        inserted
    }
}

impl<'a, K, V, C> Debug for CursorMut<'a, K, V, C> where K: Debug, V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("entry", &self.as_cursor().key_value())
            .field("reversed", &self.rev)
            .finish()
    }
}
