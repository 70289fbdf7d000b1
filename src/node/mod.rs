mod arena;
mod balance;
mod entry;
mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::mem;
use std::ops::Bound;
use self::arena::Arena;

pub use self::arena::Handle;
pub use self::entry::{Entry, OccupiedEntry, VacantEntry};
pub use self::iter::{Span, SpanMut};

/// One of a node's two children.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The absent child slot a new node would occupy: `None` for an empty tree.
pub type Slot = Option<(Handle, Side)>;

/// The outcome of a key search.
pub enum Search {
    Found(Handle),
    Vacant(Slot),
}

#[derive(Clone)]
pub struct Node<K, V> {
    key: K,
    value: V,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
    left_height: usize,
    right_height: usize,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Node {
            key,
            value,
            parent,
            left: None,
            right: None,
            left_height: 0,
            right_height: 0,
        }
    }

    fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<Handle> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// The stored height of the subtree on the given side.
    fn height_on(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left_height,
            Side::Right => self.right_height,
        }
    }

    /// The height of the subtree rooted at this node.
    fn height(&self) -> usize { 1 + self.left_height.max(self.right_height) }
}

/// A parent-linked AVL tree whose nodes live in an arena.
///
/// The tree knows nothing about ordering beyond what the comparator passed to each
/// operation tells it. `first` and `last` always name the leftmost and rightmost nodes.
#[derive(Clone)]
pub struct Tree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Option<Handle>,
    first: Option<Handle>,
    last: Option<Handle>,
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self { Tree { nodes: Arena::new(), root: None, first: None, last: None } }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.root.is_none() }

    pub fn max_len() -> usize {
        let node = mem::size_of::<Option<Node<K, V>>>().max(1);
        Handle::MAX.min(isize::MAX as usize / node)
    }

    /// Returns the extreme node on the given side: `Left` for the minimum, `Right` for the
    /// maximum.
    pub fn end(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.first,
            Side::Right => self.last,
        }
    }

    pub fn key(&self, handle: Handle) -> &K { &self.node(handle).key }

    pub fn key_value(&self, handle: Handle) -> (&K, &V) {
        let node = self.node(handle);
        (&node.key, &node.value)
    }

    pub fn key_value_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let node = self.nodes.get_mut(handle);
        (&node.key, &mut node.value)
    }

    pub fn value_mut(&mut self, handle: Handle) -> &mut V {
        &mut self.nodes.get_mut(handle).value
    }

    fn node(&self, handle: Handle) -> &Node<K, V> { self.nodes.get(handle) }

    fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> { self.nodes.get_mut(handle) }

    pub fn search<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Search where C: Compare<Q, K> {
        let mut handle = match self.root {
            None => return Search::Vacant(None),
            Some(root) => root,
        };

        loop {
            let node = self.node(handle);

            let side = match cmp.compare(key, &node.key) {
                Equal => return Search::Found(handle),
                Less => Side::Left,
                Greater => Side::Right,
            };

            match node.child(side) {
                None => return Search::Vacant(Some((handle, side))),
                Some(child) => handle = child,
            }
        }
    }

    pub fn get<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Option<Handle>
        where C: Compare<Q, K> {

        match self.search(cmp, key) {
            Search::Found(handle) => Some(handle),
            Search::Vacant(_) => None,
        }
    }

    /// Finds the node nearest to `key` on the given side of it: the smallest key greater than
    /// `key` for `Right`, the greatest key less than `key` for `Left`. If `inclusive` is `true`,
    /// a node equal to `key` is returned instead when present.
    pub fn closest<C, Q: ?Sized>(&self, cmp: &C, key: &Q, inclusive: bool, side: Side)
        -> Option<Handle> where C: Compare<Q, K> {

        let mut closest = None;
        let mut link = self.root;

        while let Some(handle) = link {
            let node = self.node(handle);

            let qualifies = match cmp.compare(key, &node.key) {
                Equal => inclusive,
                Less => side == Side::Right,
                Greater => side == Side::Left,
            };

            link = if qualifies {
                closest = Some(handle);
                node.child(side.opposite())
            } else {
                node.child(side)
            };
        }

        closest
    }

    /// Returns the in-order neighbor of `handle` on the given side, climbing parent links
    /// when the node has no child on that side.
    pub fn step(&self, handle: Handle, side: Side) -> Option<Handle> {
        if let Some(child) = self.node(handle).child(side) {
            return Some(self.descend(child, side.opposite()));
        }

        let mut handle = handle;

        while let Some(parent) = self.node(handle).parent {
            if self.node(parent).child(side) != Some(handle) { return Some(parent); }
            handle = parent;
        }

        None
    }

    /// Like `step`, but treats `None` as the position past both ends: stepping from it
    /// reaches the extreme on the opposite side.
    pub fn neighbor(&self, position: Option<Handle>, side: Side) -> Option<Handle> {
        match position {
            Some(handle) => self.step(handle, side),
            None => self.end(side.opposite()),
        }
    }

    fn descend(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.node(handle).child(side) { handle = child; }
        handle
    }

    pub fn span(&self) -> Span { Span::new(self.first, self.last) }

    /// Returns the span of nodes whose keys lie within the given bounds.
    pub fn range<C, Min: ?Sized, Max: ?Sized>(&self, cmp: &C, min: Bound<&Min>, max: Bound<&Max>)
        -> Span where C: Compare<K> + Compare<Min, K> + Compare<Max, K> {

        let front = match min {
            Bound::Unbounded => self.first,
            Bound::Included(key) => self.closest(cmp, key, true, Side::Right),
            Bound::Excluded(key) => self.closest(cmp, key, false, Side::Right),
        };

        let back = match max {
            Bound::Unbounded => self.last,
            Bound::Included(key) => self.closest(cmp, key, true, Side::Left),
            Bound::Excluded(key) => self.closest(cmp, key, false, Side::Left),
        };

        match (front, back) {
            (Some(f), Some(b)) if Compare::<K, K>::compares_le(cmp, self.key(f), self.key(b)) =>
                Span::new(front, back),
            _ => Span::new(None, None),
        }
    }

    pub fn insert<C>(&mut self, cmp: &C, key: K, value: V) -> (Handle, bool)
        where C: Compare<K> {

        match self.search(cmp, &key) {
            Search::Found(handle) => (handle, false),
            Search::Vacant(slot) => (self.attach(slot, key, value), true),
        }
    }

    /// Links a new node into the given slot, which must have come from a `search` on the
    /// unmodified tree, and rebalances up to the root.
    pub fn attach(&mut self, slot: Slot, key: K, value: V) -> Handle {
        let parent = slot.map(|(parent, _)| parent);
        let handle = self.nodes.alloc(Node::new(key, value, parent));

        match slot {
            None => {
                self.root = Some(handle);
                self.first = Some(handle);
                self.last = Some(handle);
            }
            Some((parent, side)) => {
                *self.node_mut(parent).child_mut(side) = Some(handle);

                match side {
                    Side::Left if self.first == Some(parent) => self.first = Some(handle),
                    Side::Right if self.last == Some(parent) => self.last = Some(handle),
                    _ => {}
                }
            }
        }

        self.fix_up(parent);
        handle
    }

    /// Unlinks and frees the given node, rebalancing up to the root.
    pub fn remove(&mut self, handle: Handle) -> (K, V) {
        if self.first == Some(handle) { self.first = self.step(handle, Side::Right); }
        if self.last == Some(handle) { self.last = self.step(handle, Side::Left); }

        let (parent, left, right) = {
            let node = self.node(handle);
            (node.parent, node.left, node.right)
        };

        let changed = match (left, right) {
            (Some(left), Some(right)) => {
                let succ = self.descend(right, Side::Left);

                let changed = if succ == right {
                    succ
                } else {
                    let succ_parent = self.node(succ).parent;
                    let succ_right = self.node(succ).right;
                    if let Some(succ_parent) = succ_parent {
                        self.node_mut(succ_parent).left = succ_right;
                    }
                    if let Some(succ_right) = succ_right {
                        self.node_mut(succ_right).parent = succ_parent;
                    }
                    self.node_mut(succ).right = Some(right);
                    self.node_mut(right).parent = Some(succ);
                    succ_parent.unwrap_or(succ)
                };

                let (left_height, right_height) = {
                    let node = self.node(handle);
                    (node.left_height, node.right_height)
                };

                {
                    let node = self.node_mut(succ);
                    node.left = Some(left);
                    node.left_height = left_height;
                    node.right_height = right_height;
                }

                self.node_mut(left).parent = Some(succ);
                self.replace_child(parent, handle, Some(succ));
                Some(changed)
            }
            (child, None) | (None, child) => {
                self.replace_child(parent, handle, child);
                parent
            }
        };

        let node = self.nodes.take(handle);
        self.fix_up(changed);
        (node.key, node.value)
    }

    /// Points `parent`'s link to `old` (or the root, if `parent` is `None`) at `new`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = self.node_mut(parent);
                if node.left == Some(old) { node.left = new; } else { node.right = new; }
            }
        }

        if let Some(new) = new { self.node_mut(new).parent = parent; }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.first = None;
        self.last = None;
    }

    /// Returns the entry for `key`, for insertion or in-place manipulation.
    pub fn entry<C>(&mut self, cmp: &C, key: K) -> Entry<K, V> where C: Compare<K> {
        match self.search(cmp, &key) {
            Search::Found(handle) => Entry::Occupied(OccupiedEntry::new(self, handle)),
            Search::Vacant(slot) => Entry::Vacant(VacantEntry::new(self, slot, key)),
        }
    }

    /// Returns the occupied entry for the given node.
    pub fn occupied(&mut self, handle: Handle) -> OccupiedEntry<K, V> {
        OccupiedEntry::new(self, handle)
    }

    /// Moves every entry out of the tree, in ascending order.
    pub fn into_entries(mut self) -> Vec<(K, V)> {
        let handles = self.span().handles(&self);

        handles.into_iter().map(|handle| {
            let node = self.nodes.take(handle);
            (node.key, node.value)
        }).collect()
    }

    pub fn shrink_to_fit(&mut self) { self.nodes.shrink_to_fit(); }
}
