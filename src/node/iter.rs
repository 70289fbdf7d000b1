use super::{Handle, Side, Tree};

/// A contiguous run of nodes in key order, consumed from either end.
///
/// Steps by climbing parent links, so walking a span needs no stack. A span is only
/// meaningful for the tree it was created from while that tree's shape is unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Span {
    front: Option<Handle>,
    back: Option<Handle>,
}

impl Span {
    pub fn new(front: Option<Handle>, back: Option<Handle>) -> Self {
        match (front, back) {
            (Some(_), Some(_)) => Span { front, back },
            _ => Span { front: None, back: None },
        }
    }

    pub fn is_empty(&self) -> bool { self.front.is_none() }

    fn take<K, V>(&mut self, tree: &Tree<K, V>, side: Side) -> Option<Handle> {
        let (handle, other) = match side {
            Side::Right => (self.front?, self.back),
            Side::Left => (self.back?, self.front),
        };

        if other == Some(handle) {
            *self = Span::new(None, None);
        } else {
            let next = tree.step(handle, side);
            match side {
                Side::Right => self.front = next,
                Side::Left => self.back = next,
            }
        }

        Some(handle)
    }

    pub fn next<K, V>(&mut self, tree: &Tree<K, V>) -> Option<Handle> {
        self.take(tree, Side::Right)
    }

    pub fn next_back<K, V>(&mut self, tree: &Tree<K, V>) -> Option<Handle> {
        self.take(tree, Side::Left)
    }

    pub fn handles<K, V>(mut self, tree: &Tree<K, V>) -> Vec<Handle> {
        let mut handles = vec![];
        while let Some(handle) = self.next(tree) { handles.push(handle); }
        handles
    }
}

/// A `Span` over a mutably borrowed tree, yielding values mutably as it steps.
pub struct SpanMut<'a, K: 'a, V: 'a> {
    tree: &'a mut Tree<K, V>,
    span: Span,
}

impl<'a, K, V> SpanMut<'a, K, V> {
    pub fn new(tree: &'a mut Tree<K, V>, span: Span) -> Self { SpanMut { tree, span } }

    pub fn is_empty(&self) -> bool { self.span.is_empty() }

    /// The number of entries in the whole tree, an upper bound on what remains.
    pub fn tree_len(&self) -> usize { self.tree.len() }

    fn entry(&mut self, handle: Handle) -> (&'a K, &'a mut V) {
        let (key, value) = self.tree.key_value_mut(handle);
        // A span yields every handle at most once, so the returned borrows never alias.
        unsafe { (&*(key as *const K), &mut *(value as *mut V)) }
    }

    pub fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let handle = self.span.next(&*self.tree)?;
        Some(self.entry(handle))
    }

    pub fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> {
        let handle = self.span.next_back(&*self.tree)?;
        Some(self.entry(handle))
    }
}
