//! Height maintenance and rotations.

use super::{Handle, Side, Tree};

impl<K, V> Tree<K, V> {
    /// Recomputes heights and restores balance from `link` up to the root.
    pub(super) fn fix_up(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.update_heights(handle);
            let top = self.rebalance(handle);
            link = self.node(top).parent;
        }
    }

    fn update_heights(&mut self, handle: Handle) {
        let (left, right) = {
            let node = self.node(handle);
            (node.left.map_or(0, |child| self.node(child).height()),
             node.right.map_or(0, |child| self.node(child).height()))
        };

        let node = self.node_mut(handle);
        node.left_height = left;
        node.right_height = right;
    }

    /// Rotates at `handle` if its subtrees differ in height by more than one, returning the
    /// root of the (possibly new) subtree.
    fn rebalance(&mut self, handle: Handle) -> Handle {
        let node = self.node(handle);

        if node.right_height > node.left_height + 1 {
            self.rebalance_toward(handle, Side::Left)
        } else if node.left_height > node.right_height + 1 {
            self.rebalance_toward(handle, Side::Right)
        } else {
            handle
        }
    }

    // Single rotation when the heavy child leans outward (or not at all), double rotation
    // when it leans inward.
    fn rebalance_toward(&mut self, handle: Handle, side: Side) -> Handle {
        let heavy = side.opposite();

        if let Some(child) = self.node(handle).child(heavy) {
            let node = self.node(child);
            if node.height_on(side) > node.height_on(heavy) { self.rotate(child, heavy); }
        }

        self.rotate(handle, side)
    }

    /// Rotates the subtree at `handle` toward `side`: the child on the opposite side takes
    /// `handle`'s place and `handle` becomes its child on `side`.
    pub(super) fn rotate(&mut self, handle: Handle, side: Side) -> Handle {
        let up = side.opposite();
        let Some(pivot) = self.node(handle).child(up) else { return handle; };

        let inner = self.node(pivot).child(side);
        *self.node_mut(handle).child_mut(up) = inner;
        if let Some(inner) = inner { self.node_mut(inner).parent = Some(handle); }

        let parent = self.node(handle).parent;
        self.replace_child(parent, handle, Some(pivot));

        *self.node_mut(pivot).child_mut(side) = Some(handle);
        self.node_mut(handle).parent = Some(pivot);

        self.update_heights(handle);
        self.update_heights(pivot);
        pivot
    }
}
