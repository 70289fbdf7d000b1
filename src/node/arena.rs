use std::num::NonZeroU32;

/// A stable reference to a slot in an `Arena`.
///
/// `Option<Handle>` is the size of a `u32`, so child and parent links cost no more than a
/// plain index.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle(NonZeroU32);

impl Handle {
    pub const MAX: usize = (u32::MAX - 1) as usize;

    fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        Handle(NonZeroU32::MIN.saturating_add(index as u32))
    }

    pub fn index(self) -> usize { (self.0.get() - 1) as usize }
}

/// A slab of `T`s addressed by `Handle`s. Freed slots are reused by later allocations.
#[derive(Clone)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub fn new() -> Self { Arena { slots: Vec::new(), free: Vec::new() } }

    pub fn len(&self) -> usize { self.slots.len() - self.free.len() }

    pub fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.index()] = Some(element);
            handle
        } else {
            assert!(self.slots.len() <= Handle::MAX,
                    "`Arena::alloc()` - arena is at maximum capacity ({})", Handle::MAX);
            self.slots.push(Some(element));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub fn get(&self, handle: Handle) -> &T {
        self.slots[handle.index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.index()].take()
            .expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    /// Releases the free slots at the end of the arena. Live handles are unaffected.
    pub fn shrink_to_fit(&mut self) {
        while let Some(None) = self.slots.last() { self.slots.pop(); }
        let len = self.slots.len();
        self.free.retain(|handle| handle.index() < len);
        self.slots.shrink_to_fit();
        self.free.shrink_to_fit();
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
