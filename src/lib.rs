//! An ordered map based on an AVL tree.
//!
//! Entries are kept sorted by a [`compare::Compare`] comparator, the natural order of the keys
//! by default. Besides the usual map operations and iterators, the map hands out cursors that
//! walk its entries in either direction and can insert or remove entries in place.
//!
//! # Examples
//!
//! ```
//! use avl_map::Map;
//!
//! let mut map = Map::new();
//!
//! for (key, value) in vec![(10, "a"), (20, "b"), (5, "c"), (15, "d"), (25, "e"), (3, "f")] {
//!     map.insert(key, value);
//! }
//!
//! assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [3, 5, 10, 15, 20, 25]);
//! assert_eq!(map.lower_bound(&12).key(), Some(&15));
//! assert_eq!(map.upper_bound(&15).key(), Some(&20));
//!
//! assert_eq!(map.remove(&10), Some((10, "a")));
//! assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [3, 5, 15, 20, 25]);
//! ```

#![warn(missing_docs)]

mod node;

#[cfg(feature = "quickcheck")]
mod arbitrary;

#[cfg(feature = "ordered_iter")]
mod ordered;

pub mod map;

pub use map::Map;
