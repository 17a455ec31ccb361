//! An ordered map based on a left-leaning red-black tree.
//!
//! The map keeps its keys sorted according to a [`Compare`](compare::Compare) implementation,
//! which defaults to the keys' natural order. Lookup, insertion and the three forms of deletion
//! (smallest key, largest key, and a given key) all take `O(log n)` time.
//!
//! ```
//! let mut map = llrb::Map::new();
//!
//! for (key, value) in vec![("C", 3), ("A", 1), ("G", 5), ("H", 6), ("B", 2), ("F", 4)] {
//!     map.insert(key, value);
//! }
//!
//! assert_eq!(map.len(), 6);
//! assert_eq!(map.get(&"C"), Some(&3));
//!
//! map.delete(&"B");
//! assert_eq!(map.keys().collect::<Vec<_>>(), [&"A", &"C", &"F", &"G", &"H"]);
//! ```

#![deny(missing_docs)]

mod error;
pub mod map;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use error::{Error, Result};
pub use map::Map;
