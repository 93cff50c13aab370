//! A binary heap whose min/max (or any other) ordering is chosen once, when the heap is built.
//!
//! ```
//! use binheap::{BinHeap, Max, Min};
//!
//! let mut lo = BinHeap::new(vec![50, 20, 30, 10, 15, 5, 25], Min);
//! lo.insert(2);
//! assert_eq!(lo.peek(), Some(&2));
//! assert_eq!(lo.extract(), Some(2));
//!
//! let hi = BinHeap::new(vec![50, 20, 30, 10, 15, 5, 25], Max);
//! assert_eq!(hi.into_sorted_vec(), [50, 30, 25, 20, 15, 10, 5]);
//! ```

pub mod order;
pub mod binheap;

pub use binheap::BinHeap;
pub use order::{HeapOrder, Max, Min, Mode, Total};
