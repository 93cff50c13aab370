use std::cmp::Ordering;

use num_traits::float::TotalOrder;

/// Decides which of two elements belongs nearer the root of a heap.
/// `cmp(a, b) == Ordering::Less` means `a` has strictly higher priority than `b`,
/// so a heap built with an ordering keeps the "least" element under that ordering at index 0.
/// Equal elements are never swapped by the heap.
///
/// Any `Fn(&T, &T) -> Ordering` is an ordering, so custom orderings can be passed as closures.
/// Note that closure arguments should be annotated (`|a: &u32, b: &u32| ...`) so the closure
/// accepts references of any lifetime.
pub trait HeapOrder<T: ?Sized> {
    fn cmp(&self, a: &T, b: &T) -> Ordering;

    /// True iff `a` must sit above `b`.  All sifting goes through this predicate.
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        self.cmp(a, b) == Ordering::Less
    }
}

/// Smallest element at the root
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Min;

/// Largest element at the root
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Max;

/// A min or max ordering chosen at runtime.
/// Prefer `Min` / `Max` when the direction is known at compile time, since they don't branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Min,
    Max
}

/// Orders floats by IEEE 754 total order instead of `PartialOrd`, so NaN and signed zeros
/// have a fixed place and can't break the heap invariant.
/// `Total(Mode::Min)` puts -NaN first and +NaN last; `Total(Mode::Max)` is the reverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Total(pub Mode);

impl Mode {
    pub fn reverse(self) -> Self {
        match self {
            Mode::Min => Mode::Max,
            Mode::Max => Mode::Min
        }
    }

    fn orient(self, ord: Ordering) -> Ordering {
        match self {
            Mode::Min => ord,
            Mode::Max => ord.reverse()
        }
    }
}

impl<T: Ord + ?Sized> HeapOrder<T> for Min {
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Ord + ?Sized> HeapOrder<T> for Max {
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }

    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: Ord + ?Sized> HeapOrder<T> for Mode {
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        self.orient(a.cmp(b))
    }
}

impl<T: TotalOrder> HeapOrder<T> for Total {
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        self.0.orient(a.total_cmp(b))
    }
}

impl<T: ?Sized, F> HeapOrder<T> for F
where F: Fn(&T, &T) -> Ordering {
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
