use std::mem;

use crate::order::{HeapOrder, Min};

/// An implicit binary heap whose ordering is fixed when it is created.
/// - Peek: O(1)
/// - Extract: O(log(n))
/// - Insert: O(log(n))
/// - Build from a vector: O(n)
/// The element at index 0 of the buffer is the root, and the children of index i are at 2i + 1 and 2i + 2.
/// `O` decides which elements go nearer the root, see `HeapOrder`.  `Min` and `Max` are zero sized,
/// `Mode` picks one of them at runtime, and any `Fn(&T, &T) -> Ordering` closure works as well.
#[derive(Clone, Debug)]
pub struct BinHeap<T, O = Min> {
    buf: Vec<T>,
    order: O
}

#[cfg(test)]
#[derive(Debug, PartialEq, Eq)]
enum HeapError {
    OutOfOrder{parent: usize, child: usize}
}

impl<T, O: HeapOrder<T>> BinHeap<T, O> {
	/// Create a heap out of a vector, moving the vector into the heap and heapifying it according to order.
	/// The vector may be empty
    pub fn new(buf: Vec<T>, order: O) -> Self {
        let mut res = Self{buf, order};
        res.ify();
        #[cfg(all(test, not(feature = "stress_tests")))]{
            assert_eq!(res.check(), Ok(()))
        }
        res
    }

	/// Get the number of elements in the heap
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn order(&self) -> &O {
        &self.order
    }

	/// Get the highest priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.buf.first()
    }

	/// Insert an element into the heap.
	/// Elements that compare equal are fine, but their relative order will be unspecified
    pub fn insert(&mut self, e: T) {
        self.buf.push(e);
        self.sift_up(self.buf.len() - 1);
        #[cfg(all(test, not(feature = "stress_tests")))]{
            assert_eq!(self.check(), Ok(()))
        }
    }

	/// Remove the highest priority element and return it, or None if the heap is empty
    pub fn extract(&mut self) -> Option<T> {
        let l = self.buf.len();
        if l <= 1
            { return self.buf.pop() }
        self.buf.swap(0, l - 1);
        let res = self.buf.pop();
        self.sift_down(0, l - 1);
        #[cfg(all(test, not(feature = "stress_tests")))]{
            assert_eq!(self.check(), Ok(()))
        }
        res
    }

	/// Insert a new element and extract the highest priority element of the resulting heap in a single operation.
	/// If e would become the root anyway (including when the heap is empty), it is handed straight back
	/// without touching the heap, otherwise it replaces the root and is sifted down once.
    pub fn pushpop(&mut self, e: T) -> T {
        if !self.buf.first().is_some_and(|root|self.order.higher_priority(root, &e))
            { return e }
        let res = mem::replace(&mut self.buf[0], e);
        self.sift_down(0, self.buf.len());
        #[cfg(all(test, not(feature = "stress_tests")))]{
            assert_eq!(self.check(), Ok(()))
        }
        res
    }

    /// Consume the heap, returning its elements from highest to lowest priority
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut res = Vec::with_capacity(self.buf.len());
        while let Some(e) = self.extract() {
            res.push(e)
        }
        res
    }

    /// Consume the heap, returning the buffer in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }

    // sift down every non leaf, last one first, so both subtrees of i are heaps by the time i is processed
    fn ify(&mut self) {
        let n = self.buf.len();
        for i in (0..n/2).rev()
            { self.sift_down(i, n) }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) >> 1;
            if !self.order.higher_priority(&self.buf[i], &self.buf[p])
                { break }
            self.buf.swap(i, p);
            i = p
        }
    }

    // restore the heap property for the subtree at i, only looking at the first n elements
    fn sift_down(&mut self, mut i: usize, n: usize) {
        loop {
            let mut m = i;
            let l = 2*i + 1;
            let r = 2*i + 2;
            if l < n && self.order.higher_priority(&self.buf[l], &self.buf[m])
                { m = l }
            if r < n && self.order.higher_priority(&self.buf[r], &self.buf[m])
                { m = r }
            if m == i
                { break }
            self.buf.swap(i, m);
            i = m
        }
    }

    #[cfg(test)]
    fn check(&self) -> Result<(), HeapError> {
        for child in 1..self.buf.len() {
            let parent = (child - 1) >> 1;
            if self.order.higher_priority(&self.buf[child], &self.buf[parent]) {
                return Err(HeapError::OutOfOrder{parent, child})
            }
        }
        Ok(())
    }
}

impl<T, O: Default> Default for BinHeap<T, O> {
    fn default() -> Self {
        Self{buf: Vec::new(), order: O::default()}
    }
}

impl<T: Ord> From<Vec<T>> for BinHeap<T, Min> {
    fn from(buf: Vec<T>) -> Self {
        Self::new(buf, Min)
    }
}

impl<T, O> From<BinHeap<T, O>> for Vec<T> {
    fn from(heap: BinHeap<T, O>) -> Self {
        heap.buf
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for BinHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.buf.reserve(iter.size_hint().0);
        for e in iter {
            self.insert(e)
        }
    }
}
